//! Persistence layer for the QuickHelp API.
//! - One repository trait per entity, with a SeaORM implementation.
//! - Startup seeding of demo data.

pub mod errors;
pub mod runtime;
#[cfg(test)]
pub mod test_support;
pub mod catalog;
pub mod providers;
pub mod bookings;
pub mod seed;
