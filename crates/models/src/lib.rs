pub mod errors;
pub mod db;
pub mod home_service;
pub mod provider;
pub mod booking;
