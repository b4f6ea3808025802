use std::sync::Arc;

use sea_orm::DatabaseConnection;
use service::{
    bookings::{BookingRepository, SeaOrmBookingRepository},
    catalog::{SeaOrmServiceRepository, ServiceRepository},
    providers::{ProviderRepository, SeaOrmProviderRepository},
};

/// Shared router state: one repository per resource.
#[derive(Clone)]
pub struct AppState {
    pub services: Arc<dyn ServiceRepository>,
    pub providers: Arc<dyn ProviderRepository>,
    pub bookings: Arc<dyn BookingRepository>,
}

impl AppState {
    /// SeaORM repositories sharing one connection pool.
    pub fn from_db(db: DatabaseConnection) -> Self {
        Self {
            services: Arc::new(SeaOrmServiceRepository::new(db.clone())),
            providers: Arc::new(SeaOrmProviderRepository::new(db.clone())),
            bookings: Arc::new(SeaOrmBookingRepository::new(db)),
        }
    }
}
