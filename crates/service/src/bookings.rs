use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder};
use tracing::debug;

use models::booking::{self, Booking, BookingPayload};

use crate::errors::ServiceError;

#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// All bookings in insertion order.
    async fn list_all(&self) -> Result<Vec<Booking>, ServiceError>;
    /// Persist the client's object as-is and return it with its new `id`.
    async fn save(&self, payload: BookingPayload) -> Result<Booking, ServiceError>;
}

/// SeaORM-backed repository implementation.
#[derive(Clone)]
pub struct SeaOrmBookingRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmBookingRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait]
impl BookingRepository for SeaOrmBookingRepository {
    async fn list_all(&self) -> Result<Vec<Booking>, ServiceError> {
        let rows = booking::Entity::find()
            .order_by_asc(booking::Column::Id)
            .all(&self.db)
            .await?;
        let views = rows.into_iter().map(Booking::try_from).collect::<Result<Vec<_>, _>>()?;
        Ok(views)
    }

    async fn save(&self, payload: BookingPayload) -> Result<Booking, ServiceError> {
        let created = booking::new_active_model(payload).insert(&self.db).await?;
        debug!(id = created.id, "booking saved");
        Ok(Booking::try_from(created)?)
    }
}
