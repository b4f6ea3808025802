//! Service catalog persistence.
use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryOrder};
use tracing::debug;

use models::home_service::{self, NewService};

use crate::errors::ServiceError;

#[async_trait]
pub trait ServiceRepository: Send + Sync {
    /// All services in insertion order.
    async fn list_all(&self) -> Result<Vec<home_service::Model>, ServiceError>;
    async fn save(&self, input: NewService) -> Result<home_service::Model, ServiceError>;
    async fn count(&self) -> Result<u64, ServiceError>;
}

/// SeaORM-backed repository implementation.
#[derive(Clone)]
pub struct SeaOrmServiceRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmServiceRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait]
impl ServiceRepository for SeaOrmServiceRepository {
    async fn list_all(&self) -> Result<Vec<home_service::Model>, ServiceError> {
        let rows = home_service::Entity::find()
            .order_by_asc(home_service::Column::Id)
            .all(&self.db)
            .await?;
        Ok(rows)
    }

    async fn save(&self, input: NewService) -> Result<home_service::Model, ServiceError> {
        let created = input.into_active_model().insert(&self.db).await?;
        debug!(id = created.id, name = %created.name, "service saved");
        Ok(created)
    }

    async fn count(&self) -> Result<u64, ServiceError> {
        Ok(home_service::Entity::find().count(&self.db).await?)
    }
}
