//! Provider persistence, including the service-type lookup used by the app's
//! "providers for this service" screen.
use async_trait::async_trait;
use sea_orm::{
    sea_query::{Expr, Func, SimpleExpr},
    ActiveModelTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};
use tracing::debug;

use models::provider::{self, NewProvider};

use crate::errors::ServiceError;

#[async_trait]
pub trait ProviderRepository: Send + Sync {
    /// All providers in insertion order.
    async fn list_all(&self) -> Result<Vec<provider::Model>, ServiceError>;
    /// Providers whose service type equals `service_type`, ignoring case.
    /// An empty `service_type` matches nothing.
    async fn find_by_service_type(&self, service_type: &str) -> Result<Vec<provider::Model>, ServiceError>;
    async fn count_by_service_type(&self, service_type: &str) -> Result<u64, ServiceError>;
    async fn save(&self, input: NewProvider) -> Result<provider::Model, ServiceError>;
    async fn count(&self) -> Result<u64, ServiceError>;
}

/// `lower(service_type) = lower(<input>)`, both sides folded by the store.
fn service_type_matches(service_type: &str) -> SimpleExpr {
    Expr::expr(Func::lower(Expr::col(provider::Column::ServiceType)))
        .eq(Func::lower(Expr::val(service_type.to_owned())))
}

/// SeaORM-backed repository implementation.
#[derive(Clone)]
pub struct SeaOrmProviderRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmProviderRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait]
impl ProviderRepository for SeaOrmProviderRepository {
    async fn list_all(&self) -> Result<Vec<provider::Model>, ServiceError> {
        let rows = provider::Entity::find()
            .order_by_asc(provider::Column::Id)
            .all(&self.db)
            .await?;
        Ok(rows)
    }

    async fn find_by_service_type(&self, service_type: &str) -> Result<Vec<provider::Model>, ServiceError> {
        if service_type.is_empty() {
            return Ok(Vec::new());
        }
        let rows = provider::Entity::find()
            .filter(service_type_matches(service_type))
            .order_by_asc(provider::Column::Id)
            .all(&self.db)
            .await?;
        debug!(%service_type, count = rows.len(), "providers by service type");
        Ok(rows)
    }

    async fn count_by_service_type(&self, service_type: &str) -> Result<u64, ServiceError> {
        if service_type.is_empty() {
            return Ok(0);
        }
        let n = provider::Entity::find()
            .filter(service_type_matches(service_type))
            .count(&self.db)
            .await?;
        Ok(n)
    }

    async fn save(&self, input: NewProvider) -> Result<provider::Model, ServiceError> {
        let created = input.into_active_model().insert(&self.db).await?;
        debug!(id = created.id, service_type = %created.service_type, "provider saved");
        Ok(created)
    }

    async fn count(&self) -> Result<u64, ServiceError> {
        Ok(provider::Entity::find().count(&self.db).await?)
    }
}
