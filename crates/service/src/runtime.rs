//! Store bootstrap: connect the pool and bring the schema up to date.

use migration::MigratorTrait;
use models::db::{connect_with_config, DatabaseConfig};
use sea_orm::DatabaseConnection;
use tracing::info;

use crate::errors::ServiceError;

/// Connect using `cfg` and apply pending migrations.
pub async fn open_store(cfg: &DatabaseConfig) -> Result<DatabaseConnection, ServiceError> {
    let db = connect_with_config(cfg).await?;
    migration::Migrator::up(&db, None).await?;
    info!(event = "migrations_applied", "schema up to date");
    Ok(db)
}
