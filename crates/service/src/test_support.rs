#![cfg(test)]
use sea_orm::DatabaseConnection;
use models::db::DatabaseConfig;

/// Fresh, migrated in-memory store per test.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    let cfg = DatabaseConfig { url: "sqlite::memory:".into(), ..DatabaseConfig::default() };
    let db = crate::runtime::open_store(&cfg).await?;
    Ok(db)
}
