use sea_orm::DbErr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// The store could not be reached (pool exhausted, connection refused, ...).
    #[error("store unavailable: {0}")]
    StoreUnavailable(String),
    #[error("database error: {0}")]
    Db(String),
    #[error("model error: {0}")]
    Model(#[from] models::errors::ModelError),
}

impl From<DbErr> for ServiceError {
    fn from(e: DbErr) -> Self {
        match e {
            DbErr::Conn(_) | DbErr::ConnectionAcquire(_) => Self::StoreUnavailable(e.to_string()),
            other => Self::Db(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::RuntimeErr;

    #[test]
    fn connection_errors_map_to_store_unavailable() {
        let e: ServiceError = DbErr::Conn(RuntimeErr::Internal("refused".into())).into();
        assert!(matches!(e, ServiceError::StoreUnavailable(_)));
    }

    #[test]
    fn other_errors_map_to_db() {
        let e: ServiceError = DbErr::Custom("boom".into()).into();
        assert!(matches!(e, ServiceError::Db(ref m) if m.contains("boom")));
    }
}
