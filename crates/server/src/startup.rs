use axum::Router;
use common::utils::logging::init_logging_from_env;
use dotenvy::dotenv;
use tower_http::cors::CorsLayer;
use tracing::{error, info, warn};

use crate::{errors::StartupError, routes, state::AppState};
use service::{runtime, seed};

/// Any origin may call the API.
pub fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(event = "signal_error", error = %e, "failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    info!(event = "shutdown_signal", "received Ctrl+C, shutting down");
}

/// Open the store, seed it when enabled and build the router.
pub async fn build_app(cfg: &configs::AppConfig) -> Result<Router, StartupError> {
    // DB connection + migrations
    let db_cfg = models::db::DatabaseConfig::from(&cfg.database);
    let db = runtime::open_store(&db_cfg).await?;
    let state = AppState::from_db(db);

    if cfg.seed.enabled {
        seed::seed_defaults(state.services.as_ref(), state.providers.as_ref()).await?;
    } else {
        warn!(event = "seed_disabled", "skipping demo data");
    }

    Ok(routes::build_router(state, build_cors()))
}

/// Public entry: load config, prepare the store, build the app and serve until Ctrl+C.
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging_from_env();

    let cfg = configs::AppConfig::load_or_env().map_err(|e| StartupError::InvalidConfig(format!("{e:#}")))?;
    let app = build_app(&cfg).await?;

    let listener = tokio::net::TcpListener::bind(cfg.server.bind_addr()).await?;
    let addr = listener.local_addr()?;
    info!(%addr, "starting server crate");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}
