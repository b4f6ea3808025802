use axum::{extract::State, Json};
use tracing::info;

use models::home_service;

use crate::{errors::JsonApiError, state::AppState};

#[utoipa::path(
    get, path = "/api/services", tag = "services",
    responses(
        (status = 200, description = "All services", body = [crate::openapi::ServiceDoc]),
        (status = 500, description = "Store error")
    )
)]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<home_service::Model>>, JsonApiError> {
    let rows = state.services.list_all().await?;
    info!(count = rows.len(), "list services");
    Ok(Json(rows))
}
