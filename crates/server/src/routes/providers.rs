use axum::{extract::{Query, State}, Json};
use serde::Deserialize;
use tracing::info;

use models::provider::{self, NewProvider};

use crate::{errors::JsonApiError, state::AppState};

#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListQuery {
    /// Service name to filter by, compared case-insensitively. Empty means no filter.
    #[serde(rename = "serviceType")]
    pub service_type: Option<String>,
}

#[utoipa::path(
    get, path = "/api/providers", tag = "providers",
    params(ListQuery),
    responses(
        (status = 200, description = "Providers, filtered by service type when given", body = [crate::openapi::ProviderDoc]),
        (status = 500, description = "Store error")
    )
)]
pub async fn list(State(state): State<AppState>, Query(q): Query<ListQuery>) -> Result<Json<Vec<provider::Model>>, JsonApiError> {
    let rows = match q.service_type.as_deref() {
        Some(st) if !st.is_empty() => state.providers.find_by_service_type(st).await?,
        _ => state.providers.list_all().await?,
    };
    info!(count = rows.len(), service_type = ?q.service_type, "list providers");
    Ok(Json(rows))
}

#[utoipa::path(
    post, path = "/api/providers", tag = "providers",
    request_body = crate::openapi::NewProviderDoc,
    responses(
        (status = 200, description = "Created", body = crate::openapi::ProviderDoc),
        (status = 422, description = "Malformed payload"),
        (status = 500, description = "Store error")
    )
)]
pub async fn create(State(state): State<AppState>, Json(input): Json<NewProvider>) -> Result<Json<provider::Model>, JsonApiError> {
    let created = state.providers.save(input).await?;
    info!(id = created.id, service_type = %created.service_type, "created provider");
    Ok(Json(created))
}
