use axum::{extract::State, Json};
use tracing::info;

use models::booking::{Booking, BookingPayload};

use crate::{errors::JsonApiError, state::AppState};

#[utoipa::path(
    get, path = "/api/bookings", tag = "bookings",
    responses(
        (status = 200, description = "All bookings", body = [crate::openapi::BookingDoc]),
        (status = 500, description = "Store error")
    )
)]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Booking>>, JsonApiError> {
    let rows = state.bookings.list_all().await?;
    info!(count = rows.len(), "list bookings");
    Ok(Json(rows))
}

/// The body must be a JSON object; its fields are stored and echoed back untouched.
#[utoipa::path(
    post, path = "/api/bookings", tag = "bookings",
    responses(
        (status = 200, description = "Created", body = crate::openapi::BookingDoc),
        (status = 422, description = "Body is not a JSON object"),
        (status = 500, description = "Store error")
    )
)]
pub async fn create(State(state): State<AppState>, Json(payload): Json<BookingPayload>) -> Result<Json<Booking>, JsonApiError> {
    let created = state.bookings.save(payload).await?;
    info!(id = created.id, fields = created.details.len(), "created booking");
    Ok(Json(created))
}
