//! Liveness and storage health check.

use axum::{Json, extract::State};

use crate::api::dto::health::HealthResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Reports service health.
///
/// # Endpoint
///
/// `GET /health`
///
/// Touches the store with a cheap read so a broken database surfaces here
/// instead of on the first real request.
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, AppError> {
    state.link_service.list_recent(None, 1).await?;

    Ok(Json(HealthResponse { status: "ok" }))
}
