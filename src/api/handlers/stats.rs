//! Handler for link statistics.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::stats::StatsResponse;
use crate::api::extract::CurrentUser;
use crate::error::AppError;
use crate::state::AppState;

/// Returns click statistics for a short link.
///
/// # Endpoint
///
/// `GET /api/stats/{code}`
///
/// Read-only: fetching stats never counts a click. `is_owner` compares the
/// link's owner to the authenticated caller; anonymous links report `false`
/// for everyone.
///
/// # Errors
///
/// Returns 404 Not Found for unknown codes.
pub async fn stats_handler(
    State(state): State<AppState>,
    CurrentUser(caller): CurrentUser,
    Path(code): Path<String>,
) -> Result<Json<StatsResponse>, AppError> {
    let link = state.link_service.stats(&code).await?;

    Ok(Json(StatsResponse {
        is_owner: link.is_owned_by(caller),
        code: link.code,
        target_url: link.target_url,
        click_count: link.click_count,
        created_at: link.created_at,
    }))
}
