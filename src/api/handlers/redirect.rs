//! Handler for short URL redirects.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect},
};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its target URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// Resolution counts the click via the store's atomic increment before the
/// 307 response goes out, so each redirect is counted exactly once.
///
/// # Errors
///
/// Returns 404 Not Found for unknown codes; nothing is counted in that case.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let link = state.link_service.resolve(&code).await?;

    tracing::debug!(code = %link.code, target = %link.target_url, "redirecting");

    Ok(Redirect::temporary(&link.target_url))
}
