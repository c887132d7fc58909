//! Handler for the shorten endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::api::extract::CurrentUser;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link for the submitted URL.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com/long", "custom_code": "my-link" }
/// ```
///
/// `custom_code` is optional; without it a random 6-character code is
/// allocated, and resubmitting the same URL as the same caller returns the
/// existing link instead of minting a new one.
///
/// # Errors
///
/// - 400 for a malformed/oversized URL or an invalid/reserved custom code
/// - 409 when the custom code is already taken
pub async fn shorten_handler(
    State(state): State<AppState>,
    CurrentUser(owner): CurrentUser,
    Json(payload): Json<ShortenRequest>,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    let link = state
        .link_service
        .shorten(owner, payload.url, payload.custom_code)
        .await?;

    tracing::info!(code = %link.code, owner = ?link.owner_id, "short link ready");

    let short_url = state.link_service.short_url(&state.base_url, &link.code);

    Ok((
        StatusCode::CREATED,
        Json(ShortenResponse {
            code: link.code,
            short_url,
            target_url: link.target_url,
            created_at: link.created_at,
        }),
    ))
}
