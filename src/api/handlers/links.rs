//! Handler for the recent-links listing.

use axum::{
    Json,
    extract::{Query, State},
};

use crate::api::dto::links::{LinkSummary, ListLinksQuery, ListLinksResponse};
use crate::api::extract::CurrentUser;
use crate::error::AppError;
use crate::state::AppState;

const DEFAULT_LIMIT: i64 = 10;
const MAX_LIMIT: i64 = 100;

/// Lists the caller's most recent links, newest first.
///
/// # Endpoint
///
/// `GET /api/links?limit=N`
///
/// Anonymous callers see anonymous links only. `limit` defaults to 10 and
/// is clamped to 1..=100.
pub async fn list_links_handler(
    State(state): State<AppState>,
    CurrentUser(owner): CurrentUser,
    Query(query): Query<ListLinksQuery>,
) -> Result<Json<ListLinksResponse>, AppError> {
    let limit = query.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);

    let links = state.link_service.list_recent(owner, limit).await?;

    let links = links
        .into_iter()
        .map(|link| LinkSummary {
            short_url: state.link_service.short_url(&state.base_url, &link.code),
            code: link.code,
            target_url: link.target_url,
            click_count: link.click_count,
            created_at: link.created_at,
        })
        .collect();

    Ok(Json(ListLinksResponse { links }))
}
