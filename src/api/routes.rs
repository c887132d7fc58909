//! REST API route table.

use axum::Router;
use axum::routing::{get, post};

use crate::api::handlers::{list_links_handler, shorten_handler, stats_handler};
use crate::state::AppState;

/// Routes nested under `/api`.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/stats/{code}", get(stats_handler))
        .route("/links", get(list_links_handler))
}
