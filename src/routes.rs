//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /{code}`           - short link redirect (public)
//! - `GET  /health`           - liveness + storage check (public)
//! - `POST /api/shorten`      - create a short link
//! - `GET  /api/stats/{code}` - click statistics
//! - `GET  /api/links`        - caller's recent links
//!
//! The reserved-word list in the code generator keeps short codes from
//! shadowing these paths.

use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::trace::TraceLayer;

use crate::api;
use crate::api::handlers::{health_handler, redirect_handler};
use crate::state::AppState;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/{code}", get(redirect_handler))
        .route("/health", get(health_handler))
        .nest("/api", api::routes::routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
