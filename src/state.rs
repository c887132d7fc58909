use std::sync::Arc;

use crate::application::services::LinkService;

/// Shared application state injected into all handlers.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService>,
    /// Public base URL used to build short links, e.g. `https://s.example.com`.
    pub base_url: String,
}

impl AppState {
    pub fn new(link_service: Arc<LinkService>, base_url: String) -> Self {
        Self {
            link_service,
            base_url,
        }
    }
}
