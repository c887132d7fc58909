#![allow(dead_code)]

use std::sync::Arc;

use linksnip::application::services::LinkService;
use linksnip::infrastructure::persistence::MemoryLinkRepository;
use linksnip::state::AppState;
use linksnip::utils::code_generator::CodeGenerator;

pub const BASE_URL: &str = "https://snip.test";

/// Builds an app state over a fresh in-memory store with a seeded generator.
pub fn test_state() -> AppState {
    test_state_with_seed(42)
}

pub fn test_state_with_seed(seed: u64) -> AppState {
    let repository = Arc::new(MemoryLinkRepository::new());
    let link_service = Arc::new(LinkService::new(
        repository,
        CodeGenerator::with_seed(6, seed),
    ));

    AppState::new(link_service, BASE_URL.to_string())
}
