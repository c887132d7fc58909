//! DTOs for the shorten endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Request to shorten a URL.
///
/// Validation of both fields lives in the link service, not here; the DTO
/// only carries the caller's input.
#[derive(Debug, Deserialize)]
pub struct ShortenRequest {
    /// The original URL to shorten.
    pub url: String,

    /// Optional custom short code (3-10 chars, letters/digits/hyphens).
    pub custom_code: Option<String>,
}

/// A freshly created (or deduplicated) short link.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub code: String,
    pub short_url: String,
    pub target_url: String,
    pub created_at: DateTime<Utc>,
}
