//! DTOs for the recent-links listing.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Query parameters for the listing endpoint.
#[derive(Debug, Deserialize)]
pub struct ListLinksQuery {
    pub limit: Option<i64>,
}

/// One link in a listing.
#[derive(Debug, Serialize)]
pub struct LinkSummary {
    pub code: String,
    pub short_url: String,
    pub target_url: String,
    pub click_count: i64,
    pub created_at: DateTime<Utc>,
}

/// Recent links for the caller, newest first.
#[derive(Debug, Serialize)]
pub struct ListLinksResponse {
    pub links: Vec<LinkSummary>,
}
