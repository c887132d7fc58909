//! DTOs for the stats endpoint.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Snapshot of a link's statistics.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub code: String,
    pub target_url: String,
    pub click_count: i64,
    pub created_at: DateTime<Utc>,
    /// True when the authenticated caller owns this link.
    pub is_owner: bool,
}
