//! Short link entity: the mapping between a code and its target URL.

use chrono::{DateTime, Utc};

/// Identity of a link owner, assigned by the external auth layer.
pub type UserId = i64;

/// A shortened URL with its metadata and click counter.
///
/// `owner_id` is `None` for links created anonymously. Once created, `code`
/// and `target_url` are never mutated; `click_count` only ever grows, and
/// only through the store's atomic increment.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortLink {
    pub id: i64,
    pub owner_id: Option<UserId>,
    pub target_url: String,
    pub code: String,
    pub created_at: DateTime<Utc>,
    pub click_count: i64,
}

impl ShortLink {
    /// Returns true if the given caller identity owns this link.
    ///
    /// Anonymous links have no owner; nobody owns them, including
    /// anonymous callers.
    pub fn is_owned_by(&self, caller: Option<UserId>) -> bool {
        match (self.owner_id, caller) {
            (Some(owner), Some(caller)) => owner == caller,
            _ => false,
        }
    }
}

/// Input data for creating a new short link.
///
/// `id`, `created_at` and `click_count` are assigned by the store.
#[derive(Debug, Clone)]
pub struct NewShortLink {
    pub owner_id: Option<UserId>,
    pub target_url: String,
    pub code: String,
}
