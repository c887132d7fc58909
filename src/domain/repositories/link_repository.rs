//! Repository trait for short link storage.

use crate::domain::entities::{NewShortLink, ShortLink, UserId};
use crate::error::AppError;
use async_trait::async_trait;

/// Storage contract for short links.
///
/// All cross-request shared state lives behind this trait; the service layer
/// holds no locks of its own and relies on these guarantees:
///
/// - `create` enforces code uniqueness atomically at the storage layer
///   (unique constraint, not check-then-insert) and reports a lost race as
///   [`AppError::CodeConflict`].
/// - `increment_clicks` is a single atomic update; concurrent calls on the
///   same id never lose increments.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL
/// - [`crate::infrastructure::persistence::MemoryLinkRepository`] - in-process,
///   used by the integration tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Inserts a new short link and returns the stored row.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::CodeConflict`] if the code already exists, and
    /// [`AppError::Storage`] on other database errors.
    async fn create(&self, new_link: NewShortLink) -> Result<ShortLink, AppError>;

    /// Finds a link by its short code (exact match).
    async fn find_by_code(&self, code: &str) -> Result<Option<ShortLink>, AppError>;

    /// Finds a link by owner and target URL, used for dedup on the
    /// generated-code path.
    ///
    /// `owner = None` matches only anonymous links; an anonymous caller
    /// never sees another user's rows.
    async fn find_by_owner_and_url(
        &self,
        owner: Option<UserId>,
        target_url: &str,
    ) -> Result<Option<ShortLink>, AppError>;

    /// Atomically increments the click counter of a link.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has the given id.
    async fn increment_clicks(&self, id: i64) -> Result<(), AppError>;

    /// Lists links for the given owner (or anonymous links for `None`),
    /// most recent first.
    async fn list_recent(
        &self,
        owner: Option<UserId>,
        limit: i64,
    ) -> Result<Vec<ShortLink>, AppError>;
}
