//! Link shortening and resolution service.
//!
//! The only place business rules live: URL validation, custom-code rules,
//! owner-scoped dedup, unique code allocation, and click counting. The
//! service holds no locks and no cross-request state; uniqueness and
//! increment atomicity are delegated to the repository.

use std::sync::Arc;

use crate::domain::entities::{NewShortLink, ShortLink, UserId};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::{CodeGenerator, is_reserved, validate_custom_code};
use crate::utils::url_validator::validate_target_url;

/// Attempts per code-allocation cycle before giving up.
///
/// At 62^6 candidate codes a single collision is already unlikely; ten
/// misses in a row means something is wrong with the store, not with luck.
const MAX_GENERATION_ATTEMPTS: usize = 10;

/// Service for creating, resolving, and listing short links.
pub struct LinkService {
    repository: Arc<dyn LinkRepository>,
    generator: CodeGenerator,
}

impl LinkService {
    pub fn new(repository: Arc<dyn LinkRepository>, generator: CodeGenerator) -> Self {
        Self {
            repository,
            generator,
        }
    }

    /// Creates a short link for `target_url` on behalf of `owner`.
    ///
    /// # Custom codes
    ///
    /// A supplied `custom_code` is validated (charset, length, reserved set,
    /// availability) and then used as-is. Custom codes always create a new
    /// row, even when the same owner already shortened the same URL; only
    /// the generated path dedups.
    ///
    /// # Generated codes
    ///
    /// Without a custom code, resubmitting the same URL as the same owner
    /// returns the existing link unchanged (idempotent shortening). A fresh
    /// URL gets a random unique code; if the insert loses the race on the
    /// code's unique constraint, one more generation cycle is attempted
    /// before giving up.
    ///
    /// # Errors
    ///
    /// - [`AppError::InvalidUrl`] - malformed, oversized, or non-http(s) URL
    /// - [`AppError::InvalidCode`] - custom code fails charset/length rules
    /// - [`AppError::ReservedCode`] - custom code is a reserved routing word
    /// - [`AppError::CodeTaken`] - custom code already exists
    /// - [`AppError::Storage`] - underlying storage failure
    pub async fn shorten(
        &self,
        owner: Option<UserId>,
        target_url: String,
        custom_code: Option<String>,
    ) -> Result<ShortLink, AppError> {
        validate_target_url(&target_url)?;

        if let Some(code) = custom_code {
            return self.shorten_with_custom_code(owner, target_url, code).await;
        }

        if let Some(existing) = self
            .repository
            .find_by_owner_and_url(owner, &target_url)
            .await?
        {
            tracing::debug!(code = %existing.code, "reusing existing link for resubmitted URL");
            return Ok(existing);
        }

        let code = self.allocate_code().await?;
        match self
            .repository
            .create(NewShortLink {
                owner_id: owner,
                target_url: target_url.clone(),
                code,
            })
            .await
        {
            // Lost the insert race to a concurrent writer holding the same
            // candidate. One fresh cycle; a second loss is not plausible
            // within the codespace and surfaces as an internal error.
            Err(AppError::CodeConflict { code }) => {
                tracing::warn!(code, "generated code collided at insert, retrying");
                let code = self.allocate_code().await?;
                self.repository
                    .create(NewShortLink {
                        owner_id: owner,
                        target_url,
                        code,
                    })
                    .await
                    .map_err(|e| match e {
                        AppError::CodeConflict { code } => AppError::internal(format!(
                            "code '{code}' collided twice during allocation"
                        )),
                        other => other,
                    })
            }
            other => other,
        }
    }

    /// Resolves a short code to its link, counting the click.
    ///
    /// The increment is a single atomic operation in the store, so each
    /// resolution counts exactly once even under concurrent calls.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for unknown codes; nothing is mutated
    /// in that case.
    pub async fn resolve(&self, code: &str) -> Result<ShortLink, AppError> {
        let link = self
            .repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::NotFound {
                code: code.to_string(),
            })?;

        self.repository.increment_clicks(link.id).await?;

        Ok(link)
    }

    /// Fetches a link snapshot without counting a click.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for unknown codes.
    pub async fn stats(&self, code: &str) -> Result<ShortLink, AppError> {
        self.repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::NotFound {
                code: code.to_string(),
            })
    }

    /// Lists the caller's most recent links, newest first.
    ///
    /// `owner = None` lists anonymous links only.
    pub async fn list_recent(
        &self,
        owner: Option<UserId>,
        limit: i64,
    ) -> Result<Vec<ShortLink>, AppError> {
        self.repository.list_recent(owner, limit).await
    }

    /// Constructs the public short URL for a code.
    pub fn short_url(&self, base_url: &str, code: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), code)
    }

    async fn shorten_with_custom_code(
        &self,
        owner: Option<UserId>,
        target_url: String,
        code: String,
    ) -> Result<ShortLink, AppError> {
        validate_custom_code(&code)?;

        if self.repository.find_by_code(&code).await?.is_some() {
            return Err(AppError::CodeTaken { code });
        }

        // The availability check above can still lose a race; the explicit
        // code leaves nothing to retry, so the conflict surfaces as taken.
        self.repository
            .create(NewShortLink {
                owner_id: owner,
                target_url,
                code,
            })
            .await
            .map_err(|e| match e {
                AppError::CodeConflict { code } => AppError::CodeTaken { code },
                other => other,
            })
    }

    /// Draws candidate codes until one is unused, skipping reserved words.
    async fn allocate_code(&self) -> Result<String, AppError> {
        for _ in 0..MAX_GENERATION_ATTEMPTS {
            let candidate = self.generator.generate();

            if is_reserved(&candidate) {
                continue;
            }

            if self.repository.find_by_code(&candidate).await?.is_none() {
                return Ok(candidate);
            }
        }

        Err(AppError::internal(
            "failed to allocate a unique short code: too many collisions",
        ))
    }
}
