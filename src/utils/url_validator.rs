//! Target URL validation.

use url::Url;

use crate::error::AppError;

/// Maximum accepted length of a target URL.
pub const MAX_URL_LENGTH: usize = 2048;

/// Validates a target URL before it is stored.
///
/// # Rules
///
/// 1. At most [`MAX_URL_LENGTH`] characters
/// 2. Parses as an absolute URL
/// 3. Scheme is `http` or `https` (rejects `javascript:`, `data:`, `file:`
///    and friends)
///
/// The URL is stored exactly as submitted; no normalization is applied, so
/// dedup compares the caller's literal input.
///
/// # Errors
///
/// Returns [`AppError::InvalidUrl`] describing the first rule violated.
pub fn validate_target_url(input: &str) -> Result<(), AppError> {
    if input.len() > MAX_URL_LENGTH {
        return Err(AppError::InvalidUrl {
            reason: format!("exceeds {MAX_URL_LENGTH} characters"),
        });
    }

    let url = Url::parse(input).map_err(|e| AppError::InvalidUrl {
        reason: e.to_string(),
    })?;

    match url.scheme() {
        "http" | "https" => Ok(()),
        other => Err(AppError::InvalidUrl {
            reason: format!("unsupported scheme '{other}'"),
        }),
    }
}
