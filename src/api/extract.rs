//! Caller identity extraction.
//!
//! Authentication is an external collaborator: the upstream auth layer
//! asserts the caller's identity in the `x-user-id` header before requests
//! reach this service. This extractor is that contract's entire footprint
//! here: `current_user() -> Option<UserId>`.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::domain::entities::UserId;

/// Header carrying the authenticated user id, set by the auth layer.
pub const USER_ID_HEADER: &str = "x-user-id";

/// The caller's identity, if any.
///
/// A missing or unparseable header means an anonymous caller; extraction
/// never rejects the request.
#[derive(Debug, Clone, Copy)]
pub struct CurrentUser(pub Option<UserId>);

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse::<UserId>().ok());

        Ok(CurrentUser(user))
    }
}
