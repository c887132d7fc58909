//! Error taxonomy shared across all layers.
//!
//! Every failure the service can produce is a variant here; handlers never
//! build ad-hoc status codes. Validation errors are detected before any
//! mutation, so a returned error implies no partial write occurred.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

#[derive(Serialize)]
struct ErrorInfo {
    code: &'static str,
    message: String,
    details: Value,
}

/// Application error taxonomy.
///
/// `CodeConflict` is an internal marker: the store produces it when an insert
/// loses the race on the code's unique constraint, and the link service
/// consumes it (retry on the generated path, remap to `CodeTaken` on the
/// custom path). It only reaches a client if that recovery logic is broken.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid URL: {reason}")]
    InvalidUrl { reason: String },

    #[error("Invalid custom code: {reason}")]
    InvalidCode { reason: String },

    #[error("Code '{code}' is reserved")]
    ReservedCode { code: String },

    #[error("Code '{code}' is already taken")]
    CodeTaken { code: String },

    #[error("Short code '{code}' collided at insert time")]
    CodeConflict { code: String },

    #[error("Short link not found")]
    NotFound { code: String },

    #[error("Storage unavailable")]
    Storage(#[from] sqlx::Error),

    #[error("{message}")]
    Internal { message: String },
}

impl AppError {
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidUrl { .. }
            | AppError::InvalidCode { .. }
            | AppError::ReservedCode { .. } => StatusCode::BAD_REQUEST,
            AppError::CodeTaken { .. } => StatusCode::CONFLICT,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::CodeConflict { .. } | AppError::Storage(_) | AppError::Internal { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn code(&self) -> &'static str {
        match self {
            AppError::InvalidUrl { .. } => "invalid_url",
            AppError::InvalidCode { .. } => "invalid_code",
            AppError::ReservedCode { .. } => "reserved_code",
            AppError::CodeTaken { .. } => "code_taken",
            AppError::NotFound { .. } => "not_found",
            AppError::CodeConflict { .. } => "internal_error",
            AppError::Storage(_) => "storage_unavailable",
            AppError::Internal { .. } => "internal_error",
        }
    }

    fn details(&self) -> Value {
        match self {
            AppError::InvalidUrl { reason } | AppError::InvalidCode { reason } => {
                json!({ "reason": reason })
            }
            AppError::ReservedCode { code }
            | AppError::CodeTaken { code }
            | AppError::CodeConflict { code }
            | AppError::NotFound { code } => json!({ "code": code }),
            AppError::Storage(_) | AppError::Internal { .. } => json!({}),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        // Storage failures carry connection details; log them server-side
        // and keep the client body generic.
        let message = match &self {
            AppError::Storage(e) => {
                tracing::error!(error = %e, "storage error");
                "Storage unavailable".to_string()
            }
            AppError::CodeConflict { code } => {
                tracing::error!(code, "unrecovered code conflict escaped the resolver");
                "Internal error".to_string()
            }
            other => other.to_string(),
        };

        let body = ErrorBody {
            error: ErrorInfo {
                code: self.code(),
                message,
                details: self.details(),
            },
        };

        (status, Json(body)).into_response()
    }
}
