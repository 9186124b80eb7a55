//! 统一错误处理
//!
//! [`AppError`] is the only error type handlers return. It renders as:
//!
//! ```json
//! {
//!   "error": "validation_error",
//!   "message": "All fields are required",
//!   "details": null
//! }
//! ```
//!
//! | 变体 | 状态码 | error |
//! |------|--------|-------|
//! | Validation | 400 | validation_error |
//! | InvalidId | 400 | invalid_id |
//! | NotFound | 404 | not_found |
//! | Conflict | 409 | conflict |
//! | Database | 500 | database_error |
//! | Internal | 500 | internal_error |
//!
//! 5xx bodies carry the underlying error text in `details` for diagnostics.

use axum::{
    Json,
    extract::multipart::{MultipartError, MultipartRejection},
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use tracing::error;
use validator::ValidationErrors;

use crate::db::repository::RepoError;

/// Application error
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Missing or malformed input (400)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Identifier fails the storage id format check (400)
    #[error("Invalid identifier: {0}")]
    InvalidId(String),

    /// Identifier does not resolve (404)
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Storage uniqueness violation (409)
    #[error("Resource already exists: {0}")]
    Conflict(String),

    /// Unexpected storage failure (500)
    #[error("Database error: {0}")]
    Database(String),

    /// Anything else (500)
    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn database(msg: impl Into<String>) -> Self {
        Self::Database(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Swap the text of a `NotFound` for a client-facing message
    pub fn with_not_found(self, message: &str) -> Self {
        match self {
            AppError::NotFound(_) => AppError::NotFound(message.to_string()),
            other => other,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::InvalidId(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let (error_type, message, details) = match self {
            AppError::Validation(msg) => ("validation_error", msg, None),
            AppError::InvalidId(msg) => ("invalid_id", msg, None),
            AppError::NotFound(msg) => ("not_found", msg, None),
            AppError::Conflict(msg) => ("conflict", msg, None),
            AppError::Database(msg) => {
                error!(target: "database", error = %msg, "Database error occurred");
                ("database_error", "Database error".to_string(), Some(msg))
            }
            AppError::Internal(msg) => {
                error!(target: "internal", error = %msg, "Internal error occurred");
                (
                    "internal_error",
                    "Internal server error".to_string(),
                    Some(msg),
                )
            }
        };

        let body = ErrorResponse {
            error: error_type.to_string(),
            message,
            details,
        };

        (status, Json(body)).into_response()
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(msg) => AppError::NotFound(msg),
            RepoError::Duplicate(msg) => AppError::Conflict(msg),
            RepoError::Validation(msg) => AppError::Validation(msg),
            RepoError::Database(msg) => AppError::Database(msg),
        }
    }
}

impl From<MultipartError> for AppError {
    fn from(e: MultipartError) -> Self {
        AppError::Validation(format!("Multipart error: {}", e))
    }
}

impl From<MultipartRejection> for AppError {
    fn from(e: MultipartRejection) -> Self {
        AppError::Validation(format!("Invalid multipart request: {}", e.body_text()))
    }
}

impl From<JsonRejection> for AppError {
    fn from(e: JsonRejection) -> Self {
        AppError::Validation(format!("Invalid JSON body: {}", e.body_text()))
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        AppError::Validation(describe_validation_errors(&errors))
    }
}

/// Flatten validator output into "msg; msg" ordered by field name
pub fn describe_validation_errors(errors: &ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    fields
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| match &e.message {
                Some(msg) => msg.to_string(),
                None => format!("{field} is invalid ({})", e.code),
            })
        })
        .collect::<Vec<_>>()
        .join("; ")
}

/// Handler result type
pub type AppResult<T> = Result<T, AppError>;
