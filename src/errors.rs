//! Centralized error handling.
//!
//! `AppError` is what every layer above the domain returns. It is also the
//! single place where failures become HTTP status codes.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

use crate::domain::DomainError;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Business rules
    #[error(transparent)]
    Domain(#[from] DomainError),

    // Request shape
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    BadRequest(String),

    // Storage
    #[error("Database error")]
    Database(#[from] sea_orm::DbErr),

    // Internal
    #[error("Internal server error")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable failure description
    #[schema(example = "email already exists")]
    pub error: String,
}

impl AppError {
    /// Whether this is the repository's "no such user" signal
    pub fn is_not_found(&self) -> bool {
        matches!(self, AppError::Domain(DomainError::UserNotFound))
    }

    /// Get HTTP status code
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Domain(DomainError::UserNotFound) => StatusCode::NOT_FOUND,
            AppError::Domain(DomainError::DuplicateEmail) => StatusCode::CONFLICT,
            AppError::Domain(DomainError::InvalidEmail | DomainError::PasswordTooShort)
            | AppError::Validation(_)
            | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get user-facing message (hides internal details)
    pub fn user_message(&self) -> String {
        match self {
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                "internal server error".to_string()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "internal server error".to_string()
            }
            _ => self.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorResponse {
            error: self.user_message(),
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Convenience constructors
impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn bad_request(msg: impl Into<String>) -> Self {
        AppError::BadRequest(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}
