//! HTTP error handling and response conversion.
//!
//! Structured error types mapped to HTTP status codes and JSON error bodies.
//! Lower-layer errors (domain, upload pipeline, validation) convert into
//! [`AppError`] at the handler boundary; responses carry a user-safe message
//! while the full error is logged.

use crate::{application::upload_image::use_case::UploadError, domain::case::errors::DomainError};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::fmt;

/// Application-level errors returned from handlers.
///
/// Each variant maps to a specific HTTP status code.
#[derive(Debug)]
pub enum AppError {
    /// Resource not found (404).
    NotFound(String),

    /// Request was malformed (400).
    BadRequest(String),

    /// Request data failed validation (400).
    ValidationError(String),

    /// Storage/file operation failed (500).
    Storage(String),

    /// Unclassified internal error (500).
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound(msg) => write!(f, "Not found: {}", msg),
            Self::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            Self::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            Self::Storage(msg) => write!(f, "Storage error: {}", msg),
            Self::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl AppError {
    /// Get the appropriate HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) | Self::ValidationError(_) => StatusCode::BAD_REQUEST,
            Self::Storage(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get a user-safe error message (without implementation details).
    fn user_message(&self) -> String {
        match self {
            Self::NotFound(msg) => msg.clone(),
            Self::BadRequest(msg) => msg.clone(),
            Self::ValidationError(msg) => msg.clone(),
            Self::Storage(_) => "File operation failed".into(),
            Self::Internal(_) => "Internal server error".into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.user_message();

        match status {
            StatusCode::INTERNAL_SERVER_ERROR => {
                tracing::error!("error={}", self);
            }
            StatusCode::BAD_REQUEST | StatusCode::NOT_FOUND => {
                tracing::warn!("error={}", self);
            }
            _ => {
                tracing::info!("error={}", self);
            }
        }

        (status, Json(json!({ "error": message }))).into_response()
    }
}

// === Domain Error Conversion ===

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NotFound(msg) => AppError::NotFound(msg),
            DomainError::ValidationError(msg) => AppError::ValidationError(msg),
            DomainError::InfrastructureError(msg) => {
                tracing::error!(infrastructure_error = %msg);
                AppError::Internal(msg)
            }
        }
    }
}

// === Upload Pipeline Error Conversion ===

impl From<UploadError> for AppError {
    fn from(err: UploadError) -> Self {
        match err {
            UploadError::InvalidMediaType => AppError::BadRequest("File must be an image".into()),
            UploadError::Storage(source) => {
                tracing::error!(storage_error = %source, "failed to persist upload");
                AppError::Storage(source.to_string())
            }
        }
    }
}

// === Request Validation Error Conversion ===

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::ValidationError(err.to_string())
    }
}
