//! Axum-specific error types and mappings.
//!
//! Maps the core's typed failures to HTTP status codes and a stable JSON
//! error body.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use promptrig_core::ports::{RunnerError, StoreError};
use promptrig_core::service::PromptError;
use serde::Serialize;
use thiserror::Error;

/// Axum-specific error type.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Bad request (invalid input).
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Resource not found (unknown model).
    #[error("Not found: {0}")]
    NotFound(String),

    /// Service unavailable (binary missing, all slots busy).
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// The inference run exceeded its time bound.
    #[error("Timed out: {0}")]
    Timeout(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// JSON error response body.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
    status: u16,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            HttpError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            HttpError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            HttpError::ServiceUnavailable(msg) => (StatusCode::SERVICE_UNAVAILABLE, msg),
            HttpError::Timeout(msg) => (StatusCode::GATEWAY_TIMEOUT, msg),
            HttpError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = ErrorBody {
            error: message,
            status: status.as_u16(),
        };

        (status, axum::Json(body)).into_response()
    }
}

impl From<PromptError> for HttpError {
    fn from(err: PromptError) -> Self {
        match err {
            PromptError::Validation(msg) => HttpError::BadRequest(msg),
            PromptError::ModelNotFound(model) => {
                HttpError::NotFound(format!("Model '{model}' not found"))
            }
            PromptError::Runner(e) => e.into(),
        }
    }
}

impl From<RunnerError> for HttpError {
    fn from(err: RunnerError) -> Self {
        match err {
            RunnerError::Spawn(msg) => HttpError::ServiceUnavailable(msg),
            RunnerError::CapacityExhausted(_) => HttpError::ServiceUnavailable(err.to_string()),
            RunnerError::Timeout { .. } => HttpError::Timeout(err.to_string()),
            RunnerError::Exit { ref stderr, .. } => {
                let mut msg = err.to_string();
                let stderr = stderr.trim();
                if !stderr.is_empty() {
                    msg = format!("{msg}: {stderr}");
                }
                HttpError::Internal(msg)
            }
        }
    }
}

impl From<StoreError> for HttpError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::InvalidName(name) => {
                HttpError::BadRequest(format!("Invalid conversation name: {name}"))
            }
            StoreError::Io(msg) => HttpError::Internal(format!("Storage: {msg}")),
            StoreError::Serialization(msg) => HttpError::Internal(format!("Serialization: {msg}")),
        }
    }
}
