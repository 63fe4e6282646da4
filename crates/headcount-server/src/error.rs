//! API error types with HTTP status code mapping.
//!
//! [`ApiError`] is the unified error type for all handlers. HTMX swaps
//! nothing on error responses, so the body is a short plain-text message
//! rather than a rendered fragment.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use headcount_core::CoreError;

/// API errors with HTTP status code mapping.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Entity not found (404).
    #[error("not found: {0}")]
    NotFound(String),

    /// Invalid request (400).
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Resource conflict (409).
    #[error("conflict: {0}")]
    Conflict(String),

    /// Internal server error (500).
    #[error("internal error: {0}")]
    InternalError(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(error = %self, "request rejected");
        }

        let message = match self {
            ApiError::NotFound(msg)
            | ApiError::BadRequest(msg)
            | ApiError::Conflict(msg)
            | ApiError::InternalError(msg) => msg,
        };

        (status, message).into_response()
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match &err {
            CoreError::ContactNotFound { .. } => ApiError::NotFound(err.to_string()),
            CoreError::DuplicateContact { .. } => ApiError::Conflict(err.to_string()),
            CoreError::InvalidEmail(_)
            | CoreError::InvalidStatus { .. }
            | CoreError::InvalidId { .. } => ApiError::BadRequest(err.to_string()),
            CoreError::ContactRemoved { .. } => ApiError::InternalError(err.to_string()),
        }
    }
}
