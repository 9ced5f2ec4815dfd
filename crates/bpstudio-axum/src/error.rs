//! Axum-specific error types and mappings.
//!
//! This module maps request rejections to HTTP status codes and a JSON
//! error body.

use axum::extract::rejection::BytesRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

/// Axum-specific error type.
#[derive(Debug, Error)]
pub enum HttpError {
    /// The request body could not be read at all (too large, aborted).
    #[error("Unreadable body: {message}")]
    Body { status: StatusCode, message: String },

    /// Request body is not a JSON document of the expected shape.
    #[error("Validation failed: {0}")]
    Validation(String),
}

/// JSON error response body.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
    status: u16,
    /// Stable error type discriminant for client-side handling
    #[serde(skip_serializing_if = "Option::is_none", rename = "type")]
    error_type: Option<&'static str>,
}

impl HttpError {
    /// HTTP status this error maps to.
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Body { status, .. } => *status,
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let status = self.status();
        let (message, error_type) = match self {
            Self::Validation(msg) => (msg, Some("VALIDATION_ERROR")),
            Self::Body { message, .. } => (message, None),
        };

        let body = ErrorBody {
            error: message,
            status: status.as_u16(),
            error_type,
        };

        (status, axum::Json(body)).into_response()
    }
}

impl From<BytesRejection> for HttpError {
    fn from(rejection: BytesRejection) -> Self {
        Self::Body {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<serde_json::Error> for HttpError {
    fn from(err: serde_json::Error) -> Self {
        use serde_json::error::Category;

        let message = match err.classify() {
            Category::Data => {
                format!("Failed to deserialize the JSON body into the target type: {err}")
            }
            Category::Syntax | Category::Eof | Category::Io => {
                format!("Failed to parse the request body as JSON: {err}")
            }
        };
        Self::Validation(message)
    }
}
