//! # Application Error
//!
//! Maps domain errors to structured HTTP responses with proper status
//! codes and error bodies. Not-found, ambiguity, and upstream transport
//! failures are deliberately distinct statuses so callers can tell a
//! legitimate "no such region" apart from a registry outage.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Application-level error type that maps to HTTP responses.
#[derive(Error, Debug)]
pub enum AppError {
    /// Request validation failed (missing or malformed parameter).
    #[error("validation error: {0}")]
    Validation(String),

    /// No region matched the query.
    #[error("not found: {0}")]
    NotFound(String),

    /// The query resolved to several region codes and the caller did
    /// not opt into taking the first.
    #[error("ambiguous query: {count} region codes matched; pass first=true or narrow the query")]
    Ambiguous {
        count: usize,
        candidates: Vec<String>,
    },

    /// The registry could not be reached.
    #[error("registry unavailable: {0}")]
    Upstream(String),

    /// The service has no registry key configured.
    #[error("not configured: {0}")]
    NotConfigured(String),

    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Ambiguous { .. } => StatusCode::CONFLICT,
            AppError::Upstream(_) => StatusCode::BAD_GATEWAY,
            AppError::NotConfigured(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let mut body = serde_json::json!({
            "error": {
                "code": status.as_u16(),
                "message": self.to_string(),
            }
        });
        if let AppError::Ambiguous { candidates, .. } = &self {
            body["error"]["candidates"] = serde_json::json!(candidates);
        }
        (status, axum::Json(body)).into_response()
    }
}
