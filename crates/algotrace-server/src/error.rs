//! API error types with HTTP status code mapping.
//!
//! [`ApiError`] is the unified error type for all API endpoints. It implements
//! `axum::response::IntoResponse` to produce structured JSON error responses
//! with appropriate HTTP status codes.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use algotrace_core::InputError;
use algotrace_gen::GenError;

/// Structured error detail in API responses.
#[derive(Debug, Clone, Serialize)]
pub struct ApiErrorDetail {
    /// Machine-readable error code (e.g., "NOT_FOUND", "LIMIT_EXCEEDED").
    pub code: String,
    pub message: String,
    /// The input error itself, when one caused the response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Entity not found (404).
    #[error("not found: {0}")]
    NotFound(String),

    /// Malformed or structurally invalid input (400).
    #[error("bad request: {0}")]
    BadRequest(InputError),

    /// Well-formed input beyond a display limit (422).
    #[error("limit exceeded: {0}")]
    LimitExceeded(InputError),

    /// Internal server error (500).
    #[error("internal error: {0}")]
    InternalError(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
            ApiError::LimitExceeded(_) => (StatusCode::UNPROCESSABLE_ENTITY, "LIMIT_EXCEEDED"),
            ApiError::InternalError(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        };

        let (message, details) = match &self {
            ApiError::NotFound(msg) | ApiError::InternalError(msg) => (msg.clone(), None),
            ApiError::BadRequest(err) | ApiError::LimitExceeded(err) => {
                (err.to_string(), serde_json::to_value(err).ok())
            }
        };

        if status.is_server_error() {
            tracing::error!(%message, "request failed");
        }

        let body = serde_json::json!({
            "success": false,
            "error": ApiErrorDetail {
                code: code.to_string(),
                message,
                details,
            },
        });

        (status, axum::Json(body)).into_response()
    }
}

impl From<InputError> for ApiError {
    fn from(err: InputError) -> Self {
        match err {
            InputError::UnknownAlgorithm { .. } => ApiError::NotFound(err.to_string()),
            err if err.is_limit() => ApiError::LimitExceeded(err),
            err => ApiError::BadRequest(err),
        }
    }
}

impl From<GenError> for ApiError {
    fn from(err: GenError) -> Self {
        match err {
            GenError::Input(err) => err.into(),
            GenError::Encode(err) => ApiError::InternalError(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limits_map_to_unprocessable() {
        let err: ApiError = algotrace_core::error::check_len("nums", 40, 30)
            .unwrap_err()
            .into();
        assert!(matches!(err, ApiError::LimitExceeded(_)));
        assert_eq!(err.into_response().status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn unknown_algorithm_is_not_found() {
        let err: ApiError = InputError::UnknownAlgorithm {
            slug: "bogo-sort".into(),
        }
        .into();
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn malformed_is_bad_request() {
        let err: ApiError = InputError::Malformed {
            reason: "nope".into(),
        }
        .into();
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }
}
