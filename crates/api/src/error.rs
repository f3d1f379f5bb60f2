//! API error types with HTTP response mapping.
//!
//! The wire contract reserves transport-level failure for malformed
//! requests: domain refusals never reach this type, they travel as 200
//! payloads out of the dispatcher.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use dispatch::DispatchError;

/// API-level error type that maps to HTTP responses.
#[derive(Debug)]
pub enum ApiError {
    /// Resource not found.
    NotFound,
    /// Bad request from the client.
    BadRequest(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound => (StatusCode::NOT_FOUND, "Resource not found.".to_string()),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
        };

        let body = serde_json::json!({ "message": message });
        (status, axum::Json(body)).into_response()
    }
}

impl From<DispatchError> for ApiError {
    fn from(err: DispatchError) -> Self {
        match err {
            DispatchError::NotFound(resource) => {
                tracing::debug!(%resource, "lookup missed");
                ApiError::NotFound
            }
            other => ApiError::BadRequest(other.to_string()),
        }
    }
}
