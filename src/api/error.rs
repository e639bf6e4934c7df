//! API error type rendered as `{error, message}` JSON.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::error;

use crate::metrics;

/// API error with HTTP status code, short label, and message.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub error: &'static str,
    pub message: String,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(status: StatusCode, error: &'static str, message: impl Into<String>) -> Self {
        Self {
            status,
            error,
            message: message.into(),
        }
    }

    /// Creates a 404 Not Found error naming the requested path.
    pub fn not_found(path: &str) -> Self {
        Self::new(
            StatusCode::NOT_FOUND,
            "Not Found",
            format!("Route {path} not found"),
        )
    }

    /// Creates a 500 Internal Server Error with a generic message.
    /// The real cause is logged, never sent to the client.
    pub fn internal() -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal Server Error",
            "Something went wrong",
        )
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            metrics::inc_handler_errors();
        }

        let body = Json(json!({
            "error": self.error,
            "message": self.message,
        }));

        (self.status, body).into_response()
    }
}

impl From<crate::error::AppError> for ApiError {
    fn from(err: crate::error::AppError) -> Self {
        error!("Handler error: {}", err);
        Self::internal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_names_the_path() {
        let err = ApiError::not_found("/api/widgets");
        assert_eq!(err.status, StatusCode::NOT_FOUND);
        assert!(err.message.contains("/api/widgets"));
    }

    #[test]
    fn internal_error_is_generic() {
        let err = ApiError::internal();
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!err.message.contains("time"));
    }
}
