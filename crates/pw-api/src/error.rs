//! Unified API error type with Axum `IntoResponse` support.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// The two failure kinds a data-bearing endpoint can surface.
///
/// Both map to `500 Internal Server Error`; they differ only in message.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// No database connection could be obtained; no statement was run.
    #[error("Database connection failed")]
    ConnectionFailed,

    /// The statement (or shaping its result) failed.
    #[error("Database error: {0}")]
    QueryFailed(String),
}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        ApiError::QueryFailed(err.to_string())
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::ConnectionFailed | ApiError::QueryFailed(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.to_string();
        tracing::error!(status = status.as_u16(), error = %message, "request failed");

        let body = json!({
            "error": message,
            "status": status.as_u16(),
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Convenience alias.
pub type ApiResult<T> = Result<T, ApiError>;
