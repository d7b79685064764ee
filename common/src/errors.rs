//! Application error types.
//!
//! One error enum covers the whole taxonomy of this system: configuration
//! problems at startup, connection-pool construction failures, and query
//! failures at request time. Errors that escape a handler are converted to
//! a JSON error response here, so every request terminates with an explicit
//! status.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

/// Convenience alias for results carrying an [`AppError`].
pub type AppResult<T> = Result<T, AppError>;

/// Application error type shared across the workspace.
#[derive(Debug, Error)]
pub enum AppError {
    /// Missing or invalid runtime configuration.
    #[error("configuration error: {0}")]
    Config(String),

    /// The database connection pool could not be constructed.
    #[error("database connection error: {0}")]
    DatabaseConnection(String),

    /// A database query failed.
    #[error("database query error: {0}")]
    DatabaseQuery(String),

    /// No route is mounted at the requested path.
    #[error("no route for {0}")]
    RouteNotFound(String),
}

impl AppError {
    /// Machine-readable code carried in the response body.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Config(_) => "CONFIG_ERROR",
            AppError::DatabaseConnection(_) => "DATABASE_CONNECTION_ERROR",
            AppError::DatabaseQuery(_) => "DATABASE_QUERY_ERROR",
            AppError::RouteNotFound(_) => "NOT_FOUND",
        }
    }

    /// HTTP status this error maps to.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::RouteNotFound(_) => StatusCode::NOT_FOUND,
            AppError::Config(_)
            | AppError::DatabaseConnection(_)
            | AppError::DatabaseQuery(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// JSON body returned for error responses.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Error details.
    pub error: ErrorDetail,
}

/// Error details carried in an [`ErrorBody`].
#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    /// Error code for client handling (e.g. "NOT_FOUND").
    pub code: String,

    /// Human-readable error message.
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(code = self.code(), error = %self, "request failed");
        } else {
            tracing::debug!(code = self.code(), error = %self, "request rejected");
        }

        let body = ErrorBody {
            error: ErrorDetail {
                code: self.code().to_string(),
                message: self.to_string(),
            },
        };
        (status, Json(body)).into_response()
    }
}
