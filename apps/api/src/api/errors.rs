use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::domain::errors::TournamentError;

/// API error type with HTTP status code, machine-readable code and message
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub code: &'static str,
    pub message: String,
}

impl ApiError {
    /// Creates a new API error
    pub fn new(status: StatusCode, code: &'static str, message: impl Into<String>) -> Self {
        Self {
            status,
            code,
            message: message.into(),
        }
    }

    /// Creates a 400 Bad Request error
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "invalid_input", message)
    }

    /// Creates a 404 Not Found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, "not_found", message)
    }

    /// Creates a 409 Conflict error
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(StatusCode::CONFLICT, "already_decided", message)
    }

    /// Creates a 500 Internal Server Error
    pub fn internal_server_error(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "internal", message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "error": self.message,
            "code": self.code,
        }));

        (self.status, body).into_response()
    }
}

impl From<TournamentError> for ApiError {
    fn from(err: TournamentError) -> Self {
        let message = err.to_string();
        match err {
            TournamentError::InvalidInput(_) => Self::bad_request(message),
            TournamentError::TeamNotFound(_) | TournamentError::MatchNotFound(_) => {
                Self::not_found(message)
            }
            TournamentError::AlreadyDecided(_) => Self::conflict(message),
            TournamentError::PartialFailure { match_id, .. } => {
                tracing::error!(match_id, error = %message, "result needs reconciliation");
                Self::new(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "partial_failure",
                    message,
                )
            }
            TournamentError::Database(_) | TournamentError::Storage(_) => {
                tracing::error!(error = %message, "storage failure");
                Self::internal_server_error(message)
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::bad_request(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::bad_request(rejection.body_text())
    }
}
