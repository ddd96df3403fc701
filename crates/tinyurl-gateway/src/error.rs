use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::{json, Value};
use tinyurl_core::{ShortenerError, Violation};
use tracing::error;

use crate::model::ErrorResponse;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug)]
pub enum AppError {
    /// A typed outcome from the shortener.
    Shortener(ShortenerError),
    /// The request body broke one or more validation rules.
    Validation(Vec<Violation>),
    /// Anything the caller can't fix.
    Internal(String),
}

impl From<ShortenerError> for AppError {
    fn from(value: ShortenerError) -> Self {
        Self::Shortener(value)
    }
}

impl AppError {
    fn parts(self) -> (StatusCode, &'static str, Value) {
        match self {
            AppError::Validation(violations) => (
                StatusCode::BAD_REQUEST,
                "validation failed",
                json!(violations),
            ),
            AppError::Internal(message) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "an unexpected error occurred",
                json!(message),
            ),
            AppError::Shortener(err) => {
                let (status, summary) = match &err {
                    ShortenerError::InvalidInput(_) => (StatusCode::BAD_REQUEST, "invalid input"),
                    ShortenerError::NotFound(_) => (StatusCode::NOT_FOUND, "not found"),
                    ShortenerError::CodeAlreadyExists(_) => {
                        (StatusCode::CONFLICT, "short code already exists")
                    }
                    ShortenerError::GenerationExhausted { .. } => (
                        StatusCode::SERVICE_UNAVAILABLE,
                        "short code generation exhausted",
                    ),
                };
                (status, summary, json!(err.to_string()))
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, summary, details) = self.parts();

        if status.is_server_error() {
            error!(status = %status, details = %details, "{summary}");
        }

        let body = ErrorResponse {
            error: summary,
            details,
        };
        (status, Json(body)).into_response()
    }
}
