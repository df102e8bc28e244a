// ABOUTME: Shared API response types and error handling
// ABOUTME: Every error leaves the service as a JSON body of the form {"error": ...}

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Json as ResponseJson, Response},
};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, error};

use bookshelf_core::ValidationError;
use bookshelf_storage::StorageError;

/// Body for error responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Body for responses that only carry a message
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Errors a handler can return
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Book not found")]
    NotFound,

    #[error("Invalid data: {0}")]
    InvalidInput(String),

    #[error("Route not found")]
    RouteNotFound,

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

impl ApiError {
    fn status_and_message(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::NotFound => (StatusCode::NOT_FOUND, "Book not found"),
            ApiError::InvalidInput(_) => (StatusCode::BAD_REQUEST, "Invalid data"),
            ApiError::RouteNotFound => (StatusCode::NOT_FOUND, "Not found"),
            ApiError::MethodNotAllowed => (StatusCode::METHOD_NOT_ALLOWED, "Method not allowed"),
            ApiError::Storage(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error"),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidInput(rejection.body_text())
    }
}

impl From<Vec<ValidationError>> for ApiError {
    fn from(errors: Vec<ValidationError>) -> Self {
        let details = errors
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ");
        ApiError::InvalidInput(details)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::Storage(e) => error!("Storage failure: {}", e),
            ApiError::InvalidInput(details) => debug!("Rejected request body: {}", details),
            _ => {}
        }

        let (status, message) = self.status_and_message();
        let body = ErrorResponse {
            error: message.to_string(),
        };

        (status, ResponseJson(body)).into_response()
    }
}

/// JSON 404 for paths no route matches
pub async fn not_found_fallback() -> ApiError {
    ApiError::RouteNotFound
}

/// JSON 405 for known paths hit with an unsupported method
pub async fn method_not_allowed_fallback() -> ApiError {
    ApiError::MethodNotAllowed
}
