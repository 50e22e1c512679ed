use crate::error::AppError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use tracing::error;

/// Body of every error response
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Human readable message
    pub detail: String,
}

/// Application error carried to the HTTP boundary
///
/// Validation errors become 400 and missing documents 404, both with the bare
/// message. Anything else is a 500 whose message starts with the prefix of
/// the endpoint that failed, except image render failures which always read
/// `Failed to generate image`.
#[derive(Debug)]
pub struct ApiError {
    source: AppError,
    prefix: &'static str,
}

impl ApiError {
    /// Wraps `source` with the default `Error` prefix
    pub fn new(source: AppError) -> Self {
        Self {
            source,
            prefix: "Error",
        }
    }

    /// Replaces the prefix of 500 messages
    pub fn with_prefix(mut self, prefix: &'static str) -> Self {
        self.prefix = prefix;
        self
    }

    /// Status and `detail` of the response
    pub fn status_and_detail(&self) -> (StatusCode, String) {
        match &self.source {
            AppError::InvalidInput(message) => (StatusCode::BAD_REQUEST, message.clone()),
            AppError::NotFound(message) => (StatusCode::NOT_FOUND, message.clone()),
            AppError::ImageRender(message) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to generate image: {message}"),
            ),
            err @ AppError::InvalidModelJson { .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Invalid JSON from API: {err}"),
            ),
            err => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("{}: {}", self.prefix, err),
            ),
        }
    }
}

impl From<AppError> for ApiError {
    fn from(source: AppError) -> Self {
        Self::new(source)
    }
}

/// Attaches an endpoint specific prefix to a failing result
pub trait ErrorPrefix<T> {
    /// Converts the error into an [`ApiError`] with `prefix`
    fn prefixed(self, prefix: &'static str) -> Result<T, ApiError>;
}

impl<T> ErrorPrefix<T> for Result<T, AppError> {
    fn prefixed(self, prefix: &'static str) -> Result<T, ApiError> {
        self.map_err(|e| ApiError::new(e).with_prefix(prefix))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = self.status_and_detail();
        if status.is_server_error() {
            error!("{}", detail);
        }
        (status, Json(ErrorBody { detail })).into_response()
    }
}
