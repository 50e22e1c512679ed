/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! Error type shared by every layer of the service.

use reqwest::StatusCode;
use thiserror::Error;

/// Result alias used across the crate
pub type AppResult<T> = Result<T, AppError>;

/// Main error type for the library
#[derive(Debug, Error)]
pub enum AppError {
    /// Transport level failure talking to a remote HTTP endpoint
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    /// Database failure
    #[error("database error: {0}")]
    Db(#[from] sqlx::Error),
    /// JSON (de)serialization failure on well-formed input
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    /// Filesystem or subprocess failure
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// Request failed validation
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// Requested document does not exist
    #[error("not found: {0}")]
    NotFound(String),
    /// The stats package could not be downloaded
    #[error("failed to download {url}: status {status}")]
    Download {
        /// Requested URL
        url: String,
        /// Status returned by the server
        status: StatusCode,
    },
    /// Downloaded bytes are not a PDF document
    #[error("downloaded file is not a pdf: {0}")]
    InvalidPdf(String),
    /// The model returned no text
    #[error("model returned an empty response")]
    EmptyModelResponse,
    /// The model text could not be turned into JSON even after repair
    #[error("invalid json from model at line {line}, column {column}: {message}")]
    InvalidModelJson {
        /// Parser message
        message: String,
        /// 1-based line of the failure
        line: usize,
        /// 1-based column of the failure
        column: usize,
    },
    /// The model API answered with an error status
    #[error("model api error {status}: {body}")]
    ModelApi {
        /// Status returned by the model API
        status: StatusCode,
        /// Response body, as text
        body: String,
    },
    /// Gave up retrying after rate limit responses
    #[error("rate limit exceeded")]
    RateLimitExceeded,
    /// SMTP delivery or message building failure
    #[error("mail error: {0}")]
    Mail(String),
    /// HTML to image conversion failure
    #[error("image render error: {0}")]
    ImageRender(String),
}

impl From<lettre::error::Error> for AppError {
    fn from(err: lettre::error::Error) -> Self {
        AppError::Mail(err.to_string())
    }
}

impl From<lettre::transport::smtp::Error> for AppError {
    fn from(err: lettre::transport::smtp::Error) -> Self {
        AppError::Mail(err.to_string())
    }
}

impl From<lettre::address::AddressError> for AppError {
    fn from(err: lettre::address::AddressError) -> Self {
        AppError::InvalidInput(format!("invalid email address: {err}"))
    }
}
