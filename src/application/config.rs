use crate::constants::{
    DEFAULT_COMPARISON_MODEL, DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_TIMEOUT_SECS,
    DEFAULT_IMGBB_URL, DEFAULT_PDF_CACHE_DIR, DEFAULT_REPORT_BASE_URL, DEFAULT_REPORT_MODEL,
};
use crate::storage::config::DatabaseConfig;
use crate::utils::config::{get_env_or_default, get_env_or_none, get_secret};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{debug, warn};

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Main configuration of the service
pub struct Config {
    /// Generative model API configuration
    pub gemini: GeminiConfig,
    /// Rate limiter applied to model calls
    pub rate_limiter: RateLimiterConfig,
    /// Where stats packages are downloaded from and cached
    pub source: ReportSourceConfig,
    /// Database configuration for report persistence
    pub database: DatabaseConfig,
    /// Outgoing mail configuration
    pub smtp: SmtpConfig,
    /// HTML to image conversion and image hosting
    pub image: ImageConfig,
    /// HTTP listener configuration
    pub server: ServerConfig,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for the Gemini REST API
pub struct GeminiConfig {
    /// API key sent in the `x-goog-api-key` header
    pub api_key: String,
    /// Base URL of the Generative Language API
    pub base_url: String,
    /// Model used for market reports and infographics
    pub report_model: String,
    /// Model used for city comparisons
    pub comparison_model: String,
    /// Timeout in seconds for a single call
    pub timeout: u64,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for rate limiting model requests
pub struct RateLimiterConfig {
    /// Maximum number of requests allowed per period
    pub max_requests: u32,
    /// Time period in seconds for the rate limit
    pub period_seconds: u64,
    /// Burst size - maximum number of requests that can be made at once
    pub burst_size: u32,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration of the stats package source
pub struct ReportSourceConfig {
    /// Base URL the package file name is appended to
    pub base_url: String,
    /// Directory downloaded PDFs are cached in
    pub cache_dir: PathBuf,
    /// Directory the repaired model JSON is archived in, if any
    pub output_dir: Option<PathBuf>,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// SMTP settings
pub struct SmtpConfig {
    /// SMTP relay host
    pub server: String,
    /// SMTP port (STARTTLS)
    pub port: u16,
    /// Login user
    pub username: String,
    /// Login password
    pub password: String,
    /// Sender address
    pub from_email: String,
    /// Sender display name
    pub from_name: String,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Image rendering and hosting settings
pub struct ImageConfig {
    /// Explicit path of the `wkhtmltoimage` binary
    pub wkhtmltoimage_path: Option<PathBuf>,
    /// imgbb API key; uploads are skipped when absent
    pub imgbb_api_key: Option<String>,
    /// imgbb upload endpoint
    pub imgbb_url: String,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// HTTP listener settings
pub struct ServerConfig {
    /// Interface to bind
    pub host: String,
    /// Port to bind
    pub port: u16,
}

impl ServerConfig {
    /// `host:port` string suitable for binding
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Builds the configuration from the environment, loading `.env` first
    ///
    /// Missing secrets are logged and left empty so the HTTP surface can still
    /// come up; the collaborator that needs them fails when it is used.
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let smtp_username: String = get_env_or_default("SMTP_USERNAME", String::new());
        if smtp_username.is_empty() {
            warn!("SMTP_USERNAME not set, email delivery will fail");
        }

        let database = DatabaseConfig {
            url: get_env_or_default("DATABASE_URL", String::new()),
            max_connections: get_env_or_default("DATABASE_MAX_CONNECTIONS", 5),
        };
        if !database.is_configured() {
            warn!("DATABASE_URL not set, reports will only be kept in memory");
        }

        Config {
            gemini: GeminiConfig {
                api_key: get_secret("GEMINI_API_KEY"),
                base_url: get_env_or_default(
                    "GEMINI_BASE_URL",
                    String::from(DEFAULT_GEMINI_BASE_URL),
                ),
                report_model: get_env_or_default(
                    "GEMINI_REPORT_MODEL",
                    String::from(DEFAULT_REPORT_MODEL),
                ),
                comparison_model: get_env_or_default(
                    "GEMINI_COMPARISON_MODEL",
                    String::from(DEFAULT_COMPARISON_MODEL),
                ),
                timeout: get_env_or_default("GEMINI_TIMEOUT", DEFAULT_GEMINI_TIMEOUT_SECS),
            },
            rate_limiter: RateLimiterConfig {
                max_requests: get_env_or_default("GEMINI_RATE_LIMIT_MAX_REQUESTS", 10),
                period_seconds: get_env_or_default("GEMINI_RATE_LIMIT_PERIOD_SECONDS", 60),
                burst_size: get_env_or_default("GEMINI_RATE_LIMIT_BURST_SIZE", 2),
            },
            source: ReportSourceConfig {
                base_url: get_env_or_default(
                    "REPORT_BASE_URL",
                    String::from(DEFAULT_REPORT_BASE_URL),
                ),
                cache_dir: get_env_or_default(
                    "PDF_CACHE_DIR",
                    PathBuf::from(DEFAULT_PDF_CACHE_DIR),
                ),
                output_dir: get_env_or_none("REPORT_OUTPUT_DIR"),
            },
            database,
            smtp: SmtpConfig {
                server: get_env_or_default("SMTP_SERVER", String::from("smtp.gmail.com")),
                port: get_env_or_default("SMTP_PORT", 587),
                from_email: get_env_or_default("FROM_EMAIL", smtp_username.clone()),
                username: smtp_username,
                password: get_env_or_default("SMTP_PASSWORD", String::new()),
                from_name: get_env_or_default("FROM_NAME", String::from("Realty Genie")),
            },
            image: ImageConfig {
                wkhtmltoimage_path: get_env_or_none("WKHTMLTOIMAGE_PATH"),
                imgbb_api_key: get_env_or_none("IMGBB_API_KEY"),
                imgbb_url: get_env_or_default("IMGBB_URL", String::from(DEFAULT_IMGBB_URL)),
            },
            server: ServerConfig {
                host: get_env_or_default("SERVER_HOST", String::from("0.0.0.0")),
                port: get_env_or_default("SERVER_PORT", 8000),
            },
        }
    }
}
