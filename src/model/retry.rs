/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::constants::{DEFAULT_MAX_RETRIES, DEFAULT_RETRY_DELAY_SECS};
use crate::utils::config::get_env_or_none;

/// Configuration for retrying model calls that were rate limited or hit an
/// overloaded backend
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Maximum number of retries (None = use default)
    pub max_retry_count: Option<u32>,
    /// Delay in seconds between retries (None = use default)
    pub retry_delay_secs: Option<u64>,
}

impl RetryConfig {
    /// Creates a retry configuration from `MAX_RETRY_COUNT` / `RETRY_DELAY_SECS`
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Never retries
    #[must_use]
    pub fn none() -> Self {
        Self {
            max_retry_count: Some(0),
            retry_delay_secs: Some(0),
        }
    }

    /// Creates a new retry configuration with both max retries and custom delay
    #[must_use]
    pub fn with_max_retries_and_delay(max_retries: u32, delay_secs: u64) -> Self {
        Self {
            max_retry_count: Some(max_retries),
            retry_delay_secs: Some(delay_secs),
        }
    }

    /// Gets the maximum retry count
    #[must_use]
    pub fn max_retries(&self) -> u32 {
        self.max_retry_count.unwrap_or(DEFAULT_MAX_RETRIES)
    }

    /// Gets the retry delay in seconds
    #[must_use]
    pub fn delay_secs(&self) -> u64 {
        self.retry_delay_secs.unwrap_or(DEFAULT_RETRY_DELAY_SECS)
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retry_count: get_env_or_none("MAX_RETRY_COUNT"),
            retry_delay_secs: get_env_or_none("RETRY_DELAY_SECS"),
        }
    }
}
