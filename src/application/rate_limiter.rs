/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! Rate limiter for outbound model calls
//!
//! A token bucket from the `governor` crate keeps PDF analysis requests under
//! the per-minute quota of the Gemini API key.

use crate::application::config::RateLimiterConfig;
use governor::{
    Quota, RateLimiter as GovernorRateLimiter,
    clock::QuantaClock,
    state::{InMemoryState, NotKeyed},
};
use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;

const FALLBACK_BURST: NonZeroU32 = NonZeroU32::MIN;

/// Rate limiter shared by every model call
#[derive(Clone)]
pub struct RateLimiter {
    limiter: Arc<GovernorRateLimiter<NotKeyed, InMemoryState, QuantaClock>>,
}

impl RateLimiter {
    /// Creates a new rate limiter from configuration
    ///
    /// The replenish interval is `period_seconds / max_requests`; a zero
    /// request count or period falls back to one request per second.
    #[must_use]
    pub fn new(config: &RateLimiterConfig) -> Self {
        let max_requests = config.max_requests.max(1);
        let period = Duration::from_secs(config.period_seconds.max(1));
        let interval = period / max_requests;

        let burst_size = NonZeroU32::new(config.burst_size).unwrap_or(FALLBACK_BURST);

        let quota = Quota::with_period(interval)
            .unwrap_or_else(|| Quota::per_second(FALLBACK_BURST))
            .allow_burst(burst_size);

        Self {
            limiter: Arc::new(GovernorRateLimiter::direct(quota)),
        }
    }

    /// Waits until a request can be made according to the rate limit
    pub async fn wait(&self) {
        self.limiter.until_ready().await;
    }

    /// Checks if a request can be made immediately, consuming a permit if so
    #[must_use]
    pub fn check(&self) -> bool {
        self.limiter.check().is_ok()
    }
}

impl std::fmt::Debug for RateLimiter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RateLimiter")
            .field("limiter", &"GovernorRateLimiter")
            .finish()
    }
}
