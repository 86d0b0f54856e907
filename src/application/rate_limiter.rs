/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Rate limiter module for controlling API request rates
//!
//! This module provides client-side throttling using the `governor` crate so a
//! busy caller stays under the Google Ads per-developer-token QPS quota. It only
//! delays requests; it never retries them.

use crate::application::config::RateLimiterConfig;
use governor::{
    Quota, RateLimiter as GovernorRateLimiter,
    clock::DefaultClock,
    state::{InMemoryState, NotKeyed},
};
use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;

/// Rate limiter for controlling API request rates
///
/// Token bucket refilled at `max_requests / period_seconds`, holding at most
/// `burst_size` tokens.
#[derive(Clone)]
pub struct RateLimiter {
    limiter: Arc<GovernorRateLimiter<NotKeyed, InMemoryState, DefaultClock>>,
}

impl RateLimiter {
    /// Creates a new rate limiter from configuration
    ///
    /// Zero values fall back to one request per second with a burst equal to
    /// `max_requests`.
    ///
    /// # Example
    ///
    /// ```
    /// use gads_client::application::config::RateLimiterConfig;
    /// use gads_client::application::rate_limiter::RateLimiter;
    ///
    /// let config = RateLimiterConfig {
    ///     max_requests: 60,
    ///     period_seconds: 60,
    ///     burst_size: 10,
    /// };
    ///
    /// let limiter = RateLimiter::new(&config);
    /// assert!(limiter.check());
    /// ```
    #[must_use]
    pub fn new(config: &RateLimiterConfig) -> Self {
        let max_requests = NonZeroU32::new(config.max_requests).unwrap_or(NonZeroU32::MIN);
        let burst_size = NonZeroU32::new(config.burst_size).unwrap_or(max_requests);
        let period = Duration::from_secs(config.period_seconds.max(1));
        let replenish_interval = period / max_requests.get();

        let quota = Quota::with_period(replenish_interval)
            .unwrap_or_else(|| Quota::per_second(max_requests))
            .allow_burst(burst_size);

        Self {
            limiter: Arc::new(GovernorRateLimiter::direct(quota)),
        }
    }

    /// Waits until a request can be made according to the rate limit
    pub async fn wait(&self) {
        self.limiter.until_ready().await;
    }

    /// Checks if a request can be made immediately, consuming a token when it can
    #[must_use]
    pub fn check(&self) -> bool {
        self.limiter.check().is_ok()
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new(&RateLimiterConfig::default())
    }
}

impl std::fmt::Debug for RateLimiter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RateLimiter")
            .field("limiter", &"GovernorRateLimiter")
            .finish()
    }
}
