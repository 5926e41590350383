//! Fetch configuration: pacing, retry and backoff settings.
//!
//! [`FetchConfig`] controls the [`FetchClient`](super::FetchClient) retry
//! loop, the concurrency limit and the response cache TTL. The defaults
//! respect TheMealDB's informal rate limits: two requests in flight, a one
//! second pause before every attempt and a linear backoff between retries.

use std::time::Duration;

use crate::cache::DEFAULT_CACHE_TTL;

/// Configuration for upstream access.
///
/// ```rust
/// # use pantry::FetchConfig;
/// # use std::time::Duration;
/// let config = FetchConfig::new()
///     .max_attempts(5)
///     .request_delay(Duration::from_millis(250))
///     .max_concurrent(4);
/// assert_eq!(config.backoff_for_attempt(2), Duration::from_secs(2));
/// ```
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Maximum number of attempts (including the initial request).
    /// 1 = no retry. Default: 3.
    pub max_attempts: u32,
    /// Pause before every attempt, to stay under upstream rate limits.
    /// Default: 1s.
    pub request_delay: Duration,
    /// Backoff unit after a failed attempt; attempt `n` waits `n * step`.
    /// Default: 1s.
    pub backoff_step: Duration,
    /// Maximum number of requests in flight at once. Default: 2.
    pub max_concurrent: usize,
    /// Time-to-live for cached responses. Default: 5 minutes.
    pub cache_ttl: Duration,
    /// Per-request HTTP timeout. Default: 30s.
    pub timeout: Duration,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            request_delay: Duration::from_millis(1000),
            backoff_step: Duration::from_millis(1000),
            max_concurrent: 2,
            cache_ttl: DEFAULT_CACHE_TTL,
            timeout: Duration::from_secs(30),
        }
    }
}

impl FetchConfig {
    /// Create a new config with the upstream-friendly defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// A config with no pacing delay and no backoff.
    ///
    /// Intended for tests and for upstreams that do not rate limit.
    pub fn unpaced() -> Self {
        Self {
            request_delay: Duration::ZERO,
            backoff_step: Duration::ZERO,
            ..Self::default()
        }
    }

    /// Set maximum attempts (including the initial request).
    pub fn max_attempts(mut self, n: u32) -> Self {
        self.max_attempts = n;
        self
    }

    /// Set the pause taken before every attempt.
    pub fn request_delay(mut self, delay: Duration) -> Self {
        self.request_delay = delay;
        self
    }

    /// Set the linear backoff unit.
    pub fn backoff_step(mut self, step: Duration) -> Self {
        self.backoff_step = step;
        self
    }

    /// Set the number of requests allowed in flight at once.
    pub fn max_concurrent(mut self, n: usize) -> Self {
        self.max_concurrent = n;
        self
    }

    /// Set the response cache TTL.
    pub fn cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl = ttl;
        self
    }

    /// Set the per-request HTTP timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Attempts actually made; a configured zero still makes one attempt.
    pub(crate) fn effective_attempts(&self) -> u32 {
        self.max_attempts.max(1)
    }

    /// Backoff after failed attempt number `attempt` (1-indexed).
    ///
    /// Linear: `backoff_step * attempt`.
    pub fn backoff_for_attempt(&self, attempt: u32) -> Duration {
        self.backoff_step.saturating_mul(attempt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_upstream_limits() {
        let config = FetchConfig::default();
        assert_eq!(config.max_attempts, 3);
        assert_eq!(config.request_delay, Duration::from_millis(1000));
        assert_eq!(config.max_concurrent, 2);
        assert_eq!(config.cache_ttl, Duration::from_millis(300_000));
    }

    #[test]
    fn backoff_is_linear() {
        let config = FetchConfig::default();
        assert_eq!(config.backoff_for_attempt(1), Duration::from_millis(1000));
        assert_eq!(config.backoff_for_attempt(2), Duration::from_millis(2000));
    }

    #[test]
    fn unpaced_has_no_delays() {
        let config = FetchConfig::unpaced();
        assert_eq!(config.request_delay, Duration::ZERO);
        assert_eq!(config.backoff_for_attempt(2), Duration::ZERO);
        assert_eq!(config.max_attempts, 3);
    }

    #[test]
    fn zero_attempts_still_tries_once() {
        let config = FetchConfig::new().max_attempts(0);
        assert_eq!(config.effective_attempts(), 1);
    }
}
