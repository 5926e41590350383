//! Resilient upstream access.
//!
//! [`FetchClient`] is the single path to the network. Every request goes
//! through the same three layers:
//!
//! 1. the [`ResponseCache`], keyed on the full URL; a hit returns without
//!    touching the limiter or the network;
//! 2. the [`RequestLimiter`], whose permit is held for the whole retry loop;
//! 3. the retry loop itself, pacing every attempt with
//!    [`FetchConfig::request_delay`] and backing off linearly between
//!    failed attempts.
//!
//! Non-success statuses, transport errors and undecodable bodies all count
//! as a failed attempt. Once attempts are exhausted the caller receives
//! [`PantryError::UpstreamRequestFailed`].

pub mod limiter;
pub mod retry;

pub use limiter::{LimiterPermit, RequestLimiter};
pub use retry::FetchConfig;

use std::time::Instant;

use reqwest::Client;
use serde_json::Value;
use tracing::{debug, warn};

use crate::cache::ResponseCache;
use crate::telemetry;
use crate::{PantryError, Result};

/// Cache-, limiter- and retry-aware HTTP client for JSON endpoints.
///
/// Construct once and share; clones share the same cache and permit pool.
#[derive(Clone)]
pub struct FetchClient {
    http: Client,
    cache: ResponseCache,
    limiter: RequestLimiter,
    config: FetchConfig,
}

impl FetchClient {
    /// Build a client with a fresh cache and limiter sized from `config`.
    pub fn new(config: FetchConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| PantryError::Configuration(format!("failed to build HTTP client: {e}")))?;
        Ok(Self {
            http,
            cache: ResponseCache::new(config.cache_ttl),
            limiter: RequestLimiter::new(config.max_concurrent),
            config,
        })
    }

    /// The response cache backing this client.
    pub fn cache(&self) -> &ResponseCache {
        &self.cache
    }

    /// The concurrency limiter backing this client.
    pub fn limiter(&self) -> &RequestLimiter {
        &self.limiter
    }

    /// Active configuration.
    pub fn config(&self) -> &FetchConfig {
        &self.config
    }

    /// GET `url` and decode the JSON body, with caching and retries.
    pub async fn fetch_with_retry(&self, url: &str) -> Result<Value> {
        if let Some(cached) = self.cache.get(url).await {
            return Ok(cached);
        }

        let endpoint = endpoint_label(url);
        let started = Instant::now();
        let _permit = self.limiter.acquire().await?;
        let max_attempts = self.config.effective_attempts();

        let mut attempt = 0;
        loop {
            attempt += 1;
            tokio::time::sleep(self.config.request_delay).await;

            match self.request_once(url).await {
                Ok(value) => {
                    self.cache.insert(url, value.clone()).await;
                    metrics::counter!(telemetry::UPSTREAM_REQUESTS_TOTAL,
                        "endpoint" => endpoint.clone(),
                        "status" => "ok",
                    )
                    .increment(1);
                    metrics::histogram!(telemetry::UPSTREAM_REQUEST_DURATION_SECONDS,
                        "endpoint" => endpoint,
                    )
                    .record(started.elapsed().as_secs_f64());
                    debug!(url, attempt, "upstream request succeeded");
                    return Ok(value);
                }
                Err(e) if attempt >= max_attempts => {
                    metrics::counter!(telemetry::UPSTREAM_REQUESTS_TOTAL,
                        "endpoint" => endpoint.clone(),
                        "status" => "error",
                    )
                    .increment(1);
                    warn!(url, attempts = attempt, error = %e, "upstream request failed");
                    return Err(PantryError::UpstreamRequestFailed {
                        url: url.to_owned(),
                        attempts: attempt,
                        reason: e.to_string(),
                    });
                }
                Err(e) => {
                    let delay = self.config.backoff_for_attempt(attempt);
                    metrics::counter!(telemetry::RETRIES_TOTAL,
                        "endpoint" => endpoint.clone(),
                    )
                    .increment(1);
                    warn!(
                        url,
                        attempt,
                        max_attempts,
                        delay_ms = delay.as_millis() as u64,
                        error = %e,
                        "retrying upstream request"
                    );
                    tokio::time::sleep(delay).await;
                }
            }
        }
    }

    /// One network attempt, no retry.
    async fn request_once(&self, url: &str) -> Result<Value> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| PantryError::Http(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(PantryError::Api {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json()
            .await
            .map_err(|e| PantryError::Http(e.to_string()))
    }
}

/// Metric label for a request URL: the last path segment without `.php`.
fn endpoint_label(url: &str) -> String {
    reqwest::Url::parse(url)
        .ok()
        .and_then(|u| {
            u.path_segments()
                .and_then(|segments| segments.last().map(str::to_owned))
        })
        .map(|segment| segment.trim_end_matches(".php").to_owned())
        .filter(|segment| !segment.is_empty())
        .unwrap_or_else(|| "unknown".to_owned())
}
