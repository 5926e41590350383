//! TTL cache for upstream responses.
//!
//! The cache sits in front of the [`FetchClient`](crate::fetch::FetchClient)
//! retry loop. A hit bypasses the concurrency limiter, the pacing delay and
//! the network entirely. Hit/miss metrics are emitted on every lookup.
//!
//! Keys are full request URLs including query parameters; there is no
//! partial-key matching. A lookup for an entry older than the TTL behaves
//! as a miss and the stale entry is invalidated, so a later `insert` for the
//! same key behaves as if nothing had been stored.

use std::time::Duration;

use moka::future::Cache;
use serde_json::Value;
use tracing::debug;

use crate::telemetry;

/// Default time-to-live for cached responses: five minutes.
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(5 * 60);

/// In-memory response cache keyed on request URL.
///
/// Cloning is cheap and yields a handle to the same underlying store.
#[derive(Clone)]
pub struct ResponseCache {
    entries: Cache<String, Value>,
    ttl: Duration,
}

impl ResponseCache {
    /// Create an empty cache whose entries expire after `ttl`.
    pub fn new(ttl: Duration) -> Self {
        let entries = Cache::builder().time_to_live(ttl).build();
        Self { entries, ttl }
    }

    /// Configured time-to-live.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Look up a cached response.
    ///
    /// Returns `None` on miss or when the entry has outlived the TTL.
    pub async fn get(&self, key: &str) -> Option<Value> {
        match self.entries.get(key).await {
            Some(value) => {
                metrics::counter!(telemetry::CACHE_HITS_TOTAL).increment(1);
                debug!(key, "response cache hit");
                Some(value)
            }
            None => {
                metrics::counter!(telemetry::CACHE_MISSES_TOTAL).increment(1);
                // drop any expired entry still held for this key
                self.entries.invalidate(key).await;
                None
            }
        }
    }

    /// Insert (or overwrite) a response. The TTL clock starts now.
    pub async fn insert(&self, key: impl Into<String>, value: Value) {
        self.entries.insert(key.into(), value).await;
    }

    /// Number of live entries.
    pub async fn len(&self) -> u64 {
        self.entries.run_pending_tasks().await;
        self.entries.entry_count()
    }

    /// Whether the cache holds no live entries.
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Evict all entries.
    pub async fn clear(&self) {
        self.entries.invalidate_all();
        self.entries.run_pending_tasks().await;
    }
}

impl Default for ResponseCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_TTL)
    }
}
