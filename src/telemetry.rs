//! Telemetry metric name constants.
//!
//! Centralised metric names for pantry operations. Consumers install
//! their own `metrics` recorder (e.g. prometheus, statsd); without a
//! recorder installed, all metric calls are no-ops.
//!
//! All metrics are prefixed with `pantry_`. Counters end in `_total`,
//! histograms use meaningful units (e.g. `_seconds`).
//!
//! # Common labels
//!
//! - `endpoint`: upstream endpoint (e.g. "filter", "lookup", "categories")
//! - `status`: "ok" or "error"

/// Total upstream requests that reached the network (cache misses).
///
/// Labels: `endpoint`, `status` ("ok" | "error").
pub const UPSTREAM_REQUESTS_TOTAL: &str = "pantry_upstream_requests_total";

/// Duration of a full `fetch_with_retry` call that went to the network,
/// including limiter wait, pacing delays and backoff.
///
/// Labels: `endpoint`.
pub const UPSTREAM_REQUEST_DURATION_SECONDS: &str = "pantry_upstream_request_duration_seconds";

/// Total retry attempts (not counting the initial request).
///
/// Labels: `endpoint`.
pub const RETRIES_TOTAL: &str = "pantry_retries_total";

/// Total response cache hits.
pub const CACHE_HITS_TOTAL: &str = "pantry_cache_hits_total";

/// Total response cache misses.
pub const CACHE_MISSES_TOTAL: &str = "pantry_cache_misses_total";

/// Recipe candidates skipped because their detail lookup failed.
pub const DETAIL_FETCH_FAILURES_TOTAL: &str = "pantry_detail_fetch_failures_total";

/// Per-ingredient searches that failed during a multi-ingredient search.
pub const INGREDIENT_SEARCH_FAILURES_TOTAL: &str = "pantry_ingredient_search_failures_total";
