//! Caching subsystem.
//!
//! [`ResponseCache`] memoises decoded upstream payloads keyed on the exact
//! request URL. Entries live for a fixed TTL (five minutes by default) and
//! are the only eviction policy: the upstream corpus is small and entries
//! expire on their own, so no capacity bound is configured.

pub mod response;

pub use response::{DEFAULT_CACHE_TTL, ResponseCache};
