//! FIFO concurrency limiter for upstream requests.
//!
//! Wraps a [`tokio::sync::Semaphore`], which queues waiters in arrival
//! order and hands a released permit straight to the head of the queue.
//! A new `acquire` can therefore never steal a permit from a caller that
//! was already waiting.
//!
//! Permits are guards: the permit returns to the pool when the
//! [`LimiterPermit`] is dropped, including when the future holding it is
//! abandoned mid-request.

use std::sync::Arc;

use tokio::sync::{OwnedSemaphorePermit, Semaphore};

use crate::{PantryError, Result};

/// Default number of upstream requests allowed in flight.
pub const DEFAULT_MAX_CONCURRENT: usize = 2;

/// Bounds the number of in-flight upstream operations.
///
/// Cloning yields a handle to the same permit pool.
#[derive(Debug, Clone)]
pub struct RequestLimiter {
    semaphore: Arc<Semaphore>,
    limit: usize,
}

/// A granted unit of concurrency budget.
#[derive(Debug)]
pub struct LimiterPermit {
    _permit: OwnedSemaphorePermit,
}

impl LimiterPermit {
    /// Return the permit to the pool. Equivalent to dropping it.
    pub fn release(self) {}
}

impl RequestLimiter {
    /// Create a limiter with `limit` permits (at least one).
    pub fn new(limit: usize) -> Self {
        let limit = limit.max(1);
        Self {
            semaphore: Arc::new(Semaphore::new(limit)),
            limit,
        }
    }

    /// Wait for a permit. Waiters are served first-in, first-out.
    pub async fn acquire(&self) -> Result<LimiterPermit> {
        let permit = Arc::clone(&self.semaphore)
            .acquire_owned()
            .await
            .map_err(|_| PantryError::Configuration("request limiter closed".into()))?;
        Ok(LimiterPermit { _permit: permit })
    }

    /// Take a permit only if one is free right now.
    pub fn try_acquire(&self) -> Option<LimiterPermit> {
        Arc::clone(&self.semaphore)
            .try_acquire_owned()
            .ok()
            .map(|permit| LimiterPermit { _permit: permit })
    }

    /// Configured number of permits.
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Permits not currently granted.
    pub fn available(&self) -> usize {
        self.semaphore.available_permits()
    }
}

impl Default for RequestLimiter {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_CONCURRENT)
    }
}
