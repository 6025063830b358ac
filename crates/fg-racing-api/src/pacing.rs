//! Minimum-interval pacing for bulk-range remote calls.
//!
//! Bulk operations (meet listings and their follow-up fetches) must not
//! hammer the remote API. This is a floor between consecutive calls on a
//! single sequential path, not a rate limiter: no backoff, no jitter, no
//! token accounting.

use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::Instant;

/// Enforces a minimum interval between consecutive `pace()` returns.
pub struct Pacer {
    min_interval: Duration,
    last: Mutex<Option<Instant>>,
}

impl Pacer {
    pub fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            last: Mutex::new(None),
        }
    }

    /// From a millisecond floor, as carried in config.
    pub fn from_millis(ms: u64) -> Self {
        Self::new(Duration::from_millis(ms))
    }

    /// Wait until at least `min_interval` has passed since the previous
    /// call returned. The first call never waits.
    pub async fn pace(&self) {
        let mut last = self.last.lock().await;
        if let Some(prev) = *last {
            let elapsed = prev.elapsed();
            if elapsed < self.min_interval {
                tokio::time::sleep(self.min_interval - elapsed).await;
            }
        }
        *last = Some(Instant::now());
    }
}
