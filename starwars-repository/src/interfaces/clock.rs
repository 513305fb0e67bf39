//! Time source used by the review ledger.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::time::Duration;

/// Supplies the current time and the write delay's suspension.
///
/// Injected so tests can pin timestamps and control when a pending write
/// wakes up.
#[async_trait]
pub trait Clock: Send + Sync {
    /// The current wall-clock time.
    fn now(&self) -> DateTime<Utc>;

    /// Suspend the calling task for `duration`.
    async fn sleep(&self, duration: Duration);
}

/// Production clock backed by the system time and the tokio timer.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

#[async_trait]
impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    async fn sleep(&self, duration: Duration) {
        if !duration.is_zero() {
            tokio::time::sleep(duration).await;
        }
    }
}
