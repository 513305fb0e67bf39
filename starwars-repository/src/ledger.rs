//! Append-only per-episode review log.
//!
//! A write first waits the configured delay, emulating a slow backend, and
//! only then takes the store's write lock. No lock is held while waiting, so
//! reads and other writes proceed in the meantime. A write cancelled during
//! the wait is abandoned and leaves no trace in the log.

use chrono::{DateTime, Utc};
use starwars_shared::{Episode, Review, ReviewInput};
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{info, instrument, warn};

use crate::errors::ResolveError;
use crate::interfaces::{Clock, EntityStore};

/// Review log backed by an entity store.
pub struct ReviewLedger {
    store: Arc<dyn EntityStore>,
    clock: Arc<dyn Clock>,
    write_delay: Duration,
}

impl ReviewLedger {
    /// Create a ledger writing to `store`, timed by `clock`.
    pub fn new(store: Arc<dyn EntityStore>, clock: Arc<dyn Clock>, write_delay: Duration) -> Self {
        Self {
            store,
            clock,
            write_delay,
        }
    }

    /// Append a review to the tail of the episode's log.
    ///
    /// The review is stamped with `input.time`, or with the clock's time when
    /// the write was accepted.
    ///
    /// # Returns
    ///
    /// * `Ok(Review)` - The stored review
    /// * `Err(ResolveError::InvalidReview)` - If the input is rejected
    /// * `Err(ResolveError::Cancelled)` - If `cancel` fired before the write
    ///   was stored
    #[instrument(skip(self, input, cancel), fields(stars = input.stars))]
    pub async fn append(
        &self,
        episode: Episode,
        input: ReviewInput,
        cancel: &CancellationToken,
    ) -> Result<Review, ResolveError> {
        input.validate().map_err(ResolveError::invalid_review)?;
        let accepted_at = self.clock.now();

        tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                warn!(episode = %episode, "Review write cancelled before it was stored");
                return Err(ResolveError::Cancelled);
            }
            _ = self.clock.sleep(self.write_delay) => {}
        }

        let review = input.into_review(accepted_at);
        self.store.append_review(episode, review.clone()).await;

        info!(episode = %episode, time = %review.time, "Stored review");
        Ok(review)
    }

    /// The episode's reviews in insertion order.
    ///
    /// With `since`, only reviews whose time is strictly after it are kept;
    /// the order is not changed.
    pub async fn query(&self, episode: Episode, since: Option<DateTime<Utc>>) -> Vec<Review> {
        let reviews = self.store.reviews(episode).await;
        match since {
            None => reviews,
            Some(since) => reviews
                .into_iter()
                .filter(|review| review.time > since)
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interfaces::SystemClock;
    use crate::memory::InMemoryStore;
    use async_trait::async_trait;
    use chrono::TimeZone;
    use tokio::sync::Notify;

    /// Clock with a fixed time whose sleeps wait until released.
    struct GatedClock {
        now: DateTime<Utc>,
        gate: Notify,
    }

    impl GatedClock {
        fn new() -> Self {
            Self {
                now: Utc.with_ymd_and_hms(1983, 5, 25, 0, 0, 0).unwrap(),
                gate: Notify::new(),
            }
        }
    }

    #[async_trait]
    impl Clock for GatedClock {
        fn now(&self) -> DateTime<Utc> {
            self.now
        }

        async fn sleep(&self, _duration: Duration) {
            self.gate.notified().await;
        }
    }

    fn at(seconds: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(seconds, 0).unwrap()
    }

    #[tokio::test]
    async fn test_query_since_is_strictly_after() {
        let store = Arc::new(InMemoryStore::new());
        let ledger = ReviewLedger::new(store, Arc::new(SystemClock), Duration::ZERO);
        let cancel = CancellationToken::new();
        let t = 1_000_000;

        for (stars, time) in [(3, at(t - 1)), (4, at(t)), (5, at(t + 1))] {
            ledger
                .append(Episode::Jedi, ReviewInput::new(stars).with_time(time), &cancel)
                .await
                .unwrap();
        }

        let after = ledger.query(Episode::Jedi, Some(at(t))).await;
        assert_eq!(after.len(), 1);
        assert_eq!(after[0].time, at(t + 1));
        assert_eq!(after[0].stars, 5);

        assert_eq!(ledger.query(Episode::Jedi, None).await.len(), 3);
    }

    #[tokio::test]
    async fn test_query_since_keeps_insertion_order() {
        let store = Arc::new(InMemoryStore::new());
        let ledger = ReviewLedger::new(store, Arc::new(SystemClock), Duration::ZERO);
        let cancel = CancellationToken::new();

        for (stars, time) in [(1, at(50)), (2, at(10)), (3, at(30))] {
            ledger
                .append(Episode::Empire, ReviewInput::new(stars).with_time(time), &cancel)
                .await
                .unwrap();
        }

        let stars: Vec<i32> = ledger
            .query(Episode::Empire, Some(at(5)))
            .await
            .iter()
            .map(|r| r.stars)
            .collect();
        assert_eq!(stars, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_append_rejects_invalid_stars() {
        let store = Arc::new(InMemoryStore::new());
        let ledger = ReviewLedger::new(store.clone(), Arc::new(SystemClock), Duration::ZERO);

        let result = ledger
            .append(Episode::NewHope, ReviewInput::new(9), &CancellationToken::new())
            .await;

        assert!(matches!(result, Err(ResolveError::InvalidReview(_))));
        assert!(store.reviews(Episode::NewHope).await.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_append_waits_for_the_write_delay() {
        let store = Arc::new(InMemoryStore::new());
        let ledger = ReviewLedger::new(store, Arc::new(SystemClock), Duration::from_secs(1));

        let started = tokio::time::Instant::now();
        ledger
            .append(Episode::Jedi, ReviewInput::new(4), &CancellationToken::new())
            .await
            .unwrap();

        assert!(started.elapsed() >= Duration::from_secs(1));
        assert_eq!(ledger.query(Episode::Jedi, None).await.len(), 1);
    }

    #[tokio::test]
    async fn test_pending_write_does_not_hold_the_lock() {
        let store = Arc::new(InMemoryStore::new());
        let clock = Arc::new(GatedClock::new());
        let ledger = Arc::new(ReviewLedger::new(
            store.clone(),
            clock.clone(),
            Duration::from_secs(1),
        ));

        let pending = {
            let ledger = ledger.clone();
            tokio::spawn(async move {
                ledger
                    .append(Episode::Jedi, ReviewInput::new(5), &CancellationToken::new())
                    .await
            })
        };
        tokio::task::yield_now().await;

        // Both readers and writers get through while the append is waiting.
        let read = tokio::time::timeout(Duration::from_secs(1), store.reviews(Episode::Jedi)).await;
        assert_eq!(read.unwrap().len(), 0);
        let write = tokio::time::timeout(
            Duration::from_secs(1),
            store.append_review(Episode::Empire, ReviewInput::new(2).into_review(clock.now())),
        )
        .await;
        assert!(write.is_ok());

        clock.gate.notify_one();
        let review = pending.await.unwrap().unwrap();
        assert_eq!(review.time, clock.now());
        assert_eq!(store.reviews(Episode::Jedi).await, vec![review]);
    }

    #[tokio::test]
    async fn test_cancelled_write_is_abandoned() {
        let store = Arc::new(InMemoryStore::new());
        let clock = Arc::new(GatedClock::new());
        let ledger = Arc::new(ReviewLedger::new(
            store.clone(),
            clock.clone(),
            Duration::from_secs(1),
        ));
        let cancel = CancellationToken::new();

        let pending = {
            let ledger = ledger.clone();
            let cancel = cancel.clone();
            tokio::spawn(async move {
                ledger
                    .append(Episode::Jedi, ReviewInput::new(5), &cancel)
                    .await
            })
        };
        tokio::task::yield_now().await;
        cancel.cancel();

        assert_eq!(pending.await.unwrap(), Err(ResolveError::Cancelled));

        // Releasing the gate afterwards must not resurrect the write.
        clock.gate.notify_one();
        assert!(store.reviews(Episode::Jedi).await.is_empty());
    }
}
