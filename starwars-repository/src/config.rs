//! Configuration types for the StarWarsService.

use std::time::Duration;

/// Default simulated latency of a review write.
pub const DEFAULT_REVIEW_WRITE_DELAY: Duration = Duration::from_secs(1);

/// Id of the hero returned for `EMPIRE` (Luke Skywalker in the seed dataset).
pub const DEFAULT_EMPIRE_HERO_ID: &str = "1000";

/// Id of the hero returned for every other episode (R2-D2 in the seed dataset).
pub const DEFAULT_HERO_ID: &str = "2001";

/// Configuration for the StarWarsService.
#[derive(Debug, Clone)]
pub struct StarWarsServiceConfig {
    /// How long a review write waits before it is stored.
    ///
    /// The wait happens before any lock is taken. `Duration::ZERO` disables it.
    pub review_write_delay: Duration,

    /// Hero of `The Empire Strikes Back`.
    pub empire_hero_id: String,

    /// Hero of every other episode, and of the saga as a whole.
    pub default_hero_id: String,
}

impl Default for StarWarsServiceConfig {
    fn default() -> Self {
        Self {
            review_write_delay: DEFAULT_REVIEW_WRITE_DELAY,
            empire_hero_id: DEFAULT_EMPIRE_HERO_ID.to_string(),
            default_hero_id: DEFAULT_HERO_ID.to_string(),
        }
    }
}

impl StarWarsServiceConfig {
    /// Create a config whose review writes are stored immediately.
    pub fn without_write_delay() -> Self {
        Self {
            review_write_delay: Duration::ZERO,
            ..Self::default()
        }
    }

    /// Create a config with a custom review write delay.
    pub fn with_review_write_delay(review_write_delay: Duration) -> Self {
        Self {
            review_write_delay,
            ..Self::default()
        }
    }
}
