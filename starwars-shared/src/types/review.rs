//! Review types.
//!
//! Reviews are appended per episode and never mutated afterwards.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lowest accepted star rating.
pub const MIN_STARS: i32 = 1;

/// Highest accepted star rating.
pub const MAX_STARS: i32 = 5;

/// A stored review of an episode.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Review {
    /// The number of stars this review gave, 1-5.
    pub stars: i32,
    /// Comment about the movie.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commentary: Option<String>,
    /// When the review was posted.
    pub time: DateTime<Utc>,
}

/// The input object sent when someone is creating a new review.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReviewInput {
    /// 1-5 stars
    pub stars: i32,
    /// Comment about the movie, optional
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commentary: Option<String>,
    /// When the review was posted. Defaults to the moment the write is accepted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<DateTime<Utc>>,
}

impl ReviewInput {
    pub fn new(stars: i32) -> Self {
        Self {
            stars,
            commentary: None,
            time: None,
        }
    }

    pub fn with_commentary(mut self, commentary: impl Into<String>) -> Self {
        self.commentary = Some(commentary.into());
        self
    }

    pub fn with_time(mut self, time: DateTime<Utc>) -> Self {
        self.time = Some(time);
        self
    }

    /// Validate the input.
    ///
    /// Returns an error message if validation fails.
    pub fn validate(&self) -> Result<(), String> {
        if !(MIN_STARS..=MAX_STARS).contains(&self.stars) {
            return Err(format!(
                "stars must be between {} and {}, got {}",
                MIN_STARS, MAX_STARS, self.stars
            ));
        }
        Ok(())
    }

    /// Turn the input into a stored review, stamping it with `now` when no
    /// explicit time was given.
    pub fn into_review(self, now: DateTime<Utc>) -> Review {
        Review {
            stars: self.stars,
            commentary: self.commentary,
            time: self.time.unwrap_or(now),
        }
    }
}
