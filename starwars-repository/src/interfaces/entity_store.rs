//! Entity store trait definition.
//!
//! This module defines the abstract interface over the collections of
//! characters, starships and reviews the resolvers read from.

use async_trait::async_trait;
use starwars_shared::{Droid, EntityKind, Episode, Human, Review, Starship};

/// Abstracts the storage holding every entity and review.
///
/// Implementations are shared behind an `Arc` and must be safe to read from
/// many resolutions at once while review appends happen. Lookups that find
/// nothing return `None`; they are never errors.
///
/// Collection listings (`humans`, `droids`, `starships`) return entities in
/// the store's iteration order, which the search dispatcher preserves.
#[async_trait]
pub trait EntityStore: Send + Sync {
    /// Look up a human by id.
    async fn human(&self, id: &str) -> Option<Human>;

    /// Look up a droid by id.
    async fn droid(&self, id: &str) -> Option<Droid>;

    /// Look up a starship by id.
    async fn starship(&self, id: &str) -> Option<Starship>;

    /// All humans, in iteration order.
    async fn humans(&self) -> Vec<Human>;

    /// All droids, in iteration order.
    async fn droids(&self) -> Vec<Droid>;

    /// All starships, in iteration order.
    async fn starships(&self) -> Vec<Starship>;

    /// Append a review to the tail of the episode's log.
    ///
    /// Appends to one episode are totally ordered: a review appended after
    /// another is always listed after it.
    async fn append_review(&self, episode: Episode, review: Review);

    /// The episode's reviews in insertion order.
    async fn reviews(&self, episode: Episode) -> Vec<Review>;

    /// Check whether the collection for `kind` holds `id`.
    async fn contains(&self, kind: EntityKind, id: &str) -> bool {
        match kind {
            EntityKind::Human => self.human(id).await.is_some(),
            EntityKind::Droid => self.droid(id).await.is_some(),
            EntityKind::Starship => self.starship(id).await.is_some(),
        }
    }
}
