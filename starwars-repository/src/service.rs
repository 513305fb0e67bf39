//! Star Wars service implementation.
//!
//! This module provides the field surface the GraphQL layer resolves against:
//! direct lookups, the hero rule, search, reviews, friends pagination and unit
//! conversion. Every operation reads through the injected `EntityStore`.

use chrono::{DateTime, Utc};
use starwars_shared::{
    Character, Droid, EntityKind, Episode, FriendsConnection, Human, Review, ReviewInput,
    SearchResult, Starship,
};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, instrument};

use crate::config::StarWarsServiceConfig;
use crate::connection;
use crate::errors::ResolveError;
use crate::interfaces::{Clock, EntityStore, SystemClock};
use crate::ledger::ReviewLedger;
use crate::search;
use crate::type_resolver;
use crate::units::convert_length;

/// The main service for resolving Star Wars queries.
///
/// This is the high-level API that the schema layer should use. Lookups that
/// find nothing return `None`; malformed arguments and unresolvable
/// polymorphic values return a `ResolveError` for the single field concerned.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use starwars_repository::memory::{seed, InMemoryStore};
/// use starwars_repository::{StarWarsService, StarWarsServiceConfig};
/// use starwars_shared::Episode;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let store = Arc::new(InMemoryStore::from_dataset(seed::starwars_dataset()));
/// let service = StarWarsService::with_config(store, StarWarsServiceConfig::without_write_delay());
///
/// let hero = service.hero(Some(Episode::Empire)).await?;
/// assert_eq!(hero.name(), "Luke Skywalker");
///
/// let page = service.friends_connection(&hero, Some(2), None).await?;
/// assert_eq!(page.total_count, 4);
/// # Ok(())
/// # }
/// ```
pub struct StarWarsService {
    store: Arc<dyn EntityStore>,
    ledger: ReviewLedger,
    config: StarWarsServiceConfig,
}

impl StarWarsService {
    /// Create a new StarWarsService with default configuration.
    ///
    /// The default configuration delays every review write by one second.
    pub fn new(store: Arc<dyn EntityStore>) -> Self {
        Self::with_config(store, StarWarsServiceConfig::default())
    }

    /// Create a new StarWarsService with custom configuration.
    pub fn with_config(store: Arc<dyn EntityStore>, config: StarWarsServiceConfig) -> Self {
        Self::with_clock(store, Arc::new(SystemClock), config)
    }

    /// Create a new StarWarsService with a custom clock.
    ///
    /// Use this in tests to pin review timestamps or control the write delay.
    pub fn with_clock(
        store: Arc<dyn EntityStore>,
        clock: Arc<dyn Clock>,
        config: StarWarsServiceConfig,
    ) -> Self {
        let ledger = ReviewLedger::new(store.clone(), clock, config.review_write_delay);
        Self {
            store,
            ledger,
            config,
        }
    }

    pub fn config(&self) -> &StarWarsServiceConfig {
        &self.config
    }

    /// Look up a character by id: humans first, then droids.
    pub async fn character(&self, id: &str) -> Option<Character> {
        type_resolver::character_by_id(self.store.as_ref(), id).await
    }

    pub async fn human(&self, id: &str) -> Option<Human> {
        self.store.human(id).await
    }

    pub async fn droid(&self, id: &str) -> Option<Droid> {
        self.store.droid(id).await
    }

    pub async fn starship(&self, id: &str) -> Option<Starship> {
        self.store.starship(id).await
    }

    /// The hero of an episode.
    ///
    /// `EMPIRE` returns the configured human hero; any other episode, and no
    /// episode at all, returns the configured droid hero.
    ///
    /// # Returns
    ///
    /// * `Ok(Character)` - The hero
    /// * `Err(ResolveError::UnresolvedType)` - If the configured hero is not in
    ///   the store
    #[instrument(skip(self))]
    pub async fn hero(&self, episode: Option<Episode>) -> Result<Character, ResolveError> {
        let hero = match episode {
            Some(Episode::Empire) => {
                let id = &self.config.empire_hero_id;
                self.store.human(id).await.map(Character::Human)
            }
            _ => {
                let id = &self.config.default_hero_id;
                self.store.droid(id).await.map(Character::Droid)
            }
        };

        hero.ok_or_else(|| {
            ResolveError::unresolved_type(format!(
                "hero for {} is not in the store",
                episode.map_or("the saga".to_string(), |e| e.to_string())
            ))
        })
    }

    /// Search every entity by name.
    #[instrument(skip(self))]
    pub async fn search(&self, text: &str) -> Vec<SearchResult> {
        search::search(self.store.as_ref(), text).await
    }

    /// Reviews of an episode, optionally only those posted strictly after `since`.
    pub async fn reviews(&self, episode: Episode, since: Option<DateTime<Utc>>) -> Vec<Review> {
        self.ledger.query(episode, since).await
    }

    /// Store a new review for an episode.
    ///
    /// The write cannot be cancelled other than by dropping the returned future.
    pub async fn create_review(
        &self,
        episode: Episode,
        input: ReviewInput,
    ) -> Result<Review, ResolveError> {
        self.ledger
            .append(episode, input, &CancellationToken::new())
            .await
    }

    /// Store a new review for an episode, abandoning the write if `cancel`
    /// fires while it is pending.
    pub async fn create_review_with_cancellation(
        &self,
        episode: Episode,
        input: ReviewInput,
        cancel: &CancellationToken,
    ) -> Result<Review, ResolveError> {
        self.ledger.append(episode, input, cancel).await
    }

    /// A character's friends, in stored order. References that no longer
    /// resolve yield `None`.
    pub async fn friends(&self, character: &Character) -> Vec<Option<Character>> {
        let mut friends = Vec::with_capacity(character.friends().len());
        for reference in character.friends() {
            friends.push(type_resolver::character_by_id(self.store.as_ref(), &reference.id).await);
        }
        friends
    }

    /// One page of a character's friends.
    ///
    /// # Returns
    ///
    /// * `Ok(FriendsConnection)` - The page
    /// * `Err(ResolveError::InvalidCursor)` - If `after` cannot be decoded
    #[instrument(skip(self, character), fields(character_id = %character.id()))]
    pub async fn friends_connection(
        &self,
        character: &Character,
        first: Option<usize>,
        after: Option<&str>,
    ) -> Result<FriendsConnection, ResolveError> {
        connection::resolve_friends_connection(
            self.store.as_ref(),
            character.friends(),
            first,
            after,
        )
        .await
    }

    /// The starships a human pilots. References that no longer resolve are
    /// skipped.
    pub async fn starships(&self, human: &Human) -> Vec<Starship> {
        let mut starships = Vec::with_capacity(human.starships.len());
        for reference in &human.starships {
            match self.store.starship(&reference.id).await {
                Some(starship) => starships.push(starship),
                None => debug!(human_id = %human.id, starship_id = %reference.id, "Skipping missing starship"),
            }
        }
        starships
    }

    /// A human's height in `unit` (`METER` or `FOOT`), meters when absent.
    ///
    /// # Returns
    ///
    /// * `Ok(f64)` - The converted height
    /// * `Err(ResolveError::InvalidUnit)` - If `unit` names no known unit
    pub fn height(&self, human: &Human, unit: Option<&str>) -> Result<f64, ResolveError> {
        convert_length(human.height, unit)
    }

    /// A starship's length in `unit` (`METER` or `FOOT`), meters when absent.
    ///
    /// # Returns
    ///
    /// * `Ok(f64)` - The converted length
    /// * `Err(ResolveError::InvalidUnit)` - If `unit` names no known unit
    pub fn length(&self, starship: &Starship, unit: Option<&str>) -> Result<f64, ResolveError> {
        convert_length(starship.length, unit)
    }

    /// Determine and confirm the concrete variant of a character.
    pub async fn resolve_character(&self, character: &Character) -> Result<EntityKind, ResolveError> {
        type_resolver::resolve_character(self.store.as_ref(), character).await
    }

    /// Determine and confirm the concrete variant of a search result.
    pub async fn resolve_search_result(
        &self,
        result: &SearchResult,
    ) -> Result<EntityKind, ResolveError> {
        type_resolver::resolve_search_result(self.store.as_ref(), result).await
    }
}
