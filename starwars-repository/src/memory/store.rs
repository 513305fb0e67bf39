//! In-memory store implementation.

use async_trait::async_trait;
use starwars_shared::{Droid, EntityKind, Episode, Human, Review, Starship};
use std::collections::{BTreeMap, HashMap};
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::interfaces::EntityStore;
use crate::memory::seed::Dataset;

#[derive(Debug, Default)]
struct Collections {
    humans: BTreeMap<String, Human>,
    droids: BTreeMap<String, Droid>,
    starships: BTreeMap<String, Starship>,
    reviews: HashMap<Episode, Vec<Review>>,
}

/// Entity store holding every collection behind a single reader-writer lock.
///
/// Reads (lookups, listings, review queries) share the lock; inserts and
/// review appends take it exclusively. Collections iterate in ascending id
/// order.
///
/// # Example
///
/// ```
/// use starwars_repository::memory::{seed, InMemoryStore};
/// use starwars_repository::EntityStore;
///
/// # async fn example() {
/// let store = InMemoryStore::from_dataset(seed::starwars_dataset());
/// let r2 = store.droid("2001").await;
/// assert_eq!(r2.map(|droid| droid.name), Some("R2-D2".to_string()));
/// # }
/// ```
#[derive(Debug, Default)]
pub struct InMemoryStore {
    collections: RwLock<Collections>,
}

impl InMemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the entities of `dataset` and no reviews.
    pub fn from_dataset(dataset: Dataset) -> Self {
        let mut collections = Collections::default();
        for human in dataset.humans {
            collections.humans.insert(human.id.clone(), human);
        }
        for droid in dataset.droids {
            collections.droids.insert(droid.id.clone(), droid);
        }
        for starship in dataset.starships {
            collections.starships.insert(starship.id.clone(), starship);
        }

        info!(
            humans = collections.humans.len(),
            droids = collections.droids.len(),
            starships = collections.starships.len(),
            "Created in-memory entity store"
        );

        Self {
            collections: RwLock::new(collections),
        }
    }

    /// Insert or replace a human.
    pub async fn insert_human(&self, human: Human) {
        debug!(id = %human.id, "Inserting human");
        self.collections
            .write()
            .await
            .humans
            .insert(human.id.clone(), human);
    }

    /// Insert or replace a droid.
    pub async fn insert_droid(&self, droid: Droid) {
        debug!(id = %droid.id, "Inserting droid");
        self.collections
            .write()
            .await
            .droids
            .insert(droid.id.clone(), droid);
    }

    /// Insert or replace a starship.
    pub async fn insert_starship(&self, starship: Starship) {
        debug!(id = %starship.id, "Inserting starship");
        self.collections
            .write()
            .await
            .starships
            .insert(starship.id.clone(), starship);
    }
}

#[async_trait]
impl EntityStore for InMemoryStore {
    async fn human(&self, id: &str) -> Option<Human> {
        self.collections.read().await.humans.get(id).cloned()
    }

    async fn droid(&self, id: &str) -> Option<Droid> {
        self.collections.read().await.droids.get(id).cloned()
    }

    async fn starship(&self, id: &str) -> Option<Starship> {
        self.collections.read().await.starships.get(id).cloned()
    }

    async fn humans(&self) -> Vec<Human> {
        self.collections.read().await.humans.values().cloned().collect()
    }

    async fn droids(&self) -> Vec<Droid> {
        self.collections.read().await.droids.values().cloned().collect()
    }

    async fn starships(&self) -> Vec<Starship> {
        self.collections
            .read()
            .await
            .starships
            .values()
            .cloned()
            .collect()
    }

    async fn append_review(&self, episode: Episode, review: Review) {
        let mut collections = self.collections.write().await;
        let log = collections.reviews.entry(episode).or_default();
        log.push(review);
        debug!(episode = %episode, log_len = log.len(), "Appended review");
    }

    async fn reviews(&self, episode: Episode) -> Vec<Review> {
        self.collections
            .read()
            .await
            .reviews
            .get(&episode)
            .cloned()
            .unwrap_or_default()
    }

    async fn contains(&self, kind: EntityKind, id: &str) -> bool {
        let collections = self.collections.read().await;
        match kind {
            EntityKind::Human => collections.humans.contains_key(id),
            EntityKind::Droid => collections.droids.contains_key(id),
            EntityKind::Starship => collections.starships.contains_key(id),
        }
    }
}
