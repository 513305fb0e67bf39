//! Dependency initialization and wiring for the API server.

use std::sync::Arc;
use tracing::info;

use super::ServerConfig;
use crate::schema::{build_schema, StarWarsSchema};
use starwars_repository::memory::{seed, InMemoryStore};
use starwars_repository::{StarWarsService, StarWarsServiceConfig};

/// Container for all initialized dependencies.
pub struct Dependencies {
    /// The service the schema resolves against.
    pub service: Arc<StarWarsService>,
    /// The executable GraphQL schema.
    pub schema: StarWarsSchema,
}

impl Dependencies {
    /// Build the store, service and schema for `config`.
    ///
    /// The store is populated with the sample dataset.
    pub fn new(config: &ServerConfig) -> Self {
        let dataset = seed::starwars_dataset();
        info!(
            humans = dataset.humans.len(),
            droids = dataset.droids.len(),
            starships = dataset.starships.len(),
            review_write_delay_ms = config.review_write_delay.as_millis() as u64,
            "Initializing dependencies"
        );

        let store = Arc::new(InMemoryStore::from_dataset(dataset));
        let service_config = StarWarsServiceConfig::with_review_write_delay(config.review_write_delay);
        let service = Arc::new(StarWarsService::with_config(store, service_config));
        let schema = build_schema(service.clone());

        Self { service, schema }
    }
}
