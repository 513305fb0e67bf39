//! In-memory implementation of the entity store.
//!
//! This module provides a concrete implementation of `EntityStore` that keeps
//! every collection in process memory, plus the sample dataset the server is
//! seeded with.

pub mod seed;
mod store;

pub use seed::Dataset;
pub use store::InMemoryStore;
