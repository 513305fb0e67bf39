//! # Star Wars API
//!
//! GraphQL server for the Star Wars resolution engine. Queries and mutations
//! are resolved by `starwars_repository::StarWarsService` over the sample
//! dataset and served over HTTP with axum.
//!
//! ## Modules
//!
//! - [`config`]: Server configuration and dependency initialization
//! - [`schema`]: GraphQL types, query and mutation roots
//! - [`server`]: HTTP routing and the serve loop
//! - [`errors`]: Error types for the server

pub mod config;
pub mod errors;
pub mod schema;
pub mod server;

pub use config::{Dependencies, LogFormat, ServerConfig};
pub use errors::ApiError;
pub use schema::{build_schema, StarWarsSchema};
pub use server::{create_app, run_server};
