//! GraphQL schema of the Star Wars API.

mod mutation;
mod query;
pub mod types;

pub use mutation::MutationRoot;
pub use query::QueryRoot;

use async_graphql::{Context, EmptySubscription, Result, Schema};
use starwars_repository::StarWarsService;
use std::sync::Arc;

/// The executable schema served by the API.
pub type StarWarsSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the schema, resolving every field against `service`.
pub fn build_schema(service: Arc<StarWarsService>) -> StarWarsSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(service)
        .finish()
}

/// The service registered with the schema.
pub(crate) fn service<'ctx>(ctx: &Context<'ctx>) -> Result<&'ctx StarWarsService> {
    ctx.data::<Arc<StarWarsService>>().map(|service| service.as_ref())
}
