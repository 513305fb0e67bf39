//! HTTP request handlers.

use async_graphql::http::GraphiQLSource;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse},
};

/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "Star Wars API is running")
}

/// GraphiQL IDE pointed at the GraphQL endpoint.
pub async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint("/").finish())
}
