//! HTTP server setup and routing.

pub mod handlers;

use async_graphql_axum::GraphQL;
use axum::http::{header, HeaderValue, Method};
use axum::{routing::get, Router};
use std::net::SocketAddr;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::errors::ApiError;
use crate::schema::StarWarsSchema;

/// Create the Axum application router with all routes and middleware.
///
/// `GET /` serves GraphiQL, `POST /` executes GraphQL requests and
/// `GET /health` reports liveness.
pub fn create_app(schema: StarWarsSchema) -> Router {
    Router::new()
        .route("/", get(handlers::graphiql).post_service(GraphQL::new(schema)))
        .route("/health", get(handlers::health_check))
        .layer(create_cors_layer())
}

/// Create CORS layer for localhost development.
pub fn create_cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin([
            HeaderValue::from_static("http://localhost:3000"),
            HeaderValue::from_static("http://localhost:5173"),
            HeaderValue::from_static("http://127.0.0.1:3000"),
            HeaderValue::from_static("http://127.0.0.1:5173"),
        ])
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}

/// Run the server on the specified address until ctrl-c.
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), ApiError> {
    info!("Server listening on {}", addr);
    info!("- GraphQL endpoint: http://{}/", addr);
    info!("- Health endpoint: http://{}/health", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| ApiError::server(format!("Failed to bind {}: {}", addr, e)))?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
