//! Star Wars API Main Entry Point
//!
//! Serves the Star Wars GraphQL schema over HTTP, backed by the in-memory
//! sample dataset.

use dotenv::dotenv;
use starwars_api::{create_app, run_server, ApiError, Dependencies, LogFormat, ServerConfig};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize tracing/logging.
fn init_tracing(format: LogFormat) -> Result<(), ApiError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("starwars_api=info,starwars_repository=info"));

    match format {
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_target(true)
                        .with_thread_ids(true),
                )
                .try_init()
                .map_err(|e| ApiError::tracing(e.to_string()))?;

            info!(
                service_name = "starwars-api",
                service_version = env!("CARGO_PKG_VERSION"),
                "Tracing initialized with JSON format"
            );
        }
        LogFormat::Pretty => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_target(true).pretty())
                .try_init()
                .map_err(|e| ApiError::tracing(e.to_string()))?;

            info!(
                service_name = "starwars-api",
                service_version = env!("CARGO_PKG_VERSION"),
                "Tracing initialized with console output"
            );
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), ApiError> {
    // Load environment variables from .env file
    dotenv().ok();

    let config = ServerConfig::from_env();
    init_tracing(config.log_format)?;

    info!(
        addr = %config.socket_addr(),
        review_write_delay_ms = config.review_write_delay.as_millis() as u64,
        log_format = ?config.log_format,
        "Starting Star Wars API"
    );

    let deps = Dependencies::new(&config);
    let app = create_app(deps.schema);

    match run_server(app, config.socket_addr()).await {
        Ok(()) => Ok(()),
        Err(e) => {
            error!(error = %e, "Star Wars API failed");
            Err(e)
        }
    }
}
