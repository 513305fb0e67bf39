//! Error types for the Star Wars API server.

use thiserror::Error;

/// Errors that can occur while starting or running the server.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The HTTP server failed to bind or stopped with an error.
    #[error("Server error: {0}")]
    ServerError(String),

    /// Logging could not be initialized.
    #[error("Tracing error: {0}")]
    TracingError(String),
}

impl ApiError {
    /// Create a server error.
    pub fn server(msg: impl Into<String>) -> Self {
        Self::ServerError(msg.into())
    }

    /// Create a tracing error.
    pub fn tracing(msg: impl Into<String>) -> Self {
        Self::TracingError(msg.into())
    }
}

impl From<std::io::Error> for ApiError {
    fn from(err: std::io::Error) -> Self {
        Self::ServerError(err.to_string())
    }
}
