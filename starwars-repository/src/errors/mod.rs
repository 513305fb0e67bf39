//! Error types for the Star Wars repository.
//!
//! This module provides a unified error type for all resolution operations.

mod resolve_error;

pub use resolve_error::ResolveError;
