//! Resolution error types.
//!
//! Lookups that find nothing are not errors: they return `None`. Everything
//! here aborts the single field being resolved.

use thiserror::Error;

/// Unified errors from resolution operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// The `after` cursor is not a validly encoded cursor.
    #[error("Invalid cursor: {0}")]
    InvalidCursor(String),

    /// A polymorphic value matches no known variant in the store.
    #[error("Unresolved type: {0}")]
    UnresolvedType(String),

    /// A unit argument outside the closed `LengthUnit` set.
    #[error("Invalid unit: {0}")]
    InvalidUnit(String),

    /// The review input was rejected.
    #[error("Invalid review: {0}")]
    InvalidReview(String),

    /// A pending review write was abandoned before it was stored.
    #[error("Review write cancelled")]
    Cancelled,
}

impl ResolveError {
    /// Create an invalid cursor error.
    pub fn invalid_cursor(msg: impl Into<String>) -> Self {
        Self::InvalidCursor(msg.into())
    }

    /// Create an unresolved type error.
    pub fn unresolved_type(msg: impl Into<String>) -> Self {
        Self::UnresolvedType(msg.into())
    }

    /// Create an invalid unit error.
    pub fn invalid_unit(msg: impl Into<String>) -> Self {
        Self::InvalidUnit(msg.into())
    }

    /// Create an invalid review error.
    pub fn invalid_review(msg: impl Into<String>) -> Self {
        Self::InvalidReview(msg.into())
    }
}
