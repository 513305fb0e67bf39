//! Interface definitions for the engine's collaborators.
//!
//! This module defines the abstract `EntityStore` and `Clock` traits that allow
//! for dependency injection and deterministic testing.

mod clock;
mod entity_store;

pub use clock::{Clock, SystemClock};
pub use entity_store::EntityStore;
