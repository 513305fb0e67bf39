//! # Star Wars Shared
//!
//! This crate defines the data model shared across the Star Wars resolution
//! engine: entities (humans, droids, starships), the polymorphic `Character`
//! and `SearchResult` values, reviews, and the pagination envelopes built by
//! the connection resolver.

pub mod types;

pub use types::connection::{FriendsConnection, FriendsEdge, PageInfo};
pub use types::entity::{Character, Droid, EntityKind, EntityRef, Human, SearchResult, Starship};
pub use types::episode::Episode;
pub use types::length_unit::{LengthUnit, FEET_PER_METER};
pub use types::review::{Review, ReviewInput};
