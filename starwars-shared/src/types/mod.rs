//! This module defines the core data structures used across the engine.
//! It re-exports the entity, episode, review and pagination types.

pub mod connection;
pub mod entity;
pub mod episode;
pub mod length_unit;
pub mod review;

pub use connection::{FriendsConnection, FriendsEdge, PageInfo};
pub use entity::{Character, Droid, EntityKind, EntityRef, Human, SearchResult, Starship};
pub use episode::Episode;
pub use length_unit::LengthUnit;
pub use review::{Review, ReviewInput};
