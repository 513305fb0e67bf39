//! # Star Wars Repository
//!
//! This crate provides the resolution engine behind the Star Wars API: the
//! entity store abstraction and its in-memory implementation, opaque cursor
//! pagination, polymorphic type resolution, text search and the review
//! ledger, tied together by `StarWarsService`.

pub mod config;
pub mod connection;
pub mod cursor;
pub mod errors;
pub mod interfaces;
pub mod ledger;
pub mod memory;
pub mod search;
pub mod service;
pub mod type_resolver;
pub mod units;

pub use config::StarWarsServiceConfig;
pub use connection::{paginate, PageWindow};
pub use cursor::{decode_cursor, encode_cursor};
pub use errors::ResolveError;
pub use interfaces::{Clock, EntityStore, SystemClock};
pub use ledger::ReviewLedger;
pub use memory::InMemoryStore;
pub use service::StarWarsService;
pub use units::{convert_length, parse_unit};
