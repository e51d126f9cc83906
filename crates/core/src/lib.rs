//! Core types for Sift
//!
//! This crate defines the foundational types used throughout the system:
//! - Record: the searchable unit (id, title, content, category, updated_at)
//! - Timestamp: microsecond timestamps for staleness checks
//! - Search types: SearchOptions, SearchHit, IndexMetadata, IndexStats, SearchStats
//! - SearchConfig: TOML-backed configuration
//! - SiftError: Error type

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod contract;
pub mod error;
pub mod search_types;

pub use config::{SearchConfig, DEFAULT_DEBOUNCE_MS};
pub use contract::{Record, Timestamp};
pub use error::{SiftError, SiftResult};
pub use search_types::{
    IndexMetadata, IndexStats, SearchHit, SearchOptions, SearchStats, DEFAULT_MAX_RESULTS,
    DEFAULT_MIN_RELEVANCE,
};
