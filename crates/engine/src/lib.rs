//! Index engine for Sift
//!
//! This crate owns everything that touches postings:
//! - Tokenizer and stopword filter
//! - InvertedIndex: term → record-id postings plus the record store
//! - Full rebuild, incremental add/update/remove, staleness detection
//! - SharedIndex: the handle collaborators pass around
//!
//! Query evaluation and the interactive front-end live in `sift-search`.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod search;

pub use search::{InvertedIndex, SharedIndex, StaleReason};
