//! Query evaluation and the interactive front-end for Sift
//!
//! This crate provides:
//! - Scorer trait and the fixed RelevanceScorer formula
//! - QueryEngine: prefix-aware candidate gathering, filtering, ranking
//! - IndexSearchExt extension trait for `index.search()`
//! - Debouncer: cancellable, last-write-wins value commits
//! - SearchSession: debounced query session over a shared index
//!
//! # Usage
//!
//! ```
//! use sift_core::{Record, SearchOptions};
//! use sift_engine::InvertedIndex;
//! use sift_search::IndexSearchExt;
//!
//! let mut index = InvertedIndex::new();
//! index.build_index(&[
//!     Record::new("a", "JavaScript Tutorial", "Learn JavaScript basics"),
//!     Record::new("b", "Python Guide", "programming guide"),
//! ]);
//!
//! let hits = index.search("java", &SearchOptions::default());
//! assert_eq!(hits[0].record.id, "a");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod debounce;
pub mod query;
pub mod scorer;
pub mod session;

pub use debounce::Debouncer;
pub use query::{compare_hits, search, IndexSearchExt, QueryEngine};
pub use scorer::{ParsedQuery, RelevanceScorer, ScoreBreakdown, Scorer};
pub use session::{compute, SearchOutcome, SearchSession};
