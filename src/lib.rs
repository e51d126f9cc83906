//! Sift - in-memory inverted-index search for small, mutable record sets
//!
//! Sift indexes short text records (title, content, category), answers
//! freeform queries with prefix matching, category filtering and a bounded
//! relevance score, and keeps the index honest when the record collection
//! changes out of band, including restores that move timestamps backward.
//!
//! # Quick Start
//!
//! ```
//! use sift::{IndexSearchExt, Record, SearchOptions, SharedIndex};
//!
//! let index = SharedIndex::new();
//! let records = vec![
//!     Record::new("a", "JavaScript Tutorial", "Learn JavaScript basics"),
//!     Record::new("b", "Python Guide", "programming guide"),
//! ];
//! index.write().build_index(&records);
//!
//! assert!(!index.read().needs_rebuild(&records));
//! let hits = index.read().search("java", &SearchOptions::default());
//! assert_eq!(hits[0].record.id, "a");
//! ```
//!
//! # Architecture
//!
//! - `sift-core`: records, timestamps, search types, configuration, errors
//! - `sift-engine`: tokenizer, inverted index, staleness detection
//! - `sift-search`: relevance scoring, query engine, debounced sessions

pub use sift_core::{
    IndexMetadata, IndexStats, Record, SearchConfig, SearchHit, SearchOptions, SearchStats,
    SiftError, SiftResult, Timestamp,
};
pub use sift_engine::search::{
    extract_index_terms, is_stopword, tokenize, tokenize_unique, STOPWORDS,
};
pub use sift_engine::{InvertedIndex, SharedIndex, StaleReason};
pub use sift_search::{
    Debouncer, IndexSearchExt, ParsedQuery, QueryEngine, RelevanceScorer, Scorer, SearchOutcome,
    SearchSession,
};
