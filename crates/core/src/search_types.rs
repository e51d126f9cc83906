//! Core search types
//!
//! This module defines the types exchanged between the index, the query
//! engine, and the interactive front-end:
//! - SearchOptions: result cap, relevance floor, category filter
//! - SearchHit: a ranked record with its relevance and matched terms
//! - IndexMetadata: what the index remembers about its last build
//! - IndexStats: summary returned by `stats()`
//! - SearchStats: timing and indexing statistics published per query

use crate::contract::{Record, Timestamp};

// ============================================================================
// SearchOptions
// ============================================================================

/// Limits and filters applied to a single search
///
/// # Default Values
///
/// - max_results: 50
/// - min_relevance: 0.0
/// - category_filter: None
///
/// # Examples
///
/// ```
/// use sift_core::SearchOptions;
///
/// let options = SearchOptions::default()
///     .with_max_results(10)
///     .with_min_relevance(0.25)
///     .with_category("work");
///
/// assert_eq!(options.max_results, 10);
/// assert_eq!(options.category_filter.as_deref(), Some("work"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOptions {
    /// Maximum results to return
    pub max_results: usize,

    /// Results with relevance below this floor are dropped (inclusive floor)
    pub min_relevance: f32,

    /// Optional: exact category match
    pub category_filter: Option<String>,
}

/// Default result cap
pub const DEFAULT_MAX_RESULTS: usize = 50;

/// Default relevance floor
pub const DEFAULT_MIN_RELEVANCE: f32 = 0.0;

impl Default for SearchOptions {
    fn default() -> Self {
        SearchOptions {
            max_results: DEFAULT_MAX_RESULTS,
            min_relevance: DEFAULT_MIN_RELEVANCE,
            category_filter: None,
        }
    }
}

impl SearchOptions {
    /// Builder: set result cap
    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    /// Builder: set relevance floor
    pub fn with_min_relevance(mut self, min_relevance: f32) -> Self {
        self.min_relevance = min_relevance;
        self
    }

    /// Builder: restrict results to one category
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category_filter = Some(category.into());
        self
    }

    /// True if `record` passes the category filter
    pub fn accepts_category(&self, record: &Record) -> bool {
        match &self.category_filter {
            Some(category) => record.category == *category,
            None => true,
        }
    }
}

// ============================================================================
// SearchHit
// ============================================================================

/// A ranked search result
#[derive(Debug, Clone, PartialEq)]
pub struct SearchHit {
    /// Snapshot of the matching record
    pub record: Record,

    /// Normalized relevance in [0, 1]
    pub relevance: f32,

    /// Query terms that reached this record through exact or prefix postings,
    /// in query order
    pub matched_terms: Vec<String>,
}

// ============================================================================
// Index metadata & stats
// ============================================================================

/// Build metadata kept alongside the postings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IndexMetadata {
    /// When the last full build ran
    pub last_built_at: Timestamp,

    /// Records in the store
    pub record_count: usize,

    /// Distinct terms in the store
    pub term_count: usize,
}

/// Index summary
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct IndexStats {
    /// Records in the store
    pub record_count: usize,

    /// Distinct terms in the store
    pub term_count: usize,

    /// Mean number of distinct index terms per record (0 when empty)
    pub avg_terms_per_record: f32,

    /// When the last full build ran
    pub last_built_at: Timestamp,
}

/// Statistics published by the interactive front-end after each computation
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SearchStats {
    /// Number of results published
    pub result_count: usize,

    /// Wall time of the computation in milliseconds
    pub search_time_ms: f64,

    /// Whether the inverted index answered the query
    ///
    /// False for the empty-query listing path.
    pub is_indexed: bool,

    /// Size of the record collection the computation ran against
    pub record_count: usize,
}
