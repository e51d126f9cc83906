//! Query engine
//!
//! Turns a query string into ranked, filtered, capped hits against an
//! `InvertedIndex`:
//!
//! 1. Blank or term-less queries return nothing
//! 2. Each query term gathers candidates from its exact postings and from
//!    every indexed term it strictly prefixes
//! 3. Category filter
//! 4. Score each candidate
//! 5. Relevance floor, sort, truncate
//!
//! # Ordering
//!
//! Relevance descending, then `updated_at` descending, then `id` ascending.
//! The order is total, so equal-relevance results are deterministic.

use crate::scorer::{ParsedQuery, RelevanceScorer, Scorer};
use rustc_hash::FxHashMap;
use sift_core::{SearchHit, SearchOptions};
use sift_engine::InvertedIndex;
use std::cmp::Ordering;

/// Query evaluator over an inverted index
#[derive(Debug, Clone, Default)]
pub struct QueryEngine<S = RelevanceScorer> {
    scorer: S,
}

impl QueryEngine<RelevanceScorer> {
    /// Engine with the default relevance formula
    pub fn new() -> Self {
        QueryEngine {
            scorer: RelevanceScorer,
        }
    }
}

impl<S: Scorer> QueryEngine<S> {
    /// Engine with a custom scorer
    pub fn with_scorer(scorer: S) -> Self {
        QueryEngine { scorer }
    }

    /// The scorer in use
    pub fn scorer(&self) -> &S {
        &self.scorer
    }

    /// Run a query
    pub fn search(
        &self,
        index: &InvertedIndex,
        query: &str,
        options: &SearchOptions,
    ) -> Vec<SearchHit> {
        let Some(parsed) = ParsedQuery::parse(query) else {
            return Vec::new();
        };

        let candidates = gather_candidates(index, &parsed);

        let mut hits: Vec<SearchHit> = candidates
            .into_iter()
            .filter_map(|(id, matched)| {
                let record = index.get(id)?;
                if !options.accepts_category(record) {
                    return None;
                }
                let matched_terms: Vec<String> = parsed
                    .terms
                    .iter()
                    .zip(&matched)
                    .filter(|(_, hit)| **hit)
                    .map(|(term, _)| term.clone())
                    .collect();
                let breakdown = self.scorer.score(record, &parsed, matched_terms.len());
                if breakdown.relevance < options.min_relevance {
                    return None;
                }
                Some(SearchHit {
                    record: record.clone(),
                    relevance: breakdown.relevance,
                    matched_terms,
                })
            })
            .collect();

        hits.sort_by(compare_hits);
        hits.truncate(options.max_results);
        hits
    }
}

/// Record id -> which query terms (by position) reached it
fn gather_candidates<'a>(
    index: &'a InvertedIndex,
    query: &ParsedQuery,
) -> FxHashMap<&'a str, Vec<bool>> {
    let mut candidates: FxHashMap<&'a str, Vec<bool>> = FxHashMap::default();
    let width = query.terms.len();

    for (position, term) in query.terms.iter().enumerate() {
        let exact = index.lookup(term).into_iter();
        let prefixed = index.prefix_matches(term).into_iter().map(|(_, set)| set);
        for set in exact.chain(prefixed) {
            for id in set {
                candidates
                    .entry(id.as_str())
                    .or_insert_with(|| vec![false; width])[position] = true;
            }
        }
    }

    candidates
}

/// Total order used to rank hits
pub fn compare_hits(a: &SearchHit, b: &SearchHit) -> Ordering {
    b.relevance
        .total_cmp(&a.relevance)
        .then_with(|| b.record.updated_at.cmp(&a.record.updated_at))
        .then_with(|| a.record.id.cmp(&b.record.id))
}

/// Convenience: run a query with the default engine
pub fn search(index: &InvertedIndex, query: &str, options: &SearchOptions) -> Vec<SearchHit> {
    QueryEngine::new().search(index, query, options)
}

/// Extension trait adding `.search()` to the index
///
/// # Example
///
/// ```
/// use sift_core::{Record, SearchOptions};
/// use sift_engine::InvertedIndex;
/// use sift_search::IndexSearchExt;
///
/// let mut index = InvertedIndex::new();
/// index.build_index(&[Record::new("a", "Rust Guide", "ownership")]);
///
/// let hits = index.search("rust", &SearchOptions::default());
/// assert_eq!(hits.len(), 1);
/// ```
pub trait IndexSearchExt {
    /// Run a query with the default relevance formula
    fn search(&self, query: &str, options: &SearchOptions) -> Vec<SearchHit>;
}

impl IndexSearchExt for InvertedIndex {
    fn search(&self, query: &str, options: &SearchOptions) -> Vec<SearchHit> {
        search(self, query, options)
    }
}

// ============================================================================
// Tests
// ============================================================================
