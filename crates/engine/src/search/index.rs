//! In-memory inverted index over records
//!
//! This module provides:
//! - InvertedIndex: term → record-id postings plus the record store
//! - Full rebuild and incremental add/update/remove
//! - Build metadata and summary statistics
//! - Version watermark, bumped on every mutation
//!
//! # Invariants
//!
//! - Every id in any posting set exists in the record store
//! - Removing a record strips its id from every posting set; a posting set
//!   that becomes empty is deleted
//! - `term_count` equals the number of distinct terms in the store
//! - A record whose id already exists replaces the old one entirely
//!
//! # Ownership
//!
//! Every mutating operation takes `&mut self` and runs to completion, so no
//! caller can observe a half-updated store. Sharing across callers goes
//! through [`SharedIndex`](super::SharedIndex).

use super::tokenizer::extract_index_terms;
use rustc_hash::{FxHashMap, FxHashSet};
use sift_core::{IndexMetadata, IndexStats, Record, Timestamp};
use std::time::Instant;
use tracing::{debug, info};

/// Set of record ids containing one term
pub type PostingSet = FxHashSet<String>;

/// A stored record with the distinct terms it contributed
///
/// Keeping the term list makes removal proportional to the record's own
/// vocabulary instead of the whole index.
#[derive(Debug, Clone)]
struct IndexedRecord {
    record: Record,
    terms: Vec<String>,
}

/// Distinct index terms over title, content, and category
pub fn record_terms(record: &Record) -> Vec<String> {
    let mut seen = FxHashSet::default();
    let mut terms = Vec::new();
    for field in record.searchable_fields() {
        for term in extract_index_terms(field) {
            if seen.insert(term.clone()) {
                terms.push(term);
            }
        }
    }
    terms
}

// ============================================================================
// InvertedIndex
// ============================================================================

/// Inverted index for keyword search over a mutable record collection
#[derive(Debug, Default)]
pub struct InvertedIndex {
    /// Term -> record ids
    postings: FxHashMap<String, PostingSet>,

    /// Record id -> record and its terms
    records: FxHashMap<String, IndexedRecord>,

    /// Build metadata
    metadata: IndexMetadata,

    /// Version watermark
    version: u64,
}

impl InvertedIndex {
    /// Create an empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop every posting and record and reset metadata
    pub fn clear(&mut self) {
        self.postings.clear();
        self.records.clear();
        self.metadata = IndexMetadata::default();
        self.version += 1;
    }

    // ========================================================================
    // Building
    // ========================================================================

    /// Rebuild from scratch
    ///
    /// Clears the store, indexes every record, and stamps `last_built_at`.
    /// Duplicate ids resolve last-write-wins.
    ///
    /// The stamp is the later of the local clock and the newest `updated_at`
    /// in `records`, so a collection dated ahead of this machine is current
    /// right after its own build.
    pub fn build_index(&mut self, records: &[Record]) {
        let start = Instant::now();
        self.clear();

        let mut newest = Timestamp::EPOCH;
        for record in records {
            newest = newest.max(record.updated_at);
            self.insert(record.clone());
        }

        self.metadata.last_built_at = Timestamp::now().max(newest);
        self.refresh_counts();

        info!(
            records = self.metadata.record_count,
            terms = self.metadata.term_count,
            elapsed_us = start.elapsed().as_micros() as u64,
            "Rebuilt search index"
        );
    }

    /// Index a single record
    ///
    /// If the id is already indexed, the old record is removed first.
    pub fn add_record(&mut self, record: Record) {
        debug!(id = %record.id, "Indexing record");
        self.insert(record);
        self.refresh_counts();
    }

    /// Remove a record and all of its postings
    ///
    /// NOOP for unknown ids.
    pub fn remove_record(&mut self, id: &str) {
        if self.detach(id) {
            debug!(id, "Removed record from index");
            self.refresh_counts();
        }
    }

    /// Replace a record, re-tokenizing every field
    ///
    /// Equivalent to `remove_record` followed by `add_record`.
    pub fn update_record(&mut self, record: Record) {
        self.remove_record(&record.id);
        self.add_record(record);
    }

    fn insert(&mut self, record: Record) {
        self.detach(&record.id);

        let terms = record_terms(&record);
        for term in &terms {
            self.postings
                .entry(term.clone())
                .or_default()
                .insert(record.id.clone());
        }
        self.records
            .insert(record.id.clone(), IndexedRecord { record, terms });
    }

    fn detach(&mut self, id: &str) -> bool {
        let Some(indexed) = self.records.remove(id) else {
            return false;
        };
        for term in &indexed.terms {
            if let Some(set) = self.postings.get_mut(term) {
                set.remove(id);
                if set.is_empty() {
                    self.postings.remove(term);
                }
            }
        }
        true
    }

    fn refresh_counts(&mut self) {
        self.metadata.record_count = self.records.len();
        self.metadata.term_count = self.postings.len();
        self.version += 1;
    }

    // ========================================================================
    // Lookup
    // ========================================================================

    /// Record ids whose fields contain exactly `term`
    pub fn lookup(&self, term: &str) -> Option<&PostingSet> {
        self.postings.get(term)
    }

    /// Postings of every indexed term that has `prefix` as a strict prefix
    ///
    /// Scans the whole vocabulary. Vocabulary size is bounded by the quota on
    /// the record collection, which keeps this cheap at the target scale.
    pub fn prefix_matches(&self, prefix: &str) -> Vec<(&str, &PostingSet)> {
        self.postings
            .iter()
            .filter(|(term, _)| term.len() > prefix.len() && term.starts_with(prefix))
            .map(|(term, set)| (term.as_str(), set))
            .collect()
    }

    /// Every indexed term
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.postings.keys().map(String::as_str)
    }

    /// Stored record by id
    pub fn get(&self, id: &str) -> Option<&Record> {
        self.records.get(id).map(|r| &r.record)
    }

    /// Check if a record id is stored
    pub fn contains(&self, id: &str) -> bool {
        self.records.contains_key(id)
    }

    /// Every stored record, in no particular order
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.values().map(|r| &r.record)
    }

    /// Number of stored records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the store is empty
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    // ========================================================================
    // Statistics
    // ========================================================================

    /// Current version
    ///
    /// Changes whenever postings or records change. Readers cache derived
    /// results against it.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Build metadata
    pub fn metadata(&self) -> IndexMetadata {
        self.metadata
    }

    /// Index summary
    pub fn stats(&self) -> IndexStats {
        let total_terms: usize = self.records.values().map(|r| r.terms.len()).sum();
        let avg_terms_per_record = if self.records.is_empty() {
            0.0
        } else {
            total_terms as f32 / self.records.len() as f32
        };
        IndexStats {
            record_count: self.metadata.record_count,
            term_count: self.metadata.term_count,
            avg_terms_per_record,
            last_built_at: self.metadata.last_built_at,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
