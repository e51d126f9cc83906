//! Interactive search session
//!
//! `SearchSession` is the debounced front-end over a shared index:
//! - query input flows through a `Debouncer`, so only settled values run
//! - a new record collection (by identity) triggers a staleness check and,
//!   if needed, a rebuild before the next query runs
//! - results and statistics come from one pure computation over
//!   (records, committed query, options), memoized on that tuple and
//!   published only once the computation has finished
//!
//! ```ignore
//! let index = SharedIndex::new();
//! let mut session = SearchSession::new(index.clone(), &SearchConfig::default());
//! session.set_records(records);
//! session.set_query("rust");
//! session.settle().await;
//! for hit in session.results() { ... }
//! ```

use crate::debounce::Debouncer;
use crate::query::QueryEngine;
use sift_core::{Record, SearchConfig, SearchHit, SearchOptions, SearchStats};
use sift_engine::{InvertedIndex, SharedIndex, StaleReason};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{info, trace};

/// Results plus the statistics of the computation that produced them
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchOutcome {
    /// Ranked hits
    pub hits: Vec<SearchHit>,
    /// Timing and indexing statistics
    pub stats: SearchStats,
}

/// Run one search computation
///
/// Blank queries list every record passing the category filter, newest
/// first, without touching the index. Everything else goes through the
/// query engine.
pub fn compute(
    engine: &QueryEngine,
    index: &InvertedIndex,
    records: &[Record],
    query: &str,
    options: &SearchOptions,
) -> SearchOutcome {
    let start = Instant::now();

    let (hits, is_indexed) = if query.trim().is_empty() {
        (list_records(records, options), false)
    } else {
        (engine.search(index, query, options), true)
    };

    let stats = SearchStats {
        result_count: hits.len(),
        search_time_ms: start.elapsed().as_secs_f64() * 1_000.0,
        is_indexed,
        record_count: records.len(),
    };
    SearchOutcome { hits, stats }
}

fn list_records(records: &[Record], options: &SearchOptions) -> Vec<SearchHit> {
    let mut listed: Vec<&Record> = records
        .iter()
        .filter(|r| options.accepts_category(r))
        .collect();
    listed.sort_by(|a, b| b.updated_at.cmp(&a.updated_at).then_with(|| a.id.cmp(&b.id)));
    listed
        .into_iter()
        .map(|record| SearchHit {
            record: record.clone(),
            relevance: 0.0,
            matched_terms: Vec::new(),
        })
        .collect()
}

/// Inputs a published outcome was computed from
struct MemoKey {
    records: Arc<[Record]>,
    index_version: u64,
    query: String,
    options: SearchOptions,
}

impl MemoKey {
    fn matches(
        &self,
        records: &Arc<[Record]>,
        index_version: u64,
        query: &str,
        options: &SearchOptions,
    ) -> bool {
        Arc::ptr_eq(&self.records, records)
            && self.index_version == index_version
            && self.query == query
            && self.options == *options
    }
}

/// Debounced query session over a shared index
pub struct SearchSession {
    index: SharedIndex,
    engine: QueryEngine,
    query: Debouncer<String>,
    records: Arc<[Record]>,
    options: SearchOptions,
    memo: Option<MemoKey>,
    outcome: SearchOutcome,
}

impl SearchSession {
    /// Create a session using the configured delay and result options
    pub fn new(index: SharedIndex, config: &SearchConfig) -> Self {
        Self::with_options(index, config.debounce_delay(), config.search_options())
    }

    /// Create a session with explicit delay and options
    pub fn with_options(index: SharedIndex, delay: Duration, options: SearchOptions) -> Self {
        SearchSession {
            index,
            engine: QueryEngine::new(),
            query: Debouncer::new(String::new(), delay),
            records: Arc::from(Vec::new()),
            options,
            memo: None,
            outcome: SearchOutcome::default(),
        }
    }

    // ========================================================================
    // Inputs
    // ========================================================================

    /// Feed a new raw query value
    ///
    /// Must be called from within a Tokio runtime.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query.set(query.into());
    }

    /// Hand over the current record collection
    ///
    /// A collection with a new identity is checked for staleness and the
    /// index rebuilt when needed. Passing the same `Arc` again is free.
    pub fn set_records(&mut self, records: impl Into<Arc<[Record]>>) -> Option<StaleReason> {
        let records = records.into();
        if Arc::ptr_eq(&self.records, &records) {
            return None;
        }
        self.records = records;
        let reason = self.index.write().rebuild_if_stale(&self.records);
        if let Some(reason) = reason {
            info!(
                %reason,
                records = self.records.len(),
                "Rebuilt index for new record collection"
            );
        }
        reason
    }

    /// Replace result options
    pub fn set_options(&mut self, options: SearchOptions) {
        self.options = options;
    }

    // ========================================================================
    // Evaluation
    // ========================================================================

    /// Wait for the pending query to commit, then recompute
    pub async fn settle(&mut self) -> &[SearchHit] {
        self.query.settled().await;
        self.recompute()
    }

    /// Recompute against the committed query and publish the outcome
    ///
    /// Skips the computation when none of its inputs changed.
    pub fn recompute(&mut self) -> &[SearchHit] {
        let query = self.query.value();
        let index = self.index.read();

        let fresh = self
            .memo
            .as_ref()
            .map(|memo| memo.matches(&self.records, index.version(), &query, &self.options))
            .unwrap_or(false);
        if fresh {
            trace!(query = %query, "Search memo hit");
            drop(index);
            return &self.outcome.hits;
        }

        let outcome = compute(&self.engine, &index, &self.records, &query, &self.options);
        let key = MemoKey {
            records: Arc::clone(&self.records),
            index_version: index.version(),
            query,
            options: self.options.clone(),
        };
        drop(index);

        trace!(
            results = outcome.stats.result_count,
            elapsed_ms = outcome.stats.search_time_ms,
            "Search recomputed"
        );
        self.memo = Some(key);
        self.outcome = outcome;
        &self.outcome.hits
    }

    // ========================================================================
    // Outputs
    // ========================================================================

    /// Committed query value
    pub fn query(&self) -> String {
        self.query.value()
    }

    /// True while the query is still settling
    pub fn is_debouncing(&self) -> bool {
        self.query.is_pending()
    }

    /// Last published results
    pub fn results(&self) -> &[SearchHit] {
        &self.outcome.hits
    }

    /// Last published statistics
    pub fn stats(&self) -> SearchStats {
        self.outcome.stats
    }

    /// Current options
    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    /// The shared index this session reads
    pub fn index(&self) -> &SharedIndex {
        &self.index
    }
}
