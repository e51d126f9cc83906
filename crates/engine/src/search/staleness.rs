//! Staleness detection
//!
//! Decides whether the index still reflects a record collection handed in by
//! the record source. No diff feed exists; the only reference is what the
//! index itself remembers about its last build.
//!
//! Checks run in a fixed order and stop at the first hit:
//!
//! 1. Record count differs from `record_count`
//! 2. Some `updated_at` is newer than `last_built_at`
//! 3. The id set differs from the stored id set
//! 4. A record present on both sides has different title/content/category
//!
//! Checks 1 and 2 are cheap filters. Check 3 catches same-count swaps.
//! Check 4 compares content directly and is the only one that still works
//! when timestamps move backward, e.g. after restoring an older backup.

use super::index::InvertedIndex;
use rustc_hash::FxHashSet;
use sift_core::Record;
use std::fmt;
use tracing::debug;

/// Which staleness check fired
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StaleReason {
    /// Collection size differs from the indexed record count
    CountDrift,
    /// A record was edited after the last build
    NewerRecord,
    /// Same size, different ids (or duplicate ids in the collection)
    IdSetChanged,
    /// Same id, different searchable content
    ContentChanged,
}

impl fmt::Display for StaleReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            StaleReason::CountDrift => "count drift",
            StaleReason::NewerRecord => "newer record",
            StaleReason::IdSetChanged => "id set changed",
            StaleReason::ContentChanged => "content changed",
        };
        f.write_str(s)
    }
}

impl InvertedIndex {
    /// First staleness check that fires for `current`, if any
    pub fn staleness(&self, current: &[Record]) -> Option<StaleReason> {
        let metadata = self.metadata();

        if current.len() != metadata.record_count {
            return Some(StaleReason::CountDrift);
        }

        if current
            .iter()
            .any(|r| r.updated_at.is_after(metadata.last_built_at))
        {
            return Some(StaleReason::NewerRecord);
        }

        let ids: FxHashSet<&str> = current.iter().map(|r| r.id.as_str()).collect();
        if ids.len() != current.len()
            || ids.len() != self.len()
            || ids.iter().any(|id| !self.contains(id))
        {
            return Some(StaleReason::IdSetChanged);
        }

        let content_changed = current.iter().any(|r| {
            self.get(&r.id)
                .map(|stored| stored.content_differs(r))
                .unwrap_or(true)
        });
        if content_changed {
            return Some(StaleReason::ContentChanged);
        }

        None
    }

    /// True if the index no longer reflects `current`
    pub fn needs_rebuild(&self, current: &[Record]) -> bool {
        self.staleness(current).is_some()
    }

    /// Rebuild from `current` if stale; returns the reason when it rebuilt
    pub fn rebuild_if_stale(&mut self, current: &[Record]) -> Option<StaleReason> {
        let reason = self.staleness(current);
        match reason {
            Some(reason) => {
                debug!(%reason, records = current.len(), "Search index is stale");
                self.build_index(current);
            }
            None => debug!(records = current.len(), "Search index is current"),
        }
        reason
    }
}
