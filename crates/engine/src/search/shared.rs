//! Shared index handle
//!
//! The composition root creates one `SharedIndex` and hands clones to every
//! collaborator that needs it. There is no process-wide global: tests create
//! their own handle or call `reset()` between cases.

use super::index::InvertedIndex;
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::sync::Arc;

/// Cloneable handle to a single `InvertedIndex`
///
/// Writers run to completion under the write guard, so readers never see a
/// partially updated store. Callers sharing a handle across threads still
/// serialize their logical sessions themselves.
#[derive(Debug, Clone, Default)]
pub struct SharedIndex {
    inner: Arc<RwLock<InvertedIndex>>,
}

impl SharedIndex {
    /// Create a handle to a new, empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an existing index
    pub fn from_index(index: InvertedIndex) -> Self {
        SharedIndex {
            inner: Arc::new(RwLock::new(index)),
        }
    }

    /// Acquire read access
    pub fn read(&self) -> RwLockReadGuard<'_, InvertedIndex> {
        self.inner.read()
    }

    /// Acquire write access
    pub fn write(&self) -> RwLockWriteGuard<'_, InvertedIndex> {
        self.inner.write()
    }

    /// Clear the index back to its initial state
    pub fn reset(&self) {
        self.inner.write().clear();
    }

    /// True if both handles point at the same index
    pub fn ptr_eq(&self, other: &SharedIndex) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}
