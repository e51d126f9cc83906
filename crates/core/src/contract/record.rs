//! The searchable record
//!
//! A record is identified by `id`; every other field is mutable content.
//! Title, content, and category all feed the same postings.

use super::timestamp::Timestamp;
use serde::{Deserialize, Serialize};

/// A short text record supplied by the record source
///
/// Callers treat records handed back from the index as immutable snapshots.
/// Edits go through `update_record` so postings stay in step with content.
///
/// Deserialization accepts `updated_at` in microseconds or the record
/// source's camelCase `updatedAt` in milliseconds. Serialization always
/// writes `updated_at` in microseconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RecordRepr")]
pub struct Record {
    /// Unique identity
    pub id: String,
    /// Title text
    pub title: String,
    /// Body text
    pub content: String,
    /// Category label (exact-match filter target)
    #[serde(default)]
    pub category: String,
    /// Last modification time
    #[serde(default)]
    pub updated_at: Timestamp,
}

/// Wire shape accepted from the record source
#[derive(Deserialize)]
struct RecordRepr {
    id: String,
    title: String,
    content: String,
    #[serde(default)]
    category: String,
    #[serde(default)]
    updated_at: Option<Timestamp>,
    /// Milliseconds since epoch
    #[serde(default, rename = "updatedAt")]
    updated_at_ms: Option<u64>,
}

impl From<RecordRepr> for Record {
    fn from(repr: RecordRepr) -> Self {
        let updated_at = repr
            .updated_at
            .or_else(|| repr.updated_at_ms.map(Timestamp::from_millis))
            .unwrap_or_default();
        Record {
            id: repr.id,
            title: repr.title,
            content: repr.content,
            category: repr.category,
            updated_at,
        }
    }
}

impl Record {
    /// Create a record with empty category and epoch timestamp
    pub fn new(id: impl Into<String>, title: impl Into<String>, content: impl Into<String>) -> Self {
        Record {
            id: id.into(),
            title: title.into(),
            content: content.into(),
            category: String::new(),
            updated_at: Timestamp::EPOCH,
        }
    }

    /// Builder: set category
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Builder: set last modification time
    pub fn with_updated_at(mut self, updated_at: Timestamp) -> Self {
        self.updated_at = updated_at;
        self
    }

    /// The three searchable fields, in indexing order
    pub fn searchable_fields(&self) -> [&str; 3] {
        [&self.title, &self.content, &self.category]
    }

    /// True if title, content, or category differ from `other`
    ///
    /// Ignores `id` and `updated_at`.
    pub fn content_differs(&self, other: &Record) -> bool {
        self.title != other.title || self.content != other.content || self.category != other.category
    }
}
