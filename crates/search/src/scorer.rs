//! Relevance scoring
//!
//! This module provides:
//! - ParsedQuery: the normalized phrase and terms of one query
//! - Scorer trait for pluggable scoring
//! - ScoreBreakdown: every component of a score, for explainability
//! - RelevanceScorer: the fixed weighted formula
//!
//! # Formula
//!
//! ```text
//! score = 10·[title ⊇ phrase] + 5·[content ⊇ phrase]
//!       + 3·(matched / |terms|)
//!       + 2·#(terms ⊆ title) + 1·#(terms ⊆ content)
//!       + 1·[category ⊇ phrase]
//! relevance = min(score / (19 + 3·|terms|), 1)
//! ```
//!
//! The denominator is the largest score the formula can produce, so
//! relevance always lands in [0, 1]. Containment is case-insensitive
//! substring containment, so "java" counts inside "javascript".

use sift_core::Record;
use sift_engine::search::tokenize_unique;

const TITLE_PHRASE_WEIGHT: f32 = 10.0;
const CONTENT_PHRASE_WEIGHT: f32 = 5.0;
const COVERAGE_WEIGHT: f32 = 3.0;
const TITLE_TERM_WEIGHT: f32 = 2.0;
const CONTENT_TERM_WEIGHT: f32 = 1.0;
const CATEGORY_PHRASE_WEIGHT: f32 = 1.0;

// ============================================================================
// ParsedQuery
// ============================================================================

/// A query string split into its phrase and de-duplicated terms
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedQuery {
    /// Trimmed, lowercased query text
    pub phrase: String,

    /// Query terms in first-seen order
    pub terms: Vec<String>,
}

impl ParsedQuery {
    /// Parse a raw query
    ///
    /// Returns `None` for blank queries and for queries with no terms
    /// (e.g. pure punctuation).
    pub fn parse(query: &str) -> Option<Self> {
        let phrase = query.trim().to_lowercase();
        if phrase.is_empty() {
            return None;
        }
        let terms = tokenize_unique(&phrase);
        if terms.is_empty() {
            return None;
        }
        Some(ParsedQuery { phrase, terms })
    }

    /// Largest score the formula can assign to this query
    pub fn max_score(&self) -> f32 {
        TITLE_PHRASE_WEIGHT
            + CONTENT_PHRASE_WEIGHT
            + COVERAGE_WEIGHT
            + CATEGORY_PHRASE_WEIGHT
            + (TITLE_TERM_WEIGHT + CONTENT_TERM_WEIGHT) * self.terms.len() as f32
    }
}

// ============================================================================
// ScoreBreakdown
// ============================================================================

/// Every component of one record's score
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreBreakdown {
    /// Title contains the full phrase
    pub title_phrase: bool,
    /// Content contains the full phrase
    pub content_phrase: bool,
    /// Category contains the full phrase
    pub category_phrase: bool,
    /// Fraction of query terms that reached the record through postings
    pub coverage: f32,
    /// Query terms found inside the title
    pub title_term_hits: usize,
    /// Query terms found inside the content
    pub content_term_hits: usize,
    /// Weighted sum before normalization
    pub raw: f32,
    /// Normalized score in [0, 1]
    pub relevance: f32,
}

// ============================================================================
// Scorer Trait
// ============================================================================

/// Pluggable scoring interface
///
/// `matched_terms` is how many query terms reached the record through exact
/// or prefix postings. Implementations must be deterministic and keep
/// `relevance` within [0, 1].
pub trait Scorer: Send + Sync {
    /// Score a record against a parsed query
    fn score(&self, record: &Record, query: &ParsedQuery, matched_terms: usize) -> ScoreBreakdown;

    /// Name for debugging and logging
    fn name(&self) -> &str;
}

// ============================================================================
// RelevanceScorer
// ============================================================================

/// The fixed weighted formula described in the module docs
#[derive(Debug, Clone, Copy, Default)]
pub struct RelevanceScorer;

impl Scorer for RelevanceScorer {
    fn score(
        &self,
        record: &Record,
        query: &ParsedQuery,
        matched_terms: usize,
    ) -> ScoreBreakdown {
        let title = record.title.to_lowercase();
        let content = record.content.to_lowercase();
        let category = record.category.to_lowercase();

        let title_phrase = title.contains(&query.phrase);
        let content_phrase = content.contains(&query.phrase);
        let category_phrase = category.contains(&query.phrase);

        let coverage = if query.terms.is_empty() {
            0.0
        } else {
            matched_terms.min(query.terms.len()) as f32 / query.terms.len() as f32
        };

        let title_term_hits = query
            .terms
            .iter()
            .filter(|t| title.contains(t.as_str()))
            .count();
        let content_term_hits = query
            .terms
            .iter()
            .filter(|t| content.contains(t.as_str()))
            .count();

        let mut raw = 0.0;
        if title_phrase {
            raw += TITLE_PHRASE_WEIGHT;
        }
        if content_phrase {
            raw += CONTENT_PHRASE_WEIGHT;
        }
        raw += COVERAGE_WEIGHT * coverage;
        raw += TITLE_TERM_WEIGHT * title_term_hits as f32;
        raw += CONTENT_TERM_WEIGHT * content_term_hits as f32;
        if category_phrase {
            raw += CATEGORY_PHRASE_WEIGHT;
        }

        let relevance = (raw / query.max_score()).clamp(0.0, 1.0);

        ScoreBreakdown {
            title_phrase,
            content_phrase,
            category_phrase,
            coverage,
            title_term_hits,
            content_term_hits,
            raw,
            relevance,
        }
    }

    fn name(&self) -> &str {
        "weighted-phrase"
    }
}

// ============================================================================
// Tests
// ============================================================================
