//! Text tokenizer for search operations
//!
//! Pipeline: lowercase → non-letter/non-number → separator → split on
//!           whitespace → drop empties. Index terms additionally drop stopwords.
//!
//! Letters and numbers are decided per Unicode, so CJK, Cyrillic, Arabic and
//! other scripts survive while punctuation and emoji are stripped. Single
//! character terms are kept; CJK text is often nothing but.

use rustc_hash::FxHashSet;

/// Common English function words.
///
/// Never indexed, so a query consisting only of these finds nothing.
pub const STOPWORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "but", "by", "for", "if", "in", "into", "is", "it",
    "no", "not", "of", "on", "or", "such", "that", "the", "their", "then", "there", "these",
    "they", "this", "to", "was", "will", "with",
];

/// Check if a token is a stopword.
#[inline]
pub fn is_stopword(token: &str) -> bool {
    // Linear scan is fast for ~33 entries.
    STOPWORDS.contains(&token)
}

/// Tokenize text into normalized terms.
///
/// # Example
///
/// ```
/// use sift_engine::search::tokenizer::tokenize;
///
/// let tokens = tokenize("Hello, Wörld! 東京");
/// assert_eq!(tokens, vec!["hello", "wörld", "東京"]);
/// ```
pub fn tokenize(text: &str) -> Vec<String> {
    let normalized: String = text
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect();
    normalized.split_whitespace().map(String::from).collect()
}

/// Tokenize and deduplicate, preserving first-seen order.
///
/// # Example
///
/// ```
/// use sift_engine::search::tokenizer::tokenize_unique;
///
/// let tokens = tokenize_unique("go Go GO stop");
/// assert_eq!(tokens, vec!["go", "stop"]);
/// ```
pub fn tokenize_unique(text: &str) -> Vec<String> {
    let mut seen = FxHashSet::default();
    tokenize(text)
        .into_iter()
        .filter(|t| seen.insert(t.clone()))
        .collect()
}

/// Terms that enter the inverted index: `tokenize` minus stopwords.
///
/// # Example
///
/// ```
/// use sift_engine::search::tokenizer::extract_index_terms;
///
/// let terms = extract_index_terms("The quick brown fox");
/// assert_eq!(terms, vec!["quick", "brown", "fox"]);
/// ```
pub fn extract_index_terms(text: &str) -> Vec<String> {
    tokenize(text)
        .into_iter()
        .filter(|t| !is_stopword(t))
        .collect()
}
