//! Tier 1: Tokenizer
//!
//! Normalization rules shared by indexing and querying.

use sift::{extract_index_terms, is_stopword, tokenize, tokenize_unique, STOPWORDS};

#[test]
fn tier1_lowercases_and_splits_on_punctuation() {
    assert_eq!(
        tokenize("Hello, World! It's 2024."),
        vec!["hello", "world", "it", "s", "2024"]
    );
}

#[test]
fn tier1_empty_and_whitespace_only() {
    assert!(tokenize("").is_empty());
    assert!(tokenize(" \t\n ").is_empty());
    assert!(tokenize("--- ... !!!").is_empty());
}

#[test]
fn tier1_keeps_non_latin_scripts() {
    assert_eq!(tokenize("Привет мир"), vec!["привет", "мир"]);
    assert_eq!(tokenize("東京 タワー"), vec!["東京", "タワー"]);
    assert_eq!(tokenize("مرحبا"), vec!["مرحبا"]);
}

#[test]
fn tier1_strips_emoji() {
    assert_eq!(tokenize("rust 🦀 crab"), vec!["rust", "crab"]);
}

#[test]
fn tier1_single_character_terms_survive() {
    assert_eq!(tokenize("x y z"), vec!["x", "y", "z"]);
    assert_eq!(extract_index_terms("x y z"), vec!["x", "y", "z"]);
}

#[test]
fn tier1_index_terms_drop_stopwords() {
    assert_eq!(
        extract_index_terms("The quick brown fox and the lazy dog"),
        vec!["quick", "brown", "fox", "lazy", "dog"]
    );
}

#[test]
fn tier1_stopword_list() {
    assert_eq!(STOPWORDS.len(), 33);
    for word in STOPWORDS {
        assert!(is_stopword(word));
        assert!(extract_index_terms(word).is_empty());
    }
    assert!(!is_stopword("rust"));
    // Stopwords are matched after lowercasing
    assert!(extract_index_terms("THE AND OF").is_empty());
}

#[test]
fn tier1_unique_preserves_first_seen_order() {
    assert_eq!(
        tokenize_unique("beta Alpha beta ALPHA gamma"),
        vec!["beta", "alpha", "gamma"]
    );
}

#[test]
fn tier1_tokenize_is_idempotent_on_its_output() {
    let once = tokenize("Mixed-CASE text_with under_scores");
    let joined = once.join(" ");
    assert_eq!(tokenize(&joined), once);
}
