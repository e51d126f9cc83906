//! Search index module
//!
//! This module contains:
//! - `tokenizer`: text normalization and stopword filtering
//! - `index`: inverted index store with incremental maintenance
//! - `staleness`: rebuild detection against an external record collection
//! - `shared`: cloneable handle to one index

mod index;
mod shared;
mod staleness;
pub mod tokenizer;

pub use index::{record_terms, InvertedIndex, PostingSet};
pub use shared::SharedIndex;
pub use staleness::StaleReason;
pub use tokenizer::{extract_index_terms, is_stopword, tokenize, tokenize_unique, STOPWORDS};
