//! Error types for sift
//!
//! Indexing and querying never fail on well-typed input: empty queries,
//! punctuation-only text, and unknown ids are ordinary empty or no-op cases.
//! The only fallible surface is configuration.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.

use thiserror::Error;

/// Result type alias for sift operations
pub type SiftResult<T> = std::result::Result<T, SiftError>;

/// Error types for sift
#[derive(Debug, Error)]
pub enum SiftError {
    /// Configuration parsed but holds an out-of-range value
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration text is not valid TOML for `SearchConfig`
    #[error("Configuration parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

impl SiftError {
    /// Create an `InvalidConfig` error
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        SiftError::InvalidConfig(msg.into())
    }
}
