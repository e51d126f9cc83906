//! Search configuration via TOML
//!
//! The caller owns the file; this module only parses and validates the text.
//! Missing keys fall back to defaults.

use crate::error::{SiftError, SiftResult};
use crate::search_types::{SearchOptions, DEFAULT_MAX_RESULTS, DEFAULT_MIN_RELEVANCE};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default debounce window for interactive queries
pub const DEFAULT_DEBOUNCE_MS: u64 = 300;

/// Search configuration
///
/// # Example
///
/// ```toml
/// # Milliseconds of input quiet time before a query is committed
/// debounce_ms = 300
/// max_results = 50
/// min_relevance = 0.0
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Debounce window in milliseconds (0 = next scheduling tick)
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    /// Result cap applied to every query
    #[serde(default = "default_max_results")]
    pub max_results: usize,
    /// Relevance floor in [0, 1]
    #[serde(default = "default_min_relevance")]
    pub min_relevance: f32,
}

fn default_debounce_ms() -> u64 {
    DEFAULT_DEBOUNCE_MS
}

fn default_max_results() -> usize {
    DEFAULT_MAX_RESULTS
}

fn default_min_relevance() -> f32 {
    DEFAULT_MIN_RELEVANCE
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
            max_results: default_max_results(),
            min_relevance: default_min_relevance(),
        }
    }
}

impl SearchConfig {
    /// Parse and validate configuration text
    ///
    /// # Errors
    ///
    /// Returns `ConfigParse` for malformed TOML and `InvalidConfig` for
    /// out-of-range values.
    pub fn from_toml_str(text: &str) -> SiftResult<Self> {
        let config: SearchConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Returns the default config content with comments.
    pub fn default_toml() -> &'static str {
        r#"# Sift search configuration
#
# Milliseconds of input quiet time before a query is committed.
# 0 commits on the next scheduling tick.
debounce_ms = 300

# Maximum results returned per query
max_results = 50

# Results below this relevance (0.0 - 1.0) are dropped
min_relevance = 0.0
"#
    }

    /// Check value ranges
    pub fn validate(&self) -> SiftResult<()> {
        if !(0.0..=1.0).contains(&self.min_relevance) {
            return Err(SiftError::invalid_config(format!(
                "min_relevance must be within [0, 1], got {}",
                self.min_relevance
            )));
        }
        Ok(())
    }

    /// Options for the query engine derived from this config
    pub fn search_options(&self) -> SearchOptions {
        SearchOptions::default()
            .with_max_results(self.max_results)
            .with_min_relevance(self.min_relevance)
    }

    /// Debounce window as a `Duration`
    pub fn debounce_delay(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}
