// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search tuning knobs, loadable from TOML.
//!
//! Every field has a default, so a config file only needs the keys it changes:
//!
//! ```toml
//! min_query_len = 3
//! debounce_ms = 150
//!
//! [highlight]
//! open_tag = "<em>"
//! close_tag = "</em>"
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::error::ConfigError;

/// Shortest trimmed query (in characters) that triggers matching.
pub const DEFAULT_MIN_QUERY_LEN: usize = 2;

/// Quiet period after the last keystroke before a search runs.
pub const DEFAULT_DEBOUNCE_MS: u64 = 300;

/// Cap on zero-result suggestions.
pub const DEFAULT_MAX_SUGGESTIONS: usize = 5;

/// Fallback suggestions when nothing in the catalog resembles the query.
pub const DEFAULT_POPULAR_TERMS: &[&str] = &[
    "web development",
    "3d printing",
    "ai tools",
    "portfolio",
    "blog",
    "contact",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightConfig {
    pub open_tag: String,
    pub close_tag: String,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            open_tag: r#"<mark class="search-highlight">"#.to_string(),
            close_tag: "</mark>".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub min_query_len: usize,
    pub debounce_ms: u64,
    pub max_suggestions: usize,
    /// Also strip accents before comparing, so `cafe` finds `Café`. Off by
    /// default: matching is case-insensitive only. Ignored without the
    /// `unicode-normalization` feature.
    pub fold_diacritics: bool,
    pub highlight: HighlightConfig,
    pub popular_terms: Vec<String>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            min_query_len: DEFAULT_MIN_QUERY_LEN,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            max_suggestions: DEFAULT_MAX_SUGGESTIONS,
            fold_diacritics: false,
            highlight: HighlightConfig::default(),
            popular_terms: DEFAULT_POPULAR_TERMS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl SearchConfig {
    /// Parse and validate a TOML config.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: SearchConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse, and validate a TOML config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_query_len == 0 {
            return Err(ConfigError::Invalid("min_query_len must be at least 1"));
        }
        if self.max_suggestions == 0 {
            return Err(ConfigError::Invalid("max_suggestions must be at least 1"));
        }
        if self.highlight.open_tag.is_empty() || self.highlight.close_tag.is_empty() {
            return Err(ConfigError::Invalid("highlight tags must not be empty"));
        }
        Ok(())
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}
