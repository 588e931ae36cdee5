// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types.
//!
//! Matching itself never fails. Only the edges do: reading the catalog
//! manifest, reading a config file, and parsing user-supplied category names.

use std::path::PathBuf;
use thiserror::Error;

/// Failure to load the document catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {}: {}", .path.display(), .source)]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("unsupported manifest version {found} (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },

    #[error("duplicate document id '{0}'")]
    DuplicateId(String),

    #[error("document '{id}' is invalid: {reason}")]
    InvalidDocument { id: String, reason: &'static str },
}

/// Failure to load or validate a search config.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(&'static str),
}

/// A category name that isn't page, blog, project, or service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown category '{0}' (expected page, blog, project or service)")]
pub struct CategoryParseError(pub String);
