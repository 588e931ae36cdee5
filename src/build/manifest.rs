// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The catalog manifest: what the site build hands us.

use serde::Deserialize;

use crate::types::Document;

/// The only manifest version this crate reads.
pub const MANIFEST_VERSION: u32 = 1;

#[derive(Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct InputManifest {
    pub version: u32,
    pub documents: Vec<DocumentEntry>,
    /// Overrides the built-in popular terms offered on zero results.
    #[serde(default)]
    pub popular_searches: Vec<String>,
}

#[derive(Deserialize, Clone, Debug)]
#[serde(untagged)]
pub enum DocumentEntry {
    /// Path to a JSON document file, relative to the manifest
    Path(String),
    /// Document embedded directly in the manifest
    Inline(Document),
}
