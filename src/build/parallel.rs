// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Parallel document loading.
//!
//! Reading one JSON file per document is embarrassingly parallel, so with the
//! `parallel` feature Rayon fans the reads out. `collect` on an indexed parallel
//! iterator keeps input order, which matters here: catalog order is result order.

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use std::path::Path;

use super::document::{read_document, validate_document};
use super::manifest::DocumentEntry;
use crate::error::CatalogError;
use crate::types::Document;

fn load_entry(base_dir: &Path, entry: &DocumentEntry) -> Result<Document, CatalogError> {
    match entry {
        DocumentEntry::Path(relative) => read_document(&base_dir.join(relative)),
        DocumentEntry::Inline(doc) => {
            validate_document(doc)?;
            Ok(doc.clone())
        }
    }
}

/// Load every manifest entry, in manifest order. Any failure aborts the load.
#[cfg(feature = "parallel")]
pub fn load_entries(
    base_dir: &Path,
    entries: &[DocumentEntry],
) -> Result<Vec<Document>, CatalogError> {
    entries
        .par_iter()
        .map(|entry| load_entry(base_dir, entry))
        .collect()
}

/// Load every manifest entry, in manifest order. Any failure aborts the load.
#[cfg(not(feature = "parallel"))]
pub fn load_entries(
    base_dir: &Path,
    entries: &[DocumentEntry],
) -> Result<Vec<Document>, CatalogError> {
    entries
        .iter()
        .map(|entry| load_entry(base_dir, entry))
        .collect()
}
