// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Reading and checking individual documents.

use std::fs;
use std::path::Path;

use crate::error::CatalogError;
use crate::types::Document;

/// Read one JSON document file.
pub fn read_document(path: &Path) -> Result<Document, CatalogError> {
    let content = fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let doc: Document = serde_json::from_str(&content).map_err(|source| CatalogError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    validate_document(&doc)?;
    Ok(doc)
}

/// A document needs an id, a title to show, and somewhere to go.
pub fn validate_document(doc: &Document) -> Result<(), CatalogError> {
    let reason = if doc.id.trim().is_empty() {
        "empty id"
    } else if doc.title.trim().is_empty() {
        "empty title"
    } else if doc.url.trim().is_empty() {
        "empty url"
    } else {
        return Ok(());
    };
    Err(CatalogError::InvalidDocument {
        id: doc.id.clone(),
        reason,
    })
}
