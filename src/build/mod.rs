// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The document catalog and how it gets loaded.
//!
//! A catalog is produced by the site build as `manifest.json` plus (optionally)
//! one JSON file per document. It is read once and never changes afterwards.
//! If it can't be read, [`Catalog::load_or_empty`] hands back an empty catalog
//! so search keeps working and simply offers suggestions.

pub mod document;
pub mod manifest;
pub mod parallel;

use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::Path;

use crate::error::CatalogError;
use crate::types::{Category, Document};

pub use document::*;
pub use manifest::*;
pub use parallel::*;

/// The immutable set of searchable documents, in catalog order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    documents: Vec<Document>,
    popular_searches: Vec<String>,
}

impl Catalog {
    /// A catalog with nothing in it.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a catalog from documents already in memory.
    ///
    /// Rejects duplicate ids and documents without an id, title, or url.
    pub fn from_documents(documents: Vec<Document>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(documents.len());
        for doc in &documents {
            validate_document(doc)?;
            if !seen.insert(doc.id.as_str()) {
                return Err(CatalogError::DuplicateId(doc.id.clone()));
            }
        }
        Ok(Self {
            documents,
            popular_searches: Vec::new(),
        })
    }

    /// Replace the popular searches offered when nothing matches.
    pub fn with_popular_searches(mut self, terms: Vec<String>) -> Self {
        self.popular_searches = terms;
        self
    }

    /// Read `manifest.json` (or any manifest path) and every document it lists.
    pub fn load(manifest_path: &Path) -> Result<Self, CatalogError> {
        let content = fs::read_to_string(manifest_path).map_err(|source| CatalogError::Io {
            path: manifest_path.to_path_buf(),
            source,
        })?;
        let manifest: InputManifest =
            serde_json::from_str(&content).map_err(|source| CatalogError::Json {
                path: manifest_path.to_path_buf(),
                source,
            })?;
        if manifest.version != MANIFEST_VERSION {
            return Err(CatalogError::UnsupportedVersion {
                found: manifest.version,
                expected: MANIFEST_VERSION,
            });
        }

        let base_dir = manifest_path.parent().unwrap_or_else(|| Path::new("."));
        let documents = load_entries(base_dir, &manifest.documents)?;
        let catalog = Self::from_documents(documents)?.with_popular_searches(manifest.popular_searches);

        tracing::info!(
            path = %manifest_path.display(),
            documents = catalog.len(),
            "loaded catalog"
        );
        Ok(catalog)
    }

    /// Like [`Catalog::load`], but a failure degrades to an empty catalog.
    pub fn load_or_empty(manifest_path: &Path) -> Self {
        Self::load(manifest_path).unwrap_or_else(|err| {
            tracing::warn!(error = %err, "catalog unavailable; search will return suggestions only");
            Self::empty()
        })
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn popular_searches(&self) -> &[String] {
        &self.popular_searches
    }

    /// Documents in one category, in catalog order.
    pub fn by_category(&self, category: Category) -> impl Iterator<Item = &Document> + '_ {
        self.documents.iter().filter(move |d| d.category == category)
    }

    /// Document count per category. Categories with no documents are omitted.
    pub fn counts(&self) -> BTreeMap<Category, usize> {
        let mut counts = BTreeMap::new();
        for doc in &self.documents {
            *counts.entry(doc.category).or_insert(0) += 1;
        }
        counts
    }
}
