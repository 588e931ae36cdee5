// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a search: documents, categories, hits, and result sets.
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - **Document**: `keywords` holds no duplicates; order is the order they were declared in.
//!
//! - **ResultSet**: `total = Σ categories[c].len()` and `suggestions` is non-empty
//!   exactly when `total = 0`. Categories with no hits are absent from the map,
//!   so an empty result set has an empty `categories`.
//!
//! Use `ResultSet::is_consistent()` in tests rather than re-deriving these by hand.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::CategoryParseError;

// =============================================================================
// CATEGORY
// =============================================================================

/// What kind of thing a document is.
///
/// Variant order IS the display order of the results panel: pages first,
/// then services, projects, and blog posts. The derived `Ord` is what
/// `ResultSet::categories` sorts by, so reordering variants reorders the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Page,
    Service,
    Project,
    Blog,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 4] = [
        Category::Page,
        Category::Service,
        Category::Project,
        Category::Blog,
    ];

    /// Convert to lowercase string representation.
    ///
    /// Matches the serde `rename_all = "lowercase"` convention.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Page => "page",
            Category::Service => "service",
            Category::Project => "project",
            Category::Blog => "blog",
        }
    }

    /// Heading shown above a group of results.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Page => "Pages",
            Category::Service => "Services",
            Category::Project => "Projects",
            Category::Blog => "Blog Posts",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = CategoryParseError;

    /// Accepts the canonical names plus the plurals the filter buttons use.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "page" | "pages" => Ok(Category::Page),
            "service" | "services" => Ok(Category::Service),
            "project" | "projects" => Ok(Category::Project),
            "blog" | "blogs" | "post" | "posts" => Ok(Category::Blog),
            _ => Err(CategoryParseError(s.to_string())),
        }
    }
}

// =============================================================================
// DOCUMENT
// =============================================================================

/// A single searchable entity: a page, blog post, project, or service.
///
/// Documents are loaded once from the catalog manifest and never change.
/// Field names follow the manifest JSON (`description`, `url`, `keywords`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub url: String,
    pub category: Category,
    /// Extra search terms. Duplicates are dropped on load.
    #[serde(default, deserialize_with = "dedup_keywords")]
    pub keywords: Vec<String>,
}

impl Document {
    /// Create a document with no description or keywords.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        url: impl Into<String>,
        category: Category,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            url: url.into(),
            category,
            keywords: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = dedup(keywords.into_iter().map(Into::into));
        self
    }
}

fn dedup(keywords: impl Iterator<Item = String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for keyword in keywords {
        if !out.contains(&keyword) {
            out.push(keyword);
        }
    }
    out
}

fn dedup_keywords<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Vec::<String>::deserialize(deserializer)?;
    Ok(dedup(raw.into_iter()))
}

// =============================================================================
// RESULTS
// =============================================================================

/// One matched document, with its title and description ready for display.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchHit {
    pub document: Document,
    /// Binary match score: every hit scores the same.
    pub score: f64,
    /// Title with every query occurrence wrapped in highlight markers.
    pub title_html: String,
    /// Description with every query occurrence wrapped in highlight markers.
    pub description_html: String,
}

/// Everything the results panel needs for one query.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultSet {
    pub query: String,
    pub total: usize,
    /// Hits grouped by category; iteration order is display order.
    pub categories: BTreeMap<Category, Vec<SearchHit>>,
    pub suggestions: Vec<String>,
}

impl ResultSet {
    /// A result set with no hits and no suggestions yet.
    pub fn empty(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            total: 0,
            categories: BTreeMap::new(),
            suggestions: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Number of hits in one category.
    pub fn count(&self, category: Category) -> usize {
        self.categories.get(&category).map_or(0, Vec::len)
    }

    /// Hits flattened in display order. Keyboard selection indexes into this.
    pub fn hits(&self) -> impl Iterator<Item = &SearchHit> + '_ {
        self.categories.values().flatten()
    }

    /// Check the `total` and `suggestions` invariants.
    pub fn is_consistent(&self) -> bool {
        let sum: usize = self.categories.values().map(Vec::len).sum();
        let no_empty_groups = self.categories.values().all(|hits| !hits.is_empty());
        sum == self.total && no_empty_groups && (self.total == 0) == !self.suggestions.is_empty()
    }
}
