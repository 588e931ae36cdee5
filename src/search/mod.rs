// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query matching and result grouping.
//!
//! One linear pass over the catalog per query. A document matches when the
//! trimmed query is a case-insensitive substring of its title, description, or
//! any keyword. Hits are grouped by category in display order and keep catalog
//! order within a group; there is no relevance scoring beyond "matched".
//!
//! Two entry points:
//!
//! - [`Searcher::search`] always matches and always returns a [`ResultSet`].
//! - [`Searcher::query`] applies the minimum-length gate first and reports the
//!   outcome as a [`SearchState`], which is what UIs want.

pub mod highlight;
pub mod suggest;

use serde::Serialize;

use crate::build::Catalog;
use crate::config::{SearchConfig, DEFAULT_POPULAR_TERMS};
use crate::types::{Category, Document, ResultSet, SearchHit};
use crate::util::normalize::{contains_folded, query_len};

pub use highlight::{restyle_highlight, strip_highlight, Highlighter};
pub use suggest::{KeywordSuggestions, PopularTerms, SuggestionPolicy};

/// Score given to every hit. Matching is binary.
pub const MATCH_SCORE: f64 = 1.0;

/// Per-query options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchOptions {
    /// Only consider documents in this category.
    pub category: Option<Category>,
}

impl SearchOptions {
    pub fn in_category(category: Category) -> Self {
        Self {
            category: Some(category),
        }
    }
}

/// Where a search UI is: `Idle -> Loading -> {Results | Empty | NoResults}`.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "state", content = "results", rename_all = "camelCase")]
pub enum SearchState {
    /// Query too short; nothing to show.
    Idle,
    /// A search is scheduled but hasn't run yet.
    Loading,
    /// At least one hit.
    Results(ResultSet),
    /// The catalog has no documents (it may have failed to load).
    Empty(ResultSet),
    /// The catalog has documents but none matched.
    NoResults(ResultSet),
}

impl SearchState {
    /// The result set, for the three terminal states.
    pub fn results(&self) -> Option<&ResultSet> {
        match self {
            SearchState::Results(r) | SearchState::Empty(r) | SearchState::NoResults(r) => Some(r),
            SearchState::Idle | SearchState::Loading => None,
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, SearchState::Idle)
    }

    pub fn name(&self) -> &'static str {
        match self {
            SearchState::Idle => "idle",
            SearchState::Loading => "loading",
            SearchState::Results(_) => "results",
            SearchState::Empty(_) => "empty",
            SearchState::NoResults(_) => "noResults",
        }
    }
}

/// Matches queries against a catalog.
pub struct Searcher {
    catalog: Catalog,
    config: SearchConfig,
    highlighter: Highlighter,
    policy: Box<dyn SuggestionPolicy>,
}

impl Searcher {
    /// A searcher using [`KeywordSuggestions`] for zero-result queries.
    pub fn new(catalog: Catalog, config: SearchConfig) -> Self {
        let fallback = PopularTerms::new(config.popular_terms.clone());
        let policy = KeywordSuggestions::new(fallback, config.max_suggestions, config.fold_diacritics);
        let highlighter = Highlighter::new(&config.highlight, config.fold_diacritics);
        Self {
            catalog,
            config,
            highlighter,
            policy: Box::new(policy),
        }
    }

    /// Replace the zero-result suggestion policy.
    pub fn with_policy(mut self, policy: impl SuggestionPolicy + 'static) -> Self {
        self.policy = Box::new(policy);
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn highlighter(&self) -> &Highlighter {
        &self.highlighter
    }

    /// Is this query long enough to search for?
    pub fn accepts(&self, query: &str) -> bool {
        query_len(query) >= self.config.min_query_len
    }

    /// Gate on query length, then search and classify the outcome.
    pub fn query(&self, query: &str, options: &SearchOptions) -> SearchState {
        if !self.accepts(query) {
            return SearchState::Idle;
        }
        let results = self.search(query, options);
        if results.total > 0 {
            SearchState::Results(results)
        } else if self.catalog.is_empty() {
            SearchState::Empty(results)
        } else {
            SearchState::NoResults(results)
        }
    }

    /// Match `query` against the catalog. Never fails.
    ///
    /// No length gate here: callers that want one use [`Searcher::query`].
    pub fn search(&self, query: &str, options: &SearchOptions) -> ResultSet {
        let needle = query.trim();
        let mut results = ResultSet::empty(needle);

        let candidates = self
            .catalog
            .documents()
            .iter()
            .filter(|doc| options.category.is_none_or(|c| doc.category == c));

        for doc in candidates {
            if self.matches(doc, needle) {
                results
                    .categories
                    .entry(doc.category)
                    .or_default()
                    .push(self.hit(doc, needle));
                results.total += 1;
            }
        }

        if results.total == 0 {
            results.suggestions = self.suggestions(needle);
        }

        tracing::debug!(
            query = needle,
            category = ?options.category,
            total = results.total,
            "search"
        );
        results
    }

    fn matches(&self, doc: &Document, needle: &str) -> bool {
        let fold = self.config.fold_diacritics;
        contains_folded(&doc.title, needle, fold)
            || contains_folded(&doc.description, needle, fold)
            || doc.keywords.iter().any(|k| contains_folded(k, needle, fold))
    }

    fn hit(&self, doc: &Document, needle: &str) -> SearchHit {
        SearchHit {
            document: doc.clone(),
            score: MATCH_SCORE,
            title_html: self.highlighter.highlight(&doc.title, needle),
            description_html: self.highlighter.highlight(&doc.description, needle),
        }
    }

    fn suggestions(&self, needle: &str) -> Vec<String> {
        let suggestions = self.policy.suggest(needle, &self.catalog);
        if suggestions.is_empty() {
            DEFAULT_POPULAR_TERMS.iter().map(|s| s.to_string()).collect()
        } else {
            suggestions
        }
    }
}
