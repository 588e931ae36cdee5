// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! What to offer when a query finds nothing.
//!
//! This is a policy, not a contract: the searcher only promises that a
//! zero-result set carries at least one suggestion. Swap in your own
//! [`SuggestionPolicy`] with [`Searcher::with_policy`](super::Searcher::with_policy).

use crate::build::Catalog;
use crate::fuzzy::{chars_within, typo_budget};
use crate::util::normalize::fold;

/// Produces suggestion strings for a query that matched nothing.
pub trait SuggestionPolicy: Send + Sync {
    fn suggest(&self, query: &str, catalog: &Catalog) -> Vec<String>;
}

/// Always offers the same list.
#[derive(Debug, Clone)]
pub struct PopularTerms {
    terms: Vec<String>,
}

impl PopularTerms {
    pub fn new(terms: Vec<String>) -> Self {
        Self { terms }
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }
}

impl SuggestionPolicy for PopularTerms {
    fn suggest(&self, _query: &str, catalog: &Catalog) -> Vec<String> {
        if catalog.popular_searches().is_empty() {
            self.terms.clone()
        } else {
            catalog.popular_searches().to_vec()
        }
    }
}

/// Catalog keywords that look like a typo of the query, else popular terms.
///
/// A keyword is offered when it is within the query's typo budget (see
/// [`typo_budget`]) or when it starts with the same two characters.
#[derive(Debug, Clone)]
pub struct KeywordSuggestions {
    fallback: PopularTerms,
    max: usize,
    fold_diacritics: bool,
}

impl KeywordSuggestions {
    pub fn new(fallback: PopularTerms, max: usize, fold_diacritics: bool) -> Self {
        Self {
            fallback,
            max,
            fold_diacritics,
        }
    }

    fn resembles(&self, query: &[char], keyword: &str) -> bool {
        let keyword: Vec<char> = fold(keyword, self.fold_diacritics).chars().collect();
        let same_prefix = query.len() >= 2 && keyword.starts_with(&query[..2]);
        same_prefix || chars_within(query, &keyword, typo_budget(query.len()))
    }
}

impl SuggestionPolicy for KeywordSuggestions {
    fn suggest(&self, query: &str, catalog: &Catalog) -> Vec<String> {
        let folded: Vec<char> = fold(query.trim(), self.fold_diacritics).chars().collect();
        let mut out: Vec<String> = Vec::new();

        let keywords = catalog.documents().iter().flat_map(|d| d.keywords.iter());
        for keyword in keywords {
            if out.len() >= self.max {
                break;
            }
            if !out.contains(keyword) && self.resembles(&folded, keyword) {
                out.push(keyword.clone());
            }
        }

        if out.is_empty() {
            out = self.fallback.suggest(query, catalog);
            out.truncate(self.max);
        }
        out
    }
}
