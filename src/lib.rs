//! Category-grouped, highlighted search over a static site catalog.
//!
//! A site build emits a small manifest of documents (pages, services, projects,
//! blog posts). This crate loads it once and answers free-text queries with a
//! [`ResultSet`]: hits grouped by category, titles and descriptions highlighted,
//! and suggestions when nothing matched.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌────────────────┐
//! │  build/     │────▶│  search/     │────▶│  session/      │
//! │  (Catalog,  │     │ (Searcher,   │     │ (SearchSession,│
//! │  manifest)  │     │  highlight,  │     │  Debouncer)    │
//! └─────────────┘     │  suggest)    │     └────────────────┘
//!                     └──────────────┘
//!        │                   │
//!        ▼                   ▼
//! ┌─────────────────────────────────────────┐
//! │ types.rs  util/normalize.rs  fuzzy/     │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use sitefind::{testing::scenario_catalog, Category, SearchConfig, SearchOptions, Searcher};
//!
//! let searcher = Searcher::new(scenario_catalog(), SearchConfig::default());
//! let results = searcher.search("web", &SearchOptions::default());
//! assert_eq!(results.total, 1);
//! assert_eq!(results.count(Category::Service), 1);
//! ```

// Module declarations
pub mod build;
pub mod config;
pub mod error;
mod fuzzy;
pub mod search;
pub mod session;
pub mod testing;
mod types;
mod util;

// Re-exports for public API
pub use build::{Catalog, DocumentEntry, InputManifest, MANIFEST_VERSION};
pub use config::{HighlightConfig, SearchConfig};
pub use error::{CatalogError, CategoryParseError, ConfigError};
pub use fuzzy::{levenshtein_within, typo_budget};
pub use search::{
    restyle_highlight, strip_highlight, Highlighter, KeywordSuggestions, PopularTerms,
    SearchOptions, SearchState, Searcher, SuggestionPolicy, MATCH_SCORE,
};
pub use session::{Debouncer, Key, SearchSession, SessionAction, Ticket};
pub use types::{Category, Document, ResultSet, SearchHit};
pub use util::normalize::{contains_folded, find_matches, fold, query_len};
