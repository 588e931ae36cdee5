// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Wrapping query occurrences in marker tags.
//!
//! Purely presentational: the text between and around markers is copied from
//! the input byte-for-byte, so removing the markers gives back the original.
//! Nothing is escaped. Callers rendering into HTML are expected to pass text
//! that is already safe to embed.

use crate::config::HighlightConfig;
use crate::util::normalize::find_matches;

#[derive(Debug, Clone)]
pub struct Highlighter {
    open_tag: String,
    close_tag: String,
    fold_diacritics: bool,
}

impl Highlighter {
    pub fn new(config: &HighlightConfig, fold_diacritics: bool) -> Self {
        Self {
            open_tag: config.open_tag.clone(),
            close_tag: config.close_tag.clone(),
            fold_diacritics,
        }
    }

    pub fn open_tag(&self) -> &str {
        &self.open_tag
    }

    pub fn close_tag(&self) -> &str {
        &self.close_tag
    }

    /// Wrap every case-insensitive occurrence of the trimmed `query` in `text`.
    ///
    /// ```
    /// use sitefind::{HighlightConfig, Highlighter};
    /// let h = Highlighter::new(&HighlightConfig::default(), true);
    /// assert_eq!(
    ///     h.highlight("Web Development", "web"),
    ///     r#"<mark class="search-highlight">Web</mark> Development"#
    /// );
    /// ```
    pub fn highlight(&self, text: &str, query: &str) -> String {
        let ranges = find_matches(text, query.trim(), self.fold_diacritics);
        if ranges.is_empty() {
            return text.to_string();
        }

        let extra = ranges.len() * (self.open_tag.len() + self.close_tag.len());
        let mut out = String::with_capacity(text.len() + extra);
        let mut cursor = 0;
        for range in ranges {
            out.push_str(&text[cursor..range.start]);
            out.push_str(&self.open_tag);
            out.push_str(&text[range.clone()]);
            out.push_str(&self.close_tag);
            cursor = range.end;
        }
        out.push_str(&text[cursor..]);
        out
    }

    /// Remove this highlighter's markers.
    pub fn strip(&self, text: &str) -> String {
        strip_highlight(text, &self.open_tag, &self.close_tag)
    }

    /// Swap this highlighter's marker pairs for `open`/`close`.
    pub fn restyle(&self, text: &str, open: &str, close: &str) -> String {
        restyle_highlight(text, &self.open_tag, &self.close_tag, open, close)
    }
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new(&HighlightConfig::default(), false)
    }
}

/// Remove the `open`/`close` marker pairs from `text`.
///
/// Inverse of [`Highlighter::highlight`] as long as the original text does not
/// contain the open marker. Stray close markers in the original are kept.
pub fn strip_highlight(text: &str, open: &str, close: &str) -> String {
    restyle_highlight(text, open, close, "", "")
}

/// Replace each `open` marker and the first `close` after it with
/// `new_open`/`new_close`. Unpaired markers are left as text.
pub fn restyle_highlight(
    text: &str,
    open: &str,
    close: &str,
    new_open: &str,
    new_close: &str,
) -> String {
    if open.is_empty() || close.is_empty() {
        return text.to_string();
    }
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(start) = rest.find(open) {
        let inner = start + open.len();
        let Some(len) = rest[inner..].find(close) else {
            break;
        };
        out.push_str(&rest[..start]);
        out.push_str(new_open);
        out.push_str(&rest[inner..inner + len]);
        out.push_str(new_close);
        rest = &rest[inner + len + close.len()..];
    }
    out.push_str(rest);
    out
}
