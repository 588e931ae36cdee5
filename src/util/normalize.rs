// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Case folding and case-insensitive substring search.
//!
//! Matching and highlighting must agree on what "contains the query" means,
//! otherwise a document shows up in results with nothing highlighted. Both go
//! through [`find_matches`], which folds the haystack one source character at
//! a time and remembers where each folded character came from. That mapping is
//! what lets the highlighter wrap the *original* text even when lowercasing
//! changes byte lengths (`ẞ` → `ß`, `İ` → `i̇`).
//!
//! # Folding (with unicode-normalization feature)
//!
//! 1. NFD decompose (base + combining marks), if `diacritics` is set
//! 2. Drop combining marks
//! 3. Lowercase
//!
//! Without the feature, folding is lowercase only.

use std::ops::Range;

#[cfg(feature = "unicode-normalization")]
use unicode_normalization::UnicodeNormalization;

/// A folded character and the byte span of the source character it came from.
#[derive(Debug, Clone, Copy)]
struct FoldedChar {
    ch: char,
    src_start: usize,
    src_end: usize,
}

/// Fold a single character.
#[cfg(feature = "unicode-normalization")]
fn fold_char(c: char, diacritics: bool, out: &mut Vec<char>) {
    if diacritics {
        for base in c.nfd().filter(|d| !is_combining_mark(*d)) {
            out.extend(base.to_lowercase());
        }
    } else {
        out.extend(c.to_lowercase());
    }
}

#[cfg(not(feature = "unicode-normalization"))]
fn fold_char(c: char, _diacritics: bool, out: &mut Vec<char>) {
    out.extend(c.to_lowercase());
}

/// Check if a character is a combining mark (diacritic).
///
/// Combining marks have Unicode category "Mn" (Mark, Nonspacing).
/// Examples: ́ (acute), ̄ (macron), ̣ (dot below)
#[cfg(feature = "unicode-normalization")]
fn is_combining_mark(c: char) -> bool {
    matches!(c,
        '\u{0300}'..='\u{036F}' |  // Combining Diacritical Marks
        '\u{1AB0}'..='\u{1AFF}' |  // Combining Diacritical Marks Extended
        '\u{1DC0}'..='\u{1DFF}' |  // Combining Diacritical Marks Supplement
        '\u{20D0}'..='\u{20FF}' |  // Combining Diacritical Marks for Symbols
        '\u{FE20}'..='\u{FE2F}'    // Combining Half Marks
    )
}

/// Fold a string for comparison.
///
/// ```
/// use sitefind::fold;
/// assert_eq!(fold("Web Development", false), "web development");
/// ```
pub fn fold(value: &str, diacritics: bool) -> String {
    let mut buf = Vec::with_capacity(value.len());
    for c in value.chars() {
        fold_char(c, diacritics, &mut buf);
    }
    buf.into_iter().collect()
}

fn fold_with_spans(text: &str, diacritics: bool) -> Vec<FoldedChar> {
    let mut out = Vec::with_capacity(text.len());
    let mut buf = Vec::with_capacity(4);
    for (src_start, c) in text.char_indices() {
        buf.clear();
        fold_char(c, diacritics, &mut buf);
        let src_end = src_start + c.len_utf8();
        out.extend(buf.iter().map(|&ch| FoldedChar {
            ch,
            src_start,
            src_end,
        }));
    }
    out
}

/// Byte ranges in `haystack` where the folded `needle` occurs.
///
/// Leftmost, non-overlapping. A match must start at the first folded character
/// of a source character and end at the last one, so ranges always fall on
/// UTF-8 boundaries of the original text. An empty needle matches nothing.
///
/// This is stricter than `haystack.to_lowercase().contains(..)`: `İ` lowercases
/// to `i̇` (two chars), and `"i"` alone covers only half of it, so it does not
/// match `"İstanbul"` unless diacritic folding removes the dot first.
pub fn find_matches(haystack: &str, needle: &str, diacritics: bool) -> Vec<Range<usize>> {
    let needle: Vec<char> = fold(needle, diacritics).chars().collect();
    if needle.is_empty() {
        return Vec::new();
    }
    let folded = fold_with_spans(haystack, diacritics);
    let mut ranges = Vec::new();
    let mut i = 0;
    while i + needle.len() <= folded.len() {
        if let Some(range) = match_at(&folded, &needle, i) {
            ranges.push(range);
            i += needle.len();
        } else {
            i += 1;
        }
    }
    ranges
}

/// Does `haystack` contain `needle`, ignoring case (and accents if asked)?
///
/// Same whole-character rule as [`find_matches`].
pub fn contains_folded(haystack: &str, needle: &str, diacritics: bool) -> bool {
    let needle: Vec<char> = fold(needle, diacritics).chars().collect();
    if needle.is_empty() {
        return false;
    }
    let folded = fold_with_spans(haystack, diacritics);
    let last_start = folded.len().saturating_sub(needle.len() - 1);
    (0..last_start).any(|i| match_at(&folded, &needle, i).is_some())
}

fn match_at(folded: &[FoldedChar], needle: &[char], start: usize) -> Option<Range<usize>> {
    let end = start + needle.len();
    let window = folded.get(start..end)?;
    if !window.iter().zip(needle).all(|(f, n)| f.ch == *n) {
        return None;
    }
    let starts_clean = start == 0 || folded[start - 1].src_start != folded[start].src_start;
    let ends_clean = end == folded.len() || folded[end].src_start != folded[end - 1].src_start;
    if starts_clean && ends_clean {
        Some(folded[start].src_start..folded[end - 1].src_end)
    } else {
        None
    }
}

/// Number of characters in the trimmed query.
pub fn query_len(query: &str) -> usize {
    query.trim().chars().count()
}
