// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Bounded edit distance with early exits.
//!
//! `|len(a) - len(b)|` is a lower bound on edit distance, so most candidates are
//! rejected before the DP allocates anything. The row-minimum check abandons the
//! DP once every cell in a row is already over budget.

/// Are these strings within `max` edits of each other?
///
/// Distances are counted in characters, not bytes.
pub fn levenshtein_within(a: &str, b: &str, max: usize) -> bool {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    chars_within(&a, &b, max)
}

/// Same as [`levenshtein_within`] on pre-split characters.
pub fn chars_within(a: &[char], b: &[char], max: usize) -> bool {
    if a.len().abs_diff(b.len()) > max {
        return false;
    }

    let mut row: Vec<usize> = (0..=b.len()).collect();
    for (i, ac) in a.iter().enumerate() {
        let mut diag = row[0];
        row[0] = i + 1;
        let mut row_min = row[0];

        for (j, bc) in b.iter().enumerate() {
            let above = row[j + 1];
            let substitution = diag + usize::from(ac != bc);
            row[j + 1] = (above + 1).min(row[j] + 1).min(substitution);
            diag = above;
            row_min = row_min.min(row[j + 1]);
        }

        if row_min > max {
            return false;
        }
    }

    row[b.len()] <= max
}

/// How many typos a query of `len` characters may contain.
///
/// Short queries get one edit; anything longer gets two. Zero for queries
/// too short for a typo to be distinguishable from a different word.
pub fn typo_budget(len: usize) -> usize {
    match len {
        0..=2 => 0,
        3..=5 => 1,
        _ => 2,
    }
}
