// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Typo tolerance for "did you mean" suggestions.
//!
//! The matcher itself is exact (substring only). Edit distance only comes into
//! play after a miss, to find catalog keywords close to what the user typed.

mod levenshtein;

pub use levenshtein::*;
