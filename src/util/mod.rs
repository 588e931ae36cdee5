// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Text helpers shared by matching, highlighting, and suggestions.

pub mod normalize;
