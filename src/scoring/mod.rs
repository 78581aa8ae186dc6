// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how vendor records get their numbers.
//!
//! Two signals feed every score. Keyword relevance says how well the text
//! fields match the query, weighted so a name hit counts three times a
//! locality hit. Quality is the rating scaled into [0, 1]. The ranking
//! module blends them and defines the sort order.

mod core;
pub mod ranking;

pub use self::core::*;
