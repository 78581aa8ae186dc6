// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind keyword relevance.
//!
//! For every keyword and every searchable field, a substring hit adds the
//! field's weight to an accumulator. The total is divided by the best possible
//! total (`keywords × Σweights`), so a record that contains every keyword in
//! every field scores exactly 1.0.
//!
//! Substring containment rather than token equality is intentional: vendor
//! text is short and informal, and "plumb" should find "Plumbing".
//!
//! # Constants
//!
//! | Field       | Weight |
//! |-------------|--------|
//! | Name        | 3.0    |
//! | Category    | 2.5    |
//! | Description | 1.5    |
//! | Locality    | 1.0    |
//!
//! Blend: keyword 0.6, quality 0.4, rating scale 0-5. All of these are
//! defaults for [`crate::RankingConfig`]; `vendex.toml` at the repo root
//! mirrors them and `cargo xtask verify` keeps the two aligned.

use crate::config::FieldWeights;
use crate::tokenize::normalize;
use crate::types::Record;

// =============================================================================
// SCORING CONSTANTS
// =============================================================================

/// Weight for a keyword hit in the vendor name.
pub const NAME_WEIGHT: f64 = 3.0;

/// Weight for a keyword hit in the category.
pub const CATEGORY_WEIGHT: f64 = 2.5;

/// Weight for a keyword hit in the free-text description.
pub const DESCRIPTION_WEIGHT: f64 = 1.5;

/// Weight for a keyword hit in the locality.
pub const LOCALITY_WEIGHT: f64 = 1.0;

/// Share of the combined score taken by keyword relevance.
pub const KEYWORD_BLEND_WEIGHT: f64 = 0.6;

/// Share of the combined score taken by rating quality.
pub const QUALITY_BLEND_WEIGHT: f64 = 0.4;

/// Top of the rating scale.
pub const MAX_RATING: f64 = 5.0;

/// Default field table, in scoring order.
pub const DEFAULT_FIELD_WEIGHTS: [(SearchField, f64); 4] = [
    (SearchField::Name, NAME_WEIGHT),
    (SearchField::Category, CATEGORY_WEIGHT),
    (SearchField::Description, DESCRIPTION_WEIGHT),
    (SearchField::Locality, LOCALITY_WEIGHT),
];

/// A searchable text field of a [`Record`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchField {
    Name,
    Category,
    Description,
    Locality,
}

impl SearchField {
    /// Borrow this field's text from a record.
    pub fn text(self, record: &Record) -> &str {
        match self {
            SearchField::Name => &record.name,
            SearchField::Category => &record.category,
            SearchField::Description => &record.description,
            SearchField::Locality => &record.locality,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SearchField::Name => "name",
            SearchField::Category => "category",
            SearchField::Description => "description",
            SearchField::Locality => "locality",
        }
    }
}

/// Keyword relevance with the default weights and no diacritic folding.
///
/// Keywords are expected in tokenizer output form (lowercase).
pub fn keyword_score(record: &Record, keywords: &[String]) -> f64 {
    keyword_score_with(record, keywords, &FieldWeights::default(), false)
}

/// Keyword relevance in [0, 1].
///
/// Each field is normalized once per record, then every keyword is tested
/// against every field.
pub fn keyword_score_with(
    record: &Record,
    keywords: &[String],
    weights: &FieldWeights,
    fold_diacritics: bool,
) -> f64 {
    // INVARIANT: EMPTY_KEYWORDS_SCORE_ZERO
    // No keyword signal is a score of 0, never NaN from 0/0.
    let max_total = keywords.len() as f64 * weights.total();
    if keywords.is_empty() || !max_total.is_finite() || max_total <= 0.0 {
        return 0.0;
    }

    let fields = weights
        .table()
        .map(|(field, weight)| (normalize(field.text(record), fold_diacritics), weight));

    let mut total = 0.0;
    for keyword in keywords {
        for (text, weight) in &fields {
            if text.contains(keyword.as_str()) {
                total += weight;
            }
        }
    }

    // INVARIANT: KEYWORD_SCORE_IN_UNIT_RANGE
    // Each keyword contributes at most Σweights, so total <= max_total.
    let score = total / max_total;
    if score.is_nan() {
        return 0.0;
    }
    score.clamp(0.0, 1.0)
}

/// Rating scaled into [0, 1].
///
/// Ratings above the scale clamp to 1, negative ratings to 0, and NaN counts
/// as 0 so sorting stays total. A scale that is not a positive finite number
/// has no meaningful quality, so every rating scores 0 under it.
pub fn quality_score(rating: f64, max_rating: f64) -> f64 {
    // INVARIANT: QUALITY_IN_UNIT_RANGE
    if rating.is_nan() || !max_rating.is_finite() || max_rating <= 0.0 {
        return 0.0;
    }
    (rating / max_rating).clamp(0.0, 1.0)
}
