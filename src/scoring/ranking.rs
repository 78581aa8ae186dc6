// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how scored records get sorted.
//!
//! Under the default [`BlendStrategy::Weighted`] the combined score is
//! `keyword × 0.6 + quality × 0.4`, so a strong text match with a mediocre
//! rating can still lose to a decent match with a great rating. Under
//! [`BlendStrategy::QualityTieBreak`] keyword relevance decides alone and the
//! rating only separates records with equal keyword scores.
//!
//! Either way, records that tie on everything keep their input order. The
//! input position is the last sort key, which makes the order total and the
//! output deterministic.

use std::cmp::Ordering;

use crate::config::{BlendConfig, BlendStrategy};
use crate::types::ScoredRecord;

/// The primary score and the secondary (tie-break) score for one record.
///
/// For `Weighted` the secondary is always 0, so ties fall straight through to
/// input order.
pub fn blend(keyword: f64, quality: f64, blend: &BlendConfig) -> (f64, f64) {
    match blend.strategy {
        // Validated weights sum to 1 within epsilon; clamp absorbs the epsilon
        BlendStrategy::Weighted => {
            let score = keyword * blend.keyword_weight + quality * blend.quality_weight;
            // NaN weights from an unvalidated config score as no signal
            let score = if score.is_nan() { 0.0 } else { score.clamp(0.0, 1.0) };
            (score, 0.0)
        }
        BlendStrategy::QualityTieBreak => (keyword, quality),
    }
}

/// Compare two scored records for ranking.
///
/// Sort order:
/// 1. **Score** - higher wins
/// 2. **Tie-break** - higher wins (only non-zero under `QualityTieBreak`)
/// 3. **Position** - earlier input wins, so equal scores keep caller order
pub fn compare_scored(a: &ScoredRecord<'_>, b: &ScoredRecord<'_>) -> Ordering {
    b.score
        .total_cmp(&a.score)
        .then_with(|| b.tiebreak.total_cmp(&a.tiebreak))
        .then_with(|| a.position.cmp(&b.position))
}

/// Sort scored records best-first.
pub fn sort_scored(scored: &mut [ScoredRecord<'_>]) {
    // INVARIANT: STABLE_ORDER
    // sort_by is stable and position breaks every remaining tie.
    scored.sort_by(compare_scored);
}
