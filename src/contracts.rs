// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the ranking pipeline.
//!
//! Debug-mode assertions for the properties the rest of the crate relies on.
//! They compile to nothing in release builds.
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract                     | Property                                   |
//! |------------------------------|--------------------------------------------|
//! | `check_scores_in_unit_range` | every combined score is in [0, 1]          |
//! | `check_same_length`          | relevance ranking never drops a record     |
//! | compile-time block below     | default weights keep the field hierarchy   |

use crate::scoring::{
    CATEGORY_WEIGHT, DESCRIPTION_WEIGHT, KEYWORD_BLEND_WEIGHT, LOCALITY_WEIGHT, MAX_RATING,
    NAME_WEIGHT, QUALITY_BLEND_WEIGHT,
};
use crate::types::ScoredRecord;

// ============================================================================
// COMPILE-TIME ASSERTIONS
// ============================================================================

const _: () = {
    // INVARIANT: FIELD_HIERARCHY
    // Name > Category > Description > Locality > 0
    assert!(NAME_WEIGHT > CATEGORY_WEIGHT);
    assert!(CATEGORY_WEIGHT > DESCRIPTION_WEIGHT);
    assert!(DESCRIPTION_WEIGHT > LOCALITY_WEIGHT);
    assert!(LOCALITY_WEIGHT > 0.0);

    // INVARIANT: BLEND_IS_CONVEX
    // Both shares non-negative and summing to one keeps the blend in [0, 1].
    assert!(KEYWORD_BLEND_WEIGHT >= 0.0);
    assert!(QUALITY_BLEND_WEIGHT >= 0.0);
    assert!(KEYWORD_BLEND_WEIGHT + QUALITY_BLEND_WEIGHT == 1.0);

    assert!(MAX_RATING > 0.0);
};

// ============================================================================
// RUNTIME CONTRACTS
// ============================================================================

/// Every score and tie-break value must be a finite number in [0, 1].
#[inline]
pub fn check_scores_in_unit_range(scored: &[ScoredRecord<'_>]) {
    for s in scored {
        debug_assert!(
            (0.0..=1.0).contains(&s.score),
            "Contract violation: score {} of record {} outside [0, 1]",
            s.score,
            s.record.id
        );
        debug_assert!(
            (0.0..=1.0).contains(&s.tiebreak),
            "Contract violation: tiebreak {} of record {} outside [0, 1]",
            s.tiebreak,
            s.record.id
        );
    }
}

/// Relevance ranking is a permutation: output length equals input length.
#[inline]
pub fn check_same_length(input: usize, output: usize) {
    debug_assert_eq!(
        input, output,
        "Contract violation: relevance ranking returned {} of {} records",
        output, input
    );
}
