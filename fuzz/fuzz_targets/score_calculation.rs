// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for score calculation invariants.
//!
//! Scores must be finite, within [0, 1], and deterministic. Ratings come
//! straight from the fuzzer, so NaN, infinities and negative values all get
//! a turn.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use vendex::scoring::MAX_RATING;
use vendex::{keyword_score, quality_score, rank, tokenize_query, Record};

#[derive(Debug, Arbitrary)]
struct VendorInput {
    name: String,
    category: String,
    description: String,
    locality: String,
    rating: f64,
}

#[derive(Debug, Arbitrary)]
struct ScoreInput {
    query: String,
    vendors: Vec<VendorInput>,
}

fuzz_target!(|input: ScoreInput| {
    let records: Vec<Record> = input
        .vendors
        .into_iter()
        .take(64)
        .enumerate()
        .map(|(i, v)| Record {
            id: format!("v{}", i),
            name: v.name,
            category: v.category,
            description: v.description,
            locality: v.locality,
            rating: v.rating,
            coordinate: None,
        })
        .collect();

    let keywords = tokenize_query(&input.query);

    // INVARIANT 1: component scores are in [0, 1]
    for record in &records {
        let keyword = keyword_score(record, &keywords);
        let quality = quality_score(record.rating, MAX_RATING);
        assert!((0.0..=1.0).contains(&keyword), "keyword score {}", keyword);
        assert!((0.0..=1.0).contains(&quality), "quality score {}", quality);
    }

    // INVARIANT 2: ranking is deterministic
    let first = rank(&records, &input.query, None);
    let second = rank(&records, &input.query, None);
    assert_eq!(first.len(), records.len());
    for (a, b) in first.iter().zip(second.iter()) {
        assert_eq!(a.record.id, b.record.id, "Order changed between runs");
        assert_eq!(a.score, b.score, "Score changed between runs");
    }

    // INVARIANT 3: blended scores are finite and bounded
    for entry in &first {
        if let Some(score) = entry.score {
            assert!(score.is_finite(), "Score {} is not finite", score);
            assert!((0.0..=1.0).contains(&score), "Score {} out of range", score);
        }
    }
});
