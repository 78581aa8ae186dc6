// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for query handling.
//!
//! Throws arbitrary byte sequences at the ranker to verify it never panics,
//! never loses a record, and never emits a score outside [0, 1]. Emoji,
//! combining marks and null bytes all go through the tokenizer.

#![no_main]

use libfuzzer_sys::fuzz_target;
use vendex::testing::sample_directory;
use vendex::{rank, tokenize_query, Record};

fuzz_target!(|query: &[u8]| {
    static DIRECTORY: std::sync::OnceLock<Vec<Record>> = std::sync::OnceLock::new();
    let records = DIRECTORY.get_or_init(sample_directory);

    // Convert to string, handling invalid UTF-8
    let query_str = String::from_utf8_lossy(query);

    // Cap query length on a char boundary
    let query_str: String = query_str.chars().take(200).collect();

    // INVARIANT 1: tokens are trimmed and never empty
    for token in tokenize_query(&query_str) {
        assert!(!token.is_empty(), "Empty token from {:?}", query_str);
        assert_eq!(token.trim(), token, "Untrimmed token {:?}", token);
    }

    // INVARIANT 2: rank() never panics and never drops a record
    let ranked = rank(records, &query_str, None);
    assert_eq!(ranked.len(), records.len(), "Record count changed");

    // INVARIANT 3: scores are in [0, 1] and sorted descending
    for entry in &ranked {
        if let Some(score) = entry.score {
            assert!(
                (0.0..=1.0).contains(&score),
                "Score {} out of range for {:?}",
                score,
                query_str
            );
        }
    }
    for pair in ranked.windows(2) {
        if let (Some(a), Some(b)) = (pair[0].score, pair[1].score) {
            assert!(a >= b, "Scores not descending: {} then {}", a, b);
        }
    }

    // INVARIANT 4: the output is a permutation of the input
    let mut in_ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
    let mut out_ids: Vec<&str> = ranked.iter().map(|r| r.record.id.as_str()).collect();
    in_ids.sort_unstable();
    out_ids.sort_unstable();
    assert_eq!(in_ids, out_ids, "Output is not a permutation of the input");
});
