// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for catalog parsing.
//!
//! Malformed JSON must come back as an error, never a panic. Anything that
//! parses must survive a ranking pass and the stats summary.

#![no_main]

use libfuzzer_sys::fuzz_target;
use vendex::{parse_catalog, rank, CatalogStats};

fuzz_target!(|data: &[u8]| {
    let Ok(raw) = std::str::from_utf8(data) else {
        return;
    };

    let Ok(records) = parse_catalog(raw) else {
        return;
    };

    let stats = CatalogStats::collect(&records);
    assert_eq!(stats.records, records.len());
    assert!(stats.with_coordinates <= stats.records);

    let ranked = rank(&records, "", None);
    assert_eq!(ranked.len(), records.len());
});
