//! Keyword relevance and the rating blend.
//!
//! Covers the ordering guarantees callers depend on:
//! - Blank queries order by rating, ties in input order
//! - Name hits outrank locality hits
//! - Stop words never change a score
//! - No keyword overlap degrades to rating order

use super::common::{ids, make_record, make_vendor, sample_directory};
use vendex::{keyword_score, rank, tokenize_query, Record};

// ============================================================================
// EMPTY QUERY
// ============================================================================

#[test]
fn test_empty_query_orders_by_rating_descending() {
    let records = sample_directory();
    let ranked = rank(&records, "", None);

    let ratings: Vec<f64> = ranked.iter().map(|r| r.record.rating).collect();
    let mut sorted = ratings.clone();
    sorted.sort_by(|a, b| b.total_cmp(a));
    assert_eq!(ratings, sorted);
    assert_eq!(ranked[0].record.id, "oxford-bakes");
}

#[test]
fn test_empty_query_rating_ties_keep_input_order() {
    let records = vec![
        make_record("x", "X", 4.9),
        make_record("y", "Y", 4.9),
        make_record("z", "Z", 3.0),
    ];
    assert_eq!(ids(&rank(&records, "", None)), vec!["x", "y", "z"]);

    // Reversed input, reversed tie
    let records = vec![
        make_record("y", "Y", 4.9),
        make_record("x", "X", 4.9),
        make_record("z", "Z", 3.0),
    ];
    assert_eq!(ids(&rank(&records, "", None)), vec!["y", "x", "z"]);
}

#[test]
fn test_whitespace_query_is_empty_query() {
    let records = sample_directory();
    assert_eq!(rank(&records, " \t ", None), rank(&records, "", None));
}

// ============================================================================
// FIELD WEIGHTS
// ============================================================================

#[test]
fn test_name_match_outranks_locality_match() {
    let a = make_vendor("a", "Camden Locksmiths", "", "", "", 4.0);
    let b = make_vendor("b", "Locksmiths", "", "", "Camden", 4.0);

    // Either input order, A wins
    assert_eq!(ids(&rank(&[a.clone(), b.clone()], "camden", None)), vec!["a", "b"]);
    assert_eq!(ids(&rank(&[b, a], "camden", None)), vec!["a", "b"]);
}

#[test]
fn test_category_match_outranks_description_match() {
    let a = make_vendor("a", "Smith & Co", "Bakery", "", "", 4.0);
    let b = make_vendor("b", "Smith & Co", "", "Family bakery since 1920", "", 4.0);

    assert_eq!(ids(&rank(&[b, a], "bakery", None)), vec!["a", "b"]);
}

#[test]
fn test_substring_matches_partial_words() {
    let records = sample_directory();
    let ranked = rank(&records, "plumb", None);

    // Both plumbing vendors mention "plumb"; they must lead
    let top: Vec<&str> = ids(&ranked)[..2].to_vec();
    assert!(top.contains(&"rosa-plumbing"));
    assert!(top.contains(&"pipe-dream"));
}

#[test]
fn test_more_keyword_hits_rank_higher() {
    let records = sample_directory();
    let ranked = rank(&records, "emergency boiler camden", None);
    assert_eq!(ranked[0].record.id, "rosa-plumbing");
}

// ============================================================================
// STOP WORDS
// ============================================================================

#[test]
fn test_stop_words_do_not_change_scores() {
    let records = sample_directory();
    assert_eq!(tokenize_query("the best"), tokenize_query("best"));
    assert_eq!(
        rank(&records, "the best coffee", None),
        rank(&records, "best coffee", None)
    );
}

#[test]
fn test_keyword_score_ignores_stop_word_padding() {
    let record = make_vendor("a", "Bean There", "Cafe", "Coffee and cake", "", 4.0);
    let padded = keyword_score(&record, &tokenize_query("the coffee and the cake"));
    let plain = keyword_score(&record, &tokenize_query("coffee cake"));
    assert_eq!(padded, plain);
}

// ============================================================================
// FALLBACK
// ============================================================================

#[test]
fn test_no_match_falls_back_to_quality_order() {
    let records = sample_directory();
    let ranked = rank(&records, "submarine", None);

    assert_eq!(ranked.len(), records.len());
    assert_eq!(ids(&ranked), ids(&rank(&records, "", None)));

    // Every score is the quality share alone
    for entry in &ranked {
        let expected = entry.record.rating / 5.0 * 0.4;
        assert!((entry.score.unwrap() - expected).abs() < 1e-12);
    }
}

#[test]
fn test_equal_combined_scores_keep_input_order() {
    let records: Vec<Record> = (0..6)
        .map(|i| make_vendor(&format!("v{}", i), "Corner Shop", "Grocer", "", "", 4.0))
        .collect();
    let ranked = rank(&records, "corner", None);
    assert_eq!(ids(&ranked), vec!["v0", "v1", "v2", "v3", "v4", "v5"]);
}

#[test]
fn test_rank_is_idempotent() {
    let records = sample_directory();
    for query in ["", "plumber", "coffee brunch", "the and"] {
        assert_eq!(rank(&records, query, None), rank(&records, query, None));
    }
}

#[test]
fn test_relevance_never_drops_records() {
    let records = sample_directory();
    for query in ["", "plumber", "zzz", "a", "bakery oxford sourdough"] {
        assert_eq!(rank(&records, query, None).len(), records.len());
    }
}
