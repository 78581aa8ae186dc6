// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query tokenization: raw search box text to keywords.
//!
//! The pipeline is deliberately tiny: lowercase, split on whitespace, drop
//! short tokens, drop stop words, trim. Vendor queries are two or three
//! informal words ("emergency plumber camden"), so there is no stemming and
//! no phrase handling. Substring matching in the scorer covers inflections.
//!
//! An empty keyword list is a valid outcome. It means "no keyword signal" and
//! the scorer returns 0 for it.

#[cfg(feature = "unicode-normalization")]
use unicode_normalization::UnicodeNormalization;

use crate::config::TokenizerConfig;

/// Function words that carry no ranking signal.
pub const STOP_WORDS: &[&str] = &[
    "the", "and", "a", "an", "in", "on", "at", "for", "to", "with", "by", "is", "are",
];

/// Tokens shorter than this (in characters) are discarded.
pub const MIN_TOKEN_LEN: usize = 3;

/// Is `word` in the built-in stop list? Expects lowercase input.
pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(&word)
}

/// Tokenize with the default rules.
///
/// ```
/// use vendex::tokenize_query;
///
/// assert_eq!(tokenize_query("The best Plumber in town"), vec!["best", "plumber", "town"]);
/// assert!(tokenize_query("a an at").is_empty());
/// ```
pub fn tokenize_query(query: &str) -> Vec<String> {
    tokenize_query_with(query, &TokenizerConfig::default())
}

/// Tokenize with a caller-supplied length threshold and extra stop words.
///
/// Duplicates are kept; order follows the query.
pub fn tokenize_query_with(query: &str, config: &TokenizerConfig) -> Vec<String> {
    normalize(query, config.fold_diacritics)
        .split_whitespace()
        .filter(|word| word.chars().count() >= config.min_token_len)
        .filter(|word| !is_stop_word(word))
        .filter(|word| !config.extra_stop_words.iter().any(|stop| stop == word))
        .map(|word| word.trim().to_string())
        .filter(|word| !word.is_empty())
        .collect()
}

/// Lowercase `value`, optionally folding diacritics ("Café" → "cafe").
///
/// Field text and keywords must go through the same normalization, otherwise
/// substring matching silently misses.
#[cfg(feature = "unicode-normalization")]
pub fn normalize(value: &str, fold_diacritics: bool) -> String {
    if fold_diacritics {
        value
            .nfd()
            .filter(|c| !is_combining_mark(*c))
            .collect::<String>()
            .to_lowercase()
    } else {
        value.to_lowercase()
    }
}

/// Without the `unicode-normalization` feature folding is a no-op.
#[cfg(not(feature = "unicode-normalization"))]
pub fn normalize(value: &str, _fold_diacritics: bool) -> String {
    value.to_lowercase()
}

/// Combining marks left over after NFD decomposition.
#[cfg(feature = "unicode-normalization")]
fn is_combining_mark(c: char) -> bool {
    matches!(c,
        '\u{0300}'..='\u{036F}' |  // Combining Diacritical Marks
        '\u{1AB0}'..='\u{1AFF}' |  // Combining Diacritical Marks Extended
        '\u{1DC0}'..='\u{1DFF}' |  // Combining Diacritical Marks Supplement
        '\u{20D0}'..='\u{20FF}' |  // Combining Diacritical Marks for Symbols
        '\u{FE20}'..='\u{FE2F}'    // Combining Half Marks
    )
}
