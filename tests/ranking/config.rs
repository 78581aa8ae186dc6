//! Ranking under non-default configs.

use std::io::Write;

use super::common::{ids, make_record, make_vendor};
use vendex::{
    rank, BlendConfig, BlendStrategy, ConfigError, FieldWeights, Ranker, RankingConfig,
    TokenizerConfig,
};

#[test]
fn test_default_ranker_matches_free_function() {
    let records = super::common::sample_directory();
    let ranker = Ranker::new(RankingConfig::default());
    assert_eq!(
        ranker.rank(&records, "boiler repair", None),
        rank(&records, "boiler repair", None)
    );
}

#[test]
fn test_shipped_config_file_equals_defaults() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/vendex.toml");
    let config = RankingConfig::load(path).unwrap();
    assert_eq!(config, RankingConfig::default());
}

#[test]
fn test_config_loaded_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
[fields]
name = 1.0
locality = 3.0
"#
    )
    .unwrap();

    let config = RankingConfig::load(file.path()).unwrap();
    let ranker = Ranker::new(config);

    // With locality outweighing name, the default order flips
    let a = make_vendor("a", "Camden Locksmiths", "", "", "", 4.0);
    let b = make_vendor("b", "Locksmiths", "", "", "Camden", 4.0);
    assert_eq!(ids(&ranker.rank(&[a, b], "camden", None)), vec!["b", "a"]);
}

#[test]
fn test_invalid_config_file_is_rejected() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[blend]\nkeyword_weight = 2.0\nquality_weight = 0.4").unwrap();

    let err = RankingConfig::load(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::BlendNotNormalized { .. }));
}

#[test]
fn test_keyword_only_blend() {
    let config = RankingConfig {
        blend: BlendConfig {
            keyword_weight: 1.0,
            quality_weight: 0.0,
            strategy: BlendStrategy::Weighted,
        },
        ..RankingConfig::default()
    };
    let records = vec![
        make_record("great", "Great Vendor", 5.0),
        make_record("poor", "Poor Vendor", 1.0),
    ];
    let ranked = Ranker::new(config).rank(&records, "zzz", None);

    // Without the quality share everything ties at zero: input order
    assert_eq!(ids(&ranked), vec!["great", "poor"]);
    assert!(ranked.iter().all(|r| r.score == Some(0.0)));
}

#[test]
fn test_quality_tie_break_lets_text_dominate() {
    let records = vec![
        make_record("star", "Star Bakery", 5.0),
        make_record("match", "Tile Fitters", 1.0),
    ];

    // Weighted: 0.375 × 0.6 + 0.2 × 0.4 = 0.305 loses to 0.4
    assert_eq!(ids(&rank(&records, "tile", None)), vec!["star", "match"]);

    let config = RankingConfig {
        blend: BlendConfig {
            strategy: BlendStrategy::QualityTieBreak,
            ..BlendConfig::default()
        },
        ..RankingConfig::default()
    };
    let ranked = Ranker::new(config).rank(&records, "tile", None);
    assert_eq!(ids(&ranked), vec!["match", "star"]);
}

#[test]
fn test_extra_stop_words() {
    let config = RankingConfig {
        tokenizer: TokenizerConfig {
            extra_stop_words: vec!["near".to_string()],
            ..TokenizerConfig::default()
        },
        ..RankingConfig::default()
    };
    let records = vec![
        make_record("nearby", "Nearby Nails", 3.0),
        make_record("other", "Other Nails", 3.0),
    ];

    // Default: "near" matches "Nearby"
    assert_eq!(ids(&rank(&records, "near", None)), vec!["nearby", "other"]);

    let ranked = Ranker::new(config).rank(&records, "near", None);
    assert_eq!(ranked[0].score, ranked[1].score);
}

#[test]
fn test_max_rating_rescales_quality() {
    let config = RankingConfig {
        max_rating: 10.0,
        ..RankingConfig::default()
    };
    let records = vec![make_record("a", "A", 5.0)];
    let ranked = Ranker::new(config).rank(&records, "zzz", None);
    assert!((ranked[0].score.unwrap() - 0.2).abs() < 1e-12);
}

#[test]
fn test_field_weights_total_used_for_normalization() {
    let config = RankingConfig {
        fields: FieldWeights {
            name: 1.0,
            category: 1.0,
            description: 1.0,
            locality: 1.0,
        },
        ..RankingConfig::default()
    };
    let records = vec![make_vendor("a", "Oak", "Oak", "", "", 0.0)];
    let ranked = Ranker::new(config).rank(&records, "oak", None);

    // Two of four equal fields: 0.5 keyword, × 0.6
    assert!((ranked[0].score.unwrap() - 0.3).abs() < 1e-12);
}

#[cfg(feature = "unicode-normalization")]
#[test]
fn test_fold_diacritics() {
    let records = vec![
        make_record("cafe", "Café Rouge", 3.0),
        make_record("other", "Tea House", 3.0),
    ];
    // Off by default: "cafe" does not match "café"
    let plain = rank(&records, "cafe", None);
    assert_eq!(plain[0].score, plain[1].score);

    let config = RankingConfig {
        tokenizer: TokenizerConfig {
            fold_diacritics: true,
            ..TokenizerConfig::default()
        },
        ..RankingConfig::default()
    };
    let ranked = Ranker::new(config).rank(&records, "cafe", None);
    assert_eq!(ids(&ranked), vec!["cafe", "other"]);
    assert!(ranked[0].score > ranked[1].score);
}

#[test]
fn test_ranker_exposes_config() {
    let config = RankingConfig {
        max_rating: 10.0,
        ..RankingConfig::default()
    };
    assert_eq!(Ranker::new(config.clone()).config(), &config);
}
