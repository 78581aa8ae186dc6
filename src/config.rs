// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Ranking configuration.
//!
//! Every tunable constant in the ranker lives here, with defaults equal to the
//! constants in [`crate::scoring`]. A config is immutable once built: pass it
//! to [`crate::Ranker::new`] and it never changes for that ranker.
//!
//! Configs load from TOML. Every key is optional, so a file only has to name
//! what it overrides:
//!
//! ```toml
//! max_rating = 10.0
//!
//! [blend]
//! keyword_weight = 0.8
//! quality_weight = 0.2
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::scoring::{
    SearchField, CATEGORY_WEIGHT, DESCRIPTION_WEIGHT, KEYWORD_BLEND_WEIGHT, LOCALITY_WEIGHT,
    MAX_RATING, NAME_WEIGHT, QUALITY_BLEND_WEIGHT,
};
use crate::tokenize::MIN_TOKEN_LEN;

/// Tolerance when checking that blend weights sum to one.
const BLEND_SUM_EPSILON: f64 = 1e-6;

/// Top-level ranking options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RankingConfig {
    pub fields: FieldWeights,
    pub blend: BlendConfig,
    /// Top of the rating scale. Ratings are divided by this to get quality.
    pub max_rating: f64,
    pub tokenizer: TokenizerConfig,
}

impl Default for RankingConfig {
    fn default() -> Self {
        RankingConfig {
            fields: FieldWeights::default(),
            blend: BlendConfig::default(),
            max_rating: MAX_RATING,
            tokenizer: TokenizerConfig::default(),
        }
    }
}

impl RankingConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: RankingConfig = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&raw)?;
        tracing::debug!(path = %path.display(), "loaded ranking config");
        Ok(config)
    }

    /// Reject configs that would push scores outside [0, 1] or divide by zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, weight) in self.fields.table() {
            check_weight(field.name(), weight)?;
        }
        if self.fields.total() <= 0.0 {
            return Err(ConfigError::ZeroFieldWeights);
        }

        check_weight("blend.keyword_weight", self.blend.keyword_weight)?;
        check_weight("blend.quality_weight", self.blend.quality_weight)?;
        let sum = self.blend.keyword_weight + self.blend.quality_weight;
        if (sum - 1.0).abs() > BLEND_SUM_EPSILON {
            return Err(ConfigError::BlendNotNormalized {
                keyword: self.blend.keyword_weight,
                quality: self.blend.quality_weight,
                sum,
            });
        }

        if !self.max_rating.is_finite() || self.max_rating <= 0.0 {
            return Err(ConfigError::InvalidMaxRating(self.max_rating));
        }
        if self.tokenizer.min_token_len == 0 {
            return Err(ConfigError::ZeroTokenLength);
        }
        Ok(())
    }
}

fn check_weight(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidWeight { name, value })
    }
}

/// Per-field keyword weights. Relative order matters more than magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FieldWeights {
    pub name: f64,
    pub category: f64,
    pub description: f64,
    pub locality: f64,
}

impl Default for FieldWeights {
    fn default() -> Self {
        FieldWeights {
            name: NAME_WEIGHT,
            category: CATEGORY_WEIGHT,
            description: DESCRIPTION_WEIGHT,
            locality: LOCALITY_WEIGHT,
        }
    }
}

impl FieldWeights {
    /// The static (field, weight) table the scorer walks.
    pub fn table(&self) -> [(SearchField, f64); 4] {
        [
            (SearchField::Name, self.name),
            (SearchField::Category, self.category),
            (SearchField::Description, self.description),
            (SearchField::Locality, self.locality),
        ]
    }

    pub fn total(&self) -> f64 {
        self.name + self.category + self.description + self.locality
    }
}

/// How keyword relevance and rating quality combine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BlendStrategy {
    /// `keyword × keyword_weight + quality × quality_weight`.
    #[default]
    Weighted,
    /// Keyword score alone orders results; quality only breaks keyword ties.
    QualityTieBreak,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BlendConfig {
    pub keyword_weight: f64,
    pub quality_weight: f64,
    pub strategy: BlendStrategy,
}

impl Default for BlendConfig {
    fn default() -> Self {
        BlendConfig {
            keyword_weight: KEYWORD_BLEND_WEIGHT,
            quality_weight: QUALITY_BLEND_WEIGHT,
            strategy: BlendStrategy::Weighted,
        }
    }
}

/// Query tokenizer options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TokenizerConfig {
    pub min_token_len: usize,
    /// Appended to the built-in stop list, e.g. for another locale.
    pub extra_stop_words: Vec<String>,
    /// Fold diacritics in both keywords and field text. Needs the
    /// `unicode-normalization` feature; without it this only lowercases.
    pub fold_diacritics: bool,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        TokenizerConfig {
            min_token_len: MIN_TOKEN_LEN,
            extra_stop_words: Vec::new(),
            fold_diacritics: false,
        }
    }
}
