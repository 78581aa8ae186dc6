// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Errors for the parts of the crate that touch the outside world.
//!
//! Ranking itself never fails. Only loading a config or a catalog can.

use std::path::PathBuf;
use thiserror::Error;

/// Why a ranking config was rejected.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("weight `{name}` must be finite and non-negative, got {value}")]
    InvalidWeight { name: &'static str, value: f64 },

    #[error("field weights sum to zero; at least one field must carry weight")]
    ZeroFieldWeights,

    #[error("blend weights must sum to 1.0, got {keyword} + {quality} = {sum}")]
    BlendNotNormalized { keyword: f64, quality: f64, sum: f64 },

    #[error("max_rating must be finite and positive, got {0}")]
    InvalidMaxRating(f64),

    #[error("min_token_len must be at least 1")]
    ZeroTokenLength,
}

/// Why a vendor catalog could not be loaded.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),
}
