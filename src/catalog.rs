// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Loading vendor catalogs from JSON.
//!
//! The ranker itself never reads files; this is for the CLI, tests and
//! benchmarks. A catalog is either a bare array of records or an object with
//! a `vendors` array:
//!
//! ```json
//! { "vendors": [ { "id": "v1", "name": "Rosa's Plumbing", "rating": 4.8 } ] }
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;
use crate::types::Record;

#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogFile {
    Bare(Vec<Record>),
    Wrapped { vendors: Vec<Record> },
}

impl From<CatalogFile> for Vec<Record> {
    fn from(file: CatalogFile) -> Self {
        match file {
            CatalogFile::Bare(records) | CatalogFile::Wrapped { vendors: records } => records,
        }
    }
}

/// Parse a catalog from a JSON string.
pub fn parse_catalog(raw: &str) -> Result<Vec<Record>, CatalogError> {
    let file: CatalogFile = serde_json::from_str(raw)?;
    Ok(file.into())
}

/// Read and parse a catalog file.
pub fn load_catalog(path: impl AsRef<Path>) -> Result<Vec<Record>, CatalogError> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let records = parse_catalog(&raw)?;
    tracing::debug!(path = %path.display(), records = records.len(), "loaded catalog");
    Ok(records)
}

/// Summary numbers for `vendex inspect`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogStats {
    pub records: usize,
    pub with_coordinates: usize,
    pub min_rating: Option<f64>,
    pub max_rating: Option<f64>,
    /// Records per category; uncategorized records count under "".
    pub categories: BTreeMap<String, usize>,
}

impl CatalogStats {
    pub fn collect(records: &[Record]) -> Self {
        let mut categories = BTreeMap::new();
        let mut min_rating: Option<f64> = None;
        let mut max_rating: Option<f64> = None;

        for record in records {
            *categories.entry(record.category.clone()).or_insert(0) += 1;
            if record.rating.is_finite() {
                min_rating = Some(min_rating.map_or(record.rating, |m| m.min(record.rating)));
                max_rating = Some(max_rating.map_or(record.rating, |m| m.max(record.rating)));
            }
        }

        CatalogStats {
            records: records.len(),
            with_coordinates: records.iter().filter(|r| r.coordinate.is_some()).count(),
            min_rating,
            max_rating,
            categories,
        }
    }
}
