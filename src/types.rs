// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a ranking call.
//!
//! Records come in from the caller, ranked records go back out. Nothing in here
//! is cached between calls: the keyword set and the scored pairs only exist for
//! the duration of one `rank`.
//!
//! # Invariants
//!
//! - **Record**: read-only to the ranker. Missing text fields deserialize to
//!   empty strings, a missing rating to 0, a missing coordinate to `None`.
//!
//! - **ScoredRecord**: `0.0 <= score <= 1.0`, `0.0 <= tiebreak <= 1.0`, and `position` is the index of the
//!   record in the caller's input slice. The position is what makes the sort
//!   stable, so never renumber it after scoring.
//!
//! - **RankedRecord**: `distance_km` is `Some` only when geo ranking was active
//!   and the record has a coordinate.

use serde::{Deserialize, Serialize};

// =============================================================================
// INPUT
// =============================================================================

/// A point on the globe in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Coordinate { lat, lng }
    }
}

/// A vendor listing as supplied by the directory.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Record {
    pub id: String,
    /// Primary display name ("Rosa's Plumbing").
    pub name: String,
    pub category: String,
    pub description: String,
    /// Neighbourhood or city.
    pub locality: String,
    /// Quality signal on a bounded scale (0-5 by default).
    pub rating: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinate: Option<Coordinate>,
}

/// Reference point for distance ranking, with an optional cutoff.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeoContext {
    pub reference: Coordinate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius_km: Option<f64>,
}

impl GeoContext {
    pub fn new(reference: Coordinate) -> Self {
        GeoContext {
            reference,
            radius_km: None,
        }
    }

    /// The radius is applied as given: a negative or NaN radius keeps only
    /// records without a measurable distance.
    pub fn with_radius(mut self, radius_km: f64) -> Self {
        self.radius_km = Some(radius_km);
        self
    }
}

// =============================================================================
// TRANSIENT
// =============================================================================

/// A record paired with its combined score. Lives for one sort only.
#[derive(Debug, Clone, Copy)]
pub struct ScoredRecord<'a> {
    pub record: &'a Record,
    pub score: f64,
    /// Secondary key, compared only when scores are equal.
    pub tiebreak: f64,
    /// Index into the caller's input slice.
    pub position: usize,
}

// =============================================================================
// OUTPUT
// =============================================================================

/// One entry of a ranking result.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedRecord {
    #[serde(flatten)]
    pub record: Record,
    /// Combined relevance score. `None` when the query was blank and the
    /// order came from rating alone.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,
}

impl RankedRecord {
    pub fn unscored(record: Record) -> Self {
        RankedRecord {
            record,
            score: None,
            distance_km: None,
        }
    }
}
