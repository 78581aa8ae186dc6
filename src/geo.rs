// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Geographic re-ranking.
//!
//! Distances are great-circle (haversine) on a sphere of radius 6371 km.
//! That is off by up to ~0.5% against the WGS84 ellipsoid, which is noise at
//! "vendors within 10 km" scale.
//!
//! The geo stage layers on top of relevance ranking instead of replacing it:
//! the distance sort is stable, so records at the same distance (or with no
//! coordinate at all) keep the order they arrived in.

use std::cmp::Ordering;

use crate::types::{Coordinate, GeoContext, RankedRecord};

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two points, in kilometers.
///
/// ```
/// use vendex::{haversine_km, Coordinate};
///
/// let london = Coordinate::new(51.5074, -0.1278);
/// let paris = Coordinate::new(48.8566, 2.3522);
/// let km = haversine_km(london, paris);
/// assert!((km - 343.5).abs() < 2.0);
/// ```
pub fn haversine_km(from: Coordinate, to: Coordinate) -> f64 {
    let lat1 = from.lat.to_radians();
    let lat2 = to.lat.to_radians();
    let d_lat = (to.lat - from.lat).to_radians();
    let d_lng = (to.lng - from.lng).to_radians();

    let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_KM * c
}

/// Distance from the reference point, or `None` if there is nothing to
/// measure. Non-finite results (NaN coordinates) count as unknown.
pub fn distance_to(reference: Coordinate, coordinate: Option<Coordinate>) -> Option<f64> {
    coordinate
        .map(|c| haversine_km(reference, c))
        .filter(|d| d.is_finite())
}

/// Missing distances sort after every known distance.
pub fn compare_distance(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.total_cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Attach distances, drop records beyond the radius, sort nearest-first.
///
/// Records without a coordinate are never dropped; they end up after every
/// record with a distance, in their incoming order.
pub fn apply_geo(ranked: Vec<RankedRecord>, geo: &GeoContext) -> Vec<RankedRecord> {
    let before = ranked.len();

    let mut kept: Vec<RankedRecord> = ranked
        .into_iter()
        .map(|mut entry| {
            entry.distance_km = distance_to(geo.reference, entry.record.coordinate);
            entry
        })
        .filter(|entry| within_radius(entry.distance_km, geo.radius_km))
        .collect();

    // INVARIANT: GEO_SORT_STABLE
    // Stable sort: equal distances keep relevance order.
    kept.sort_by(|a, b| compare_distance(a.distance_km, b.distance_km));

    tracing::debug!(
        before,
        after = kept.len(),
        radius_km = ?geo.radius_km,
        "applied geo ranking"
    );
    kept
}

fn within_radius(distance_km: Option<f64>, radius_km: Option<f64>) -> bool {
    // INVARIANT: COORDINATELESS_NEVER_DROPPED
    match (distance_km, radius_km) {
        (Some(distance), Some(radius)) => distance <= radius,
        _ => true,
    }
}
