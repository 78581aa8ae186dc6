//! Shared test utilities and fixtures.

#![allow(dead_code)]

use vendex::{Coordinate, RankedRecord};

// Re-export canonical test utilities from vendex::testing
pub use vendex::testing::{make_record, make_record_at, make_vendor, sample_directory};

// ============================================================================
// REFERENCE POINTS
// ============================================================================

pub const LONDON: Coordinate = Coordinate::new(51.5074, -0.1278);
pub const PARIS: Coordinate = Coordinate::new(48.8566, 2.3522);

/// Camden Town, a few km north of central London.
pub const CAMDEN: Coordinate = Coordinate::new(51.5390, -0.1426);

// ============================================================================
// HELPERS
// ============================================================================

/// IDs of ranked records, in order.
pub fn ids(ranked: &[RankedRecord]) -> Vec<&str> {
    ranked.iter().map(|r| r.record.id.as_str()).collect()
}

/// A point `km` kilometers due north of `from`.
///
/// One degree of latitude is `6371 × π / 180` km along a meridian, so this is
/// exact for haversine.
pub fn north_of(from: Coordinate, km: f64) -> Coordinate {
    let degrees = km / (vendex::EARTH_RADIUS_KM * std::f64::consts::PI / 180.0);
    Coordinate::new(from.lat + degrees, from.lng)
}
