// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the geo stage.
//!
//! Arbitrary coordinates (including NaN and values far outside lat/lng
//! range) and arbitrary radii. The radius may drop located records but
//! never a record without a usable distance, and known distances always
//! come first in ascending order.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use vendex::geo::distance_to;
use vendex::{rank, Coordinate, GeoContext, Record};

#[derive(Debug, Arbitrary)]
struct GeoInput {
    reference: (f64, f64),
    radius_km: Option<f64>,
    points: Vec<Option<(f64, f64)>>,
}

fuzz_target!(|input: GeoInput| {
    let records: Vec<Record> = input
        .points
        .into_iter()
        .take(64)
        .enumerate()
        .map(|(i, point)| Record {
            id: format!("p{}", i),
            name: format!("Vendor {}", i),
            rating: (i % 6) as f64,
            coordinate: point.map(|(lat, lng)| Coordinate::new(lat, lng)),
            ..Record::default()
        })
        .collect();

    let mut geo = GeoContext::new(Coordinate::new(input.reference.0, input.reference.1));
    if let Some(radius) = input.radius_km {
        geo = geo.with_radius(radius);
    }

    let ranked = rank(&records, "vendor", Some(&geo));
    assert!(ranked.len() <= records.len());

    // INVARIANT 1: returned distances are finite and within the radius
    for entry in &ranked {
        if let Some(d) = entry.distance_km {
            assert!(d.is_finite(), "Non-finite distance {}", d);
            if let Some(radius) = geo.radius_km {
                assert!(d <= radius, "Distance {} beyond radius {}", d, radius);
            }
        }
    }

    // INVARIANT 2: records without a distance are never filtered
    let unknown_in = ranked.iter().filter(|r| r.distance_km.is_none()).count();
    let unmeasurable = records
        .iter()
        .filter(|r| distance_to(geo.reference, r.coordinate).is_none())
        .count();
    assert_eq!(unknown_in, unmeasurable, "A record without distance was dropped");

    // INVARIANT 3: nearest first, unknown last
    for pair in ranked.windows(2) {
        match (pair[0].distance_km, pair[1].distance_km) {
            (Some(a), Some(b)) => assert!(a <= b, "Distances not ascending: {} then {}", a, b),
            (None, Some(_)) => panic!("Known distance after unknown"),
            _ => {}
        }
    }
});
