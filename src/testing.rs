//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::types::{Coordinate, Record};

/// Create a record with a name and rating; every other text field empty.
///
/// This is the canonical implementation used across all tests.
pub fn make_record(id: &str, name: &str, rating: f64) -> Record {
    Record {
        id: id.to_string(),
        name: name.to_string(),
        category: String::new(),
        description: String::new(),
        locality: String::new(),
        rating,
        coordinate: None,
    }
}

/// Create a record at a coordinate.
pub fn make_record_at(id: &str, name: &str, rating: f64, coordinate: Coordinate) -> Record {
    Record {
        coordinate: Some(coordinate),
        ..make_record(id, name, rating)
    }
}

/// Create a fully populated record.
pub fn make_vendor(
    id: &str,
    name: &str,
    category: &str,
    description: &str,
    locality: &str,
    rating: f64,
) -> Record {
    Record {
        id: id.to_string(),
        name: name.to_string(),
        category: category.to_string(),
        description: description.to_string(),
        locality: locality.to_string(),
        rating,
        coordinate: None,
    }
}

/// A small London directory used by integration tests and benchmarks.
pub fn sample_directory() -> Vec<Record> {
    vec![
        Record {
            coordinate: Some(Coordinate::new(51.5390, -0.1426)),
            ..make_vendor(
                "rosa-plumbing",
                "Rosa's Plumbing",
                "Plumber",
                "Emergency plumbing and boiler repair, 24 hours",
                "Camden",
                4.8,
            )
        },
        Record {
            coordinate: Some(Coordinate::new(51.5155, -0.0922)),
            ..make_vendor(
                "bean-there",
                "Bean There",
                "Cafe",
                "Specialty coffee, pastries and brunch",
                "City of London",
                4.6,
            )
        },
        Record {
            coordinate: Some(Coordinate::new(51.4613, -0.1156)),
            ..make_vendor(
                "sparky",
                "Sparky Electrics",
                "Electrician",
                "Rewiring, fuse boxes and lighting installs",
                "Brixton",
                4.2,
            )
        },
        Record {
            coordinate: Some(Coordinate::new(51.5462, -0.1040)),
            ..make_vendor(
                "pipe-dream",
                "Pipe Dream Heating",
                "Heating Engineer",
                "Boiler servicing and plumbing for landlords",
                "Islington",
                3.9,
            )
        },
        make_vendor(
            "mobile-tailor",
            "Needle & Thread",
            "Tailor",
            "Mobile alterations, we come to you",
            "",
            4.4,
        ),
        Record {
            coordinate: Some(Coordinate::new(51.7520, -1.2577)),
            ..make_vendor(
                "oxford-bakes",
                "Oxford Bakes",
                "Bakery",
                "Sourdough and celebration cakes",
                "Oxford",
                4.9,
            )
        },
    ]
}
