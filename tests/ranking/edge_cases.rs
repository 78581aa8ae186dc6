//! Degenerate inputs. None of these may panic or produce NaN.

use super::common::{ids, make_record, make_record_at, LONDON};
use vendex::{rank, Coordinate, GeoContext, Record};

#[test]
fn test_empty_record_set() {
    assert!(rank(&[], "", None).is_empty());
    assert!(rank(&[], "plumber", None).is_empty());
    assert!(rank(&[], "plumber", Some(&GeoContext::new(LONDON).with_radius(1.0))).is_empty());
}

#[test]
fn test_record_with_only_defaults() {
    let records = vec![Record::default(), Record::default()];
    let ranked = rank(&records, "anything", None);

    assert_eq!(ranked.len(), 2);
    assert!(ranked.iter().all(|r| r.score == Some(0.0)));
}

#[test]
fn test_nan_rating_sorts_as_zero() {
    let records = vec![
        make_record("nan", "Mystery", f64::NAN),
        make_record("ok", "Known", 1.0),
    ];

    assert_eq!(ids(&rank(&records, "", None)), vec!["ok", "nan"]);
    let ranked = rank(&records, "zzz", None);
    assert_eq!(ids(&ranked), vec!["ok", "nan"]);
    assert!(ranked.iter().all(|r| r.score.unwrap().is_finite()));
}

#[test]
fn test_out_of_scale_ratings_are_clamped() {
    let records = vec![
        make_record("over", "Over", 9.0),
        make_record("max", "Max", 5.0),
        make_record("negative", "Negative", -2.0),
    ];
    let ranked = rank(&records, "zzz", None);

    // 9.0 and 5.0 both clamp to full quality; input order breaks the tie
    assert_eq!(ids(&ranked), vec!["over", "max", "negative"]);
    assert_eq!(ranked[0].score, ranked[1].score);
    assert_eq!(ranked[2].score, Some(0.0));
}

#[test]
fn test_nan_coordinate_is_treated_as_missing() {
    let records = vec![
        make_record_at("broken", "Broken", 5.0, Coordinate::new(f64::NAN, 0.0)),
        make_record_at("here", "Here", 1.0, LONDON),
    ];
    let geo = GeoContext::new(LONDON).with_radius(1.0);
    let ranked = rank(&records, "", Some(&geo));

    assert_eq!(ids(&ranked), vec!["here", "broken"]);
    assert_eq!(ranked[1].distance_km, None);
}

#[test]
fn test_zero_radius_keeps_exact_matches() {
    let records = vec![make_record_at("here", "Here", 3.0, LONDON)];
    let ranked = rank(&records, "", Some(&GeoContext::new(LONDON).with_radius(0.0)));
    assert_eq!(ids(&ranked), vec!["here"]);
}

#[test]
fn test_unicode_query_and_fields() {
    let mut record = make_record("u", "Pâtisserie Ménard", 4.0);
    record.locality = "Île-de-France".to_string();

    let ranked = rank(&[record], "PÂTISSERIE île", None);
    assert!(ranked[0].score.unwrap() > 0.4 * 4.0 / 5.0);
}

#[test]
fn test_very_long_query() {
    let records = vec![make_record("a", "Alpha", 3.0)];
    let query = "alpha ".repeat(2_000);
    let ranked = rank(&records, &query, None);

    // Every keyword hits the name only: 3.0 / 8.0 regardless of repetition
    let expected = 3.0 / 8.0 * 0.6 + 3.0 / 5.0 * 0.4;
    assert!((ranked[0].score.unwrap() - expected).abs() < 1e-9);
}
