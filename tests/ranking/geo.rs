//! Geographic filtering and re-ranking.

use super::common::{ids, make_record, make_record_at, north_of, sample_directory, CAMDEN, LONDON, PARIS};
use vendex::{haversine_km, rank, GeoContext, Ranker};

#[test]
fn test_london_to_paris() {
    let km = haversine_km(LONDON, PARIS);
    assert!((341.5..=345.5).contains(&km), "London-Paris = {} km", km);
}

#[test]
fn test_north_of_helper_is_exact() {
    let km = haversine_km(LONDON, north_of(LONDON, 15.0));
    assert!((km - 15.0).abs() < 1e-6, "got {} km", km);
}

#[test]
fn test_radius_excludes_far_and_keeps_near() {
    let records = vec![
        make_record_at("far", "Far Florist", 5.0, north_of(LONDON, 15.0)),
        make_record_at("near", "Near Florist", 3.0, north_of(LONDON, 9.0)),
    ];
    let geo = GeoContext::new(LONDON).with_radius(10.0);
    let ranked = rank(&records, "florist", Some(&geo));

    assert_eq!(ids(&ranked), vec!["near"]);
    let distance = ranked[0].distance_km.unwrap();
    assert!((distance - 9.0).abs() < 1e-6);
}

#[test]
fn test_coordinateless_record_kept_and_last() {
    let records = vec![
        make_record("mobile", "Mobile Florist", 5.0),
        make_record_at("far", "Far Florist", 3.0, north_of(LONDON, 8.0)),
        make_record_at("near", "Near Florist", 3.0, north_of(LONDON, 2.0)),
    ];
    let geo = GeoContext::new(LONDON).with_radius(10.0);
    let ranked = rank(&records, "florist", Some(&geo));

    assert_eq!(ids(&ranked), vec!["near", "far", "mobile"]);
    assert_eq!(ranked[2].distance_km, None);
}

#[test]
fn test_radius_never_grows_result() {
    let records = sample_directory();
    for radius in [0.0, 1.0, 5.0, 50.0, 500.0] {
        let geo = GeoContext::new(CAMDEN).with_radius(radius);
        assert!(rank(&records, "plumber", Some(&geo)).len() <= records.len());
    }
}

#[test]
fn test_radius_on_sample_directory() {
    let records = sample_directory();
    let geo = GeoContext::new(CAMDEN).with_radius(10.0);
    let ranked = rank(&records, "", Some(&geo));

    // Oxford is ~80 km away; the mobile tailor has no coordinate and stays
    assert!(!ids(&ranked).contains(&"oxford-bakes"));
    assert_eq!(ranked.last().unwrap().record.id, "mobile-tailor");
    assert_eq!(ranked[0].record.id, "rosa-plumbing");
    assert_eq!(ranked.len(), records.len() - 1);
}

#[test]
fn test_geo_without_radius_keeps_everything() {
    let records = sample_directory();
    let ranked = rank(&records, "coffee", Some(&GeoContext::new(PARIS)));
    assert_eq!(ranked.len(), records.len());

    let distances: Vec<f64> = ranked.iter().filter_map(|r| r.distance_km).collect();
    for pair in distances.windows(2) {
        assert!(pair[0] <= pair[1]);
    }
}

#[test]
fn test_equal_distances_keep_relevance_order() {
    let spot = north_of(LONDON, 3.0);
    let records = vec![
        make_record_at("weak", "Weak Florist", 2.0, spot),
        make_record_at("strong", "Strong Florist", 5.0, spot),
    ];
    let ranked = rank(&records, "florist", Some(&GeoContext::new(LONDON)));

    // Same distance, so the higher relevance score stays first
    assert_eq!(ids(&ranked), vec!["strong", "weak"]);
}

#[test]
fn test_standalone_distance_ranking() {
    let records = vec![
        make_record("nowhere", "Nowhere", 5.0),
        make_record_at("paris", "Paris", 5.0, PARIS),
        make_record_at("london", "London", 1.0, LONDON),
    ];
    let ranked = Ranker::default().rank_by_distance(&records, &GeoContext::new(LONDON));

    assert_eq!(ids(&ranked), vec!["london", "paris", "nowhere"]);
    assert!(ranked.iter().all(|r| r.score.is_none()));
}

#[test]
fn test_distance_only_set_when_geo_active() {
    let records = sample_directory();
    assert!(rank(&records, "cafe", None)
        .iter()
        .all(|r| r.distance_km.is_none()));
}
