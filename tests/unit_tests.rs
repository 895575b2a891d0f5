// Unit tests for the dispatch allocation engine

use dispatch_algo::core::{
    buckets::{bucket_index, build_buckets, DistanceBucket},
    geo::{calculate_bounding_box, haversine_distance, is_within_bounding_box},
};
use dispatch_algo::models::Coordinate;

#[test]
fn test_haversine_distance_zero() {
    let point = Coordinate::new(40.7128, -74.0060);
    let distance = haversine_distance(point, point);
    assert_eq!(distance, 0.0);
}

#[test]
fn test_haversine_distance_manhattan_to_brooklyn() {
    // Manhattan to Brooklyn is approximately 5-10 km
    let manhattan = Coordinate::new(40.7580, -73.9855);
    let brooklyn = Coordinate::new(40.6782, -73.9442);

    let distance = haversine_distance(manhattan, brooklyn);
    assert!(distance > 5.0 && distance < 15.0);
}

#[test]
fn test_haversine_symmetry() {
    let nyc = Coordinate::new(40.7128, -74.0060);
    let la = Coordinate::new(34.0522, -118.2437);

    assert_eq!(haversine_distance(nyc, la), haversine_distance(la, nyc));
    // NYC to LA is approximately 3944 km
    assert!((haversine_distance(nyc, la) - 3944.0).abs() < 100.0);
}

#[test]
fn test_bounding_box_creation() {
    let bbox = calculate_bounding_box(Coordinate::new(40.7128, -74.0060), 10.0);

    assert!(bbox.min_lat < 40.7128);
    assert!(bbox.max_lat > 40.7128);
    assert!(bbox.min_lng < -74.0060);
    assert!(bbox.max_lng > -74.0060);

    // Latitude span is 20km at 110.574 km per degree
    let lat_span = bbox.max_lat - bbox.min_lat;
    assert!((lat_span - 20.0 / 110.574).abs() < 1e-9);
}

#[test]
fn test_bounding_box_never_rejects_in_radius_point() {
    let center = Coordinate::new(40.0, -73.0);
    let radius_km = 15.0;
    let bbox = calculate_bounding_box(center, radius_km);

    for i in -30..=30 {
        for j in -30..=30 {
            let point = Coordinate::new(
                center.lat + i as f64 * 0.008,
                center.lng + j as f64 * 0.008,
            );
            let d = haversine_distance(center, point);
            if d <= radius_km * 0.99 {
                assert!(
                    is_within_bounding_box(point, &bbox),
                    "point at {:.3}km rejected by the box",
                    d
                );
            }
        }
    }
}

#[test]
fn test_bounding_box_near_pole_is_bounded() {
    let bbox = calculate_bounding_box(Coordinate::new(89.95, 45.0), 25.0);

    assert_eq!(bbox.min_lng, -180.0);
    assert_eq!(bbox.max_lng, 180.0);
    assert!(bbox.max_lat <= 90.0);
}

#[test]
fn test_bucket_walk_with_even_division() {
    let buckets = build_buckets(15.0, 5.0);
    let labels: Vec<String> = buckets.iter().map(DistanceBucket::label).collect();

    assert_eq!(labels, vec!["0-5", "5-10", "10-15"]);
}

#[test]
fn test_bucket_walk_with_remainder() {
    let buckets = build_buckets(12.0, 5.0);
    let labels: Vec<String> = buckets.iter().map(DistanceBucket::label).collect();

    assert_eq!(labels, vec!["0-5", "5-10", "10-12"]);
}

#[test]
fn test_bucket_count_is_ceil() {
    assert_eq!(build_buckets(15.0, 5.0).len(), 3);
    assert_eq!(build_buckets(12.0, 5.0).len(), 3);
    assert_eq!(build_buckets(4.0, 5.0).len(), 1);
    assert_eq!(build_buckets(0.5, 0.2).len(), 3);
}

#[test]
fn test_bucket_membership_rules() {
    let buckets = build_buckets(15.0, 5.0);

    // Half-open on interior bounds, closed on the final bound
    assert_eq!(bucket_index(0.0, &buckets), Some(0));
    assert_eq!(bucket_index(5.0, &buckets), Some(1));
    assert_eq!(bucket_index(9.99, &buckets), Some(1));
    assert_eq!(bucket_index(10.0, &buckets), Some(2));
    assert_eq!(bucket_index(15.0, &buckets), Some(2));
    assert_eq!(bucket_index(15.01, &buckets), None);
}
