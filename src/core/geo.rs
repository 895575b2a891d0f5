use crate::models::{BoundingBox, Coordinate};

/// Earth's radius in kilometers
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Kilometers per degree of latitude
const KM_PER_DEGREE_LAT: f64 = 110.574;

/// Kilometers per degree of longitude at the equator
const KM_PER_DEGREE_LNG: f64 = 111.320;

/// Calculate the Haversine distance between two points in kilometers
///
/// Pure and total: defined for every valid coordinate pair, including
/// identical points (distance 0).
#[inline]
pub fn haversine_distance(a: Coordinate, b: Coordinate) -> f64 {
    let lat_a_rad = a.lat.to_radians();
    let lat_b_rad = b.lat.to_radians();
    let delta_lat = (b.lat - a.lat).to_radians();
    let delta_lng = (b.lng - a.lng).to_radians();

    let h = (delta_lat / 2.0).sin().powi(2)
        + lat_a_rad.cos() * lat_b_rad.cos() * (delta_lng / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c
}

/// Calculate a bounding box around a center point
///
/// This is a conservative, over-inclusive approximation of the radius
/// circle, used only to cheapen the store query; the exact Haversine
/// check stays authoritative. Near the poles the longitude delta
/// diverges, so the longitude bounds clamp to the full valid range
/// rather than propagating an unbounded or NaN value.
pub fn calculate_bounding_box(center: Coordinate, radius_km: f64) -> BoundingBox {
    let lat_delta = radius_km / KM_PER_DEGREE_LAT;

    // 1 degree of longitude shrinks with latitude
    let cos_lat = center.lat.to_radians().cos().abs();
    let lng_delta = radius_km / (KM_PER_DEGREE_LNG * cos_lat);

    let (min_lng, max_lng) = if !lng_delta.is_finite() || lng_delta >= 180.0 {
        (-180.0, 180.0)
    } else {
        (
            (center.lng - lng_delta).max(-180.0),
            (center.lng + lng_delta).min(180.0),
        )
    };

    BoundingBox {
        min_lat: (center.lat - lat_delta).max(-90.0),
        max_lat: (center.lat + lat_delta).min(90.0),
        min_lng,
        max_lng,
    }
}

/// Check if a point is within a bounding box
#[inline]
pub fn is_within_bounding_box(point: Coordinate, bbox: &BoundingBox) -> bool {
    point.lat >= bbox.min_lat
        && point.lat <= bbox.max_lat
        && point.lng >= bbox.min_lng
        && point.lng <= bbox.max_lng
}
