use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A latitude/longitude pair in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Geospatial bounding box used to pre-filter store queries
#[derive(Debug, Clone, Copy)]
pub struct BoundingBox {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lng: f64,
    pub max_lng: f64,
}

/// Raw driver document as returned by the store
///
/// The store does not validate its own data, so every field beyond the
/// document id is optional. Records without both coordinates are skipped
/// at the retrieval boundary rather than treated as errors.
#[derive(Debug, Clone, Default)]
pub struct DriverRecord {
    pub id: String,
    pub name: Option<String>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub duty_state: Option<String>,
    pub having_task: Option<bool>,
    pub is_online: Option<bool>,
}

impl DriverRecord {
    /// Position of the driver, if both coordinates are present
    pub fn position(&self) -> Option<Coordinate> {
        Some(Coordinate {
            lat: self.lat?,
            lng: self.lng?,
        })
    }
}

/// A driver record that passed structural validation
#[derive(Debug, Clone)]
pub struct Candidate {
    pub id: String,
    pub name: Option<String>,
    pub position: Coordinate,
}

/// One driver entry in an allocation result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DriverSummary {
    pub driver_id: String,
    pub name: Option<String>,
    pub lat: f64,
    pub lng: f64,
    pub distance_km: f64,
}

impl DriverSummary {
    /// Build a summary from a candidate and its exact distance.
    ///
    /// The wire format carries the distance rounded to two decimals.
    /// Filtering and bucket assignment happen on the exact value before
    /// this point.
    pub fn new(candidate: Candidate, distance_km: f64) -> Self {
        Self {
            driver_id: candidate.id,
            name: candidate.name,
            lat: candidate.position.lat,
            lng: candidate.position.lng,
            distance_km: (distance_km * 100.0).round() / 100.0,
        }
    }
}

/// Flat, distance-sorted allocation result ("one_by_one")
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedAllocation {
    pub pickup: Coordinate,
    pub max_radius_km: f64,
    pub driver_summaries: Vec<DriverSummary>,
}

/// Distance-banded allocation result ("batchwise")
///
/// Every configured band appears in `driver_summaries` even when empty;
/// consumers rely on the complete band structure for rendering. Band
/// insertion order is preserved on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BucketedAllocation {
    pub pickup: Coordinate,
    pub max_radius_km: f64,
    pub increment_km: f64,
    pub total_drivers: usize,
    pub driver_summaries: IndexMap<String, Vec<DriverSummary>>,
}
