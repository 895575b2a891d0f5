//! Dispatch Algo - driver proximity and auto-allocation service
//!
//! This library implements the driver allocation engine used by the
//! dispatch backend: bounding-box pre-filtering against a spatial driver
//! store, exact great-circle distances and two allocation strategies
//! (flat ranked list, distance-banded grouping).

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{
    calculate_bounding_box, haversine_distance, AllocationError, Allocator,
};
pub use crate::models::{
    BucketedAllocation, Candidate, Coordinate, DriverRecord, DriverSummary, RankedAllocation,
};
pub use crate::services::{CandidateStore, FirestoreClient, StoreError};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        // Verify that the library exports work correctly
        let bbox = calculate_bounding_box(Coordinate::new(40.7128, -74.0060), 10.0);
        assert!(bbox.min_lat < 40.7128);
    }
}
