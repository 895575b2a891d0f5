use std::cmp::Ordering;

use indexmap::IndexMap;
use thiserror::Error;

use crate::core::buckets::{bucket_index, build_buckets, DistanceBucket};
use crate::core::geo::{calculate_bounding_box, haversine_distance};
use crate::core::retrieve::candidates_in_box;
use crate::models::{BucketedAllocation, Candidate, Coordinate, DriverSummary, RankedAllocation};
use crate::services::store::{CandidateStore, StoreError};

/// Errors produced by an allocation call
#[derive(Debug, Error)]
pub enum AllocationError {
    #[error("latitude {0} is outside the valid range [-90, 90]")]
    InvalidLatitude(f64),

    #[error("longitude {0} is outside the valid range [-180, 180]")]
    InvalidLongitude(f64),

    #[error("{name} must be greater than zero, got {value}")]
    NonPositiveParameter { name: &'static str, value: f64 },

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl AllocationError {
    /// True for parameter errors raised before any store I/O
    pub fn is_validation(&self) -> bool {
        !matches!(self, Self::Store(_))
    }
}

/// Driver proximity engine
///
/// Stateless request/response computation over an injected candidate
/// store: every call computes a bounding box, retrieves candidates,
/// applies the exact distance filter and ranks or groups the survivors.
/// The only side effect is the single read query per call, so concurrent
/// allocations need no coordination.
#[derive(Debug, Clone)]
pub struct Allocator<S> {
    store: S,
}

impl<S: CandidateStore> Allocator<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Flat, distance-sorted allocation within `max_radius_km`.
    ///
    /// Validation failures are raised before the store is queried; store
    /// failures propagate unchanged.
    pub async fn allocate_one_by_one(
        &self,
        pickup: Coordinate,
        max_radius_km: f64,
    ) -> Result<RankedAllocation, AllocationError> {
        validate_coordinate(pickup)?;
        validate_positive("max_radius", max_radius_km)?;

        let bbox = calculate_bounding_box(pickup, max_radius_km);
        let candidates = candidates_in_box(&self.store, &bbox).await?;

        let driver_summaries = rank_candidates(pickup, max_radius_km, candidates);

        Ok(RankedAllocation {
            pickup,
            max_radius_km,
            driver_summaries,
        })
    }

    /// Distance-banded allocation within `max_radius_km`, in bands of
    /// `increment_km`.
    pub async fn allocate_batchwise(
        &self,
        pickup: Coordinate,
        max_radius_km: f64,
        increment_km: f64,
    ) -> Result<BucketedAllocation, AllocationError> {
        validate_coordinate(pickup)?;
        validate_positive("max_radius", max_radius_km)?;
        validate_positive("increment", increment_km)?;

        let buckets = build_buckets(max_radius_km, increment_km);

        let bbox = calculate_bounding_box(pickup, max_radius_km);
        let candidates = candidates_in_box(&self.store, &bbox).await?;

        let (driver_summaries, total_drivers) =
            group_candidates(pickup, max_radius_km, &buckets, candidates);

        Ok(BucketedAllocation {
            pickup,
            max_radius_km,
            increment_km,
            total_drivers,
            driver_summaries,
        })
    }
}

fn validate_coordinate(pickup: Coordinate) -> Result<(), AllocationError> {
    if !(-90.0..=90.0).contains(&pickup.lat) {
        return Err(AllocationError::InvalidLatitude(pickup.lat));
    }
    if !(-180.0..=180.0).contains(&pickup.lng) {
        return Err(AllocationError::InvalidLongitude(pickup.lng));
    }
    Ok(())
}

fn validate_positive(name: &'static str, value: f64) -> Result<(), AllocationError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(AllocationError::NonPositiveParameter { name, value })
    }
}

/// Keep candidates within the radius and sort ascending by distance.
///
/// The sort is stable, so equal distances keep retrieval order.
pub fn rank_candidates(
    pickup: Coordinate,
    max_radius_km: f64,
    candidates: Vec<Candidate>,
) -> Vec<DriverSummary> {
    let mut summaries: Vec<DriverSummary> = candidates
        .into_iter()
        .filter_map(|candidate| {
            let d = haversine_distance(candidate.position, pickup);
            if d <= max_radius_km {
                Some(DriverSummary::new(candidate, d))
            } else {
                None
            }
        })
        .collect();

    sort_by_distance(&mut summaries);
    summaries
}

/// Partition candidates into the given distance bands.
///
/// Every band is present in the output even when empty. Returns the
/// grouped summaries and the total number of drivers placed.
pub fn group_candidates(
    pickup: Coordinate,
    max_radius_km: f64,
    buckets: &[DistanceBucket],
    candidates: Vec<Candidate>,
) -> (IndexMap<String, Vec<DriverSummary>>, usize) {
    let mut groups: IndexMap<String, Vec<DriverSummary>> = buckets
        .iter()
        .map(|bucket| (bucket.label(), Vec::new()))
        .collect();
    let mut total = 0;

    for candidate in candidates {
        let d = haversine_distance(candidate.position, pickup);
        if d > max_radius_km {
            continue;
        }
        let Some(idx) = bucket_index(d, buckets) else {
            continue;
        };
        if let Some((_, group)) = groups.get_index_mut(idx) {
            group.push(DriverSummary::new(candidate, d));
            total += 1;
        }
    }

    for group in groups.values_mut() {
        sort_by_distance(group);
    }

    (groups, total)
}

fn sort_by_distance(summaries: &mut [DriverSummary]) {
    summaries.sort_by(|a, b| {
        a.distance_km
            .partial_cmp(&b.distance_km)
            .unwrap_or(Ordering::Equal)
    });
}
