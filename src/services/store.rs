use crate::models::DriverRecord;
use thiserror::Error;

/// Errors surfaced by a spatial candidate store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("store returned error: {0}")]
    Api(String),

    #[error("invalid response format: {0}")]
    InvalidResponse(String),
}

/// A spatial candidate store the engine can query for driver records.
///
/// The store is only assumed to filter by a latitude range; longitude and
/// true-radius filtering stay with the engine. Implementations surface
/// failures as-is — retry and backoff policy belongs to the client, not
/// the engine.
#[allow(async_fn_in_trait)]
pub trait CandidateStore {
    /// Fetch all raw driver records whose latitude lies in
    /// `[min_lat, max_lat]`. Record order is store-defined and not
    /// guaranteed stable across calls.
    async fn query_by_latitude_range(
        &self,
        min_lat: f64,
        max_lat: f64,
    ) -> Result<Vec<DriverRecord>, StoreError>;
}
