use crate::models::{BoundingBox, Candidate};
use crate::services::store::{CandidateStore, StoreError};

/// Retrieve structurally valid candidates inside a bounding box.
///
/// Issues one latitude-range query against the store, then filters
/// longitude locally — the store is never assumed to filter by longitude
/// or true radius. Records missing either coordinate are dropped here;
/// that is a data-quality tolerance, not an error.
pub async fn candidates_in_box<S: CandidateStore>(
    store: &S,
    bbox: &BoundingBox,
) -> Result<Vec<Candidate>, StoreError> {
    let records = store
        .query_by_latitude_range(bbox.min_lat, bbox.max_lat)
        .await?;

    let candidates = records
        .into_iter()
        .filter_map(|record| {
            let Some(position) = record.position() else {
                tracing::debug!("Skipping driver {} with missing coordinates", record.id);
                return None;
            };

            if position.lng < bbox.min_lng || position.lng > bbox.max_lng {
                return None;
            }

            tracing::trace!(
                "Driver {}: duty_state={:?} having_task={:?} is_online={:?}",
                record.id,
                record.duty_state,
                record.having_task,
                record.is_online
            );

            Some(Candidate {
                id: record.id,
                name: record.name,
                position,
            })
        })
        .collect();

    Ok(candidates)
}
