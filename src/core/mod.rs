// Core algorithm exports
pub mod allocator;
pub mod buckets;
pub mod geo;
pub mod retrieve;

pub use allocator::{group_candidates, rank_candidates, AllocationError, Allocator};
pub use buckets::{bucket_index, build_buckets, DistanceBucket};
pub use geo::{calculate_bounding_box, haversine_distance, is_within_bounding_box};
pub use retrieve::candidates_in_box;
