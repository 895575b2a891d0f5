// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    BoundingBox, BucketedAllocation, Candidate, Coordinate, DriverRecord, DriverSummary,
    RankedAllocation,
};
pub use requests::{AllocationStrategy, AutoAllocationQuery};
pub use responses::{ErrorResponse, HealthResponse};
