use serde::{Deserialize, Serialize};
use validator::Validate;

/// Allocation strategy selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AllocationStrategy {
    #[default]
    OneByOne,
    Batchwise,
}

/// Query parameters for the auto-allocation endpoint
///
/// The legacy 15 km radius and 5 km increment defaults live here, at the
/// HTTP boundary; the engine itself takes both parameters explicitly.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AutoAllocationQuery {
    #[validate(range(min = -90.0, max = 90.0))]
    pub pickup_lat: f64,
    #[validate(range(min = -180.0, max = 180.0))]
    pub pickup_lng: f64,
    #[serde(rename = "type", default)]
    pub strategy: AllocationStrategy,
    #[validate(range(exclusive_min = 0.0))]
    #[serde(default = "default_max_radius")]
    pub max_radius: f64,
    #[validate(range(exclusive_min = 0.0))]
    #[serde(default = "default_increment")]
    pub increment: f64,
}

fn default_max_radius() -> f64 {
    15.0
}

fn default_increment() -> f64 {
    5.0
}
