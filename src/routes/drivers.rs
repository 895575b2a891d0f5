use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use validator::Validate;

use crate::core::{AllocationError, Allocator};
use crate::models::{AllocationStrategy, AutoAllocationQuery, Coordinate, ErrorResponse, HealthResponse};
use crate::services::FirestoreClient;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub allocator: Arc<Allocator<FirestoreClient>>,
}

/// Configure all driver-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/drivers/auto-allocation", web::get().to(auto_allocation));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Auto-allocation endpoint
///
/// GET /api/drivers/auto-allocation
///
/// Query parameters:
/// - `pickup_lat`, `pickup_lng` (required)
/// - `type`: `one_by_one` (default) or `batchwise`
/// - `max_radius`: km, defaults to 15.0
/// - `increment`: km, defaults to 5.0, batchwise only
async fn auto_allocation(
    state: web::Data<AppState>,
    query: web::Query<AutoAllocationQuery>,
) -> impl Responder {
    if let Err(errors) = query.validate() {
        tracing::info!("Validation failed for auto-allocation request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let pickup = Coordinate::new(query.pickup_lat, query.pickup_lng);

    tracing::info!(
        "Auto-allocation: strategy={:?}, pickup=({}, {}), max_radius={}km",
        query.strategy,
        pickup.lat,
        pickup.lng,
        query.max_radius
    );

    match query.strategy {
        AllocationStrategy::OneByOne => {
            match state
                .allocator
                .allocate_one_by_one(pickup, query.max_radius)
                .await
            {
                Ok(result) => {
                    tracing::debug!("Ranked {} drivers", result.driver_summaries.len());
                    HttpResponse::Ok().json(result)
                }
                Err(e) => allocation_error_response(e),
            }
        }
        AllocationStrategy::Batchwise => {
            match state
                .allocator
                .allocate_batchwise(pickup, query.max_radius, query.increment)
                .await
            {
                Ok(result) => {
                    tracing::debug!(
                        "Grouped {} drivers into {} bands",
                        result.total_drivers,
                        result.driver_summaries.len()
                    );
                    HttpResponse::Ok().json(result)
                }
                Err(e) => allocation_error_response(e),
            }
        }
    }
}

/// Map engine errors to HTTP responses: validation failures are client
/// errors, store failures surface the backend message for diagnostics.
fn allocation_error_response(error: AllocationError) -> HttpResponse {
    if error.is_validation() {
        HttpResponse::BadRequest().json(ErrorResponse {
            error: "Invalid allocation parameters".to_string(),
            message: error.to_string(),
            status_code: 400,
        })
    } else {
        tracing::error!("Driver store query failed: {}", error);
        HttpResponse::InternalServerError().json(ErrorResponse {
            error: "Failed to query drivers".to_string(),
            message: error.to_string(),
            status_code: 500,
        })
    }
}
