use std::sync::Arc;

use axum::{
    routing::{delete, get},
    Router,
};

use crate::features::parking_spots::handlers;
use crate::features::parking_spots::services::ParkingSpotService;

/// Create routes for the parking spots feature
pub fn routes(service: Arc<ParkingSpotService>) -> Router {
    Router::new()
        .route(
            "/api/parking-spots",
            get(handlers::list_parking_spots).post(handlers::create_parking_spot),
        )
        .route(
            "/api/parking-spots/{id}",
            delete(handlers::delete_parking_spot),
        )
        .with_state(service)
}
