use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use uuid::Uuid;

use crate::core::error::Result;
use crate::core::extractor::{AppJson, AppPath};
use crate::features::parking_spots::dtos::{CreateParkingSpotDto, ParkingSpotListDto};
use crate::features::parking_spots::models::ParkingSpot;
use crate::features::parking_spots::services::ParkingSpotService;
use crate::shared::types::{ApiResponse, Meta};
use crate::shared::validation::validated;

/// Create a new parking spot
#[utoipa::path(
    post,
    path = "/api/parking-spots",
    request_body = CreateParkingSpotDto,
    responses(
        (status = 201, description = "Parking spot successfully created", body = ApiResponse<ParkingSpot>),
        (status = 400, description = "Bad request - Invalid input data")
    ),
    tag = "parking-spots"
)]
pub async fn create_parking_spot(
    State(service): State<Arc<ParkingSpotService>>,
    AppJson(dto): AppJson<CreateParkingSpotDto>,
) -> Result<(StatusCode, Json<ApiResponse<ParkingSpot>>)> {
    let dto = validated(dto)?;

    let spot = service.create(dto.into()).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(spot), None, None)),
    ))
}

/// List all parking spots
#[utoipa::path(
    get,
    path = "/api/parking-spots",
    responses(
        (status = 200, description = "Parking spots successfully retrieved", body = ApiResponse<ParkingSpotListDto>),
    ),
    tag = "parking-spots"
)]
pub async fn list_parking_spots(
    State(service): State<Arc<ParkingSpotService>>,
) -> Result<Json<ApiResponse<ParkingSpotListDto>>> {
    let list = service.list().await?;
    let meta = Meta::total(list.parking_spots.len());
    Ok(Json(ApiResponse::success(Some(list), None, Some(meta))))
}

/// Delete a parking spot
#[utoipa::path(
    delete,
    path = "/api/parking-spots/{id}",
    params(
        ("id" = Uuid, Path, description = "Parking spot ID")
    ),
    responses(
        (status = 200, description = "Parking spot deleted"),
        (status = 400, description = "Malformed ID"),
        (status = 404, description = "Parking spot not found")
    ),
    tag = "parking-spots"
)]
pub async fn delete_parking_spot(
    State(service): State<Arc<ParkingSpotService>>,
    AppPath(id): AppPath<Uuid>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Parking spot deleted".to_string()),
        None,
    )))
}
