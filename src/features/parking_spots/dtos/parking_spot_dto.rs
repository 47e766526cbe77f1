use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::parking_spots::models::{CreateParkingSpotInput, ParkingSpot};

/// Request DTO for creating a parking spot
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateParkingSpotDto {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    /// Stored as null when omitted
    pub description: Option<String>,

    #[validate(range(min = -90.0, max = 90.0, message = "Latitude must be between -90 and 90"))]
    pub latitude: f64,

    #[validate(range(
        min = -180.0,
        max = 180.0,
        message = "Longitude must be between -180 and 180"
    ))]
    pub longitude: f64,

    /// Defaults to false when omitted
    pub paid: Option<bool>,
}

impl From<CreateParkingSpotDto> for CreateParkingSpotInput {
    fn from(dto: CreateParkingSpotDto) -> Self {
        Self {
            name: dto.name,
            description: dto.description,
            latitude: dto.latitude,
            longitude: dto.longitude,
            paid: dto.paid,
        }
    }
}

/// Response DTO for listing parking spots
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ParkingSpotListDto {
    pub parking_spots: Vec<ParkingSpot>,
}
