use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::shared::models::BaseModel;

/// Database record for a parking spot
#[derive(Debug, Clone, FromRow)]
pub struct ParkingSpotRow {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub paid: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Parking spot as returned to callers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ParkingSpot {
    #[serde(flatten)]
    #[validate(nested)]
    pub base: BaseModel,

    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    pub description: Option<String>,

    #[validate(range(min = -90.0, max = 90.0, message = "Latitude must be between -90 and 90"))]
    pub latitude: f64,

    #[validate(range(
        min = -180.0,
        max = 180.0,
        message = "Longitude must be between -180 and 180"
    ))]
    pub longitude: f64,

    pub paid: bool,
}

/// Input for persisting a new parking spot
#[derive(Debug, Clone)]
pub struct CreateParkingSpotInput {
    pub name: String,
    pub description: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    /// Stored as `false` when absent
    pub paid: Option<bool>,
}
