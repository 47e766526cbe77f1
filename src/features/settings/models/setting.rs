use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::shared::models::BaseModel;

/// Database record for a user's notification settings
#[derive(Debug, Clone, FromRow)]
pub struct SettingRow {
    pub id: Uuid,
    pub notifications_radius: f64,
    pub show_paid_spots: bool,
    pub show_unpaid_spots: bool,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Notification settings; at most one per user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Setting {
    #[serde(flatten)]
    #[validate(nested)]
    pub base: BaseModel,

    pub notifications_radius: f64,
    pub show_paid_spots: bool,
    pub show_unpaid_spots: bool,

    #[validate(custom(function = "crate::shared::validation::validate_uuid"))]
    pub user_id: String,
}

#[derive(Debug, Clone)]
pub struct CreateSettingsInput {
    pub notifications_radius: f64,
    pub show_paid_spots: bool,
    pub show_unpaid_spots: bool,
    pub user_id: Uuid,
}

/// Partial update; `None` leaves the stored value untouched
#[derive(Debug, Clone)]
pub struct PatchSettingsInput {
    pub id: Uuid,
    pub notifications_radius: Option<f64>,
    pub show_paid_spots: Option<bool>,
    pub show_unpaid_spots: Option<bool>,
}
