use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

/// Request DTO for creating settings; the owner comes from the `userId` query param
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateSettingsDto {
    pub notifications_radius: f64,
    pub show_paid_spots: bool,
    pub show_unpaid_spots: bool,
}

/// Request DTO for patching settings; omitted fields keep their stored value
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSettingsDto {
    pub notifications_radius: Option<f64>,
    pub show_paid_spots: Option<bool>,
    pub show_unpaid_spots: Option<bool>,
}

/// Query params identifying the user the settings belong to
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct SettingsOwnerQuery {
    /// User ID
    pub user_id: Uuid,
}

/// Query params identifying a settings record
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SettingsIdQuery {
    /// Settings ID
    pub id: Uuid,
}
