use utoipa::{Modify, OpenApi};

use crate::features::parking_spots::{
    dtos as parking_spots_dtos, handlers as parking_spots_handlers,
    models as parking_spots_models,
};
use crate::features::settings::{
    dtos as settings_dtos, handlers as settings_handlers, models as settings_models,
};
use crate::features::users::{
    dtos as users_dtos, handlers as users_handlers, models as users_models,
};
use crate::shared::models::BaseModel;
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Parking spots
        parking_spots_handlers::create_parking_spot,
        parking_spots_handlers::list_parking_spots,
        parking_spots_handlers::delete_parking_spot,
        // Users
        users_handlers::create_user,
        users_handlers::list_users,
        users_handlers::get_user,
        users_handlers::get_user_by_email,
        // Settings
        settings_handlers::create_settings,
        settings_handlers::get_settings_by_user_id,
        settings_handlers::update_settings,
    ),
    components(
        schemas(
            // Shared
            Meta,
            BaseModel,
            // Parking spots
            parking_spots_models::ParkingSpot,
            parking_spots_dtos::CreateParkingSpotDto,
            parking_spots_dtos::ParkingSpotListDto,
            ApiResponse<parking_spots_models::ParkingSpot>,
            ApiResponse<parking_spots_dtos::ParkingSpotListDto>,
            // Users
            users_models::User,
            users_dtos::CreateUserDto,
            ApiResponse<users_models::User>,
            ApiResponse<Vec<users_models::User>>,
            // Settings
            settings_models::Setting,
            settings_dtos::CreateSettingsDto,
            settings_dtos::UpdateSettingsDto,
            ApiResponse<settings_models::Setting>,
        )
    ),
    tags(
        (name = "parking-spots", description = "Parking spot catalogue"),
        (name = "users", description = "User registration and lookup"),
        (name = "settings", description = "Per-user notification settings"),
    ),
    info(
        title = "Spotly API",
        version = "0.1.0",
        description = "API documentation for Spotly",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
