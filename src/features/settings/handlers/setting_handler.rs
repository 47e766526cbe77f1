use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::core::extractor::{AppJson, AppPath, AppQuery};
use crate::features::settings::dtos::{
    CreateSettingsDto, SettingsIdQuery, SettingsOwnerQuery, UpdateSettingsDto,
};
use crate::features::settings::models::Setting;
use crate::features::settings::services::SettingService;
use crate::shared::types::ApiResponse;

/// Create settings for a user
#[utoipa::path(
    post,
    path = "/api/settings",
    params(SettingsOwnerQuery),
    request_body = CreateSettingsDto,
    responses(
        (status = 201, description = "Settings successfully created", body = ApiResponse<Setting>),
        (status = 400, description = "Bad request - Invalid input data or unknown user"),
        (status = 409, description = "Settings already exist for the user")
    ),
    tag = "settings"
)]
pub async fn create_settings(
    State(service): State<Arc<SettingService>>,
    AppQuery(query): AppQuery<SettingsOwnerQuery>,
    AppJson(dto): AppJson<CreateSettingsDto>,
) -> Result<(StatusCode, Json<ApiResponse<Setting>>)> {
    let setting = service.create_settings(dto, query.user_id).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(setting), None, None)),
    ))
}

/// Get settings by user ID
#[utoipa::path(
    get,
    path = "/api/settings/user/{user_id}",
    params(
        ("user_id" = Uuid, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Settings successfully retrieved", body = ApiResponse<Setting>),
        (status = 404, description = "Settings not found for the user")
    ),
    tag = "settings"
)]
pub async fn get_settings_by_user_id(
    State(service): State<Arc<SettingService>>,
    AppPath(user_id): AppPath<Uuid>,
) -> Result<Json<ApiResponse<Setting>>> {
    let setting = service
        .get_settings_by_user_id(user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Settings for user {} not found", user_id)))?;

    Ok(Json(ApiResponse::success(Some(setting), None, None)))
}

/// Partially update settings
#[utoipa::path(
    patch,
    path = "/api/settings",
    params(SettingsIdQuery),
    request_body = UpdateSettingsDto,
    responses(
        (status = 200, description = "Settings successfully updated", body = ApiResponse<Setting>),
        (status = 400, description = "Bad request - Invalid input data"),
        (status = 404, description = "Settings not found")
    ),
    tag = "settings"
)]
pub async fn update_settings(
    State(service): State<Arc<SettingService>>,
    AppQuery(query): AppQuery<SettingsIdQuery>,
    AppJson(dto): AppJson<UpdateSettingsDto>,
) -> Result<Json<ApiResponse<Setting>>> {
    let setting = service.update_settings(dto, query.id).await?;
    Ok(Json(ApiResponse::success(Some(setting), None, None)))
}
