use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use uuid::Uuid;

use crate::core::error::Result;
use crate::core::extractor::{AppJson, AppPath, AppQuery};
use crate::features::users::dtos::{CreateUserDto, UserEmailQuery};
use crate::features::users::models::User;
use crate::features::users::services::UserService;
use crate::shared::types::{ApiResponse, Meta};
use crate::shared::validation::validated;

/// Register a new user
#[utoipa::path(
    post,
    path = "/api/users",
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "User successfully created", body = ApiResponse<User>),
        (status = 400, description = "Bad request - Invalid input data"),
        (status = 409, description = "Email already registered")
    ),
    tag = "users"
)]
pub async fn create_user(
    State(service): State<Arc<UserService>>,
    AppJson(dto): AppJson<CreateUserDto>,
) -> Result<(StatusCode, Json<ApiResponse<User>>)> {
    let dto = validated(dto)?;

    let user = service.create_user(dto.into()).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(user), None, None)),
    ))
}

/// List all users
#[utoipa::path(
    get,
    path = "/api/users",
    responses(
        (status = 200, description = "Users successfully retrieved", body = ApiResponse<Vec<User>>),
    ),
    tag = "users"
)]
pub async fn list_users(
    State(service): State<Arc<UserService>>,
) -> Result<Json<ApiResponse<Vec<User>>>> {
    let users = service.list_users().await?;
    let meta = Meta::total(users.len());
    Ok(Json(ApiResponse::success(Some(users), None, Some(meta))))
}

/// Get user by ID
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    params(
        ("id" = Uuid, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User found", body = ApiResponse<User>),
        (status = 404, description = "User not found")
    ),
    tag = "users"
)]
pub async fn get_user(
    State(service): State<Arc<UserService>>,
    AppPath(id): AppPath<Uuid>,
) -> Result<Json<ApiResponse<User>>> {
    let user = service.get_user_by_id(id).await?;
    Ok(Json(ApiResponse::success(Some(user), None, None)))
}

/// Get user by email
#[utoipa::path(
    get,
    path = "/api/users/by-email",
    params(UserEmailQuery),
    responses(
        (status = 200, description = "User found", body = ApiResponse<User>),
        (status = 404, description = "User not found")
    ),
    tag = "users"
)]
pub async fn get_user_by_email(
    State(service): State<Arc<UserService>>,
    AppQuery(query): AppQuery<UserEmailQuery>,
) -> Result<Json<ApiResponse<User>>> {
    let user = service.get_user_by_email(&query.email).await?;
    Ok(Json(ApiResponse::success(Some(user), None, None)))
}
