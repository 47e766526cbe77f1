use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::shared::models::BaseModel;

/// Database record for a user
#[derive(Debug, Clone, FromRow)]
pub struct UserRow {
    pub id: Uuid,
    pub name: String,
    pub surname: String,
    pub phone: Option<String>,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(flatten)]
    #[validate(nested)]
    pub base: BaseModel,

    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    #[validate(length(min = 1, message = "Surname is required"))]
    pub surname: String,

    pub phone: Option<String>,

    /// Unique across users
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
}

#[derive(Debug, Clone)]
pub struct CreateUserInput {
    pub name: String,
    pub surname: String,
    pub phone: Option<String>,
    pub email: String,
}
