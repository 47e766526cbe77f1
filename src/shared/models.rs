use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::shared::validation::{to_iso_string, ISO_DATETIME_REGEX};

/// Fields shared by every stored entity.
///
/// `id` and `created_at` never change after creation; `updated_at` moves on
/// every mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BaseModel {
    #[validate(custom(function = "crate::shared::validation::validate_uuid"))]
    #[schema(example = "0195b2c4-6f4e-7c1a-9d3e-2f1a5b6c7d8e")]
    pub id: String,

    #[validate(regex(
        path = *ISO_DATETIME_REGEX,
        message = "Invalid datetime format. Expected ISO 8601 format."
    ))]
    #[schema(example = "2025-03-01T08:30:00.000Z")]
    pub created_at: String,

    #[validate(regex(
        path = *ISO_DATETIME_REGEX,
        message = "Invalid datetime format. Expected ISO 8601 format."
    ))]
    #[schema(example = "2025-03-01T08:30:00.000Z")]
    pub updated_at: String,
}

impl BaseModel {
    pub fn new(id: Uuid, created_at: DateTime<Utc>, updated_at: DateTime<Utc>) -> Self {
        Self {
            id: id.to_string(),
            created_at: to_iso_string(created_at),
            updated_at: to_iso_string(updated_at),
        }
    }
}
