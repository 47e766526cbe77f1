use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::core::database::{constraint_violation, ConstraintViolation};
use crate::core::error::{AppError, Result};
use crate::features::settings::models::{
    CreateSettingsInput, PatchSettingsInput, Setting, SettingRow,
};
use crate::shared::models::BaseModel;
use crate::shared::validation::validated_record;

/// Settings persistence.
///
/// Unlike users, a missing settings record is an expected state, so lookups
/// by user return `None` instead of failing.
#[async_trait]
pub trait SettingRepository: Send + Sync {
    /// Fails with `Conflict` when the user already has settings and with
    /// `BadRequest` when the user does not exist
    async fn create_settings(&self, input: CreateSettingsInput) -> Result<Setting>;
    async fn get_settings_by_user_id(&self, user_id: Uuid) -> Result<Option<Setting>>;
    /// Writes only the supplied fields; `updated_at` always moves forward by at
    /// least one millisecond, the precision it is rendered with
    async fn update_settings(&self, patch: PatchSettingsInput) -> Result<Setting>;
}

pub fn to_domain(row: SettingRow) -> Result<Setting> {
    validated_record(Setting {
        base: BaseModel::new(row.id, row.created_at, row.updated_at),
        notifications_radius: row.notifications_radius,
        show_paid_spots: row.show_paid_spots,
        show_unpaid_spots: row.show_unpaid_spots,
        user_id: row.user_id.to_string(),
    })
}

pub fn settings_exist(user_id: Uuid) -> AppError {
    AppError::Conflict(format!("Settings for user {} already exist", user_id))
}

fn settings_not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Settings with id {} not found", id))
}

fn handle_db_error(e: sqlx::Error, user_id: Uuid) -> AppError {
    match constraint_violation(&e) {
        Some(ConstraintViolation::Unique) => settings_exist(user_id),
        Some(ConstraintViolation::ForeignKey) => {
            AppError::BadRequest(format!("User with id {} does not exist", user_id))
        }
        None => {
            tracing::error!("Failed to create settings: {:?}", e);
            AppError::Database(e)
        }
    }
}

pub struct PgSettingRepository {
    pool: PgPool,
}

impl PgSettingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SettingRepository for PgSettingRepository {
    async fn create_settings(&self, input: CreateSettingsInput) -> Result<Setting> {
        let row = sqlx::query_as::<_, SettingRow>(
            r#"
            INSERT INTO settings (notifications_radius, show_paid_spots, show_unpaid_spots, user_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id, notifications_radius, show_paid_spots, show_unpaid_spots, user_id,
                      created_at, updated_at
            "#,
        )
        .bind(input.notifications_radius)
        .bind(input.show_paid_spots)
        .bind(input.show_unpaid_spots)
        .bind(input.user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| handle_db_error(e, input.user_id))?;

        to_domain(row)
    }

    async fn get_settings_by_user_id(&self, user_id: Uuid) -> Result<Option<Setting>> {
        let row = sqlx::query_as::<_, SettingRow>(
            r#"
            SELECT id, notifications_radius, show_paid_spots, show_unpaid_spots, user_id,
                   created_at, updated_at
            FROM settings
            WHERE user_id = $1
            LIMIT 1
            "#,
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get settings by user id: {:?}", e);
            AppError::Database(e)
        })?;

        row.map(to_domain).transpose()
    }

    async fn update_settings(&self, patch: PatchSettingsInput) -> Result<Setting> {
        let row = sqlx::query_as::<_, SettingRow>(
            r#"
            UPDATE settings
            SET notifications_radius = COALESCE($1, notifications_radius),
                show_paid_spots = COALESCE($2, show_paid_spots),
                show_unpaid_spots = COALESCE($3, show_unpaid_spots),
                updated_at = GREATEST(clock_timestamp(), updated_at + INTERVAL '1 millisecond')
            WHERE id = $4
            RETURNING id, notifications_radius, show_paid_spots, show_unpaid_spots, user_id,
                      created_at, updated_at
            "#,
        )
        .bind(patch.notifications_radius)
        .bind(patch.show_paid_spots)
        .bind(patch.show_unpaid_spots)
        .bind(patch.id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update settings: {:?}", e);
            AppError::Database(e)
        })?
        .ok_or_else(|| settings_not_found(patch.id))?;

        to_domain(row)
    }
}
