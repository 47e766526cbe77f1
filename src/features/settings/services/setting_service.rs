use std::sync::Arc;

use uuid::Uuid;

use crate::core::error::Result;
use crate::features::settings::dtos::{CreateSettingsDto, UpdateSettingsDto};
use crate::features::settings::models::{CreateSettingsInput, PatchSettingsInput, Setting};
use crate::features::settings::repositories::SettingRepository;

/// Service for per-user notification settings
pub struct SettingService {
    repository: Arc<dyn SettingRepository>,
}

impl SettingService {
    pub fn new(repository: Arc<dyn SettingRepository>) -> Self {
        Self { repository }
    }

    /// Create settings owned by `user_id`
    pub async fn create_settings(&self, dto: CreateSettingsDto, user_id: Uuid) -> Result<Setting> {
        let input = CreateSettingsInput {
            notifications_radius: dto.notifications_radius,
            show_paid_spots: dto.show_paid_spots,
            show_unpaid_spots: dto.show_unpaid_spots,
            user_id,
        };

        let setting = self.repository.create_settings(input).await?;
        tracing::info!(
            "Settings created: id={}, user_id={}",
            setting.base.id,
            setting.user_id
        );
        Ok(setting)
    }

    /// `None` when the user has no settings yet
    pub async fn get_settings_by_user_id(&self, user_id: Uuid) -> Result<Option<Setting>> {
        self.repository.get_settings_by_user_id(user_id).await
    }

    pub async fn update_settings(&self, dto: UpdateSettingsDto, id: Uuid) -> Result<Setting> {
        let patch = PatchSettingsInput {
            id,
            notifications_radius: dto.notifications_radius,
            show_paid_spots: dto.show_paid_spots,
            show_unpaid_spots: dto.show_unpaid_spots,
        };

        let setting = self.repository.update_settings(patch).await?;
        tracing::info!("Settings updated: id={}", setting.base.id);
        Ok(setting)
    }
}
