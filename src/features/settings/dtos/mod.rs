pub mod setting_dto;

pub use setting_dto::{CreateSettingsDto, SettingsIdQuery, SettingsOwnerQuery, UpdateSettingsDto};
