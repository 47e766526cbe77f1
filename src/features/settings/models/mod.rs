pub mod setting;

pub use setting::{CreateSettingsInput, PatchSettingsInput, Setting, SettingRow};
