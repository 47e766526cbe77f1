use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::settings::handlers;
use crate::features::settings::services::SettingService;

/// Create routes for the settings feature
pub fn routes(service: Arc<SettingService>) -> Router {
    Router::new()
        .route(
            "/api/settings",
            post(handlers::create_settings).patch(handlers::update_settings),
        )
        .route(
            "/api/settings/user/{user_id}",
            get(handlers::get_settings_by_user_id),
        )
        .with_state(service)
}
