use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::users::handlers;
use crate::features::users::services::UserService;

/// Create routes for the users feature
pub fn routes(service: Arc<UserService>) -> Router {
    Router::new()
        .route(
            "/api/users",
            get(handlers::list_users).post(handlers::create_user),
        )
        .route("/api/users/by-email", get(handlers::get_user_by_email))
        .route("/api/users/{id}", get(handlers::get_user))
        .with_state(service)
}
