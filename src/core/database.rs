use crate::core::config::DatabaseConfig;
use sqlx::{postgres::PgPoolOptions, PgPool};
use std::time::Duration;

pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
        .idle_timeout(Duration::from_secs(config.idle_timeout_secs))
        .max_lifetime(Duration::from_secs(config.max_lifetime_secs))
        .connect(&config.url)
        .await
}

pub async fn run_migrations(pool: &PgPool) -> anyhow::Result<()> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .map_err(|e| anyhow::anyhow!("Migration failed: {}", e))
}

/// Postgres constraint violations the repositories translate into domain errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintViolation {
    Unique,
    ForeignKey,
}

/// Classify a storage error by its SQLSTATE code
pub fn constraint_violation(e: &sqlx::Error) -> Option<ConstraintViolation> {
    let sqlx::Error::Database(db_err) = e else {
        return None;
    };

    match db_err.code().as_deref() {
        Some("23505") => Some(ConstraintViolation::Unique),
        Some("23503") => Some(ConstraintViolation::ForeignKey),
        _ => None,
    }
}
