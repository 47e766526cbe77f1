use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::core::database::{constraint_violation, ConstraintViolation};
use crate::core::error::{AppError, Result};
use crate::features::users::models::{CreateUserInput, User, UserRow};
use crate::shared::models::BaseModel;
use crate::shared::validation::validated_record;

const USER_COLUMNS: &str = "id, name, surname, phone, email, created_at, updated_at";

/// User persistence.
///
/// Lookups by id or email treat a missing user as an error: callers only hold
/// an id or email for a user that is expected to exist.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Fails with `Conflict` when the email is already registered
    async fn create_user(&self, input: CreateUserInput) -> Result<User>;
    async fn list_users(&self) -> Result<Vec<User>>;
    async fn get_user_by_id(&self, id: Uuid) -> Result<User>;
    async fn get_user_by_email(&self, email: &str) -> Result<User>;
}

pub fn to_domain(row: UserRow) -> Result<User> {
    validated_record(User {
        base: BaseModel::new(row.id, row.created_at, row.updated_at),
        name: row.name,
        surname: row.surname,
        phone: row.phone,
        email: row.email,
    })
}

pub fn email_taken(email: &str) -> AppError {
    AppError::Conflict(format!("User with email '{}' already exists", email))
}

fn handle_db_error(e: sqlx::Error, email: &str) -> AppError {
    match constraint_violation(&e) {
        Some(ConstraintViolation::Unique) => email_taken(email),
        _ => {
            tracing::error!("Failed to create user: {:?}", e);
            AppError::Database(e)
        }
    }
}

pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn create_user(&self, input: CreateUserInput) -> Result<User> {
        let query = format!(
            r#"
            INSERT INTO users (name, surname, phone, email)
            VALUES ($1, $2, $3, $4)
            RETURNING {}
            "#,
            USER_COLUMNS
        );

        let row = sqlx::query_as::<_, UserRow>(&query)
            .bind(&input.name)
            .bind(&input.surname)
            .bind(&input.phone)
            .bind(&input.email)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| handle_db_error(e, &input.email))?;

        to_domain(row)
    }

    async fn list_users(&self) -> Result<Vec<User>> {
        let query = format!(
            "SELECT {} FROM users ORDER BY created_at, id",
            USER_COLUMNS
        );

        let rows = sqlx::query_as::<_, UserRow>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list users: {:?}", e);
                AppError::Database(e)
            })?;

        rows.into_iter().map(to_domain).collect()
    }

    async fn get_user_by_id(&self, id: Uuid) -> Result<User> {
        let query = format!("SELECT {} FROM users WHERE id = $1", USER_COLUMNS);

        let row = sqlx::query_as::<_, UserRow>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to get user by id: {:?}", e);
                AppError::Database(e)
            })?
            .ok_or_else(|| AppError::NotFound(format!("User with id {} not found", id)))?;

        to_domain(row)
    }

    async fn get_user_by_email(&self, email: &str) -> Result<User> {
        let query = format!("SELECT {} FROM users WHERE email = $1", USER_COLUMNS);

        let row = sqlx::query_as::<_, UserRow>(&query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to get user by email: {:?}", e);
                AppError::Database(e)
            })?
            .ok_or_else(|| AppError::NotFound(format!("User with email '{}' not found", email)))?;

        to_domain(row)
    }
}
