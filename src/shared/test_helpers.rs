//! In-memory repositories and an HTTP test server for unit tests.
//!
//! The fakes store the same row types as Postgres and go through each
//! feature's `to_domain` mapping, so services and handlers see exactly what
//! they would see in production.

use std::borrow::Cow;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use axum_test::TestServer;
use chrono::{DateTime, FixedOffset, TimeDelta, Utc};
use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::{FirstName, LastName};
use fake::Fake;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::parking_spots::models::{
    CreateParkingSpotInput, ParkingSpot, ParkingSpotRow,
};
use crate::features::parking_spots::repositories::parking_spot_repository as parking_spot_repo;
use crate::features::parking_spots::repositories::ParkingSpotRepository;
use crate::features::parking_spots::{routes as parking_spots_routes, ParkingSpotService};
use crate::features::settings::models::{
    CreateSettingsInput, PatchSettingsInput, Setting, SettingRow,
};
use crate::features::settings::repositories::setting_repository as setting_repo;
use crate::features::settings::repositories::SettingRepository;
use crate::features::settings::{routes as settings_routes, SettingService};
use crate::features::users::models::{CreateUserInput, User, UserRow};
use crate::features::users::repositories::user_repository as user_repo;
use crate::features::users::repositories::UserRepository;
use crate::features::users::{routes as users_routes, UserService};

#[derive(Default)]
pub struct InMemoryParkingSpotRepository {
    rows: Mutex<Vec<ParkingSpotRow>>,
}

#[async_trait]
impl ParkingSpotRepository for InMemoryParkingSpotRepository {
    async fn create(&self, input: CreateParkingSpotInput) -> Result<ParkingSpot> {
        let now = Utc::now();
        let row = ParkingSpotRow {
            id: Uuid::new_v4(),
            name: input.name,
            description: input.description,
            latitude: input.latitude,
            longitude: input.longitude,
            paid: input.paid.unwrap_or(false),
            created_at: now,
            updated_at: now,
        };
        self.rows.lock().unwrap().push(row.clone());
        parking_spot_repo::to_domain(row)
    }

    async fn list_parking_spots(&self) -> Result<Vec<ParkingSpot>> {
        let rows = self.rows.lock().unwrap().clone();
        rows.into_iter().map(parking_spot_repo::to_domain).collect()
    }

    async fn delete(&self, id: Uuid) -> Result<()> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|row| row.id != id);
        if rows.len() == before {
            return Err(AppError::NotFound(format!(
                "Parking spot with id {} not found",
                id
            )));
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryUserRepository {
    rows: Mutex<Vec<UserRow>>,
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create_user(&self, input: CreateUserInput) -> Result<User> {
        let mut rows = self.rows.lock().unwrap();
        if rows.iter().any(|row| row.email == input.email) {
            return Err(user_repo::email_taken(&input.email));
        }

        let now = Utc::now();
        let row = UserRow {
            id: Uuid::new_v4(),
            name: input.name,
            surname: input.surname,
            phone: input.phone,
            email: input.email,
            created_at: now,
            updated_at: now,
        };
        rows.push(row.clone());
        user_repo::to_domain(row)
    }

    async fn list_users(&self) -> Result<Vec<User>> {
        let rows = self.rows.lock().unwrap().clone();
        rows.into_iter().map(user_repo::to_domain).collect()
    }

    async fn get_user_by_id(&self, id: Uuid) -> Result<User> {
        let row = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|row| row.id == id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("User with id {} not found", id)))?;
        user_repo::to_domain(row)
    }

    async fn get_user_by_email(&self, email: &str) -> Result<User> {
        let row = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|row| row.email == email)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("User with email '{}' not found", email)))?;
        user_repo::to_domain(row)
    }
}

#[derive(Default)]
pub struct InMemorySettingRepository {
    rows: Mutex<Vec<SettingRow>>,
}

#[async_trait]
impl SettingRepository for InMemorySettingRepository {
    async fn create_settings(&self, input: CreateSettingsInput) -> Result<Setting> {
        let mut rows = self.rows.lock().unwrap();
        if rows.iter().any(|row| row.user_id == input.user_id) {
            return Err(setting_repo::settings_exist(input.user_id));
        }

        let now = Utc::now();
        let row = SettingRow {
            id: Uuid::new_v4(),
            notifications_radius: input.notifications_radius,
            show_paid_spots: input.show_paid_spots,
            show_unpaid_spots: input.show_unpaid_spots,
            user_id: input.user_id,
            created_at: now,
            updated_at: now,
        };
        rows.push(row.clone());
        setting_repo::to_domain(row)
    }

    async fn get_settings_by_user_id(&self, user_id: Uuid) -> Result<Option<Setting>> {
        let row = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|row| row.user_id == user_id)
            .cloned();
        row.map(setting_repo::to_domain).transpose()
    }

    async fn update_settings(&self, patch: PatchSettingsInput) -> Result<Setting> {
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|row| row.id == patch.id)
            .ok_or_else(|| AppError::NotFound(format!("Settings with id {} not found", patch.id)))?;

        if let Some(radius) = patch.notifications_radius {
            row.notifications_radius = radius;
        }
        if let Some(show) = patch.show_paid_spots {
            row.show_paid_spots = show;
        }
        if let Some(show) = patch.show_unpaid_spots {
            row.show_unpaid_spots = show;
        }
        row.updated_at = Utc::now().max(row.updated_at + TimeDelta::milliseconds(1));

        setting_repo::to_domain(row.clone())
    }
}

pub fn fake_user_input() -> CreateUserInput {
    CreateUserInput {
        name: FirstName().fake(),
        surname: LastName().fake(),
        phone: None,
        email: SafeEmail().fake(),
    }
}

pub fn parse_iso(value: &str) -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339(value).unwrap()
}

/// All feature routes wired to fresh in-memory repositories
pub fn test_router() -> Router {
    let parking_spot_service = Arc::new(ParkingSpotService::new(Arc::new(
        InMemoryParkingSpotRepository::default(),
    )));
    let user_service = Arc::new(UserService::new(Arc::new(
        InMemoryUserRepository::default(),
    )));
    let setting_service = Arc::new(SettingService::new(Arc::new(
        InMemorySettingRepository::default(),
    )));

    Router::new()
        .merge(parking_spots_routes::routes(parking_spot_service))
        .merge(users_routes::routes(user_service))
        .merge(settings_routes::routes(setting_service))
}

pub fn test_server() -> TestServer {
    TestServer::new(test_router()).unwrap()
}

/// Storage error carrying only a Postgres SQLSTATE code
#[derive(Debug)]
struct SqlStateError(&'static str);

impl std::fmt::Display for SqlStateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "database error with SQLSTATE {}", self.0)
    }
}

impl std::error::Error for SqlStateError {}

impl sqlx::error::DatabaseError for SqlStateError {
    fn message(&self) -> &str {
        "database error"
    }

    fn code(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed(self.0))
    }

    fn as_error(&self) -> &(dyn std::error::Error + Send + Sync + 'static) {
        self
    }

    fn as_error_mut(&mut self) -> &mut (dyn std::error::Error + Send + Sync + 'static) {
        self
    }

    fn into_error(self: Box<Self>) -> Box<dyn std::error::Error + Send + Sync + 'static> {
        self
    }

    fn kind(&self) -> sqlx::error::ErrorKind {
        match self.0 {
            "23505" => sqlx::error::ErrorKind::UniqueViolation,
            "23503" => sqlx::error::ErrorKind::ForeignKeyViolation,
            _ => sqlx::error::ErrorKind::Other,
        }
    }
}

/// `sqlx::Error::Database` as the Postgres driver reports it for `code`
pub fn sqlstate_error(code: &'static str) -> sqlx::Error {
    sqlx::Error::Database(Box::new(SqlStateError(code)))
}
