use std::sync::Arc;

use uuid::Uuid;

use crate::core::error::Result;
use crate::features::users::models::{CreateUserInput, User};
use crate::features::users::repositories::UserRepository;

/// Service for user registration and lookup
pub struct UserService {
    repository: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    pub async fn create_user(&self, input: CreateUserInput) -> Result<User> {
        let user = self.repository.create_user(input).await?;
        tracing::info!("User created: id={}", user.base.id);
        Ok(user)
    }

    pub async fn list_users(&self) -> Result<Vec<User>> {
        self.repository.list_users().await
    }

    /// Fails with `NotFound` when the user does not exist
    pub async fn get_user_by_id(&self, id: Uuid) -> Result<User> {
        self.repository.get_user_by_id(id).await
    }

    /// Fails with `NotFound` when no user has this email
    pub async fn get_user_by_email(&self, email: &str) -> Result<User> {
        self.repository.get_user_by_email(email).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::AppError;
    use crate::shared::test_helpers::{fake_user_input, InMemoryUserRepository};

    fn service() -> UserService {
        UserService::new(Arc::new(InMemoryUserRepository::default()))
    }

    #[tokio::test]
    async fn test_create_and_lookup_user() {
        let service = service();
        let input = fake_user_input();
        let email = input.email.clone();

        let user = service.create_user(input).await.unwrap();
        let id = Uuid::parse_str(&user.base.id).unwrap();

        assert_eq!(user.base.created_at, user.base.updated_at);
        assert_eq!(service.get_user_by_id(id).await.unwrap(), user);
        assert_eq!(service.get_user_by_email(&email).await.unwrap(), user);
        assert_eq!(service.list_users().await.unwrap(), vec![user]);
    }

    #[tokio::test]
    async fn test_missing_user_is_not_found() {
        let service = service();

        let err = service.get_user_by_id(Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));

        let err = service
            .get_user_by_email("nobody@example.com")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_duplicate_email_is_conflict() {
        let service = service();
        let input = fake_user_input();

        service.create_user(input.clone()).await.unwrap();
        let err = service.create_user(input).await.unwrap_err();

        assert!(matches!(err, AppError::Conflict(_)));
    }
}
