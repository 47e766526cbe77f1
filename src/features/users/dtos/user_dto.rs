use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::features::users::models::CreateUserInput;

/// Request DTO for registering a user
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserDto {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    #[validate(length(min = 1, message = "Surname is required"))]
    pub surname: String,

    pub phone: Option<String>,

    #[validate(email(message = "Invalid email address"))]
    pub email: String,
}

impl From<CreateUserDto> for CreateUserInput {
    fn from(dto: CreateUserDto) -> Self {
        Self {
            name: dto.name,
            surname: dto.surname,
            phone: dto.phone,
            email: dto.email,
        }
    }
}

/// Query params for looking a user up by email
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct UserEmailQuery {
    /// Registered email address
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::AppError;
    use crate::shared::validation::validated;
    use fake::faker::internet::en::SafeEmail;
    use fake::faker::name::en::{FirstName, LastName};
    use fake::Fake;

    #[test]
    fn test_valid_user_passes() {
        let dto = CreateUserDto {
            name: FirstName().fake(),
            surname: LastName().fake(),
            phone: None,
            email: SafeEmail().fake(),
        };

        assert!(validated(dto).is_ok());
    }

    #[test]
    fn test_every_invalid_field_is_reported() {
        let dto = CreateUserDto {
            name: String::new(),
            surname: String::new(),
            phone: Some("+1 555 0100".to_string()),
            email: "nope".to_string(),
        };

        let Err(AppError::Validation(fields)) = validated(dto) else {
            panic!("expected validation error");
        };
        assert_eq!(
            fields,
            vec![
                "email: Invalid email address".to_string(),
                "name: Name is required".to_string(),
                "surname: Surname is required".to_string(),
            ]
        );
    }
}
