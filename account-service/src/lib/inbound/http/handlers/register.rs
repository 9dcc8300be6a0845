use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use crate::domain::credential::models::RegisterCommand;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::Password;
use crate::domain::user::models::Profile;
use crate::domain::user::models::ProfileField;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;
use crate::user::errors::ValidationError;

/// HTTP request body for registration (raw JSON)
#[derive(Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub currency_preference: Option<String>,
    pub theme: Option<String>,
}

impl RegisterRequest {
    fn try_into_command(self) -> Result<RegisterCommand, ValidationError> {
        let email = EmailAddress::parse(self.email)?;
        let password = Password::new(self.password)?;

        let profile_field = |name: &'static str, value: Option<String>| {
            value
                .map(|value| ProfileField::new(name, value).map(ProfileField::into_inner))
                .transpose()
        };

        let profile = Profile {
            first_name: profile_field("first_name", self.first_name)?,
            last_name: profile_field("last_name", self.last_name)?,
            currency_preference: profile_field("currency_preference", self.currency_preference)?,
            theme: profile_field("theme", self.theme)?,
        };

        Ok(RegisterCommand {
            email,
            password,
            profile,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisterResponseData {
    pub user_id: String,
}

pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequest>,
) -> Result<ApiSuccess<RegisterResponseData>, ApiError> {
    let command = body.try_into_command()?;

    state
        .credential_service
        .register(command)
        .await
        .map_err(ApiError::from)
        .map(|user_id| {
            ApiSuccess::new(
                StatusCode::CREATED,
                RegisterResponseData {
                    user_id: user_id.to_string(),
                },
            )
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::user::errors::EmailError;
    use crate::user::errors::PasswordError;

    fn request(email: &str, password: &str) -> RegisterRequest {
        RegisterRequest {
            email: email.to_string(),
            password: password.to_string(),
            first_name: None,
            last_name: None,
            currency_preference: None,
            theme: None,
        }
    }

    #[test]
    fn test_valid_request() {
        let mut body = request("alice@example.com", "pw123456");
        body.first_name = Some("Alice".to_string());

        let command = body.try_into_command().unwrap();

        assert_eq!(command.email.as_str(), "alice@example.com");
        assert_eq!(command.password.as_str(), "pw123456");
        assert_eq!(command.profile.first_name.as_deref(), Some("Alice"));
        assert_eq!(command.profile.theme, None);
    }

    #[test]
    fn test_rejects_empty_and_malformed_input() {
        assert!(matches!(
            request("", "pw123456").try_into_command(),
            Err(ValidationError::Email(EmailError::Empty))
        ));
        assert!(matches!(
            request("alice", "pw123456").try_into_command(),
            Err(ValidationError::Email(EmailError::InvalidFormat(_)))
        ));
        assert!(matches!(
            request("alice@example.com", "").try_into_command(),
            Err(ValidationError::Password(PasswordError::Empty))
        ));
    }

    #[test]
    fn test_rejects_overlong_profile_field() {
        let mut body = request("alice@example.com", "pw123456");
        body.last_name = Some("x".repeat(101));

        assert!(matches!(
            body.try_into_command(),
            Err(ValidationError::Profile(_))
        ));
    }
}
