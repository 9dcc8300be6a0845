use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use crate::domain::credential::models::LoginCommand;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::Password;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;
use crate::user::errors::ValidationError;

/// HTTP request body for login (raw JSON)
#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    fn try_into_command(self) -> Result<LoginCommand, ValidationError> {
        Ok(LoginCommand {
            email: EmailAddress::parse(self.email)?,
            password: Password::new(self.password)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginResponseData {
    pub access_token: String,
    pub refresh_token: String,
}

pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<ApiSuccess<LoginResponseData>, ApiError> {
    let command = body.try_into_command()?;

    state
        .credential_service
        .login(command)
        .await
        .map_err(ApiError::from)
        .map(|pair| {
            ApiSuccess::new(
                StatusCode::OK,
                LoginResponseData {
                    access_token: pair.access_token,
                    refresh_token: pair.refresh_token,
                },
            )
        })
}
