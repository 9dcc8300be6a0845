use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use super::get_profile::ProfileData;
use crate::domain::user::models::ProfileField;
use crate::domain::user::models::UpdateProfileCommand;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;
use crate::user::errors::ValidationError;

/// HTTP request body for updating a profile (raw JSON)
#[derive(Debug, Default, Deserialize)]
pub struct UpdateProfileRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub currency_preference: Option<String>,
    pub theme: Option<String>,
}

impl UpdateProfileRequest {
    fn try_into_command(self) -> Result<UpdateProfileCommand, ValidationError> {
        let field = |name: &'static str, value: Option<String>| {
            value.map(|value| ProfileField::new(name, value)).transpose()
        };

        Ok(UpdateProfileCommand {
            first_name: field("first_name", self.first_name)?,
            last_name: field("last_name", self.last_name)?,
            currency_preference: field("currency_preference", self.currency_preference)?,
            theme: field("theme", self.theme)?,
        })
    }
}

pub async fn update_profile(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Json(body): Json<UpdateProfileRequest>,
) -> Result<ApiSuccess<ProfileData>, ApiError> {
    let command = body.try_into_command()?;

    state
        .profile_service
        .update_profile(&user.user_id, command)
        .await
        .map_err(ApiError::from)
        .map(|user| ApiSuccess::new(StatusCode::OK, ProfileData::from(user)))
}
