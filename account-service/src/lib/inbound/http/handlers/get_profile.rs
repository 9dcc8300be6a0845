use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use crate::domain::user::models::UserProfile;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

/// Response body for profile operations
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileData {
    pub user_id: String,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub currency_preference: Option<String>,
    pub theme: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<UserProfile> for ProfileData {
    fn from(user: UserProfile) -> Self {
        Self {
            user_id: user.id.to_string(),
            email: user.email.to_string(),
            first_name: user.profile.first_name,
            last_name: user.profile.last_name,
            currency_preference: user.profile.currency_preference,
            theme: user.profile.theme,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

pub async fn get_profile(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
) -> Result<ApiSuccess<ProfileData>, ApiError> {
    state
        .profile_service
        .get_profile(&user.user_id)
        .await
        .map_err(ApiError::from)
        .map(|user| ApiSuccess::new(StatusCode::OK, ProfileData::from(user)))
}
