use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;
use crate::user::errors::ValidationError;

/// HTTP request body for token refresh (raw JSON)
#[derive(Deserialize)]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RefreshTokenResponseData {
    pub access_token: String,
}

pub async fn refresh_token(
    State(state): State<AppState>,
    Json(body): Json<RefreshTokenRequest>,
) -> Result<ApiSuccess<RefreshTokenResponseData>, ApiError> {
    if body.refresh_token.trim().is_empty() {
        return Err(ValidationError::Missing("refresh_token").into());
    }

    state
        .credential_service
        .refresh(&body.refresh_token)
        .await
        .map_err(ApiError::from)
        .map(|refreshed| {
            ApiSuccess::new(
                StatusCode::OK,
                RefreshTokenResponseData {
                    access_token: refreshed.access_token,
                },
            )
        })
}
