use std::sync::Arc;

use auth::Authenticator;
use axum::extract::Request;
use axum::extract::State;
use axum::http::header;
use axum::http::HeaderValue;
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;
use thiserror::Error;

use crate::domain::user::models::UserId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

/// Identity resolved from a verified access token, stored in request extensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
    pub email: String,
}

/// Why a request was turned away at the gate. Neither variant says which
/// verification check failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GateError {
    #[error("Missing bearer token")]
    MissingToken,

    #[error("Unauthorized")]
    Unauthorized,
}

impl IntoResponse for GateError {
    fn into_response(self) -> Response {
        ApiError::Unauthorized(self.to_string()).into_response()
    }
}

/// Request-boundary check for protected routes.
///
/// Accepts only `Authorization: Bearer <access token>`. Never touches the user store.
pub struct AuthGate {
    authenticator: Arc<Authenticator>,
}

impl AuthGate {
    pub fn new(authenticator: Arc<Authenticator>) -> Self {
        Self { authenticator }
    }

    /// Resolve the caller from the value of the `Authorization` header.
    ///
    /// # Errors
    /// * `MissingToken` - Header absent, not `Bearer <token>`, or token empty
    /// * `Unauthorized` - Token is not a valid, unexpired access token
    pub fn check(&self, authorization: Option<&HeaderValue>) -> Result<AuthenticatedUser, GateError> {
        let token = authorization
            .and_then(|value| value.to_str().ok())
            .and_then(bearer_token)
            .ok_or(GateError::MissingToken)?;

        let claims = self.authenticator.verify_access_token(token).map_err(|e| {
            tracing::debug!(reason = ?e.rejection(), "Access token rejected");
            GateError::Unauthorized
        })?;

        let user_id = UserId::from_string(&claims.sub).map_err(|_| {
            tracing::warn!("Access token subject is not a user id");
            GateError::Unauthorized
        })?;

        Ok(AuthenticatedUser {
            user_id,
            email: claims.email,
        })
    }
}

fn bearer_token(value: &str) -> Option<&str> {
    let token = value.strip_prefix("Bearer ")?.trim();
    if token.is_empty() {
        None
    } else {
        Some(token)
    }
}

/// Middleware that runs the gate and adds the caller to request extensions
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, GateError> {
    let user = state
        .auth_gate
        .check(req.headers().get(header::AUTHORIZATION))?;

    req.extensions_mut().insert(user);

    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use auth::HashingParams;
    use auth::PasswordHasher;
    use auth::TokenCodec;
    use auth::TokenCodecConfig;
    use auth::TokenSubject;
    use chrono::Duration;

    use super::*;

    fn authenticator_with(access_ttl: Duration) -> Arc<Authenticator> {
        let hasher = PasswordHasher::with_params(HashingParams {
            memory_kib: 1024,
            iterations: 1,
            parallelism: 1,
        })
        .unwrap();

        let codec = TokenCodec::new(TokenCodecConfig {
            access_secret: b"access_secret_at_least_32_bytes_long!".to_vec(),
            refresh_secret: b"refresh_secret_at_least_32_bytes_long".to_vec(),
            access_ttl,
            refresh_ttl: Duration::days(7),
            issuer: "account-service-test".to_string(),
        });

        Arc::new(Authenticator::new(hasher, codec).unwrap())
    }

    fn header(value: &str) -> HeaderValue {
        HeaderValue::from_str(value).unwrap()
    }

    #[test]
    fn test_check_valid_access_token() {
        let authenticator = authenticator_with(Duration::minutes(15));
        let gate = AuthGate::new(Arc::clone(&authenticator));

        let user_id = UserId::new();
        let token = authenticator
            .issue_access_token(&TokenSubject::new(user_id, "alice@example.com"))
            .unwrap();

        let user = gate
            .check(Some(&header(&format!("Bearer {}", token))))
            .unwrap();

        assert_eq!(user.user_id, user_id);
        assert_eq!(user.email, "alice@example.com");
    }

    #[test]
    fn test_check_missing_or_malformed_header() {
        let gate = AuthGate::new(authenticator_with(Duration::minutes(15)));

        assert_eq!(gate.check(None), Err(GateError::MissingToken));
        assert_eq!(
            gate.check(Some(&header("Basic dXNlcjpwYXNz"))),
            Err(GateError::MissingToken)
        );
        assert_eq!(
            gate.check(Some(&header("Bearer "))),
            Err(GateError::MissingToken)
        );
        assert_eq!(
            gate.check(Some(&header("bearer abc"))),
            Err(GateError::MissingToken)
        );
    }

    #[test]
    fn test_check_rejects_refresh_token() {
        let authenticator = authenticator_with(Duration::minutes(15));
        let gate = AuthGate::new(Arc::clone(&authenticator));

        let pair = authenticator
            .issue_token_pair(&TokenSubject::new(UserId::new(), "alice@example.com"))
            .unwrap();

        assert_eq!(
            gate.check(Some(&header(&format!("Bearer {}", pair.refresh_token)))),
            Err(GateError::Unauthorized)
        );
    }

    #[test]
    fn test_check_rejects_expired_and_garbage_alike() {
        let authenticator = authenticator_with(Duration::zero());
        let gate = AuthGate::new(Arc::clone(&authenticator));

        let expired = authenticator
            .issue_access_token(&TokenSubject::new(UserId::new(), "alice@example.com"))
            .unwrap();

        let expired_result = gate.check(Some(&header(&format!("Bearer {}", expired))));
        let garbage_result = gate.check(Some(&header("Bearer not.a.token")));

        assert_eq!(expired_result, Err(GateError::Unauthorized));
        assert_eq!(expired_result, garbage_result);
    }

    #[test]
    fn test_check_rejects_non_uuid_subject() {
        let authenticator = authenticator_with(Duration::minutes(15));
        let gate = AuthGate::new(Arc::clone(&authenticator));

        let token = authenticator
            .issue_access_token(&TokenSubject::new("user123", "alice@example.com"))
            .unwrap();

        assert_eq!(
            gate.check(Some(&header(&format!("Bearer {}", token)))),
            Err(GateError::Unauthorized)
        );
    }
}
