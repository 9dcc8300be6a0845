use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use auth::AuthenticationError;
use auth::Authenticator;
use auth::TokenPair;
use auth::TokenSubject;
use chrono::Utc;

use crate::domain::credential::errors::CredentialError;
use crate::domain::credential::models::LoginCommand;
use crate::domain::credential::models::RefreshedAccess;
use crate::domain::credential::models::RegisterCommand;
use crate::domain::credential::ports::CredentialServicePort;
use crate::domain::deadline::within;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::user::errors::RepositoryError;
use crate::user::ports::UserRepository;

/// Domain service implementation for the credential lifecycle.
///
/// Argon2 work runs on the blocking pool. Every store call is bounded by
/// `store_timeout`.
pub struct CredentialService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    authenticator: Arc<Authenticator>,
    store_timeout: Duration,
}

impl<UR> CredentialService<UR>
where
    UR: UserRepository,
{
    /// Create a new credential service.
    ///
    /// # Arguments
    /// * `repository` - User persistence implementation
    /// * `authenticator` - Password hasher and token codec
    /// * `store_timeout` - Deadline applied to every store call
    pub fn new(
        repository: Arc<UR>,
        authenticator: Arc<Authenticator>,
        store_timeout: Duration,
    ) -> Self {
        Self {
            repository,
            authenticator,
            store_timeout,
        }
    }

    async fn run_blocking<T, F>(&self, work: F) -> Result<T, CredentialError>
    where
        F: FnOnce(&Authenticator) -> T + Send + 'static,
        T: Send + 'static,
    {
        let authenticator = Arc::clone(&self.authenticator);
        tokio::task::spawn_blocking(move || work(&authenticator))
            .await
            .map_err(|e| CredentialError::Internal(format!("Blocking task failed: {}", e)))
    }
}

#[async_trait]
impl<UR> CredentialServicePort for CredentialService<UR>
where
    UR: UserRepository,
{
    async fn register(&self, command: RegisterCommand) -> Result<UserId, CredentialError> {
        let existing = within(
            self.store_timeout,
            self.repository.find_by_email(&command.email),
        )
        .await?;
        if existing.is_some() {
            tracing::debug!("Registration rejected: email already registered");
            return Err(CredentialError::DuplicateUser);
        }

        let password = command.password.into_inner();
        let password_hash = self
            .run_blocking(move |authenticator| authenticator.hash_password(&password))
            .await?
            .map_err(|e| CredentialError::Internal(e.to_string()))?;

        let now = Utc::now();
        let user = User {
            id: UserId::new(),
            email: command.email,
            password_hash,
            profile: command.profile,
            created_at: now,
            updated_at: now,
        };

        // The store's uniqueness constraint decides races the lookup above missed.
        let created = match within(self.store_timeout, self.repository.create(user)).await {
            Ok(created) => created,
            Err(RepositoryError::UniqueViolation(_)) => {
                tracing::debug!("Registration rejected: lost race on email uniqueness");
                return Err(CredentialError::DuplicateUser);
            }
            Err(e) => return Err(e.into()),
        };

        tracing::info!(user_id = %created.id, "User registered");
        Ok(created.id)
    }

    async fn login(&self, command: LoginCommand) -> Result<TokenPair, CredentialError> {
        let user = within(
            self.store_timeout,
            self.repository.find_by_email(&command.email),
        )
        .await?;
        let password = command.password.into_inner();

        let Some(user) = user else {
            self.run_blocking(move |authenticator| authenticator.verify_unknown_user(&password))
                .await?;
            tracing::debug!("Login rejected: unknown email");
            return Err(CredentialError::InvalidCredentials);
        };

        let user_id = user.id;
        let subject = TokenSubject::new(user.id, user.email.as_str());
        let stored_hash = user.password_hash;

        let outcome = self
            .run_blocking(move |authenticator| {
                authenticator.authenticate(&password, &stored_hash, &subject)
            })
            .await?;

        match outcome {
            Ok(pair) => {
                tracing::info!(user_id = %user_id, "User logged in");
                Ok(pair)
            }
            Err(AuthenticationError::InvalidCredentials) => {
                tracing::debug!(user_id = %user_id, "Login rejected: password mismatch");
                Err(CredentialError::InvalidCredentials)
            }
            Err(AuthenticationError::JwtError(e)) => Err(CredentialError::Internal(e.to_string())),
        }
    }

    async fn refresh(&self, refresh_token: &str) -> Result<RefreshedAccess, CredentialError> {
        let claims = self
            .authenticator
            .verify_refresh_token(refresh_token)
            .map_err(|e| {
                tracing::debug!(reason = ?e.rejection(), "Refresh token rejected");
                CredentialError::InvalidRefreshToken
            })?;

        let user_id = UserId::from_string(&claims.sub).map_err(|_| {
            tracing::warn!("Refresh token subject is not a user id");
            CredentialError::InvalidRefreshToken
        })?;

        let user = within(self.store_timeout, self.repository.find_by_id(&user_id))
            .await?
            .ok_or_else(|| {
                tracing::warn!(user_id = %user_id, "Refresh token for a user that no longer exists");
                CredentialError::InvalidRefreshToken
            })?;

        let subject = TokenSubject::new(user.id, user.email.as_str());
        let access_token = self
            .authenticator
            .issue_access_token(&subject)
            .map_err(|e| CredentialError::Internal(e.to_string()))?;

        tracing::debug!(user_id = %user.id, "Access token refreshed");
        Ok(RefreshedAccess { access_token })
    }
}
