use async_trait::async_trait;

use crate::domain::credential::errors::CredentialError;
use crate::domain::credential::models::LoginCommand;
use crate::domain::credential::models::RefreshedAccess;
use crate::domain::credential::models::RegisterCommand;
use crate::domain::user::models::UserId;

/// Port for registration, login and token refresh.
#[async_trait]
pub trait CredentialServicePort: Send + Sync + 'static {
    /// Register a new user.
    ///
    /// # Arguments
    /// * `command` - Validated email, password and optional profile fields
    ///
    /// # Returns
    /// ID of the created user
    ///
    /// # Errors
    /// * `DuplicateUser` - Email is already registered, including a lost registration race
    /// * `Transient` - Store unavailable or timed out
    /// * `Internal` - Hashing or store failure
    async fn register(&self, command: RegisterCommand) -> Result<UserId, CredentialError>;

    /// Verify email and password and issue an access and refresh token.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown email or wrong password, indistinguishably
    /// * `Transient` - Store unavailable or timed out
    /// * `Internal` - Token encoding failed
    async fn login(&self, command: LoginCommand) -> Result<auth::TokenPair, CredentialError>;

    /// Exchange a refresh token for a new access token.
    ///
    /// # Errors
    /// * `InvalidRefreshToken` - Token rejected for any reason, or its user no longer exists
    /// * `Transient` - Store unavailable or timed out
    /// * `Internal` - Token encoding failed
    async fn refresh(&self, refresh_token: &str) -> Result<RefreshedAccess, CredentialError>;
}
