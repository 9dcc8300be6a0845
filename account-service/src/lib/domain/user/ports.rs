use async_trait::async_trait;

use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::UpdateProfileCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::UserProfile;
use crate::user::errors::RepositoryError;
use crate::user::errors::UserError;

/// Port for profile operations of an authenticated user.
#[async_trait]
pub trait ProfileServicePort: Send + Sync + 'static {
    /// Retrieve a user's own record, without the password hash.
    ///
    /// # Arguments
    /// * `id` - User ID taken from a verified access token
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `Transient` - Store unavailable or timed out
    /// * `DatabaseError` - Database operation failed
    async fn get_profile(&self, id: &UserId) -> Result<UserProfile, UserError>;

    /// Update the provided profile fields and return the updated record.
    ///
    /// # Arguments
    /// * `id` - User ID taken from a verified access token
    /// * `command` - Fields to overwrite; absent fields are kept
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `Transient` - Store unavailable or timed out
    /// * `DatabaseError` - Database operation failed
    async fn update_profile(
        &self,
        id: &UserId,
        command: UpdateProfileCommand,
    ) -> Result<UserProfile, UserError>;
}

/// Persistence operations for the user aggregate.
///
/// Implementations must be safe for concurrent use and must enforce email
/// uniqueness themselves, since two registrations can race past a lookup.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Retrieve user by email, compared exactly as stored.
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    ///
    /// # Errors
    /// * `Timeout` / `Unavailable` - Store could not be reached
    /// * `Database` - Database operation failed
    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<User>, RepositoryError>;

    /// Retrieve user by identifier.
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    ///
    /// # Errors
    /// * `Timeout` / `Unavailable` - Store could not be reached
    /// * `Database` - Database operation failed
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, RepositoryError>;

    /// Persist new user.
    ///
    /// # Errors
    /// * `UniqueViolation` - Email is already registered
    /// * `Timeout` / `Unavailable` - Store could not be reached
    /// * `Database` - Database operation failed
    async fn create(&self, user: User) -> Result<User, RepositoryError>;

    /// Overwrite an existing user.
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `Timeout` / `Unavailable` - Store could not be reached
    /// * `Database` - Database operation failed
    async fn update(&self, user: User) -> Result<User, RepositoryError>;
}
