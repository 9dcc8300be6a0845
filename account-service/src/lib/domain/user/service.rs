use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::deadline::within;
use crate::domain::user::models::UpdateProfileCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::UserProfile;
use crate::user::errors::UserError;
use crate::user::ports::ProfileServicePort;
use crate::user::ports::UserRepository;

/// Domain service implementation for profile operations.
///
/// Concrete implementation of ProfileServicePort with dependency injection.
pub struct ProfileService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    store_timeout: Duration,
}

impl<UR> ProfileService<UR>
where
    UR: UserRepository,
{
    /// Create a new profile service.
    ///
    /// # Arguments
    /// * `repository` - User persistence implementation
    /// * `store_timeout` - Deadline applied to every store call
    pub fn new(repository: Arc<UR>, store_timeout: Duration) -> Self {
        Self {
            repository,
            store_timeout,
        }
    }

    async fn load(&self, id: &UserId) -> Result<User, UserError> {
        within(self.store_timeout, self.repository.find_by_id(id))
            .await?
            .ok_or(UserError::NotFound(id.to_string()))
    }
}

#[async_trait]
impl<UR> ProfileServicePort for ProfileService<UR>
where
    UR: UserRepository,
{
    async fn get_profile(&self, id: &UserId) -> Result<UserProfile, UserError> {
        Ok(self.load(id).await?.into())
    }

    async fn update_profile(
        &self,
        id: &UserId,
        command: UpdateProfileCommand,
    ) -> Result<UserProfile, UserError> {
        let mut user = self.load(id).await?;

        command.apply_to(&mut user.profile);
        user.updated_at = Utc::now();

        let updated = within(self.store_timeout, self.repository.update(user)).await?;
        tracing::info!(user_id = %updated.id, "Profile updated");

        Ok(updated.into())
    }
}
