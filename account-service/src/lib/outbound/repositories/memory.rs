use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserRepository;
use crate::user::errors::RepositoryError;

/// User store held in process memory.
///
/// Uniqueness of email is checked under the write lock, so it holds under
/// concurrent registrations just like the database constraint does.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<UserId, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop a user, as an administrator or another service would.
    pub async fn remove(&self, id: &UserId) -> Option<User> {
        self.users.write().await.remove(id)
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<User>, RepositoryError> {
        let users = self.users.read().await;
        Ok(users.values().find(|user| &user.email == email).cloned())
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, RepositoryError> {
        Ok(self.users.read().await.get(id).cloned())
    }

    async fn create(&self, user: User) -> Result<User, RepositoryError> {
        let mut users = self.users.write().await;

        if users.values().any(|existing| existing.email == user.email) {
            return Err(RepositoryError::UniqueViolation(
                "users_email_key".to_string(),
            ));
        }

        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn update(&self, user: User) -> Result<User, RepositoryError> {
        let mut users = self.users.write().await;

        match users.get_mut(&user.id) {
            Some(existing) => {
                *existing = user.clone();
                Ok(user)
            }
            None => Err(RepositoryError::NotFound(user.id.to_string())),
        }
    }
}
