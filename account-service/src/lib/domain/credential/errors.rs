use thiserror::Error;

use crate::user::errors::RepositoryError;
use crate::user::errors::ValidationError;

/// Errors of the credential lifecycle.
///
/// Security-sensitive variants carry no cause. Whatever made them happen is
/// logged where it is detected and never reaches the caller.
#[derive(Debug, Clone, Error)]
pub enum CredentialError {
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("User already exists")]
    DuplicateUser,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Invalid refresh token")]
    InvalidRefreshToken,

    #[error("Service temporarily unavailable: {0}")]
    Transient(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<RepositoryError> for CredentialError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::UniqueViolation(_) => CredentialError::DuplicateUser,
            RepositoryError::Timeout | RepositoryError::Unavailable(_) => {
                CredentialError::Transient(err.to_string())
            }
            RepositoryError::NotFound(_) | RepositoryError::Database(_) => {
                CredentialError::Internal(err.to_string())
            }
        }
    }
}
