use thiserror::Error;

/// Error for UserId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UserIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Error for EmailAddress validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmailError {
    #[error("Email is required")]
    Empty,

    #[error("Invalid email format: {0}")]
    InvalidFormat(String),

    #[error("Email too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Error for plaintext password validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PasswordError {
    #[error("Password is required")]
    Empty,
}

/// Error for profile field validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProfileFieldError {
    #[error("{field} too long: maximum {max} characters, got {actual}")]
    TooLong {
        field: &'static str,
        max: usize,
        actual: usize,
    },
}

/// Input rejected before it reaches a service. Safe to report in detail.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid email: {0}")]
    Email(#[from] EmailError),

    #[error("Invalid password: {0}")]
    Password(#[from] PasswordError),

    #[error("Invalid profile: {0}")]
    Profile(#[from] ProfileFieldError),

    #[error("{0} is required")]
    Missing(&'static str),
}

/// Error surfaced by a user store implementation
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RepositoryError {
    /// A uniqueness constraint (email) rejected the write
    #[error("Unique constraint violated: {0}")]
    UniqueViolation(String),

    #[error("User not found: {0}")]
    NotFound(String),

    #[error("Store call timed out")]
    Timeout,

    #[error("Store unavailable: {0}")]
    Unavailable(String),

    #[error("Database error: {0}")]
    Database(String),
}

/// Top-level error for profile operations
#[derive(Debug, Clone, Error)]
pub enum UserError {
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("User not found: {0}")]
    NotFound(String),

    #[error("Service temporarily unavailable: {0}")]
    Transient(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl From<RepositoryError> for UserError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound(id) => UserError::NotFound(id),
            RepositoryError::Timeout | RepositoryError::Unavailable(_) => {
                UserError::Transient(err.to_string())
            }
            RepositoryError::UniqueViolation(_) | RepositoryError::Database(_) => {
                UserError::DatabaseError(err.to_string())
            }
        }
    }
}
