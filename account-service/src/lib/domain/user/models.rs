use std::fmt;
use std::str::FromStr;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::user::errors::EmailError;
use crate::user::errors::PasswordError;
use crate::user::errors::ProfileFieldError;
use crate::user::errors::UserIdError;

/// User aggregate entity.
///
/// The credential record of a registered user plus its profile fields.
/// `password_hash` never leaves the service boundary and is redacted from `Debug`.
#[derive(Clone)]
pub struct User {
    pub id: UserId,
    pub email: EmailAddress,
    pub password_hash: String,
    pub profile: Profile,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("email", &self.email)
            .field("password_hash", &"<redacted>")
            .field("profile", &self.profile)
            .field("created_at", &self.created_at)
            .field("updated_at", &self.updated_at)
            .finish()
    }
}

/// A user record without its credential, as returned to the user itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub id: UserId,
    pub email: EmailAddress,
    pub profile: Profile,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserProfile {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            profile: user.profile,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// User unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(pub Uuid);

impl UserId {
    /// Generate a new random user ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a user ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, UserIdError> {
        Uuid::parse_str(s)
            .map(UserId)
            .map_err(|e| UserIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Email address type
///
/// The natural key for login and registration. Compared case-sensitively,
/// exactly as stored.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// RFC 5321 forward-path limit; also fits the `users.email` column.
    pub const MAX_LENGTH: usize = 254;

    /// Accept any non-blank email as given, up to `MAX_LENGTH` characters.
    ///
    /// # Errors
    /// * `Empty` - Email is empty or whitespace
    /// * `TooLong` - Email exceeds `MAX_LENGTH` characters
    pub fn new(email: String) -> Result<Self, EmailError> {
        if email.trim().is_empty() {
            return Err(EmailError::Empty);
        }
        let actual = email.chars().count();
        if actual > Self::MAX_LENGTH {
            return Err(EmailError::TooLong {
                max: Self::MAX_LENGTH,
                actual,
            });
        }
        Ok(Self(email))
    }

    /// Accept a non-blank email that also conforms to RFC 5322.
    ///
    /// Used where raw client input enters the system.
    ///
    /// # Errors
    /// * `Empty` - Email is empty or whitespace
    /// * `TooLong` - Email exceeds `MAX_LENGTH` characters
    /// * `InvalidFormat` - Email does not conform to RFC 5322
    pub fn parse(email: String) -> Result<Self, EmailError> {
        let email = Self::new(email)?;
        email_address::EmailAddress::from_str(&email.0)
            .map(|_| email)
            .map_err(|e| EmailError::InvalidFormat(e.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Plaintext password on its way to the hasher. Redacted from `Debug`.
pub struct Password(String);

impl Password {
    /// # Errors
    /// * `Empty` - Password is empty
    pub fn new(password: String) -> Result<Self, PasswordError> {
        if password.is_empty() {
            return Err(PasswordError::Empty);
        }
        Ok(Self(password))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(<redacted>)")
    }
}

/// Free-text profile value, bounded in length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileField(String);

impl ProfileField {
    const MAX_LENGTH: usize = 100;

    /// # Errors
    /// * `TooLong` - Value exceeds 100 characters
    pub fn new(field: &'static str, value: String) -> Result<Self, ProfileFieldError> {
        let length = value.chars().count();
        if length > Self::MAX_LENGTH {
            return Err(ProfileFieldError::TooLong {
                field,
                max: Self::MAX_LENGTH,
                actual: length,
            });
        }
        Ok(Self(value))
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

/// Optional profile fields of a user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Profile {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub currency_preference: Option<String>,
    pub theme: Option<String>,
}

/// Command to update profile fields.
///
/// All fields are optional to support partial updates.
/// Only provided fields will be updated.
#[derive(Debug, Default)]
pub struct UpdateProfileCommand {
    pub first_name: Option<ProfileField>,
    pub last_name: Option<ProfileField>,
    pub currency_preference: Option<ProfileField>,
    pub theme: Option<ProfileField>,
}

impl UpdateProfileCommand {
    /// Apply the provided fields to `profile`.
    pub fn apply_to(self, profile: &mut Profile) {
        if let Some(first_name) = self.first_name {
            profile.first_name = Some(first_name.into_inner());
        }
        if let Some(last_name) = self.last_name {
            profile.last_name = Some(last_name.into_inner());
        }
        if let Some(currency_preference) = self.currency_preference {
            profile.currency_preference = Some(currency_preference.into_inner());
        }
        if let Some(theme) = self.theme {
            profile.theme = Some(theme.into_inner());
        }
    }
}
