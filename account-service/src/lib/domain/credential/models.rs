use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::Password;
use crate::domain::user::models::Profile;

/// Command to register a new user with validated input.
#[derive(Debug)]
pub struct RegisterCommand {
    pub email: EmailAddress,
    pub password: Password,
    pub profile: Profile,
}

/// Command to exchange email and password for a token pair.
#[derive(Debug)]
pub struct LoginCommand {
    pub email: EmailAddress,
    pub password: Password,
}

/// Result of a refresh: a new access token only. The refresh token
/// presented stays valid until its own expiry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshedAccess {
    pub access_token: String,
}
