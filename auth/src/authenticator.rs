use crate::jwt::JwtError;
use crate::jwt::TokenClaims;
use crate::jwt::TokenCodec;
use crate::jwt::TokenSubject;
use crate::password::PasswordError;
use crate::password::PasswordHasher;

/// Authentication coordinator combining password verification and token issuance.
///
/// Holds no mutable state, so a single instance can be shared across threads.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    token_codec: TokenCodec,
    dummy_hash: String,
}

/// Access and refresh token issued together at login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

/// Authentication operation errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("JWT error: {0}")]
    JwtError(#[from] JwtError),
}

impl Authenticator {
    /// Create a new authenticator.
    ///
    /// # Arguments
    /// * `password_hasher` - Hasher configured with the desired cost
    /// * `token_codec` - Codec holding the signing secrets and lifetimes
    ///
    /// # Errors
    /// * `HashingFailed` - The reference hash for unknown users could not be computed
    pub fn new(
        password_hasher: PasswordHasher,
        token_codec: TokenCodec,
    ) -> Result<Self, PasswordError> {
        let dummy_hash = password_hasher.hash("unknown-user-reference-password")?;

        Ok(Self {
            password_hasher,
            token_codec,
            dummy_hash,
        })
    }

    /// Hash a password for storage.
    ///
    /// # Errors
    /// * `PasswordError` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Check a password against a stored hash.
    pub fn verify_password(&self, password: &str, stored_hash: &str) -> bool {
        self.password_hasher.verify(password, stored_hash)
    }

    /// Spend the same work as a real verification when there is no user to
    /// verify against. Always fails.
    pub fn verify_unknown_user(&self, password: &str) -> bool {
        let _ = self.password_hasher.verify(password, &self.dummy_hash);
        false
    }

    /// Verify credentials and issue an access and refresh token.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `stored_hash` - Stored password hash
    /// * `subject` - Identity to encode in the tokens
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match
    /// * `JwtError` - Token generation failed
    pub fn authenticate(
        &self,
        password: &str,
        stored_hash: &str,
        subject: &TokenSubject,
    ) -> Result<TokenPair, AuthenticationError> {
        if !self.verify_password(password, stored_hash) {
            return Err(AuthenticationError::InvalidCredentials);
        }

        Ok(self.issue_token_pair(subject)?)
    }

    /// Issue an access and refresh token without password verification.
    ///
    /// # Errors
    /// * `JwtError` - Token generation failed
    pub fn issue_token_pair(&self, subject: &TokenSubject) -> Result<TokenPair, JwtError> {
        Ok(TokenPair {
            access_token: self.token_codec.issue_access_token(subject)?,
            refresh_token: self.token_codec.issue_refresh_token(subject)?,
        })
    }

    /// Issue an access token only, as in a refresh flow.
    ///
    /// # Errors
    /// * `JwtError` - Token generation failed
    pub fn issue_access_token(&self, subject: &TokenSubject) -> Result<String, JwtError> {
        self.token_codec.issue_access_token(subject)
    }

    /// Verify an access token.
    ///
    /// # Errors
    /// * `JwtError` - Token is not a valid, unexpired access token
    pub fn verify_access_token(&self, token: &str) -> Result<TokenClaims, JwtError> {
        self.token_codec.verify_access_token(token)
    }

    /// Verify a refresh token.
    ///
    /// # Errors
    /// * `JwtError` - Token is not a valid, unexpired refresh token
    pub fn verify_refresh_token(&self, token: &str) -> Result<TokenClaims, JwtError> {
        self.token_codec.verify_refresh_token(token)
    }
}
