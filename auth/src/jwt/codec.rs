use chrono::Duration;
use chrono::Utc;

use super::claims::TokenClaims;
use super::claims::TokenClass;
use super::claims::TokenSubject;
use super::errors::JwtError;
use super::errors::Rejection;
use super::handler::JwtHandler;

/// Settings for [`TokenCodec`].
#[derive(Clone)]
pub struct TokenCodecConfig {
    /// Secret signing access tokens
    pub access_secret: Vec<u8>,
    /// Secret signing refresh tokens
    pub refresh_secret: Vec<u8>,
    /// Access token lifetime (minutes-scale)
    pub access_ttl: Duration,
    /// Refresh token lifetime (days-scale)
    pub refresh_ttl: Duration,
    /// Issuer claim written into and required on every token
    pub issuer: String,
}

/// Issues and verifies access and refresh tokens.
///
/// Each class has its own signing secret and lifetime, and the class is also
/// carried in the signed `cls` claim.
pub struct TokenCodec {
    access: JwtHandler,
    refresh: JwtHandler,
    access_ttl: Duration,
    refresh_ttl: Duration,
    issuer: String,
}

impl TokenCodec {
    pub fn new(config: TokenCodecConfig) -> Self {
        Self {
            access: JwtHandler::new(&config.access_secret, &config.issuer),
            refresh: JwtHandler::new(&config.refresh_secret, &config.issuer),
            access_ttl: config.access_ttl,
            refresh_ttl: config.refresh_ttl,
            issuer: config.issuer,
        }
    }

    /// Issue a short-lived access token.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn issue_access_token(&self, subject: &TokenSubject) -> Result<String, JwtError> {
        self.issue(subject, TokenClass::Access)
    }

    /// Issue a long-lived refresh token.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn issue_refresh_token(&self, subject: &TokenSubject) -> Result<String, JwtError> {
        self.issue(subject, TokenClass::Refresh)
    }

    /// Verify a token as access-class.
    ///
    /// # Errors
    /// * `InvalidToken` - Bad signature, malformed payload, wrong class or expired
    pub fn verify_access_token(&self, token: &str) -> Result<TokenClaims, JwtError> {
        self.verify(token, TokenClass::Access)
    }

    /// Verify a token as refresh-class.
    ///
    /// # Errors
    /// * `InvalidToken` - Bad signature, malformed payload, wrong class or expired
    pub fn verify_refresh_token(&self, token: &str) -> Result<TokenClaims, JwtError> {
        self.verify(token, TokenClass::Refresh)
    }

    fn handler(&self, class: TokenClass) -> &JwtHandler {
        match class {
            TokenClass::Access => &self.access,
            TokenClass::Refresh => &self.refresh,
        }
    }

    fn ttl(&self, class: TokenClass) -> Duration {
        match class {
            TokenClass::Access => self.access_ttl,
            TokenClass::Refresh => self.refresh_ttl,
        }
    }

    fn issue(&self, subject: &TokenSubject, class: TokenClass) -> Result<String, JwtError> {
        let claims = TokenClaims::new(
            subject,
            class,
            &self.issuer,
            Utc::now().timestamp(),
            self.ttl(class).num_seconds(),
        );

        self.handler(class).encode(&claims)
    }

    fn verify(&self, token: &str, expected: TokenClass) -> Result<TokenClaims, JwtError> {
        let claims: TokenClaims = self.handler(expected).decode(token)?;

        if claims.cls != expected {
            return Err(JwtError::InvalidToken(Rejection::WrongClass {
                expected,
                actual: claims.cls,
            }));
        }

        if claims.is_expired(Utc::now().timestamp()) {
            return Err(JwtError::InvalidToken(Rejection::Expired));
        }

        Ok(claims)
    }
}
