use std::fmt;

use serde::Deserialize;
use serde::Serialize;

/// Class of a token. Bound into the signed payload so an access token can
/// never stand in for a refresh token or the other way round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenClass {
    Access,
    Refresh,
}

impl fmt::Display for TokenClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenClass::Access => f.write_str("access"),
            TokenClass::Refresh => f.write_str("refresh"),
        }
    }
}

/// Identity a token is minted for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenSubject {
    pub user_id: String,
    pub email: String,
}

impl TokenSubject {
    pub fn new(user_id: impl ToString, email: impl ToString) -> Self {
        Self {
            user_id: user_id.to_string(),
            email: email.to_string(),
        }
    }
}

/// Signed token payload.
///
/// Reconstructed from the token on every verification, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenClaims {
    /// Subject (user identifier)
    pub sub: String,

    /// Email of the user at issuance time
    pub email: String,

    /// Token class
    pub cls: TokenClass,

    /// Issuer
    pub iss: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,

    /// Unique token identifier
    pub jti: String,
}

impl TokenClaims {
    /// Build claims for `subject`, expiring `ttl_seconds` after `issued_at`.
    pub fn new(
        subject: &TokenSubject,
        class: TokenClass,
        issuer: &str,
        issued_at: i64,
        ttl_seconds: i64,
    ) -> Self {
        Self {
            sub: subject.user_id.clone(),
            email: subject.email.clone(),
            cls: class,
            iss: issuer.to_string(),
            iat: issued_at,
            exp: issued_at.saturating_add(ttl_seconds),
            jti: uuid::Uuid::new_v4().to_string(),
        }
    }

    /// A token is valid on `[iat, exp)`.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        self.exp <= current_timestamp
    }
}
