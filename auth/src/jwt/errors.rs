use thiserror::Error;

use super::claims::TokenClass;

/// Error type for JWT operations.
#[derive(Debug, Clone, Error)]
pub enum JwtError {
    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    /// The reason is kept for diagnostics and is not part of the message.
    #[error("Token is invalid")]
    InvalidToken(Rejection),
}

impl JwtError {
    /// Rejection reason, if this is a verification failure.
    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            JwtError::InvalidToken(rejection) => Some(rejection),
            JwtError::EncodingFailed(_) => None,
        }
    }
}

/// Why a token failed verification.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("malformed token: {0}")]
    Malformed(String),

    #[error("signature does not verify")]
    BadSignature,

    #[error("unexpected issuer")]
    WrongIssuer,

    #[error("expected {expected} token, got {actual}")]
    WrongClass {
        expected: TokenClass,
        actual: TokenClass,
    },

    #[error("token expired")]
    Expired,
}
