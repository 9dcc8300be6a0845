//! Credential primitives library
//!
//! Provides the building blocks of the credential lifecycle:
//! - Password hashing (Argon2id, tunable cost)
//! - Access and refresh token issuance and verification (HS256 JWT, one secret per class)
//! - Authentication coordination
//!
//! Everything here is synchronous and free of I/O. Callers decide where the
//! CPU-bound hashing runs.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash));
//! assert!(!hasher.verify("other_password", &hash));
//! ```
//!
//! ## Tokens
//! ```
//! use auth::{TokenCodec, TokenCodecConfig, TokenSubject};
//! use chrono::Duration;
//!
//! let codec = TokenCodec::new(TokenCodecConfig {
//!     access_secret: b"access_secret_at_least_32_bytes_long!".to_vec(),
//!     refresh_secret: b"refresh_secret_at_least_32_bytes_long".to_vec(),
//!     access_ttl: Duration::minutes(15),
//!     refresh_ttl: Duration::days(7),
//!     issuer: "example".to_string(),
//! });
//!
//! let subject = TokenSubject::new("user123", "alice@example.com");
//! let token = codec.issue_refresh_token(&subject).unwrap();
//!
//! assert!(codec.verify_refresh_token(&token).is_ok());
//! assert!(codec.verify_access_token(&token).is_err());
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::Authenticator;
pub use authenticator::TokenPair;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use jwt::Rejection;
pub use jwt::TokenClaims;
pub use jwt::TokenClass;
pub use jwt::TokenCodec;
pub use jwt::TokenCodecConfig;
pub use jwt::TokenSubject;
pub use password::HashingParams;
pub use password::PasswordError;
pub use password::PasswordHasher;
