use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::errors::JwtError;
use super::errors::Rejection;

/// JWT token handler for encoding and decoding tokens with one secret.
///
/// Generic over the claims type. Uses HS256 (HMAC with SHA-256) and only
/// accepts HS256 when decoding.
pub struct JwtHandler {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtHandler {
    /// Create a new JWT handler.
    ///
    /// # Arguments
    /// * `secret` - Secret key for signing tokens (should be at least 32 bytes)
    /// * `issuer` - Issuer written into tokens and required on decode
    ///
    /// # Returns
    /// JwtHandler instance configured with HS256 algorithm
    pub fn new(secret: &[u8], issuer: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_required_spec_claims(&["exp", "iat", "iss", "sub"]);
        validation.set_issuer(&[issuer]);
        validation.leeway = 0;
        // Expiry is checked by the caller once the token class is known.
        validation.validate_exp = false;

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
        }
    }

    /// Encode claims into a signed JWT.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn encode<T: Serialize>(&self, claims: &T) -> Result<String, JwtError> {
        let header = Header::new(Algorithm::HS256);

        encode(&header, claims, &self.encoding_key)
            .map_err(|e| JwtError::EncodingFailed(e.to_string()))
    }

    /// Decode a JWT and check its signature, structure and issuer.
    ///
    /// # Errors
    /// * `InvalidToken` - Signature, issuer or payload checks failed
    pub fn decode<T: DeserializeOwned>(&self, token: &str) -> Result<T, JwtError> {
        decode::<T>(token, &self.decoding_key, &self.validation)
            .map(|token_data| token_data.claims)
            .map_err(|e| {
                let rejection = match e.kind() {
                    ErrorKind::InvalidSignature => Rejection::BadSignature,
                    ErrorKind::InvalidIssuer => Rejection::WrongIssuer,
                    _ => Rejection::Malformed(e.to_string()),
                };
                JwtError::InvalidToken(rejection)
            })
    }
}
