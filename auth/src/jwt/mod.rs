pub mod claims;
pub mod codec;
pub mod errors;
pub mod handler;

pub use claims::TokenClaims;
pub use claims::TokenClass;
pub use claims::TokenSubject;
pub use codec::TokenCodec;
pub use codec::TokenCodecConfig;
pub use errors::JwtError;
pub use errors::Rejection;
pub use handler::JwtHandler;
