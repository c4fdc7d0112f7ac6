//! Authentication boundary.
//!
//! This crate is intentionally decoupled from HTTP and storage: JWT claims +
//! HS256 codec, and password hashing. Which employee a credential belongs to
//! is decided elsewhere.

pub mod claims;
pub mod password;
pub mod token;

pub use claims::{Claims, TokenValidationError, validate_claims};
pub use token::{Hs256TokenCodec, TOKEN_TTL_SECS};

use thiserror::Error;

/// Authentication failure.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Unknown email or non-matching password. Deliberately carries no
    /// detail about which half failed.
    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("token rejected: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),

    #[error("password hashing failed: {0}")]
    PasswordHash(#[from] bcrypt::BcryptError),
}
