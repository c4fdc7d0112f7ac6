//! Password hashing.
//!
//! Passwords are stored as bcrypt hashes, never plaintext.

use crate::AuthError;

/// Hash a plaintext password for storage.
pub fn hash(plain: &str) -> Result<String, AuthError> {
    Ok(bcrypt::hash(plain, bcrypt::DEFAULT_COST)?)
}

/// Check a plaintext password against a stored hash.
///
/// A malformed stored hash counts as a mismatch rather than an error; the
/// caller only ever learns pass/fail.
pub fn verify(plain: &str, hashed: &str) -> bool {
    bcrypt::verify(plain, hashed).unwrap_or(false)
}
