//! Password hashing with Argon2id.
//!
//! The backend stores password hashes as opaque strings; the gateway hashes
//! on create/update and verifies on login.

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

use crate::error::ApiError;

pub struct Encryptor;

impl Encryptor {
    /// Hash a password using Argon2id.
    pub fn hash(password: &str) -> Result<String, ApiError> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| ApiError::Internal(format!("password hash error: {e}")))?;

        Ok(hash.to_string())
    }

    /// Verify a password against its stored hash. An unparseable hash is
    /// treated the same as a mismatch.
    pub fn verify(password: &str, hash: &str) -> bool {
        let Ok(parsed) = PasswordHash::new(hash) else {
            return false;
        };

        Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok()
    }
}
