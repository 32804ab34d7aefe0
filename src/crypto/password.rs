//! Password hashing using Argon2id
//!
//! Passwords are stored as PHC strings (algorithm, parameters, salt and hash
//! in one self-describing value), so verification needs nothing else.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::error::{MoneyTrackError, MoneyTrackResult};

/// Hash a password with a fresh random salt
pub fn hash_password(password: &str) -> MoneyTrackResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| MoneyTrackError::Storage(format!("Password hashing failed: {}", e)))?;
    Ok(hash.to_string())
}

/// Check a password against a stored PHC hash
///
/// A malformed stored hash is an error; a wrong password is `Ok(false)`.
pub fn verify_password(password: &str, stored_hash: &str) -> MoneyTrackResult<bool> {
    let parsed = PasswordHash::new(stored_hash)
        .map_err(|e| MoneyTrackError::Storage(format!("Invalid stored password hash: {}", e)))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}
