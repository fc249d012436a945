//! Salted, slow password hashing backed by bcrypt.
//!
//! bcrypt only reads the first 72 bytes of its input, NUL terminator
//! included. The non-truncating variants are used throughout so that two
//! passwords sharing a long prefix never verify against each other.

use std::sync::OnceLock;

use bcrypt::{BcryptError, DEFAULT_COST, non_truncating_hash, non_truncating_verify};

use crate::errors::AppError;

/// Longest password, in bytes, that bcrypt hashes without truncation.
pub const MAX_PASSWORD_BYTES: usize = 71;

static DUMMY_HASH: OnceLock<Option<String>> = OnceLock::new();

/// Hashes a password with a fresh random salt.
///
/// Passwords longer than [`MAX_PASSWORD_BYTES`] are a validation error.
pub fn hash_password(password: &str) -> Result<String, AppError> {
    non_truncating_hash(password, DEFAULT_COST).map_err(|e| match e {
        BcryptError::Truncation(_) => AppError::Validation(format!(
            "password must be at most {} bytes",
            MAX_PASSWORD_BYTES
        )),
        e => AppError::internal(anyhow::anyhow!("Failed to hash password: {}", e)),
    })
}

/// Checks a password against a stored bcrypt hash.
///
/// Returns `Ok(false)` on mismatch, including passwords too long to have been
/// hashed. A malformed stored hash is an internal error, not a failed login.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, AppError> {
    match non_truncating_verify(password, hash) {
        Ok(matches) => Ok(matches),
        Err(BcryptError::Truncation(_)) => Ok(false),
        Err(e) => Err(AppError::internal(anyhow::anyhow!(
            "Failed to verify password: {}",
            e
        ))),
    }
}

/// Runs a full-cost verification against a fixed hash and discards the result.
///
/// Called on the unknown-account branch of a login so it takes as long as a
/// wrong password against a real account.
pub fn verify_dummy_password(password: &str) {
    let dummy =
        DUMMY_HASH.get_or_init(|| non_truncating_hash("complaintdesk-dummy", DEFAULT_COST).ok());
    if let Some(hash) = dummy {
        let _ = non_truncating_verify(password, hash);
    }
}
