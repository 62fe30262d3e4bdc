use anyhow::{anyhow, Result};
use argon2::Argon2;
use password_hash::{PasswordHash, SaltString};

/// Hash a password into a PHC string for storage
pub fn make_password_hash(password: &str) -> Result<String> {
    let salt = SaltString::generate(rand::thread_rng());
    let hash = PasswordHash::generate(Argon2::default(), password, &salt)
        .map_err(|e| anyhow!("Failed to hash password: {}", e))?;

    Ok(hash.to_string())
}

/// Check a password against a stored PHC string.
///
/// Malformed stored hashes count as a mismatch.
pub fn verify_password(password: &str, stored_hash: &str) -> bool {
    match PasswordHash::new(stored_hash) {
        Ok(hash) => hash
            .verify_password(&[&Argon2::default()], password)
            .is_ok(),
        Err(e) => {
            tracing::warn!(error = %e, "Stored password hash is malformed");
            false
        }
    }
}
