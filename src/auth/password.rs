//! Credential hashing. Argon2 is CPU-bound, so both directions run on the
//! blocking pool and never on a request worker.

use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use rand::rngs::OsRng;
use tokio::task;

use crate::error::AuthError;

/// Hashes a password with a fresh per-record salt into a PHC string
/// (`$argon2id$...`), which is what `users.password_hash` holds.
pub async fn hash(password: String) -> Result<String, AuthError> {
    task::spawn_blocking(move || {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|phc| phc.to_string())
            .map_err(|e| anyhow::anyhow!("argon2 hashing failed: {e}"))
    })
    .await
    .map_err(|e| anyhow::anyhow!("hashing task failed: {e}"))?
    .map_err(AuthError::from)
}

/// `Ok(false)` on mismatch; a stored value that is not a PHC string is an
/// internal error, not a failed login.
pub async fn verify(password: String, stored: String) -> Result<bool, AuthError> {
    task::spawn_blocking(move || {
        let parsed = PasswordHash::new(&stored)
            .map_err(|e| anyhow::anyhow!("stored password hash unreadable: {e}"))?;
        Ok::<_, anyhow::Error>(
            Argon2::default()
                .verify_password(password.as_bytes(), &parsed)
                .is_ok(),
        )
    })
    .await
    .map_err(|e| anyhow::anyhow!("verify task failed: {e}"))?
    .map_err(AuthError::from)
}
