/**
 * Password Hashing
 *
 * bcrypt hashing and verification. Both are CPU-bound (cost 10 is tens of
 * milliseconds), so they run on tokio's blocking pool rather than on the
 * request's worker thread.
 *
 * # Security
 *
 * - Each hash gets a fresh random salt from bcrypt
 * - Verification is constant-time (inside bcrypt)
 * - Plaintext passwords are never logged
 */

use thiserror::Error;
use tokio::task::{spawn_blocking, JoinError};

/// bcrypt work factor for new hashes
pub const HASH_COST: u32 = 10;

/// Failures while hashing or verifying
#[derive(Debug, Error)]
pub enum PasswordError {
    /// bcrypt rejected the input or the stored hash is malformed
    #[error("bcrypt failure: {0}")]
    Hash(#[from] bcrypt::BcryptError),

    /// The blocking task panicked or was cancelled
    #[error("hashing task failed: {0}")]
    Task(#[from] JoinError),
}

/// Hash a plaintext password with a random salt
///
/// # Returns
/// The bcrypt hash string (algorithm, cost and salt embedded)
pub async fn hash_password(password: String) -> Result<String, PasswordError> {
    let hashed = spawn_blocking(move || bcrypt::hash(password, HASH_COST)).await??;
    Ok(hashed)
}

/// Check a plaintext password against a stored hash
///
/// # Returns
/// `Ok(false)` on mismatch; `Err` only if the hash itself is unusable
pub async fn verify_password(password: String, hash: String) -> Result<bool, PasswordError> {
    let matches = spawn_blocking(move || bcrypt::verify(password, &hash)).await??;
    Ok(matches)
}
