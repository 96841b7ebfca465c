use bcrypt::{BcryptError, DEFAULT_COST, non_truncating_hash, non_truncating_verify};
use tracing::debug;

use crate::errors::AuthError;

/// Longest password bcrypt hashes in full: 72 bytes of input including the
/// trailing NUL.
pub const MAX_PASSWORD_BYTES: usize = 71;

/// One-way password hashing used by the auth workflow.
pub trait PasswordHasher: Send + Sync {
    fn hash(&self, plaintext: &str) -> Result<String, AuthError>;

    /// Returns `Ok(false)` on mismatch; `Err` only when the stored hash is unusable.
    fn verify(&self, plaintext: &str, hash: &str) -> Result<bool, AuthError>;
}

/// bcrypt-backed [`PasswordHasher`].
///
/// Passwords longer than [`MAX_PASSWORD_BYTES`] are never truncated: hashing
/// one fails, and verifying one reports a mismatch.
#[derive(Clone, Copy, Debug)]
pub struct BcryptHasher {
    cost: u32,
}

impl BcryptHasher {
    pub fn with_cost(cost: u32) -> Self {
        Self { cost }
    }
}

impl Default for BcryptHasher {
    fn default() -> Self {
        Self { cost: DEFAULT_COST }
    }
}

impl PasswordHasher for BcryptHasher {
    fn hash(&self, plaintext: &str) -> Result<String, AuthError> {
        non_truncating_hash(plaintext, self.cost)
            .map_err(|e| AuthError::internal(anyhow::anyhow!("Failed to hash password: {}", e)))
    }

    fn verify(&self, plaintext: &str, hash: &str) -> Result<bool, AuthError> {
        match non_truncating_verify(plaintext, hash) {
            Ok(matches) => Ok(matches),
            // No stored hash can come from an over-long password.
            Err(BcryptError::Truncation(len)) => {
                debug!(password.len = len, "Password exceeds bcrypt input limit");
                Ok(false)
            }
            Err(e) => Err(AuthError::internal(anyhow::anyhow!(
                "Failed to verify password: {}",
                e
            ))),
        }
    }
}
