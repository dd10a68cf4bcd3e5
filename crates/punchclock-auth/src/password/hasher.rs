//! bcrypt password hashing and verification.

use punchclock_core::config::auth::AuthConfig;
use punchclock_core::error::{AppError, ErrorKind};

/// Handles password hashing and verification using bcrypt.
///
/// The cost factor comes from configuration (validated >= 10 at startup).
/// bcrypt embeds cost and salt in the hash string, so hashes produced at
/// an older, lower cost keep verifying after a cost upgrade.
#[derive(Debug, Clone)]
pub struct PasswordHasher {
    /// bcrypt work factor used for new hashes.
    cost: u32,
}

impl PasswordHasher {
    /// Creates a new password hasher from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            cost: config.bcrypt_cost,
        }
    }

    /// Hashes a plaintext password with a fresh random salt.
    ///
    /// Two calls with the same password yield different hash strings.
    pub fn hash_password(&self, password: &str) -> Result<String, AppError> {
        if password.is_empty() {
            return Err(AppError::validation("Password must not be empty"));
        }

        bcrypt::hash(password, self.cost)
            .map_err(|e| AppError::with_source(ErrorKind::Internal, "Password hashing failed", e))
    }

    /// Verifies a plaintext password against a stored bcrypt hash.
    ///
    /// Returns `Ok(true)` if the password matches, `Ok(false)` if not.
    /// An error is returned only when the stored hash itself cannot be
    /// parsed — a wrong password is never an error.
    pub fn verify_password(&self, password: &str, hash: &str) -> Result<bool, AppError> {
        bcrypt::verify(password, hash).map_err(|e| {
            AppError::with_source(ErrorKind::Crypto, "Stored credential could not be parsed", e)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use punchclock_core::error::ErrorKind;

    fn hasher() -> PasswordHasher {
        // Minimum accepted cost keeps the tests reasonably fast.
        PasswordHasher { cost: 10 }
    }

    #[test]
    fn test_hash_and_verify_round_trip() {
        let hasher = hasher();
        let hash = hasher.hash_password("secret123").unwrap();
        assert!(hasher.verify_password("secret123", &hash).unwrap());
    }

    #[test]
    fn test_wrong_password_is_false_not_error() {
        let hasher = hasher();
        let hash = hasher.hash_password("secret123").unwrap();
        assert!(!hasher.verify_password("not-the-password", &hash).unwrap());
    }

    #[test]
    fn test_salt_uniqueness() {
        let hasher = hasher();
        let a = hasher.hash_password("secret123").unwrap();
        let b = hasher.hash_password("secret123").unwrap();
        assert_ne!(a, b);
        assert!(hasher.verify_password("secret123", &a).unwrap());
        assert!(hasher.verify_password("secret123", &b).unwrap());
    }

    #[test]
    fn test_empty_password_rejected() {
        let err = hasher().hash_password("").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
    }

    #[test]
    fn test_malformed_hash_is_crypto_error() {
        let err = hasher()
            .verify_password("secret123", "not-a-bcrypt-hash")
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Crypto);
    }

    #[test]
    fn test_lower_cost_hash_still_verifies() {
        // A credential hashed before a cost upgrade must keep verifying.
        let old = PasswordHasher { cost: 10 };
        let new = PasswordHasher { cost: 12 };
        let hash = old.hash_password("secret123").unwrap();
        assert!(new.verify_password("secret123", &hash).unwrap());
    }
}
