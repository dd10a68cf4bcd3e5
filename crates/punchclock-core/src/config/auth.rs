//! Authentication and crypto configuration.

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Minimum accepted bcrypt cost factor.
pub const MIN_BCRYPT_COST: u32 = 10;

/// Maximum cost factor bcrypt itself accepts.
pub const MAX_BCRYPT_COST: u32 = 31;

/// Authentication, token, and field-encryption configuration.
///
/// Everything here is loaded once at startup and treated as read-only
/// process-wide state afterwards. Tests construct their own instances so
/// each test run can use distinct secrets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for token signing (HMAC-SHA256).
    #[serde(default = "default_jwt_secret")]
    pub jwt_secret: String,
    /// Base64-encoded 32-byte key for email field encryption.
    ///
    /// Deliberately has no default: a deployment without an encryption
    /// key must fail at startup, not at the first request.
    pub encryption_key: String,
    /// bcrypt work factor for password hashing.
    #[serde(default = "default_bcrypt_cost")]
    pub bcrypt_cost: u32,
    /// Session token TTL in minutes.
    #[serde(default = "default_token_ttl")]
    pub token_ttl_minutes: u64,
    /// Clock skew tolerance for token expiry checks, in seconds.
    #[serde(default)]
    pub token_leeway_seconds: u64,
}

impl AuthConfig {
    /// Validate the crypto parameters.
    pub fn validate(&self) -> Result<(), AppError> {
        if !(MIN_BCRYPT_COST..=MAX_BCRYPT_COST).contains(&self.bcrypt_cost) {
            return Err(AppError::configuration(format!(
                "bcrypt_cost must be between {MIN_BCRYPT_COST} and {MAX_BCRYPT_COST}, got {}",
                self.bcrypt_cost
            )));
        }
        self.encryption_key_bytes()?;
        Ok(())
    }

    /// Decode the configured encryption key into raw bytes.
    pub fn encryption_key_bytes(&self) -> Result<[u8; 32], AppError> {
        let bytes = BASE64
            .decode(&self.encryption_key)
            .map_err(|e| AppError::configuration(format!("encryption_key is not valid base64: {e}")))?;

        bytes.try_into().map_err(|_| {
            AppError::configuration("encryption_key must decode to exactly 32 bytes")
        })
    }
}

fn default_jwt_secret() -> String {
    "CHANGE_ME_IN_PRODUCTION".to_string()
}

fn default_bcrypt_cost() -> u32 {
    12
}

fn default_token_ttl() -> u64 {
    60
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with(key: &str, cost: u32) -> AuthConfig {
        AuthConfig {
            jwt_secret: "test-secret".to_string(),
            encryption_key: key.to_string(),
            bcrypt_cost: cost,
            token_ttl_minutes: 60,
            token_leeway_seconds: 0,
        }
    }

    #[test]
    fn test_valid_key_and_cost() {
        let key = BASE64.encode([7u8; 32]);
        assert!(config_with(&key, 12).validate().is_ok());
    }

    #[test]
    fn test_rejects_low_cost() {
        let key = BASE64.encode([7u8; 32]);
        let err = config_with(&key, 9).validate().unwrap_err();
        assert_eq!(err.kind, crate::error::ErrorKind::Configuration);
    }

    #[test]
    fn test_rejects_short_key() {
        let key = BASE64.encode([7u8; 16]);
        assert!(config_with(&key, 12).validate().is_err());
    }

    #[test]
    fn test_rejects_non_base64_key() {
        assert!(config_with("not base64!!!", 12).validate().is_err());
    }
}
