//! Session token validation.

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

use punchclock_core::config::auth::AuthConfig;
use punchclock_core::error::AppError;

use super::claims::Claims;

/// Validates session tokens.
///
/// Error messages are deliberately generic: callers must not be able to
/// distinguish a forged signature from an undecodable payload.
#[derive(Clone)]
pub struct TokenDecoder {
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
    /// Validation configuration.
    validation: Validation,
}

impl std::fmt::Debug for TokenDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenDecoder")
            .field("validation", &self.validation)
            .finish()
    }
}

impl TokenDecoder {
    /// Creates a new decoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        // jsonwebtoken defaults to 60s leeway; the policy default here is 0.
        validation.leeway = config.token_leeway_seconds;

        Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
        }
    }

    /// Decodes and validates a session token string.
    ///
    /// Checks signature validity and expiration, then returns the claims.
    pub fn verify(&self, token: &str) -> Result<Claims, AppError> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                        AppError::token_expired("Session token has expired")
                    }
                    _ => AppError::unauthorized("Invalid session token"),
                }
            })?;

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::encoder::TokenEncoder;
    use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
    use chrono::Duration;
    use punchclock_core::error::ErrorKind;
    use punchclock_entity::user::UserRole;
    use uuid::Uuid;

    fn config(secret: &str) -> AuthConfig {
        AuthConfig {
            jwt_secret: secret.to_string(),
            encryption_key: base64::engine::general_purpose::STANDARD.encode([0u8; 32]),
            bcrypt_cost: 12,
            token_ttl_minutes: 60,
            token_leeway_seconds: 0,
        }
    }

    #[test]
    fn test_issue_and_verify() {
        let cfg = config("secret-a");
        let subject = Uuid::new_v4();
        let issued = TokenEncoder::new(&cfg)
            .issue(subject, UserRole::Employee)
            .unwrap();

        let claims = TokenDecoder::new(&cfg).verify(&issued.token).unwrap();
        assert_eq!(claims.sub, subject);
        assert_eq!(claims.role, UserRole::Employee);
        assert!(claims.iat <= claims.exp);
    }

    #[test]
    fn test_expired_token() {
        let cfg = config("secret-a");
        let issued = TokenEncoder::new(&cfg)
            .issue_with_ttl(Uuid::new_v4(), UserRole::Employee, Duration::seconds(-5))
            .unwrap();

        let err = TokenDecoder::new(&cfg).verify(&issued.token).unwrap_err();
        assert_eq!(err.kind, ErrorKind::TokenExpired);
    }

    #[test]
    fn test_leeway_accepts_just_expired_token() {
        let mut cfg = config("secret-a");
        cfg.token_leeway_seconds = 60;
        let issued = TokenEncoder::new(&cfg)
            .issue_with_ttl(Uuid::new_v4(), UserRole::Employee, Duration::seconds(-5))
            .unwrap();

        assert!(TokenDecoder::new(&cfg).verify(&issued.token).is_ok());
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let issued = TokenEncoder::new(&config("secret-a"))
            .issue(Uuid::new_v4(), UserRole::Admin)
            .unwrap();

        let err = TokenDecoder::new(&config("secret-b"))
            .verify(&issued.token)
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Unauthorized);
    }

    #[test]
    fn test_tampered_payload_rejected() {
        let cfg = config("secret-a");
        let issued = TokenEncoder::new(&cfg)
            .issue(Uuid::new_v4(), UserRole::Employee)
            .unwrap();

        // Swap the role claim inside the payload; the signature no longer covers it.
        let parts: Vec<&str> = issued.token.split('.').collect();
        let payload = String::from_utf8(URL_SAFE_NO_PAD.decode(parts[1]).unwrap()).unwrap();
        let forged_payload = payload.replace("employee", "admin");
        let forged = format!(
            "{}.{}.{}",
            parts[0],
            URL_SAFE_NO_PAD.encode(forged_payload),
            parts[2]
        );

        let err = TokenDecoder::new(&cfg).verify(&forged).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Unauthorized);
    }

    #[test]
    fn test_garbage_token_rejected() {
        let err = TokenDecoder::new(&config("secret-a"))
            .verify("not.a.token")
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Unauthorized);
    }
}
