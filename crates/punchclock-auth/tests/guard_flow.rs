//! End-to-end exercise of the auth core: register, login, and guard a
//! protected operation, without any transport or database in the loop.

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};

use punchclock_auth::crypto::{FieldCipher, lookup_key};
use punchclock_auth::guard::{authenticate, authorize};
use punchclock_auth::password::PasswordHasher;
use punchclock_auth::token::{TokenDecoder, TokenEncoder};
use punchclock_core::config::auth::AuthConfig;
use punchclock_core::error::ErrorKind;
use punchclock_entity::user::UserRole;
use uuid::Uuid;

fn test_config() -> AuthConfig {
    AuthConfig {
        jwt_secret: "guard-flow-secret".to_string(),
        encryption_key: BASE64.encode([42u8; 32]),
        bcrypt_cost: 10,
        token_ttl_minutes: 60,
        token_leeway_seconds: 0,
    }
}

#[test]
fn register_login_and_guard_flow() {
    let config = test_config();
    let hasher = PasswordHasher::new(&config);
    let cipher = FieldCipher::new(&config).unwrap();
    let encoder = TokenEncoder::new(&config);
    let decoder = TokenDecoder::new(&config);

    // Registration: hash the password, encrypt the email, derive the lookup key.
    let alice_id = Uuid::new_v4();
    let password_hash = hasher.hash_password("secret123").unwrap();
    let email_ciphertext = cipher.encrypt("alice@example.com").unwrap();
    let email_lookup = lookup_key("alice@example.com");

    // A later login request finds the record by the same lookup key.
    assert_eq!(lookup_key(" Alice@Example.com "), email_lookup);
    assert_eq!(cipher.decrypt(&email_ciphertext).unwrap(), "alice@example.com");

    // Login with the correct password issues a token decodable to Alice's identity.
    assert!(hasher.verify_password("secret123", &password_hash).unwrap());
    let issued = encoder.issue(alice_id, UserRole::Employee).unwrap();

    let identity = authenticate(&issued.token, &decoder).unwrap();
    assert_eq!(identity.subject_id, alice_id);
    assert_eq!(identity.role, UserRole::Employee);

    // An admin-only operation rejects her token; an employee operation accepts it.
    let err = authorize(&identity, UserRole::Admin).unwrap_err();
    assert_eq!(err.kind, ErrorKind::Forbidden);
    authorize(&identity, UserRole::Employee).unwrap();
}

#[test]
fn wrong_password_never_reaches_token_issuance() {
    let config = test_config();
    let hasher = PasswordHasher::new(&config);

    let password_hash = hasher.hash_password("secret123").unwrap();

    // The login flow issues a token only after verify returns true.
    let verified = hasher.verify_password("hunter2", &password_hash).unwrap();
    assert!(!verified);
}
