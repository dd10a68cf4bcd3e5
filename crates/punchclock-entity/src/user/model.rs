//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::role::UserRole;

/// A registered user in the attendance system.
///
/// The email is stored as an AEAD ciphertext; equality lookups and the
/// uniqueness constraint run against `email_lookup`, a deterministic
/// digest of the normalized address.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique user identifier.
    pub id: Uuid,
    /// Full display name.
    pub name: String,
    /// Encrypted email address (base64 nonce || ciphertext).
    #[serde(skip_serializing)]
    pub email_ciphertext: String,
    /// Deterministic lookup digest of the normalized email.
    #[serde(skip_serializing)]
    pub email_lookup: String,
    /// bcrypt password hash.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// User role.
    pub role: UserRole,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
    /// When the user was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a new user.
///
/// The password is already hashed and the email already encrypted by the
/// time this struct reaches the repository; the database layer never sees
/// plaintext secrets.
#[derive(Debug, Clone)]
pub struct CreateUser {
    /// Full display name.
    pub name: String,
    /// Encrypted email.
    pub email_ciphertext: String,
    /// Deterministic email lookup digest.
    pub email_lookup: String,
    /// Pre-hashed password.
    pub password_hash: String,
    /// Assigned role.
    pub role: UserRole,
}
