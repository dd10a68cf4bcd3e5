//! Claims payload embedded in every session token.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use punchclock_entity::user::UserRole;

/// Session token claims.
///
/// The signature covers the full payload; tokens are stateless and carry
/// everything needed to reconstruct an identity without a lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject — the user ID.
    pub sub: Uuid,
    /// User role at the time of token issuance.
    pub role: UserRole,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
}
