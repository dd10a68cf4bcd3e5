//! Authentication and authorization primitives for protected operations.
//!
//! A handler declares its required role (or "any authenticated identity");
//! the transport layer runs [`authenticate`] and then, if required,
//! [`authorize`] before any handler logic executes.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use punchclock_core::error::AppError;
use punchclock_entity::user::UserRole;

use crate::token::{Claims, TokenDecoder};

/// The decoded identity extracted from a verified session token.
///
/// Has no storage of its own; valid only for the lifetime of one request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Identity {
    /// The authenticated user's ID.
    pub subject_id: Uuid,
    /// The user's role at token issuance time.
    pub role: UserRole,
}

impl From<Claims> for Identity {
    fn from(claims: Claims) -> Self {
        Self {
            subject_id: claims.sub,
            role: claims.role,
        }
    }
}

impl Identity {
    /// Returns whether this identity carries the given role.
    pub fn has_role(&self, role: UserRole) -> bool {
        self.role == role
    }
}

/// Verifies a raw bearer token and extracts the identity.
///
/// Any verification failure surfaces as a 401-equivalent error with a
/// generic message; callers cannot tell which check failed.
pub fn authenticate(raw_token: &str, decoder: &TokenDecoder) -> Result<Identity, AppError> {
    let claims = decoder.verify(raw_token)?;
    Ok(Identity::from(claims))
}

/// Enforces an exact role match.
///
/// No role hierarchy exists: an admin does not pass an employee-only
/// check, and vice versa.
pub fn authorize(identity: &Identity, required_role: UserRole) -> Result<(), AppError> {
    if identity.has_role(required_role) {
        Ok(())
    } else {
        Err(AppError::forbidden(format!(
            "Role '{}' required for this operation",
            required_role
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use punchclock_core::error::ErrorKind;

    fn identity(role: UserRole) -> Identity {
        Identity {
            subject_id: Uuid::new_v4(),
            role,
        }
    }

    #[test]
    fn test_authorize_exact_match_all_pairs() {
        let roles = [UserRole::Admin, UserRole::Employee];
        for actual in roles {
            for required in roles {
                let result = authorize(&identity(actual), required);
                if actual == required {
                    assert!(result.is_ok());
                } else {
                    assert_eq!(result.unwrap_err().kind, ErrorKind::Forbidden);
                }
            }
        }
    }

    #[test]
    fn test_admin_does_not_pass_employee_check() {
        let err = authorize(&identity(UserRole::Admin), UserRole::Employee).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Forbidden);
    }
}
