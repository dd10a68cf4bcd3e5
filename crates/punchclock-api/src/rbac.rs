//! Role helpers for route guarding.
//!
//! Role checks are exact-match by policy: admin-only routes reject
//! employees, and employee-only routes reject admins.

use punchclock_auth::guard::authorize;
use punchclock_core::error::AppError;
use punchclock_entity::user::UserRole;

use crate::extractors::AuthUser;

/// Checks that the authenticated user has the Admin role.
pub fn require_admin(auth: &AuthUser) -> Result<(), AppError> {
    authorize(&auth.0, UserRole::Admin)
}

/// Checks that the authenticated user has the Employee role.
pub fn require_employee(auth: &AuthUser) -> Result<(), AppError> {
    authorize(&auth.0, UserRole::Employee)
}
