//! User role enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Roles available in the attendance system.
///
/// Role checks are exact-match: an admin does not implicitly pass
/// employee-only checks. Admin-only routes and employee-only routes each
/// name the single role they accept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "user_role", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Administrative user: manages the user roster and reads all records.
    Admin,
    /// Regular employee: checks in and out, reads their own records.
    Employee,
}

impl UserRole {
    /// Return the role as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Employee => "employee",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = punchclock_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "admin" => Ok(Self::Admin),
            "employee" => Ok(Self::Employee),
            _ => Err(punchclock_core::AppError::validation(format!(
                "Invalid user role: '{s}'. Expected one of: admin, employee"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!("admin".parse::<UserRole>().unwrap(), UserRole::Admin);
        assert_eq!("EMPLOYEE".parse::<UserRole>().unwrap(), UserRole::Employee);
        assert!("manager".parse::<UserRole>().is_err());
    }

    #[test]
    fn test_display_round_trip() {
        for role in [UserRole::Admin, UserRole::Employee] {
            assert_eq!(role.to_string().parse::<UserRole>().unwrap(), role);
        }
    }
}
