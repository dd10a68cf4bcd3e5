//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use punchclock_entity::attendance::AttendanceRecord;
use punchclock_service::account::UserProfile;

/// User summary for responses. Never carries the password hash.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    /// User ID.
    pub id: Uuid,
    /// Full name.
    pub name: String,
    /// Decrypted email address.
    pub email: String,
    /// Role.
    pub role: String,
    /// Created at.
    pub created_at: DateTime<Utc>,
}

impl From<UserProfile> for UserResponse {
    fn from(profile: UserProfile) -> Self {
        Self {
            id: profile.user.id,
            name: profile.user.name,
            email: profile.email,
            role: profile.user.role.to_string(),
            created_at: profile.user.created_at,
        }
    }
}

/// Login response: the bearer token wire format clients echo back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Opaque bearer string.
    pub access_token: String,
    /// Always `"bearer"`.
    pub token_type: String,
    /// Token expiration.
    pub expires_at: DateTime<Utc>,
}

/// Attendance record for responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceResponse {
    /// Record ID.
    pub id: Uuid,
    /// Owning user ID.
    pub user_id: Uuid,
    /// Check-in time.
    pub check_in_time: DateTime<Utc>,
    /// Check-out time, if closed.
    pub check_out_time: Option<DateTime<Utc>>,
    /// Record status.
    pub status: String,
}

impl From<AttendanceRecord> for AttendanceResponse {
    fn from(record: AttendanceRecord) -> Self {
        Self {
            id: record.id,
            user_id: record.user_id,
            check_in_time: record.check_in_time,
            check_out_time: record.check_out_time,
            status: record.status.to_string(),
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall status.
    pub status: String,
    /// Whether the database responded.
    pub database: bool,
}
