//! Attendance record entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::status::AttendanceStatus;

/// A single check-in/check-out record.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AttendanceRecord {
    /// Unique record identifier.
    pub id: Uuid,
    /// The user this record belongs to.
    pub user_id: Uuid,
    /// Server-assigned check-in time.
    pub check_in_time: DateTime<Utc>,
    /// Check-out time, set when the record is closed.
    pub check_out_time: Option<DateTime<Utc>>,
    /// Current status.
    pub status: AttendanceStatus,
}

impl AttendanceRecord {
    /// Whether this record is still open (no check-out yet).
    pub fn is_open(&self) -> bool {
        self.status == AttendanceStatus::CheckedIn
    }
}
