//! Attendance service — check-in/check-out lifecycle.

use std::sync::Arc;

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use punchclock_core::error::AppError;
use punchclock_database::repositories::AttendanceRepository;
use punchclock_entity::attendance::AttendanceRecord;

/// Owns the check-in/check-out lifecycle.
///
/// A user has at most one open record at a time; check-in while open and
/// check-out without an open record are both conflicts.
#[derive(Debug, Clone)]
pub struct AttendanceService {
    attendance_repo: Arc<AttendanceRepository>,
}

impl AttendanceService {
    /// Creates a new attendance service.
    pub fn new(attendance_repo: Arc<AttendanceRepository>) -> Self {
        Self { attendance_repo }
    }

    /// Opens a new attendance record for the user.
    pub async fn check_in(&self, user_id: Uuid) -> Result<AttendanceRecord, AppError> {
        if self
            .attendance_repo
            .find_open_by_user(user_id)
            .await?
            .is_some()
        {
            return Err(AppError::conflict("Already checked in"));
        }

        let record = self.attendance_repo.check_in(user_id).await?;
        info!(user_id = %user_id, record_id = %record.id, "Checked in");
        Ok(record)
    }

    /// Closes the user's open attendance record.
    pub async fn check_out(&self, user_id: Uuid) -> Result<AttendanceRecord, AppError> {
        let open = self
            .attendance_repo
            .find_open_by_user(user_id)
            .await?
            .ok_or_else(|| AppError::conflict("No open check-in to close"))?;

        let record = self.attendance_repo.check_out(open.id, Utc::now()).await?;
        info!(user_id = %user_id, record_id = %record.id, "Checked out");
        Ok(record)
    }

    /// Lists every attendance record (admin view).
    pub async fn list_all(&self) -> Result<Vec<AttendanceRecord>, AppError> {
        self.attendance_repo.find_all().await
    }

    /// Lists one user's attendance records.
    pub async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<AttendanceRecord>, AppError> {
        self.attendance_repo.find_by_user(user_id).await
    }
}
