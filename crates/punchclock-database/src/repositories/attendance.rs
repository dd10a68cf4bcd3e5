//! Attendance repository implementation.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use punchclock_core::error::{AppError, ErrorKind};
use punchclock_core::result::AppResult;
use punchclock_entity::attendance::{AttendanceRecord, AttendanceStatus};

/// Repository for attendance record persistence.
#[derive(Debug, Clone)]
pub struct AttendanceRepository {
    pool: PgPool,
}

impl AttendanceRepository {
    /// Create a new attendance repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find the user's open record (checked in, not yet checked out), if any.
    pub async fn find_open_by_user(&self, user_id: Uuid) -> AppResult<Option<AttendanceRecord>> {
        sqlx::query_as::<_, AttendanceRecord>(
            "SELECT * FROM attendance WHERE user_id = $1 AND status = 'checked_in' \
             ORDER BY check_in_time DESC LIMIT 1",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to find open attendance record", e)
        })
    }

    /// Insert a new check-in record with a server-assigned timestamp.
    ///
    /// The partial unique index on `(user_id) WHERE status = 'checked_in'`
    /// guarantees at most one open record per user even when concurrent
    /// requests race past the service-level existence check; the losing
    /// insert surfaces as a conflict.
    pub async fn check_in(&self, user_id: Uuid) -> AppResult<AttendanceRecord> {
        sqlx::query_as::<_, AttendanceRecord>(
            r#"
            INSERT INTO attendance (id, user_id, check_in_time, status)
            VALUES ($1, $2, NOW(), 'checked_in')
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if e.as_database_error()
                .is_some_and(|d| d.is_unique_violation())
            {
                AppError::conflict("Already checked in")
            } else {
                AppError::with_source(ErrorKind::Database, "Failed to record check-in", e)
            }
        })
    }

    /// Close a record: set the check-out time and flip the status.
    pub async fn check_out(
        &self,
        record_id: Uuid,
        check_out_time: DateTime<Utc>,
    ) -> AppResult<AttendanceRecord> {
        sqlx::query_as::<_, AttendanceRecord>(
            r#"
            UPDATE attendance
            SET check_out_time = $2, status = $3
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(record_id)
        .bind(check_out_time)
        .bind(AttendanceStatus::CheckedOut)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to record check-out", e))
    }

    /// List all records, newest first.
    pub async fn find_all(&self) -> AppResult<Vec<AttendanceRecord>> {
        sqlx::query_as::<_, AttendanceRecord>(
            "SELECT * FROM attendance ORDER BY check_in_time DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list attendance records", e)
        })
    }

    /// List one user's records, newest first.
    pub async fn find_by_user(&self, user_id: Uuid) -> AppResult<Vec<AttendanceRecord>> {
        sqlx::query_as::<_, AttendanceRecord>(
            "SELECT * FROM attendance WHERE user_id = $1 ORDER BY check_in_time DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list user attendance", e)
        })
    }
}
