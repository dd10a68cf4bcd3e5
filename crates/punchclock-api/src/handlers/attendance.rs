//! Attendance handlers — check-in, check-out, listings.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use crate::dto::response::AttendanceResponse;
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::rbac::{require_admin, require_employee};
use crate::state::AppState;

/// POST /api/attendance/check-in (employee only)
pub async fn check_in(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<(StatusCode, Json<AttendanceResponse>), ApiError> {
    require_employee(&auth)?;

    let record = state.attendance_service.check_in(auth.subject_id).await?;
    Ok((StatusCode::CREATED, Json(AttendanceResponse::from(record))))
}

/// PUT /api/attendance/check-out (employee only)
pub async fn check_out(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<AttendanceResponse>, ApiError> {
    require_employee(&auth)?;

    let record = state.attendance_service.check_out(auth.subject_id).await?;
    Ok(Json(AttendanceResponse::from(record)))
}

/// GET /api/attendance (admin only)
pub async fn list_all(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Vec<AttendanceResponse>>, ApiError> {
    require_admin(&auth)?;

    let records = state.attendance_service.list_all().await?;
    Ok(Json(
        records.into_iter().map(AttendanceResponse::from).collect(),
    ))
}

/// GET /api/attendance/me
pub async fn list_me(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Vec<AttendanceResponse>>, ApiError> {
    let records = state
        .attendance_service
        .list_for_user(auth.subject_id)
        .await?;
    Ok(Json(
        records.into_iter().map(AttendanceResponse::from).collect(),
    ))
}
