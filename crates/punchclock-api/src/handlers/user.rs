//! User handlers — registration, listing, own profile.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use validator::Validate;

use punchclock_core::error::AppError;
use punchclock_entity::user::UserRole;

use crate::dto::request::RegisterRequest;
use crate::dto::response::UserResponse;
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::rbac::require_admin;
use crate::state::AppState;

/// POST /api/users
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let role: UserRole = req.role.parse()?;

    let profile = state
        .account_service
        .register(&req.name, &req.email, role, &req.password)
        .await?;

    Ok((StatusCode::CREATED, Json(UserResponse::from(profile))))
}

/// GET /api/users (admin only)
pub async fn list_users(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Vec<UserResponse>>, ApiError> {
    require_admin(&auth)?;

    let profiles = state.account_service.list_users().await?;
    Ok(Json(profiles.into_iter().map(UserResponse::from).collect()))
}

/// GET /api/users/me
pub async fn me(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<UserResponse>, ApiError> {
    let profile = state.account_service.get_profile(auth.subject_id).await?;
    Ok(Json(UserResponse::from(profile)))
}
