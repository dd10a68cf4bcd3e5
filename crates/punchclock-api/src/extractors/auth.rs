//! `AuthUser` extractor — pulls the bearer token from the Authorization
//! header, verifies it, and injects the decoded identity.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use punchclock_auth::guard::{Identity, authenticate};
use punchclock_core::error::AppError;

use crate::error::ApiError;
use crate::state::AppState;

/// Extracted authenticated identity available in handlers.
///
/// Handler logic never runs when extraction fails: axum rejects the
/// request before the handler body executes.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Identity);

impl std::ops::Deref for AuthUser {
    type Target = Identity;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| ApiError(AppError::unauthorized("Missing Authorization header")))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| ApiError(AppError::unauthorized("Invalid Authorization header format")))?;

        let identity = authenticate(token, &state.token_decoder)?;
        Ok(AuthUser(identity))
    }
}
