//! Route definitions for the punchclock HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`. The router
//! receives `AppState` and passes it to all handlers via Axum's `State`
//! extractor; per-route authorization lives in the handlers themselves.

use axum::{
    Router,
    routing::{get, post, put},
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(user_routes())
        .merge(attendance_routes())
        .merge(health_routes());

    Router::new()
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

/// Auth endpoints: login
fn auth_routes() -> Router<AppState> {
    Router::new().route("/auth/login", post(handlers::auth::login))
}

/// User endpoints: registration, admin listing, own profile
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", post(handlers::user::register))
        .route("/users", get(handlers::user::list_users))
        .route("/users/me", get(handlers::user::me))
}

/// Attendance endpoints: check-in/check-out and listings
fn attendance_routes() -> Router<AppState> {
    Router::new()
        .route("/attendance/check-in", post(handlers::attendance::check_in))
        .route("/attendance/check-out", put(handlers::attendance::check_out))
        .route("/attendance", get(handlers::attendance::list_all))
        .route("/attendance/me", get(handlers::attendance::list_me))
}

/// Health check endpoint (no auth required)
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
