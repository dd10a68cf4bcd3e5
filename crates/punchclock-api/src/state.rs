//! Application state shared across all handlers and extractors.

use std::sync::Arc;

use punchclock_auth::token::TokenDecoder;
use punchclock_core::config::AppConfig;
use punchclock_database::DatabasePool;
use punchclock_service::{AccountService, AttendanceService};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`. All fields are
/// `Arc`-wrapped (or internally pooled) for cheap cloning across tasks;
/// everything here is read-only after startup.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Database pool, used directly only by the health check.
    pub db: DatabasePool,
    /// Session token verifier, used by the auth extractor.
    pub token_decoder: Arc<TokenDecoder>,
    /// Registration/login/profile flows.
    pub account_service: Arc<AccountService>,
    /// Check-in/check-out flows.
    pub attendance_service: Arc<AttendanceService>,
}
