//! # punchclock-api
//!
//! HTTP layer for Punchclock: the router, request/response DTOs, the
//! authenticated-user extractor, and the mapping from domain errors to
//! HTTP status codes.

pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod rbac;
pub mod router;
pub mod state;

pub use error::ApiError;
pub use state::AppState;
