//! # punchclock-entity
//!
//! Domain entity models for the Punchclock attendance backend.

pub mod attendance;
pub mod user;

pub use attendance::{AttendanceRecord, AttendanceStatus};
pub use user::{User, UserRole};
