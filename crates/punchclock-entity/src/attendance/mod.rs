//! Attendance domain entities.

pub mod model;
pub mod status;

pub use model::AttendanceRecord;
pub use status::AttendanceStatus;
