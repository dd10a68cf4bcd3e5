//! # punchclock-service
//!
//! Business services sitting between the HTTP layer and the repositories.
//! The account service owns the registration and login flows; the
//! attendance service owns the check-in/check-out lifecycle.

pub mod account;
pub mod attendance;

pub use account::AccountService;
pub use attendance::AttendanceService;
