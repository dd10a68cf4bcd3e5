//! Concrete repository implementations.

pub mod attendance;
pub mod user;

pub use attendance::AttendanceRepository;
pub use user::UserRepository;
