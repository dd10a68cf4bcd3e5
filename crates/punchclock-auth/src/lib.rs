//! # punchclock-auth
//!
//! The authentication and data-protection core of Punchclock.
//!
//! ## Modules
//!
//! - `password` — bcrypt credential hashing and verification
//! - `crypto` — authenticated field encryption and deterministic email lookup keys
//! - `token` — signed, time-bounded session token issuance and verification
//! - `guard` — authenticate/authorize primitives built on the token verifier
//!
//! Every component is a pure function over its inputs plus read-only
//! configuration loaded at startup; all of them are safe to share across
//! request handlers behind an `Arc` without locking.

pub mod crypto;
pub mod guard;
pub mod password;
pub mod token;

pub use crypto::FieldCipher;
pub use guard::{Identity, authenticate, authorize};
pub use password::PasswordHasher;
pub use token::{Claims, TokenDecoder, TokenEncoder};
