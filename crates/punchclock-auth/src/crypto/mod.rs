//! Field encryption and deterministic lookup keys.
//!
//! The email address is stored encrypted with a randomized nonce, so two
//! identical addresses never produce the same ciphertext. Because the
//! database still needs equality lookups and a uniqueness constraint on
//! the address, a separate deterministic digest (`lookup_key`) is stored
//! alongside the ciphertext and indexed instead.

pub mod cipher;
pub mod lookup;

pub use cipher::FieldCipher;
pub use lookup::lookup_key;
