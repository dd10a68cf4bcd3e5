//! Deterministic lookup key for the encrypted email column.

use sha2::{Digest, Sha256};

/// Computes the deterministic lookup digest for an email address.
///
/// The address is trimmed and lowercased first so that lookups are
/// case-insensitive, matching how registration normalizes it.
pub fn lookup_key(email: &str) -> String {
    let normalized = email.trim().to_lowercase();
    hex::encode(Sha256::digest(normalized.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deterministic() {
        assert_eq!(lookup_key("alice@example.com"), lookup_key("alice@example.com"));
    }

    #[test]
    fn test_normalization() {
        assert_eq!(lookup_key(" Alice@Example.COM "), lookup_key("alice@example.com"));
    }

    #[test]
    fn test_distinct_addresses_differ() {
        assert_ne!(lookup_key("alice@example.com"), lookup_key("bob@example.com"));
    }
}
