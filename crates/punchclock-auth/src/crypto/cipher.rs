//! Authenticated encryption for sensitive fields at rest.

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use chacha20poly1305::{
    ChaCha20Poly1305, Key, Nonce,
    aead::{Aead, AeadCore, KeyInit, OsRng},
};

use punchclock_core::config::auth::AuthConfig;
use punchclock_core::error::AppError;

/// ChaCha20-Poly1305 nonce length in bytes.
const NONCE_LEN: usize = 12;

/// Encrypts and decrypts a sensitive field under the process-wide key.
///
/// The wire/storage format is base64 of `nonce (12 bytes) || ciphertext`,
/// where the ciphertext carries the Poly1305 tag. Decryption fails on
/// tampering, truncation, or a wrong key; it never returns garbage.
#[derive(Clone)]
pub struct FieldCipher {
    cipher: ChaCha20Poly1305,
}

impl std::fmt::Debug for FieldCipher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldCipher").finish()
    }
}

impl FieldCipher {
    /// Creates a cipher from auth configuration.
    ///
    /// Fails with a configuration error when the key is missing or not a
    /// base64-encoded 32-byte value; callers treat that as fatal.
    pub fn new(config: &AuthConfig) -> Result<Self, AppError> {
        let key_bytes = config.encryption_key_bytes()?;
        Ok(Self {
            cipher: ChaCha20Poly1305::new(Key::from_slice(&key_bytes)),
        })
    }

    /// Encrypts a plaintext with a fresh random nonce.
    ///
    /// Repeated encryption of identical plaintexts yields different
    /// ciphertexts.
    pub fn encrypt(&self, plaintext: &str) -> Result<String, AppError> {
        let nonce = ChaCha20Poly1305::generate_nonce(&mut OsRng);
        let ciphertext = self
            .cipher
            .encrypt(&nonce, plaintext.as_bytes())
            .map_err(|_| AppError::crypto("Field encryption failed"))?;

        let mut out = Vec::with_capacity(NONCE_LEN + ciphertext.len());
        out.extend_from_slice(nonce.as_slice());
        out.extend_from_slice(&ciphertext);
        Ok(BASE64.encode(out))
    }

    /// Decrypts a ciphertext produced by [`encrypt`](Self::encrypt).
    ///
    /// Any integrity failure surfaces as a crypto error: tampered bytes,
    /// truncated input, invalid base64, or a ciphertext produced under a
    /// different key.
    pub fn decrypt(&self, ciphertext: &str) -> Result<String, AppError> {
        let data = BASE64
            .decode(ciphertext)
            .map_err(|_| AppError::crypto("Ciphertext is not valid base64"))?;

        if data.len() < NONCE_LEN {
            return Err(AppError::crypto("Ciphertext is truncated"));
        }

        let (nonce, payload) = data.split_at(NONCE_LEN);
        let plaintext = self
            .cipher
            .decrypt(Nonce::from_slice(nonce), payload)
            .map_err(|_| AppError::crypto("Field decryption failed"))?;

        String::from_utf8(plaintext)
            .map_err(|_| AppError::crypto("Decrypted payload is not valid UTF-8"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use punchclock_core::error::ErrorKind;

    fn cipher_with_key(byte: u8) -> FieldCipher {
        let config = AuthConfig {
            jwt_secret: "test-secret".to_string(),
            encryption_key: BASE64.encode([byte; 32]),
            bcrypt_cost: 12,
            token_ttl_minutes: 60,
            token_leeway_seconds: 0,
        };
        FieldCipher::new(&config).unwrap()
    }

    #[test]
    fn test_round_trip() {
        let cipher = cipher_with_key(1);
        let ct = cipher.encrypt("alice@example.com").unwrap();
        assert_eq!(cipher.decrypt(&ct).unwrap(), "alice@example.com");
    }

    #[test]
    fn test_nonce_uniqueness() {
        let cipher = cipher_with_key(1);
        let a = cipher.encrypt("alice@example.com").unwrap();
        let b = cipher.encrypt("alice@example.com").unwrap();
        assert_ne!(a, b);
        assert_eq!(cipher.decrypt(&a).unwrap(), cipher.decrypt(&b).unwrap());
    }

    #[test]
    fn test_wrong_key_fails() {
        let ct = cipher_with_key(1).encrypt("alice@example.com").unwrap();
        let err = cipher_with_key(2).decrypt(&ct).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Crypto);
    }

    #[test]
    fn test_tampered_ciphertext_fails() {
        let cipher = cipher_with_key(1);
        let ct = cipher.encrypt("alice@example.com").unwrap();
        let mut raw = BASE64.decode(&ct).unwrap();
        let last = raw.len() - 1;
        raw[last] ^= 0x01;
        let tampered = BASE64.encode(raw);
        assert_eq!(cipher.decrypt(&tampered).unwrap_err().kind, ErrorKind::Crypto);
    }

    #[test]
    fn test_truncated_ciphertext_fails() {
        let cipher = cipher_with_key(1);
        assert_eq!(
            cipher.decrypt(&BASE64.encode([0u8; 4])).unwrap_err().kind,
            ErrorKind::Crypto
        );
    }

    #[test]
    fn test_garbage_input_fails() {
        let cipher = cipher_with_key(1);
        assert_eq!(
            cipher.decrypt("%%% not base64 %%%").unwrap_err().kind,
            ErrorKind::Crypto
        );
    }
}
