//! Passphrase-based encryption of small secrets.
//!
//! Wraps Age passphrase encryption (scrypt KDF, salt and nonce embedded in
//! the output) and base64-encodes the sealed bytes so ciphertext travels as
//! an opaque printable string. Decryption needs nothing beyond the
//! ciphertext and the same passphrase.
//!
//! Both functions are pure transformations: no I/O, no shared state.

use std::io::{Read, Write};
use std::iter;

use age::secrecy::SecretString;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::error::{Result, VaultError};

/// Encrypt `plaintext` under `passphrase`.
///
/// Returns a self-contained base64 string; everything needed to decrypt
/// (salt, work parameters, nonce) is embedded by Age.
///
/// # Examples
///
/// ```
/// use phrasevault_core::cipher::{decrypt, encrypt};
///
/// let sealed = encrypt("secret", "correct horse battery staple").unwrap();
/// assert_ne!(sealed, "secret");
/// assert_eq!(decrypt(&sealed, "correct horse battery staple").unwrap(), "secret");
/// ```
pub fn encrypt(plaintext: &str, passphrase: &str) -> Result<String> {
    let encryptor =
        age::Encryptor::with_user_passphrase(SecretString::from(passphrase.to_string()));

    let mut sealed = Vec::new();
    let mut writer = encryptor
        .wrap_output(&mut sealed)
        .map_err(|e| VaultError::Crypto(format!("Could not start sealing: {}", e)))?;

    writer
        .write_all(plaintext.as_bytes())
        .map_err(|e| VaultError::Crypto(format!("Sealing the secret failed: {}", e)))?;

    writer
        .finish()
        .map_err(|e| VaultError::Crypto(format!("Finalizing the sealed secret failed: {}", e)))?;

    Ok(STANDARD.encode(sealed))
}

/// Decrypt a string produced by [`encrypt`].
///
/// # Errors
///
/// Returns `VaultError::IncorrectPassphrase` when the passphrase does not
/// match, and `VaultError::Crypto` when the ciphertext is malformed or
/// corrupted. Age authenticates its payload, so a success here always
/// yields the exact plaintext that was sealed.
pub fn decrypt(ciphertext: &str, passphrase: &str) -> Result<String> {
    let sealed = STANDARD
        .decode(ciphertext.trim())
        .map_err(|e| VaultError::Crypto(format!("Ciphertext is not valid base64: {}", e)))?;

    let decryptor = age::Decryptor::new(sealed.as_slice())
        .map_err(|e| VaultError::Crypto(format!("Ciphertext header is invalid: {}", e)))?;

    let identity = age::scrypt::Identity::new(SecretString::from(passphrase.to_string()));
    let mut reader = decryptor
        .decrypt(iter::once(&identity as &dyn age::Identity))
        .map_err(|e| match e {
            age::DecryptError::NoMatchingKeys
            | age::DecryptError::DecryptionFailed
            | age::DecryptError::KeyDecryptionFailed => VaultError::IncorrectPassphrase,
            _ => VaultError::Crypto(format!("Decryption failed: {}", e)),
        })?;

    let mut plaintext = Vec::new();
    reader
        .read_to_end(&mut plaintext)
        .map_err(|e| VaultError::Crypto(format!("Unsealing the secret failed: {}", e)))?;

    String::from_utf8(plaintext)
        .map_err(|_| VaultError::Crypto("Unsealed payload is not UTF-8 text".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let sealed = encrypt("secret", "correct horse battery staple").unwrap();
        let opened = decrypt(&sealed, "correct horse battery staple").unwrap();
        assert_eq!(opened, "secret");
    }

    #[test]
    fn test_round_trip_unicode() {
        let plaintext = "пароль от почты: hunter2 🔑";
        let passphrase = "собака кот лев орел";
        let sealed = encrypt(plaintext, passphrase).unwrap();
        assert_eq!(decrypt(&sealed, passphrase).unwrap(), plaintext);
    }

    #[test]
    fn test_round_trip_empty_plaintext() {
        let sealed = encrypt("", "some-passphrase-123").unwrap();
        assert_eq!(decrypt(&sealed, "some-passphrase-123").unwrap(), "");
    }

    #[test]
    fn test_ciphertext_is_printable_base64() {
        let sealed = encrypt("secret", "some-passphrase-123").unwrap();
        assert!(STANDARD.decode(&sealed).is_ok());
        assert!(sealed.is_ascii());
    }

    #[test]
    fn test_ciphertext_does_not_contain_plaintext() {
        let sealed = encrypt("PLAINTEXT_MARKER_123", "some-passphrase-123").unwrap();
        assert!(!sealed.contains("PLAINTEXT_MARKER_123"));
        let raw = STANDARD.decode(&sealed).unwrap();
        let haystack = String::from_utf8_lossy(&raw);
        assert!(!haystack.contains("PLAINTEXT_MARKER_123"));
    }

    #[test]
    fn test_wrong_passphrase_fails() {
        let sealed = encrypt("secret", "passphrase-one").unwrap();
        let result = decrypt(&sealed, "passphrase-two");
        assert!(matches!(result, Err(VaultError::IncorrectPassphrase)));
    }

    #[test]
    fn test_malformed_ciphertext_fails() {
        let result = decrypt("not base64 at all!!!", "some-passphrase-123");
        assert!(matches!(result, Err(VaultError::Crypto(_))));
    }

    #[test]
    fn test_corrupted_ciphertext_fails() {
        let sealed = encrypt("secret", "some-passphrase-123").unwrap();
        let mut raw = STANDARD.decode(&sealed).unwrap();
        let mid = raw.len() / 2;
        raw[mid] ^= 0xFF;
        let tampered = STANDARD.encode(raw);
        assert!(decrypt(&tampered, "some-passphrase-123").is_err());
    }

    #[test]
    fn test_same_input_yields_fresh_ciphertext() {
        // Random salt per encryption: equal inputs must not collide.
        let first = encrypt("secret", "some-passphrase-123").unwrap();
        let second = encrypt("secret", "some-passphrase-123").unwrap();
        assert_ne!(first, second);
    }
}
