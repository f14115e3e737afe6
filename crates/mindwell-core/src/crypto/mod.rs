//! Text cipher for journal entries.
//!
//! This module wraps the Age encryption library for encrypting and
//! decrypting journal text using a caller-supplied secret. Age's
//! passphrase recipient uses scrypt for key derivation and an
//! authenticated STREAM payload, so a wrong secret or tampered
//! ciphertext fails positively instead of yielding garbled text.
//!
//! Ciphertext is base64-encoded so it can live in an opaque text
//! column and travel through JSON unchanged. The secret exists only
//! for the duration of each call; nothing in this module logs,
//! caches, or persists it.

use std::io::{Read, Write};
use std::iter;

use age::secrecy::SecretString;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

use crate::error::{MindwellError, Result};

/// Encrypt journal text under a caller-supplied secret.
///
/// # Errors
///
/// Returns `MindwellError::InvalidInput` if the plaintext or secret is
/// empty, and `MindwellError::Crypto` if the underlying cipher fails.
///
/// # Examples
///
/// ```
/// use mindwell_core::crypto::encrypt_text;
///
/// let ciphertext = encrypt_text("dear diary", "my-secret").unwrap();
/// assert_ne!(ciphertext, "dear diary");
/// ```
pub fn encrypt_text(plaintext: &str, secret: &str) -> Result<String> {
    if plaintext.is_empty() {
        return Err(MindwellError::InvalidInput(
            "Plaintext cannot be empty".to_string(),
        ));
    }
    if secret.trim().is_empty() {
        return Err(MindwellError::InvalidInput(
            "Secret cannot be empty".to_string(),
        ));
    }

    let encryptor = age::Encryptor::with_user_passphrase(SecretString::from(secret.to_string()));

    let mut encrypted = Vec::new();
    let mut writer = encryptor
        .wrap_output(&mut encrypted)
        .map_err(|e| MindwellError::Crypto(format!("Failed to create encryptor: {}", e)))?;

    writer
        .write_all(plaintext.as_bytes())
        .map_err(|e| MindwellError::Crypto(format!("Encryption write failed: {}", e)))?;

    writer
        .finish()
        .map_err(|e| MindwellError::Crypto(format!("Encryption finish failed: {}", e)))?;

    Ok(BASE64.encode(encrypted))
}

/// Decrypt ciphertext produced by [`encrypt_text`].
///
/// # Errors
///
/// Returns `MindwellError::Decryption` if:
/// - The ciphertext is not valid base64 or not an Age payload
/// - The secret does not match
/// - The payload has been truncated or tampered with
/// - The decrypted bytes are not valid UTF-8
///
/// # Examples
///
/// ```
/// use mindwell_core::crypto::{encrypt_text, decrypt_text};
///
/// let ciphertext = encrypt_text("dear diary", "my-secret").unwrap();
/// let plaintext = decrypt_text(&ciphertext, "my-secret").unwrap();
/// assert_eq!(plaintext, "dear diary");
/// ```
pub fn decrypt_text(ciphertext: &str, secret: &str) -> Result<String> {
    if secret.trim().is_empty() {
        return Err(MindwellError::InvalidInput(
            "Secret cannot be empty".to_string(),
        ));
    }

    let encrypted = BASE64
        .decode(ciphertext)
        .map_err(|e| MindwellError::Decryption(format!("Ciphertext is not valid base64: {}", e)))?;

    let decryptor = age::Decryptor::new(encrypted.as_slice())
        .map_err(|e| MindwellError::Decryption(format!("Malformed ciphertext: {}", e)))?;

    let identity = age::scrypt::Identity::new(SecretString::from(secret.to_string()));
    let mut reader = decryptor
        .decrypt(iter::once(&identity as &dyn age::Identity))
        .map_err(|e| match e {
            age::DecryptError::NoMatchingKeys
            | age::DecryptError::DecryptionFailed
            | age::DecryptError::KeyDecryptionFailed => {
                MindwellError::Decryption("Secret does not match".to_string())
            }
            _ => MindwellError::Decryption(format!("Decryption failed: {}", e)),
        })?;

    // Payload authentication happens during the read; a tampered or
    // truncated ciphertext fails here rather than producing garbage.
    let mut decrypted = Vec::new();
    reader
        .read_to_end(&mut decrypted)
        .map_err(|e| MindwellError::Decryption(format!("Ciphertext payload is corrupt: {}", e)))?;

    String::from_utf8(decrypted)
        .map_err(|_| MindwellError::Decryption("Decrypted data is not valid UTF-8".to_string()))
}
