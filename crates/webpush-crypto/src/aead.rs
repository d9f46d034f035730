//! Authenticated decryption using AES-128-GCM
//!
//! The `aes128gcm` content encoding fixes the parameters: 16-byte key,
//! 12-byte nonce, 128-bit tag appended to the ciphertext. Web Push never
//! sends additional authenticated data, but callers may pass some.

use aes_gcm::{
    Aes128Gcm, Nonce,
    aead::{Aead, KeyInit, Payload},
};

use crate::CryptoError;

/// AES-128 key size (16 bytes)
pub const KEY_SIZE: usize = 16;

/// GCM nonce size (12 bytes)
pub const NONCE_SIZE: usize = 12;

/// GCM tag size (16 bytes)
pub const TAG_SIZE: usize = 16;

/// Decrypt `ciphertext ‖ tag` with AES-128-GCM.
///
/// # Errors
///
/// - `AuthenticationFailed`: the tag does not verify, or the input is too
///   short to contain one. No partial plaintext is ever returned.
pub fn decrypt(
    ciphertext: &[u8],
    key: &[u8; KEY_SIZE],
    nonce: &[u8; NONCE_SIZE],
    aad: &[u8],
) -> Result<Vec<u8>, CryptoError> {
    let cipher = Aes128Gcm::new(key.into());

    cipher
        .decrypt(Nonce::from_slice(nonce), Payload { msg: ciphertext, aad })
        .map_err(|_| CryptoError::AuthenticationFailed)
}
