//! `aes128gcm` content-coding header parser (RFC 8188 §2.1)
//!
//! ```text
//! +-----------+--------+-----------+---------------+----------------+
//! | salt (16) | rs (4) | idlen (1) | keyid (idlen) | ciphertext ‖ tag |
//! +-----------+--------+-----------+---------------+----------------+
//! ```
//!
//! For Web Push the key id carries the sender's ephemeral public key.

use crate::PushError;

/// Salt size (16 bytes)
pub const SALT_SIZE: usize = 16;

/// Record-size field (4 bytes, big-endian)
const RECORD_SIZE_FIELD: usize = 4;

/// Fixed header before the key id: salt, record size, key id length
pub const HEADER_SIZE: usize = SALT_SIZE + RECORD_SIZE_FIELD + 1;

/// A parsed push payload, borrowing from the raw buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PushPayload<'a> {
    /// Per-message salt
    pub salt: [u8; SALT_SIZE],
    /// Declared record size; reported for diagnostics, never enforced
    pub record_size: u32,
    /// Sender's ephemeral public key, as sent
    pub sender_public_key: &'a [u8],
    /// Ciphertext with the 16-byte tag at the end (possibly empty)
    pub ciphertext: &'a [u8],
}

impl<'a> PushPayload<'a> {
    /// Split a raw payload into its fields.
    ///
    /// # Errors
    ///
    /// - `MalformedPayload` if the buffer is shorter than the fixed header
    ///   or than the key id length it declares
    pub fn parse(raw: &'a [u8]) -> Result<Self, PushError> {
        if raw.len() < HEADER_SIZE {
            return Err(PushError::MalformedPayload { needed: HEADER_SIZE, actual: raw.len() });
        }

        let (header, rest) = raw.split_at(HEADER_SIZE);

        let mut salt = [0u8; SALT_SIZE];
        salt.copy_from_slice(&header[..SALT_SIZE]);

        let mut record_size = [0u8; RECORD_SIZE_FIELD];
        record_size.copy_from_slice(&header[SALT_SIZE..SALT_SIZE + RECORD_SIZE_FIELD]);

        let key_id_len = usize::from(header[HEADER_SIZE - 1]);
        if rest.len() < key_id_len {
            return Err(PushError::MalformedPayload {
                needed: HEADER_SIZE + key_id_len,
                actual: raw.len(),
            });
        }

        let (sender_public_key, ciphertext) = rest.split_at(key_id_len);

        Ok(Self {
            salt,
            record_size: u32::from_be_bytes(record_size),
            sender_public_key,
            ciphertext,
        })
    }
}
