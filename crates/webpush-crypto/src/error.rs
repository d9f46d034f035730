//! Error types for Web Push primitives

use thiserror::Error;

/// Errors from the codec, key agreement, key derivation and AEAD layers.
///
/// None of these are transient: retrying with the same inputs always
/// produces the same failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CryptoError {
    /// A scalar or point byte string cannot be a P-256 value
    #[error("invalid key encoding: {reason}")]
    InvalidKeyEncoding {
        /// What was wrong with the encoding
        reason: String,
    },

    /// Remote point is not on P-256 (or is the point at infinity)
    #[error("invalid public key: point is not on the P-256 curve")]
    InvalidPublicKey,

    /// AES-GCM tag verification failed (key, nonce or ciphertext mismatch)
    #[error("authentication failed: AES-GCM tag mismatch")]
    AuthenticationFailed,

    /// HKDF pseudorandom key shorter than the hash output
    #[error("invalid HKDF PRK length: {length} bytes")]
    InvalidPrkLength {
        /// Length of the rejected PRK
        length: usize,
    },

    /// HKDF-Expand output length exceeds 255 hash blocks
    #[error("HKDF output too long: requested {requested} bytes, maximum is {max}")]
    OutputTooLong {
        /// Requested output length
        requested: usize,
        /// Largest length HKDF-SHA256 can produce
        max: usize,
    },
}

impl CryptoError {
    pub(crate) fn key_encoding(reason: impl Into<String>) -> Self {
        Self::InvalidKeyEncoding { reason: reason.into() }
    }
}
