//! Error types for the Web Push receiver

use thiserror::Error;
use webpush_crypto::CryptoError;

/// Errors from parsing, decrypting, decoding and generating push material.
///
/// Every variant is fatal for the message or call that produced it. Nothing
/// in this crate retries; callers log the error and drop the message.
#[derive(Debug, Error)]
pub enum PushError {
    /// Key codec, ECDH, HKDF or AEAD failure
    #[error(transparent)]
    Crypto(#[from] CryptoError),

    /// Payload is shorter than its own header declares
    #[error("malformed payload: need at least {needed} bytes, got {actual}")]
    MalformedPayload {
        /// Minimum length implied by the header
        needed: usize,
        /// Actual payload length
        actual: usize,
    },

    /// A base64 field could not be decoded with its alphabet
    #[error("invalid base64 in {field}: {source}")]
    InvalidBase64 {
        /// Which input was being decoded
        field: &'static str,
        /// Underlying decoder error
        source: base64::DecodeError,
    },

    /// Decrypted plaintext is not valid UTF-8
    #[error("decrypted plaintext is not valid UTF-8")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    /// Decrypted plaintext is not the expected JSON
    #[error("decrypted plaintext is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// The platform cannot supply secure randomness
    #[error("secure random source unavailable: {reason}")]
    EntropyUnavailable {
        /// Reason reported by the platform
        reason: String,
    },
}

impl PushError {
    /// Returns true if the AEAD tag did not verify.
    ///
    /// For a well-formed payload this almost always means the receiver keys
    /// changed since the subscription was registered. The message cannot be
    /// recovered.
    pub fn is_authentication_failure(&self) -> bool {
        matches!(self, Self::Crypto(CryptoError::AuthenticationFailed))
    }
}
