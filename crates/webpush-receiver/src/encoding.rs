//! Base64 alphabets used at the boundary.
//!
//! Push messages arrive in the standard alphabet (`+`, `/`); keys and the
//! auth secret use the URL-safe alphabet (`-`, `_`). The two are never
//! mixed: a character from the other alphabet is a decode error rather
//! than silently corrupted bytes. Padding is optional on input and
//! canonical on output (padded standard, unpadded URL-safe). Non-zero
//! bits left over in the final symbol are ignored, as common platform
//! decoders do.

use base64::{
    Engine, alphabet,
    engine::{
        DecodePaddingMode,
        general_purpose::{GeneralPurpose, GeneralPurposeConfig},
    },
};

use crate::PushError;

/// Standard alphabet, padded on output, padding and trailing bits lenient
/// on input
const STANDARD: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_encode_padding(true)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

/// URL-safe alphabet, unpadded on output, padding and trailing bits lenient
/// on input
const URL_SAFE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new()
        .with_encode_padding(false)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

/// Decode a raw push message (standard alphabet).
pub fn decode_message(field: &'static str, encoded: &str) -> Result<Vec<u8>, PushError> {
    STANDARD.decode(encoded).map_err(|source| PushError::InvalidBase64 { field, source })
}

/// Encode a raw push message (standard alphabet, padded).
pub fn encode_message(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Decode a key or secret (URL-safe alphabet).
pub fn decode_key(field: &'static str, encoded: &str) -> Result<Vec<u8>, PushError> {
    URL_SAFE.decode(encoded).map_err(|source| PushError::InvalidBase64 { field, source })
}

/// Encode a key or secret (URL-safe alphabet, unpadded).
pub fn encode_key(bytes: &[u8]) -> String {
    URL_SAFE.encode(bytes)
}
