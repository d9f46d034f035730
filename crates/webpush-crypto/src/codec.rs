//! Fixed-width encoding of P-256 scalars and points
//!
//! Integers travel as big-endian unsigned byte strings. Whatever their
//! natural length, they are rendered as exactly [`COORDINATE_SIZE`] bytes:
//! shorter values are left-padded with zeros, and a 33-byte value is
//! accepted only when its first byte is a `0x00` sign byte (the output of a
//! signed big-integer encoder). Anything else cannot be a P-256 field
//! element.

use p256::{NonZeroScalar, SecretKey};
use zeroize::Zeroizing;

use crate::CryptoError;

/// Size of a P-256 scalar or affine coordinate
pub const COORDINATE_SIZE: usize = 32;

/// Size of an uncompressed SEC1 point (`0x04 ‖ X ‖ Y`)
pub const UNCOMPRESSED_POINT_SIZE: usize = 1 + 2 * COORDINATE_SIZE;

/// SEC1 tag for an uncompressed point
const UNCOMPRESSED_TAG: u8 = 0x04;

/// Affine coordinates of a curve point, each exactly 32 bytes.
///
/// Holding coordinates does not imply the point is on the curve; that is
/// checked by [`crate::agree`] before use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Coordinates {
    /// X coordinate (big-endian)
    pub x: [u8; COORDINATE_SIZE],
    /// Y coordinate (big-endian)
    pub y: [u8; COORDINATE_SIZE],
}

impl Coordinates {
    /// Uncompressed SEC1 encoding: `0x04 ‖ X ‖ Y`.
    pub fn to_uncompressed(&self) -> [u8; UNCOMPRESSED_POINT_SIZE] {
        let mut out = [0u8; UNCOMPRESSED_POINT_SIZE];
        out[0] = UNCOMPRESSED_TAG;
        out[1..=COORDINATE_SIZE].copy_from_slice(&self.x);
        out[1 + COORDINATE_SIZE..].copy_from_slice(&self.y);
        out
    }
}

/// Render a big-endian unsigned integer as exactly 32 bytes.
///
/// # Errors
///
/// - `InvalidKeyEncoding` if the value is longer than 32 bytes, unless it is
///   33 bytes with a leading zero sign byte
pub fn encode_scalar(value: &[u8]) -> Result<[u8; COORDINATE_SIZE], CryptoError> {
    let digits = match value {
        short if short.len() <= COORDINATE_SIZE => short,
        [0x00, rest @ ..] if rest.len() == COORDINATE_SIZE => rest,
        _ => {
            return Err(CryptoError::key_encoding(format!(
                "{}-byte integer does not fit a P-256 field element",
                value.len()
            )));
        },
    };

    let mut out = [0u8; COORDINATE_SIZE];
    out[COORDINATE_SIZE - digits.len()..].copy_from_slice(digits);
    Ok(out)
}

/// Decode a big-endian scalar into its fixed-width form.
///
/// Accepts the same lengths as [`encode_scalar`] and preserves the integer
/// exactly; no range check is applied. Use [`private_scalar`] for a value
/// that must be a usable private key.
///
/// # Errors
///
/// - `InvalidKeyEncoding` on a length no P-256 field element can have
pub fn decode_scalar(bytes: &[u8]) -> Result<[u8; COORDINATE_SIZE], CryptoError> {
    encode_scalar(bytes)
}

/// Decode a private key scalar, requiring it to lie in `[1, n)` where `n`
/// is the P-256 group order.
///
/// # Errors
///
/// - `InvalidKeyEncoding` on a bad length, zero, or a value not below `n`
pub fn private_scalar(bytes: &[u8]) -> Result<NonZeroScalar, CryptoError> {
    let fixed = Zeroizing::new(decode_scalar(bytes)?);
    SecretKey::from_slice(fixed.as_slice())
        .map(|key| key.to_nonzero_scalar())
        .map_err(|_| CryptoError::key_encoding("scalar is zero or not below the group order"))
}

/// Encode affine coordinates as an uncompressed point.
///
/// Each coordinate goes through [`encode_scalar`], so both come out exactly
/// 32 bytes wide.
pub fn encode_point(x: &[u8], y: &[u8]) -> Result<[u8; UNCOMPRESSED_POINT_SIZE], CryptoError> {
    Ok(Coordinates { x: encode_scalar(x)?, y: encode_scalar(y)? }.to_uncompressed())
}

/// Split an uncompressed point into its coordinates.
///
/// The canonical form is 65 bytes. Other odd lengths are accepted as long
/// as the tag is `0x04` and each half normalizes through [`encode_scalar`],
/// so a sender that emitted 33-byte signed coordinates still decodes.
///
/// # Errors
///
/// - `InvalidKeyEncoding` on a missing `0x04` tag, an even or short length,
///   or an oversized coordinate
pub fn decode_point(bytes: &[u8]) -> Result<Coordinates, CryptoError> {
    let Some((&tag, body)) = bytes.split_first() else {
        return Err(CryptoError::key_encoding("empty point encoding"));
    };
    if tag != UNCOMPRESSED_TAG {
        return Err(CryptoError::key_encoding(format!(
            "point tag {tag:#04x} is not uncompressed (0x04)"
        )));
    }
    if body.is_empty() || body.len() % 2 != 0 {
        return Err(CryptoError::key_encoding(format!(
            "{}-byte point cannot hold two equal coordinates",
            bytes.len()
        )));
    }

    let (x, y) = body.split_at(body.len() / 2);
    Ok(Coordinates { x: encode_scalar(x)?, y: encode_scalar(y)? })
}
