//! Web Push Cryptographic Primitives
//!
//! Building blocks for the receiver side of RFC 8291 ("Message Encryption
//! for Web Push") over the RFC 8188 `aes128gcm` content encoding. Pure
//! functions with deterministic outputs: nothing here draws randomness or
//! touches I/O.
//!
//! # Key Schedule
//!
//! ```text
//! receiver private scalar ─┐
//!                          ├─ ECDH (P-256) → shared secret (32 bytes)
//! sender public point ─────┘        │
//!                                   ▼
//!            HMAC(auth secret) + HKDF-Expand("WebPush: info\0" ‖ ua ‖ as)
//!                                   │
//!                                   ▼
//!                     HMAC(salt) → PRK (32 bytes)
//!                                   │
//!                 ┌─────────────────┴─────────────────┐
//!                 ▼                                   ▼
//!     HKDF-Expand(aes128gcm) → CEK (16)     HKDF-Expand(nonce) → nonce (12)
//!                 │                                   │
//!                 └──────────────► AES-128-GCM ◄──────┘
//! ```
//!
//! The composition lives in `webpush-receiver`; this crate only exposes the
//! pieces.
//!
//! # Security
//!
//! - Point validation: remote public keys are checked to lie on P-256 before
//!   any scalar multiplication
//! - Fixed width: every scalar and coordinate is exactly 32 bytes, so the
//!   key-id length prefix and derivation info strings never drift
//! - Authenticity: a failed GCM tag is reported as
//!   [`CryptoError::AuthenticationFailed`] and no plaintext is released
//! - Shared secrets are returned in [`zeroize::Zeroizing`] buffers

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod aead;
pub mod codec;
pub mod ecdh;
mod error;
pub mod hkdf;

pub use codec::{
    COORDINATE_SIZE, Coordinates, UNCOMPRESSED_POINT_SIZE, decode_point, decode_scalar,
    encode_point, encode_scalar, private_scalar,
};
pub use ecdh::{SHARED_SECRET_SIZE, agree};
pub use error::CryptoError;
pub use p256::NonZeroScalar;
