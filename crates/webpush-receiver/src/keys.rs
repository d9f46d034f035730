//! Receiver identity: P-256 key pair and auth secret
//!
//! Generated once per push subscription and persisted by the caller. The
//! private scalar and the auth secret are zeroized on drop and never
//! printed by `Debug`.

use std::fmt;

use p256::{SecretKey, elliptic_curve::sec1::ToEncodedPoint};
use serde::{Deserialize, Serialize};
use tracing::debug;
use webpush_crypto::{
    COORDINATE_SIZE, CryptoError, UNCOMPRESSED_POINT_SIZE, encode_point, encode_scalar, private_scalar,
};
use zeroize::Zeroizing;

use crate::{PushError, encoding, entropy::EntropySource};

/// Auth secret size (16 bytes)
pub const AUTH_SECRET_SIZE: usize = 16;

/// Rejection-sampling bound for private scalars.
///
/// A uniform 32-byte candidate is out of range with probability below
/// 2^-32, so running out of attempts means the entropy source is broken.
const MAX_KEYGEN_ATTEMPTS: u32 = 16;

/// A receiver's P-256 key pair in fixed-width encoding.
///
/// # Invariants
///
/// - `public_key` is `private_key · G` in uncompressed SEC1 form
/// - `private_key` is in `[1, n)`
#[derive(Clone)]
pub struct ReceiverKeyPair {
    private_key: Zeroizing<[u8; COORDINATE_SIZE]>,
    public_key: [u8; UNCOMPRESSED_POINT_SIZE],
}

impl ReceiverKeyPair {
    /// Generate a fresh key pair.
    ///
    /// # Errors
    ///
    /// - `EntropyUnavailable` if the source fails or keeps producing
    ///   out-of-range candidates
    pub fn generate(entropy: &impl EntropySource) -> Result<Self, PushError> {
        let mut candidate = Zeroizing::new([0u8; COORDINATE_SIZE]);

        for attempt in 1..=MAX_KEYGEN_ATTEMPTS {
            entropy.fill(candidate.as_mut_slice())?;

            // Zero or not below the group order: draw again
            if let Ok(secret) = SecretKey::from_slice(candidate.as_slice()) {
                debug!(attempt, "generated P-256 receiver key pair");
                return Self::from_secret(&secret);
            }
        }

        Err(PushError::EntropyUnavailable {
            reason: format!("no valid P-256 scalar after {MAX_KEYGEN_ATTEMPTS} attempts"),
        })
    }

    /// Rebuild a key pair from a stored private scalar.
    ///
    /// # Errors
    ///
    /// - `Crypto(InvalidKeyEncoding)` if the bytes are not a valid scalar
    pub fn from_private_key(private_key: &[u8]) -> Result<Self, PushError> {
        let secret = SecretKey::from(private_scalar(private_key)?);
        Self::from_secret(&secret)
    }

    fn from_secret(secret: &SecretKey) -> Result<Self, PushError> {
        let point = secret.public_key().to_encoded_point(false);
        let (Some(x), Some(y)) = (point.x(), point.y()) else {
            return Err(CryptoError::InvalidPublicKey.into());
        };

        Ok(Self {
            private_key: Zeroizing::new(encode_scalar(secret.to_bytes().as_slice())?),
            public_key: encode_point(x.as_slice(), y.as_slice())?,
        })
    }

    /// 32-byte big-endian private scalar.
    pub fn private_key(&self) -> &[u8; COORDINATE_SIZE] {
        &self.private_key
    }

    /// 65-byte uncompressed public point.
    pub fn public_key(&self) -> &[u8; UNCOMPRESSED_POINT_SIZE] {
        &self.public_key
    }

    /// Both keys as unpadded base64url strings.
    pub fn to_encoded(&self) -> EncodedKeyPair {
        EncodedKeyPair {
            public_key: encoding::encode_key(&self.public_key),
            private_key: encoding::encode_key(self.private_key.as_slice()),
        }
    }
}

impl fmt::Debug for ReceiverKeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReceiverKeyPair")
            .field("public_key", &encoding::encode_key(&self.public_key))
            .field("private_key", &"<redacted>")
            .finish()
    }
}

/// A key pair as unpadded base64url strings, the form handed to storage.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EncodedKeyPair {
    /// Uncompressed public point (65 bytes before encoding)
    pub public_key: String,
    /// Private scalar (32 bytes before encoding)
    pub private_key: String,
}

impl fmt::Debug for EncodedKeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EncodedKeyPair")
            .field("public_key", &self.public_key)
            .field("private_key", &"<redacted>")
            .finish()
    }
}

/// The 16-byte symmetric auth secret shared with the push sender.
#[derive(Clone)]
pub struct AuthSecret(Zeroizing<[u8; AUTH_SECRET_SIZE]>);

impl AuthSecret {
    /// Generate a fresh auth secret.
    pub fn generate(entropy: &impl EntropySource) -> Result<Self, PushError> {
        let mut secret = Zeroizing::new([0u8; AUTH_SECRET_SIZE]);
        entropy.fill(secret.as_mut_slice())?;
        Ok(Self(secret))
    }

    /// Raw secret bytes.
    pub fn as_bytes(&self) -> &[u8; AUTH_SECRET_SIZE] {
        &self.0
    }

    /// Unpadded base64url encoding.
    pub fn to_encoded(&self) -> String {
        encoding::encode_key(self.0.as_slice())
    }
}

impl fmt::Debug for AuthSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AuthSecret(<redacted>)")
    }
}
