//! Receiver-side decryption pipeline (RFC 8291 §3.4, RFC 8188 §2)
//!
//! ```text
//! parse → ECDH → HMAC(auth) → HKDF-Expand(key_info, 32)
//!       → HMAC(salt) → HKDF-Expand(cek, 16) / HKDF-Expand(nonce, 12)
//!       → AES-128-GCM → strip padding
//! ```
//!
//! Every stage depends on the previous one; the first failure aborts the
//! whole call and no partial plaintext is returned. All derived key material
//! is per call and zeroized on drop.

use tracing::debug;
use webpush_crypto::{CryptoError, aead, agree, decode_point, hkdf, private_scalar};
use zeroize::Zeroizing;

use crate::{PushError, payload::PushPayload};

/// Prefix of the key-combining info string; followed by the receiver key,
/// then the sender key, in that order
const KEY_INFO_PREFIX: &[u8] = b"WebPush: info\0";

/// Info string for the content-encryption key
const CEK_INFO: &[u8] = b"Content-Encoding: aes128gcm\0";

/// Info string for the nonce
const NONCE_INFO: &[u8] = b"Content-Encoding: nonce\0";

/// Padding byte inside a record
const PADDING: u8 = 0x00;

/// Delimiter terminating the last record
const LAST_RECORD_DELIMITER: u8 = 0x02;

/// Content-encryption key and nonce for one message.
pub struct ContentKeys {
    key: Zeroizing<[u8; aead::KEY_SIZE]>,
    nonce: [u8; aead::NONCE_SIZE],
}

impl ContentKeys {
    /// 16-byte AES-128-GCM key.
    pub fn key(&self) -> &[u8; aead::KEY_SIZE] {
        &self.key
    }

    /// 12-byte GCM nonce.
    pub fn nonce(&self) -> &[u8; aead::NONCE_SIZE] {
        &self.nonce
    }
}

/// Derive the content-encryption key and nonce from an ECDH shared secret.
///
/// `receiver_public_key` and `sender_public_key` are the raw uncompressed
/// points exactly as exchanged; they enter the info string unmodified.
pub fn derive_content_keys(
    shared_secret: &[u8],
    auth_secret: &[u8],
    receiver_public_key: &[u8],
    sender_public_key: &[u8],
    salt: &[u8],
) -> Result<ContentKeys, CryptoError> {
    let mut key_info = Vec::with_capacity(
        KEY_INFO_PREFIX.len() + receiver_public_key.len() + sender_public_key.len(),
    );
    key_info.extend_from_slice(KEY_INFO_PREFIX);
    key_info.extend_from_slice(receiver_public_key);
    key_info.extend_from_slice(sender_public_key);

    let auth_prk = Zeroizing::new(hkdf::extract(auth_secret, shared_secret));
    let mut ikm = Zeroizing::new([0u8; hkdf::HASH_SIZE]);
    hkdf::expand_into(auth_prk.as_slice(), &key_info, ikm.as_mut_slice())?;

    let prk = Zeroizing::new(hkdf::extract(salt, ikm.as_slice()));

    let mut key = Zeroizing::new([0u8; aead::KEY_SIZE]);
    hkdf::expand_into(prk.as_slice(), CEK_INFO, key.as_mut_slice())?;

    let mut nonce = [0u8; aead::NONCE_SIZE];
    hkdf::expand_into(prk.as_slice(), NONCE_INFO, &mut nonce)?;

    Ok(ContentKeys { key, nonce })
}

/// Remove trailing padding and record delimiters.
///
/// Strips every trailing `0x00` and `0x02` byte. A plaintext that itself
/// ends in one of those bytes loses it too; senders always append at least
/// the delimiter, so the message body is never affected.
pub fn strip_padding(plaintext: &[u8]) -> &[u8] {
    let end = plaintext
        .iter()
        .rposition(|&b| b != PADDING && b != LAST_RECORD_DELIMITER)
        .map_or(0, |last| last + 1);
    &plaintext[..end]
}

/// Decrypt a raw `aes128gcm` push payload to its unpadded plaintext bytes.
///
/// # Errors
///
/// - `MalformedPayload`: header shorter than declared
/// - `Crypto(InvalidKeyEncoding)`: bad receiver scalar or sender point encoding
/// - `Crypto(InvalidPublicKey)`: sender point not on P-256
/// - `Crypto(AuthenticationFailed)`: tag mismatch (wrong keys or tampering)
pub fn decrypt_payload(
    raw: &[u8],
    receiver_private_key: &[u8],
    receiver_public_key: &[u8],
    auth_secret: &[u8],
) -> Result<Vec<u8>, PushError> {
    let payload = PushPayload::parse(raw)?;
    debug!(
        payload_len = raw.len(),
        record_size = payload.record_size,
        key_id_len = payload.sender_public_key.len(),
        ciphertext_len = payload.ciphertext.len(),
        "parsed aes128gcm header"
    );

    let local = private_scalar(receiver_private_key)?;
    let remote = decode_point(payload.sender_public_key)?;
    let shared = agree(&local, &remote)?;

    let keys = derive_content_keys(
        shared.as_slice(),
        auth_secret,
        receiver_public_key,
        payload.sender_public_key,
        &payload.salt,
    )?;

    let padded = aead::decrypt(payload.ciphertext, keys.key(), keys.nonce(), &[])
        .inspect_err(|_| debug!("aes128gcm tag rejected"))?;
    let padded = Zeroizing::new(padded);

    Ok(strip_padding(&padded).to_vec())
}

/// Decrypt a raw push payload and decode the result as UTF-8.
///
/// # Errors
///
/// Everything [`decrypt_payload`] returns, plus `InvalidUtf8`.
pub fn decrypt(
    raw: &[u8],
    receiver_private_key: &[u8],
    receiver_public_key: &[u8],
    auth_secret: &[u8],
) -> Result<String, PushError> {
    let plaintext = decrypt_payload(raw, receiver_private_key, receiver_public_key, auth_secret)?;
    Ok(String::from_utf8(plaintext)?)
}
