//! String-in, string-out boundary operations.
//!
//! The raw message travels as padded standard base64; keys and the auth
//! secret travel as unpadded base64url. These functions are the only place
//! where text is turned into bytes and back.

use zeroize::Zeroizing;

use crate::{
    PushError, decrypt, encoding,
    entropy::SystemEntropy,
    keys::{AuthSecret, EncodedKeyPair, ReceiverKeyPair},
};

/// Generate a receiver key pair from OS randomness.
///
/// # Errors
///
/// - `EntropyUnavailable` if the platform has no secure random source
pub fn generate_key_pair() -> Result<EncodedKeyPair, PushError> {
    Ok(ReceiverKeyPair::generate(&SystemEntropy)?.to_encoded())
}

/// Generate a 16-byte auth secret from OS randomness, base64url encoded.
///
/// # Errors
///
/// - `EntropyUnavailable` if the platform has no secure random source
pub fn generate_auth_secret() -> Result<String, PushError> {
    Ok(AuthSecret::generate(&SystemEntropy)?.to_encoded())
}

/// Decrypt a push message to its UTF-8 plaintext.
///
/// # Errors
///
/// - `InvalidBase64` naming the field that failed to decode
/// - everything [`decrypt::decrypt`] returns
pub fn decrypt_message(
    message: &str,
    private_key: &str,
    public_key: &str,
    auth_secret: &str,
) -> Result<String, PushError> {
    let raw = encoding::decode_message("message", message)?;
    let private_key = Zeroizing::new(encoding::decode_key("privateKey", private_key)?);
    let public_key = encoding::decode_key("publicKey", public_key)?;
    let auth_secret = Zeroizing::new(encoding::decode_key("authSecret", auth_secret)?);

    decrypt::decrypt(&raw, &private_key, &public_key, &auth_secret)
}
