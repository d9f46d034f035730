//! Persisted receiver key bundle
//!
//! The JSON object stored once per subscription:
//!
//! ```json
//! { "publicKey": "<base64url>", "privateKey": "<base64url>", "authSecret": "<base64url>" }
//! ```
//!
//! Loading and saving it is the caller's job.

use std::fmt;

use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::{
    PushError, api,
    entropy::{EntropySource, SystemEntropy},
    keys::{AuthSecret, ReceiverKeyPair},
};

/// Receiver key pair and auth secret, all unpadded base64url.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PushKeys {
    /// Uncompressed P-256 public point, handed to the push service
    pub public_key: String,
    /// P-256 private scalar
    pub private_key: String,
    /// 16-byte auth secret, handed to the push service
    pub auth_secret: String,
}

impl PushKeys {
    /// Generate a new bundle from OS randomness.
    pub fn generate() -> Result<Self, PushError> {
        Self::generate_with(&SystemEntropy)
    }

    /// Generate a new bundle from the given source.
    pub fn generate_with(entropy: &impl EntropySource) -> Result<Self, PushError> {
        let pair = ReceiverKeyPair::generate(entropy)?.to_encoded();
        let auth_secret = AuthSecret::generate(entropy)?.to_encoded();

        Ok(Self { public_key: pair.public_key, private_key: pair.private_key, auth_secret })
    }

    /// Decrypt a standard-base64 push message addressed to these keys.
    pub fn decrypt(&self, message: &str) -> Result<String, PushError> {
        api::decrypt_message(message, &self.private_key, &self.public_key, &self.auth_secret)
    }

    /// Decrypt a push message and parse its body as JSON.
    pub fn decrypt_json<T: DeserializeOwned>(&self, message: &str) -> Result<T, PushError> {
        Ok(serde_json::from_str(&self.decrypt(message)?)?)
    }
}

impl fmt::Debug for PushKeys {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PushKeys")
            .field("public_key", &self.public_key)
            .field("private_key", &"<redacted>")
            .field("auth_secret", &"<redacted>")
            .finish()
    }
}
