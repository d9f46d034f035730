//! Push relay envelope
//!
//! The relay forwards each encrypted push as a flat data map naming the
//! instance it came from. [`RelayMessage::open`] decrypts it with the
//! receiver's stored keys.

use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::{PushError, bundle::PushKeys};

/// One forwarded push, as delivered by the relay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelayMessage {
    /// Encrypted payload, standard base64
    pub webpush_message: String,
    /// Account name on the source instance, if the subscription has one
    #[serde(default)]
    pub name: Option<String>,
    /// Domain of the instance that sent the push
    pub src_domain: String,
}

impl RelayMessage {
    /// Where the push came from: `@name@domain`, or just `domain` when no
    /// account name is attached.
    pub fn source(&self) -> String {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => format!("@{name}@{}", self.src_domain),
            _ => self.src_domain.clone(),
        }
    }

    /// Decrypt the envelope with the receiver's keys.
    ///
    /// # Errors
    ///
    /// Everything [`PushKeys::decrypt`] returns.
    pub fn open(&self, keys: &PushKeys) -> Result<DecryptedMessage, PushError> {
        let plaintext = keys.decrypt(&self.webpush_message)?;
        Ok(DecryptedMessage { source: self.source(), plaintext })
    }
}

/// A decrypted relay message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecryptedMessage {
    /// Rendered sender, see [`RelayMessage::source`]
    pub source: String,
    /// UTF-8 plaintext body
    pub plaintext: String,
}

impl DecryptedMessage {
    /// Parse the body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, PushError> {
        Ok(serde_json::from_str(&self.plaintext)?)
    }
}
