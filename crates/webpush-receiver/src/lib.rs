//! Web Push Receiver
//!
//! Receiver side of RFC 8291 message encryption: generate the identity a
//! push subscription is registered with, then decrypt the `aes128gcm`
//! payloads the push service delivers for it.
//!
//! # Usage
//!
//! ```no_run
//! use webpush_receiver::{PushError, PushKeys, RelayMessage};
//!
//! // Once per subscription; persist the JSON and register the public parts
//! fn register() -> Result<String, PushError> {
//!     let keys = PushKeys::generate()?;
//!     Ok(serde_json::to_string(&keys)?)
//! }
//!
//! // For every delivered push
//! fn receive(keys: &PushKeys, relay: &RelayMessage) -> Result<serde_json::Value, PushError> {
//!     relay.open(keys)?.json()
//! }
//! ```
//!
//! # Components
//!
//! - [`generate_key_pair`], [`generate_auth_secret`], [`decrypt_message`]:
//!   string boundary (standard base64 message, base64url keys)
//! - [`PushPayload`]: `aes128gcm` header parser
//! - [`decrypt::decrypt_payload`]: byte-level pipeline
//! - [`ReceiverKeyPair`], [`AuthSecret`]: typed key material
//! - [`PushKeys`]: persisted key bundle
//! - [`RelayMessage`]: relay envelope
//!
//! # Randomness
//!
//! Generation draws from an [`EntropySource`]. [`SystemEntropy`] uses the
//! OS; tests pass a seeded source for reproducible keys.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod api;
mod bundle;
pub mod decrypt;
pub mod encoding;
mod entropy;
mod error;
mod keys;
pub mod payload;
mod relay;

pub use api::{decrypt_message, generate_auth_secret, generate_key_pair};
pub use bundle::PushKeys;
pub use entropy::{EntropySource, SystemEntropy};
pub use error::PushError;
pub use keys::{AUTH_SECRET_SIZE, AuthSecret, EncodedKeyPair, ReceiverKeyPair};
pub use payload::PushPayload;
pub use relay::{DecryptedMessage, RelayMessage};
