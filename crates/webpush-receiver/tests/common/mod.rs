//! Sender side of the push encryption, for tests only.
//!
//! Derives the content keys independently through `webpush_crypto::hkdf`
//! and seals a single `aes128gcm` record the way a push service would.

#![allow(dead_code)]

use std::sync::Mutex;

use aes_gcm::{Aes128Gcm, KeyInit, Nonce, aead::Aead};
use p256::{PublicKey, SecretKey, ecdh::diffie_hellman, elliptic_curve::sec1::ToEncodedPoint};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use webpush_crypto::hkdf;
use webpush_receiver::{EntropySource, PushError};

/// Record size written into every test header
pub const RECORD_SIZE: u32 = 4096;

/// RFC 8291 Appendix A, padded standard base64
pub const RFC_MESSAGE: &str = "DGv6ra1nlYgDCS1FRnbzlwAAEABBBP4z9KsN6nGRTbVYI/c7VJSPQTBtkgcy27mlmlMoZIIgDll6e3vCYLocInmYWAmS6TlzAC8wEqKK6PBru3jl7A/yl95bQpu6cVPTpK4Mqgkf1CXztLVBSt2Ks3oZwbuwXPXLWyouBWLVWGNWQexSgSxsj/Qulcy4a+fN";

/// RFC 8291 Appendix A receiver private key
pub const RFC_PRIVATE_KEY: &str = "q1dXpw3UpT5VOmu_cf_v6ih07Aems3njxI-JWgLcM94";

/// RFC 8291 Appendix A receiver public key
pub const RFC_PUBLIC_KEY: &str =
    "BCVxsr7N_eNgVRqvHtD0zTZsEc6-VV-JvLexhqUzORcxaOzi6-AYWXvTBHm4bjyPjs7Vd8pZGH6SRpkNtoIAiw4";

/// RFC 8291 Appendix A auth secret
pub const RFC_AUTH_SECRET: &str = "BTBZMqHH6r4Tts7J_aSIgg";

/// RFC 8291 Appendix A plaintext
pub const RFC_PLAINTEXT: &str = "When I grow up, I want to be a watermelon";

/// Deterministic entropy for reproducible key generation.
pub struct SeededEntropy(Mutex<ChaCha20Rng>);

impl SeededEntropy {
    pub fn new(seed: u64) -> Self {
        Self(Mutex::new(ChaCha20Rng::seed_from_u64(seed)))
    }
}

impl EntropySource for SeededEntropy {
    fn fill(&self, buffer: &mut [u8]) -> Result<(), PushError> {
        let mut rng = self.0.lock().map_err(|_| PushError::EntropyUnavailable {
            reason: "rng mutex poisoned".to_string(),
        })?;
        rng.fill_bytes(buffer);
        Ok(())
    }
}

/// Ephemeral sender key derived from a seed.
pub fn sender_key(seed: u64) -> SecretKey {
    SecretKey::random(&mut ChaCha20Rng::seed_from_u64(seed))
}

/// Encrypt `plaintext` to a receiver as a single final record followed by
/// `padding` zero bytes.
pub fn seal(
    receiver_public_key: &[u8],
    auth_secret: &[u8],
    sender: &SecretKey,
    salt: [u8; 16],
    plaintext: &[u8],
    padding: usize,
) -> Vec<u8> {
    let sender_public_key = sender.public_key().to_encoded_point(false);
    let receiver = PublicKey::from_sec1_bytes(receiver_public_key).expect("receiver key");
    let shared = diffie_hellman(sender.to_nonzero_scalar(), receiver.as_affine());

    let mut key_info = b"WebPush: info\0".to_vec();
    key_info.extend_from_slice(receiver_public_key);
    key_info.extend_from_slice(sender_public_key.as_bytes());

    let auth_prk = hkdf::extract(auth_secret, shared.raw_secret_bytes().as_slice());
    let ikm = hkdf::expand(&auth_prk, &key_info, 32).expect("ikm");
    let prk = hkdf::extract(&salt, &ikm);
    let cek = hkdf::expand(&prk, b"Content-Encoding: aes128gcm\0", 16).expect("cek");
    let nonce = hkdf::expand(&prk, b"Content-Encoding: nonce\0", 12).expect("nonce");

    let mut record = plaintext.to_vec();
    record.push(0x02);
    record.resize(record.len() + padding, 0x00);

    let cipher = Aes128Gcm::new_from_slice(&cek).expect("cek length");
    let ciphertext = cipher.encrypt(Nonce::from_slice(&nonce), record.as_slice()).expect("seal");

    let mut raw = salt.to_vec();
    raw.extend_from_slice(&RECORD_SIZE.to_be_bytes());
    raw.push(sender_public_key.as_bytes().len() as u8);
    raw.extend_from_slice(sender_public_key.as_bytes());
    raw.extend_from_slice(&ciphertext);
    raw
}
