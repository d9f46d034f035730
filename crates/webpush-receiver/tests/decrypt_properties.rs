//! Property-based tests for the decryption pipeline
//!
//! A test-only sender seals arbitrary plaintexts to generated receiver keys;
//! the receiver must recover them exactly, and any single-byte change to
//! the sealed record must be rejected rather than decrypted.

mod common;

use common::{SeededEntropy, seal, sender_key};
use proptest::prelude::*;
use webpush_receiver::{
    AuthSecret, ReceiverKeyPair, decrypt::decrypt_payload, decrypt_message, encoding,
    payload::HEADER_SIZE,
};

/// Uncompressed P-256 point length carried in the key id
const KEY_ID_LEN: usize = 65;

struct Receiver {
    pair: ReceiverKeyPair,
    auth: AuthSecret,
}

fn receiver(seed: u64) -> Receiver {
    let entropy = SeededEntropy::new(seed);
    Receiver {
        pair: ReceiverKeyPair::generate(&entropy).expect("key pair"),
        auth: AuthSecret::generate(&entropy).expect("auth secret"),
    }
}

/// Plaintexts without trailing delimiter or padding bytes, which the
/// receiver strips along with the record padding
fn plaintext() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..512).prop_map(|mut bytes| {
        while matches!(bytes.last(), Some(0x00 | 0x02)) {
            bytes.pop();
        }
        bytes
    })
}

#[test]
fn prop_seal_open_roundtrip() {
    proptest!(ProptestConfig::with_cases(64), |(
        receiver_seed in any::<u64>(),
        sender_seed in any::<u64>(),
        salt in any::<[u8; 16]>(),
        body in plaintext(),
        padding in 0usize..64,
    )| {
        let receiver = receiver(receiver_seed);
        let raw = seal(
            receiver.pair.public_key(),
            receiver.auth.as_bytes(),
            &sender_key(sender_seed),
            salt,
            &body,
            padding,
        );

        let opened = decrypt_payload(
            &raw,
            receiver.pair.private_key(),
            receiver.pair.public_key(),
            receiver.auth.as_bytes(),
        )
        .expect("sealed message must open");

        prop_assert_eq!(opened, body);
    });
}

#[test]
fn prop_string_boundary_roundtrip() {
    proptest!(ProptestConfig::with_cases(32), |(
        receiver_seed in any::<u64>(),
        sender_seed in any::<u64>(),
        body in "[a-zA-Z0-9 {}\":,é漢]{0,200}",
    )| {
        let receiver = receiver(receiver_seed);
        let raw = seal(
            receiver.pair.public_key(),
            receiver.auth.as_bytes(),
            &sender_key(sender_seed),
            [7; 16],
            body.as_bytes(),
            0,
        );

        let keys = receiver.pair.to_encoded();
        let opened = decrypt_message(
            &encoding::encode_message(&raw),
            &keys.private_key,
            &keys.public_key,
            &receiver.auth.to_encoded(),
        )
        .expect("sealed message must open");

        prop_assert_eq!(opened, body);
    });
}

#[test]
fn prop_tampered_record_is_rejected() {
    proptest!(ProptestConfig::with_cases(64), |(
        seed in any::<u64>(),
        body in prop::collection::vec(any::<u8>(), 1..128),
        position in any::<prop::sample::Index>(),
        flip in 1u8..=255,
    )| {
        let receiver = receiver(seed);
        let mut raw = seal(
            receiver.pair.public_key(),
            receiver.auth.as_bytes(),
            &sender_key(seed.wrapping_add(1)),
            [0; 16],
            &body,
            0,
        );

        // Anywhere past the header: ciphertext or tag
        let start = HEADER_SIZE + KEY_ID_LEN;
        let index = start + position.index(raw.len() - start);
        raw[index] ^= flip;

        let err = decrypt_payload(
            &raw,
            receiver.pair.private_key(),
            receiver.pair.public_key(),
            receiver.auth.as_bytes(),
        )
        .expect_err("tampered message must not open");

        prop_assert!(err.is_authentication_failure(), "unexpected error: {}", err);
    });
}

#[test]
fn prop_wrong_receiver_is_rejected() {
    proptest!(ProptestConfig::with_cases(32), |(seed in any::<u64>())| {
        let intended = receiver(seed);
        let other = receiver(seed.wrapping_add(1));
        let raw = seal(
            intended.pair.public_key(),
            intended.auth.as_bytes(),
            &sender_key(seed),
            [1; 16],
            b"{\"type\":\"notification\"}",
            0,
        );

        let err = decrypt_payload(
            &raw,
            other.pair.private_key(),
            other.pair.public_key(),
            intended.auth.as_bytes(),
        )
        .expect_err("other receiver must not open");

        prop_assert!(err.is_authentication_failure());
    });
}
