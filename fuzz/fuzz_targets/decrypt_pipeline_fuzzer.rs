//! Fuzz target for the full receive pipeline
//!
//! Starts from the RFC 8291 Appendix A message and its receiver keys, then
//! applies adversarial edits to the payload and the string inputs.
//!
//! # Strategy
//!
//! - Byte flips, truncation and appended garbage on the raw payload
//! - Arbitrary strings for every base64 input of `decrypt_message`
//!
//! # Invariants
//!
//! - The pipeline never panics on any input
//! - The unmodified message always decrypts to the published plaintext
//! - An edited payload only decrypts if the edit touched nothing but the
//!   record-size field, which is not authenticated for a single record
//! - No plaintext other than the published one is ever released

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use webpush_receiver::{decrypt::decrypt_payload, decrypt_message, encoding};

const MESSAGE: &str = "DGv6ra1nlYgDCS1FRnbzlwAAEABBBP4z9KsN6nGRTbVYI/c7VJSPQTBtkgcy27mlmlMoZIIgDll6e3vCYLocInmYWAmS6TlzAC8wEqKK6PBru3jl7A/yl95bQpu6cVPTpK4Mqgkf1CXztLVBSt2Ks3oZwbuwXPXLWyouBWLVWGNWQexSgSxsj/Qulcy4a+fN";
const PRIVATE_KEY: &str = "q1dXpw3UpT5VOmu_cf_v6ih07Aems3njxI-JWgLcM94";
const PUBLIC_KEY: &str =
    "BCVxsr7N_eNgVRqvHtD0zTZsEc6-VV-JvLexhqUzORcxaOzi6-AYWXvTBHm4bjyPjs7Vd8pZGH6SRpkNtoIAiw4";
const AUTH_SECRET: &str = "BTBZMqHH6r4Tts7J_aSIgg";
const PLAINTEXT: &[u8] = b"When I grow up, I want to be a watermelon";

/// Bytes 16..20 hold the record size
const RECORD_SIZE_FIELD: std::ops::Range<usize> = 16..20;

#[derive(Debug, Arbitrary)]
enum Scenario {
    /// XOR masks applied at payload offsets (wrapping)
    Flip(Vec<(u8, u8)>),
    /// Keep only this many bytes
    Truncate(u8),
    /// Append trailing bytes
    Extend(Vec<u8>),
    /// Replace the whole payload
    Replace(Vec<u8>),
    /// Arbitrary text for the string boundary
    Strings { message: String, private_key: String, public_key: String, auth_secret: String },
}

fuzz_target!(|scenario: Scenario| {
    let original = encoding::decode_message("message", MESSAGE).unwrap();
    let private_key = encoding::decode_key("privateKey", PRIVATE_KEY).unwrap();
    let public_key = encoding::decode_key("publicKey", PUBLIC_KEY).unwrap();
    let auth_secret = encoding::decode_key("authSecret", AUTH_SECRET).unwrap();

    // INVARIANT 1: Baseline still decrypts
    let baseline = decrypt_payload(&original, &private_key, &public_key, &auth_secret);
    assert_eq!(baseline.unwrap(), PLAINTEXT);

    let edited = match scenario {
        Scenario::Flip(masks) => {
            let mut raw = original.clone();
            for (offset, mask) in masks {
                let index = usize::from(offset) % raw.len();
                raw[index] ^= mask;
            }
            raw
        },
        Scenario::Truncate(len) => original[..usize::from(len).min(original.len())].to_vec(),
        Scenario::Extend(extra) => {
            let mut raw = original.clone();
            raw.extend_from_slice(&extra);
            raw
        },
        Scenario::Replace(raw) => raw,
        Scenario::Strings { message, private_key, public_key, auth_secret } => {
            // INVARIANT 2: String boundary never panics
            if let Ok(plaintext) =
                decrypt_message(&message, &private_key, &public_key, &auth_secret)
            {
                assert_eq!(plaintext.as_bytes(), PLAINTEXT, "released unexpected plaintext");
            }
            return;
        },
    };

    // INVARIANT 3: Only record-size edits survive authentication
    if let Ok(plaintext) = decrypt_payload(&edited, &private_key, &public_key, &auth_secret) {
        assert_eq!(plaintext, PLAINTEXT, "released unexpected plaintext");
        assert_eq!(edited.len(), original.len(), "length change was accepted");
        for (index, (a, b)) in edited.iter().zip(&original).enumerate() {
            assert!(
                a == b || RECORD_SIZE_FIELD.contains(&index),
                "authenticated byte {index} was changed"
            );
        }
    }
});
