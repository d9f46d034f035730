//! Fuzz target for the `aes128gcm` header parser
//!
//! Feeds arbitrary bytes to `PushPayload::parse`.
//!
//! # Invariants
//!
//! - Parsing never panics
//! - A short buffer is rejected with `MalformedPayload`, never sliced
//! - A successful parse honours the declared key id length exactly
//! - Salt, record size, key id and ciphertext tile the input with no gaps

#![no_main]

use libfuzzer_sys::fuzz_target;
use webpush_receiver::{
    payload::{HEADER_SIZE, SALT_SIZE},
    PushError, PushPayload,
};

fuzz_target!(|data: &[u8]| {
    match PushPayload::parse(data) {
        Ok(payload) => {
            // INVARIANT 1: Key id length matches the length byte
            let declared = usize::from(data[HEADER_SIZE - 1]);
            assert_eq!(payload.sender_public_key.len(), declared);

            // INVARIANT 2: Fields cover the input exactly
            assert_eq!(
                HEADER_SIZE + payload.sender_public_key.len() + payload.ciphertext.len(),
                data.len()
            );
            assert_eq!(&payload.salt[..], &data[..SALT_SIZE]);
            assert_eq!(&data[HEADER_SIZE..HEADER_SIZE + declared], payload.sender_public_key);

            // INVARIANT 3: Record size is the big-endian field verbatim
            let mut record_size = [0u8; 4];
            record_size.copy_from_slice(&data[SALT_SIZE..SALT_SIZE + 4]);
            assert_eq!(payload.record_size, u32::from_be_bytes(record_size));
        },
        Err(PushError::MalformedPayload { needed, actual }) => {
            // INVARIANT 4: Rejection only when genuinely short
            assert_eq!(actual, data.len());
            assert!(needed > actual, "rejected a buffer that was long enough");
        },
        Err(other) => panic!("parser returned unexpected error: {other}"),
    }
});
