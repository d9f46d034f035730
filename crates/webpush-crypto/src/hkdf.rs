//! HKDF-SHA256 (RFC 5869) extract and expand
//!
//! Web Push chains two extract steps with different HMAC keys (the auth
//! secret, then the salt), so the two halves are exposed separately instead
//! of as a single `HKDF(salt, ikm, info, len)` call.

use ::hkdf::Hkdf;
use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::CryptoError;

type HmacSha256 = Hmac<Sha256>;

/// SHA-256 output size, and therefore the PRK size
pub const HASH_SIZE: usize = 32;

/// Largest output HKDF-Expand can produce (255 hash blocks)
pub const MAX_OUTPUT_SIZE: usize = 255 * HASH_SIZE;

/// HKDF-Extract: `HMAC-SHA256(key = salt, message = ikm)`.
///
/// HMAC accepts keys of any length, including empty.
pub fn extract(salt: &[u8], ikm: &[u8]) -> [u8; HASH_SIZE] {
    let Ok(mut mac) = HmacSha256::new_from_slice(salt) else {
        unreachable!("HMAC-SHA256 accepts any key size");
    };
    mac.update(ikm);
    let result = mac.finalize().into_bytes();

    let mut prk = [0u8; HASH_SIZE];
    prk.copy_from_slice(&result);
    prk
}

/// HKDF-Expand into a caller-provided buffer.
///
/// Fills `okm` with `T(1) ‖ T(2) ‖ …` truncated to its length, where
/// `T(n) = HMAC-SHA256(prk, T(n-1) ‖ info ‖ n)`.
///
/// # Errors
///
/// - `OutputTooLong` if `okm` is longer than [`MAX_OUTPUT_SIZE`]
/// - `InvalidPrkLength` if `prk` is shorter than [`HASH_SIZE`]
pub fn expand_into(prk: &[u8], info: &[u8], okm: &mut [u8]) -> Result<(), CryptoError> {
    if okm.len() > MAX_OUTPUT_SIZE {
        return Err(CryptoError::OutputTooLong { requested: okm.len(), max: MAX_OUTPUT_SIZE });
    }

    let hkdf = Hkdf::<Sha256>::from_prk(prk)
        .map_err(|_| CryptoError::InvalidPrkLength { length: prk.len() })?;

    hkdf.expand(info, okm)
        .map_err(|_| CryptoError::OutputTooLong { requested: okm.len(), max: MAX_OUTPUT_SIZE })
}

/// HKDF-Expand returning `length` fresh bytes.
pub fn expand(prk: &[u8], info: &[u8], length: usize) -> Result<Vec<u8>, CryptoError> {
    let mut okm = vec![0u8; length];
    expand_into(prk, info, &mut okm)?;
    Ok(okm)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unhex(s: &str) -> Vec<u8> {
        hex::decode(s).unwrap()
    }

    // RFC 5869 Appendix A.1
    #[test]
    fn rfc5869_basic_case() {
        let ikm = [0x0bu8; 22];
        let salt = unhex("000102030405060708090a0b0c");
        let info = unhex("f0f1f2f3f4f5f6f7f8f9");

        let prk = extract(&salt, &ikm);
        assert_eq!(
            prk.to_vec(),
            unhex("077709362c2e32df0ddc3f0dc47bba6390b6c73bb50f9c3122ec844ad7c2b3e5")
        );

        let okm = expand(&prk, &info, 42).unwrap();
        assert_eq!(
            okm,
            unhex(
                "3cb25f25faacd57a90434f64d0362f2a2d2d0a90cf1a5a4c5db02d56ecc4c5bf34007208d5b887185865"
            )
        );
    }

    // RFC 5869 Appendix A.3: empty salt and info
    #[test]
    fn rfc5869_empty_salt() {
        let ikm = [0x0bu8; 22];

        let prk = extract(&[], &ikm);
        assert_eq!(
            prk.to_vec(),
            unhex("19ef24a32c717b167f33a91d6f648bdf96596776afdb6377ac434c1c293ccb04")
        );

        let okm = expand(&prk, &[], 42).unwrap();
        assert_eq!(
            okm,
            unhex(
                "8da4e775a563c18f715f802a063c5a31b8a11f5c5ee1879ec3454e5f3c738d2d9d201395faa4b61a96c8"
            )
        );
    }

    #[test]
    fn shorter_output_is_prefix_of_longer() {
        let prk = extract(b"salt", b"input key material");

        let long = expand(&prk, b"info", 64).unwrap();
        let short = expand(&prk, b"info", 16).unwrap();

        assert_eq!(&long[..16], short.as_slice());
    }

    #[test]
    fn zero_length_output_is_empty() {
        let prk = extract(b"salt", b"ikm");
        assert!(expand(&prk, b"info", 0).unwrap().is_empty());
    }

    #[test]
    fn maximum_output_is_accepted() {
        let prk = extract(b"salt", b"ikm");
        assert_eq!(expand(&prk, b"", MAX_OUTPUT_SIZE).unwrap().len(), MAX_OUTPUT_SIZE);
    }

    #[test]
    fn oversized_output_is_rejected() {
        let prk = extract(b"salt", b"ikm");
        let result = expand(&prk, b"", MAX_OUTPUT_SIZE + 1);

        assert_eq!(
            result,
            Err(CryptoError::OutputTooLong { requested: MAX_OUTPUT_SIZE + 1, max: MAX_OUTPUT_SIZE })
        );
    }

    #[test]
    fn short_prk_is_rejected() {
        let result = expand(&[0u8; 16], b"", 16);
        assert_eq!(result, Err(CryptoError::InvalidPrkLength { length: 16 }));
    }

    #[test]
    fn different_info_produces_different_output() {
        let prk = extract(b"salt", b"ikm");

        let key = expand(&prk, b"Content-Encoding: aes128gcm\0", 16).unwrap();
        let nonce = expand(&prk, b"Content-Encoding: nonce\0", 16).unwrap();

        assert_ne!(key, nonce);
    }
}
