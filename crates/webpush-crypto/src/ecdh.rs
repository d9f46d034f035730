//! Elliptic-curve Diffie-Hellman on P-256

use p256::{NonZeroScalar, PublicKey, ecdh::diffie_hellman};
use zeroize::Zeroizing;

use crate::{
    CryptoError,
    codec::{Coordinates, encode_scalar},
};

/// Size of the ECDH shared secret (the X coordinate of the product)
pub const SHARED_SECRET_SIZE: usize = 32;

/// Compute the shared secret `x(local · remote)`.
///
/// # Errors
///
/// - `InvalidPublicKey` if `remote` is not a point on P-256
pub fn agree(
    local: &NonZeroScalar,
    remote: &Coordinates,
) -> Result<Zeroizing<[u8; SHARED_SECRET_SIZE]>, CryptoError> {
    let remote = PublicKey::from_sec1_bytes(&remote.to_uncompressed())
        .map_err(|_| CryptoError::InvalidPublicKey)?;

    let shared = diffie_hellman(local, remote.as_affine());
    Ok(Zeroizing::new(encode_scalar(shared.raw_secret_bytes().as_slice())?))
}
