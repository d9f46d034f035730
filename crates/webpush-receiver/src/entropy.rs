//! Randomness source for key and secret generation.
//!
//! Generation takes its randomness as a parameter so tests can substitute a
//! seeded source and reproduce keys exactly. Production callers use
//! [`SystemEntropy`].

use crate::PushError;

/// Source of cryptographically secure random bytes.
///
/// # Invariants
///
/// - Production implementations MUST draw from a CSPRNG
/// - A failure is reported, never papered over with weaker randomness
pub trait EntropySource {
    /// Fill `buffer` entirely with random bytes.
    fn fill(&self, buffer: &mut [u8]) -> Result<(), PushError>;
}

/// OS randomness via `getrandom`.
///
/// Fails with `EntropyUnavailable` on platforms without a usable secure
/// random source; there is no fallback.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEntropy;

impl EntropySource for SystemEntropy {
    fn fill(&self, buffer: &mut [u8]) -> Result<(), PushError> {
        getrandom::fill(buffer).map_err(unavailable)
    }
}

fn unavailable(err: getrandom::Error) -> PushError {
    PushError::EntropyUnavailable { reason: err.to_string() }
}
