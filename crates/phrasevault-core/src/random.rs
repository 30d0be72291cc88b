//! Cryptographically secure random source abstraction.
//!
//! All randomness in the crate (word sampling, memory-test planning,
//! identifier generation) flows through the [`SecureRandom`] trait so
//! tests can substitute a scripted source. The production implementation
//! is [`OsRandom`], backed by the operating system CSPRNG via `getrandom`.

use crate::error::{Result, VaultError};

/// A cryptographically secure source of random bytes.
///
/// Implementations must either fill the buffer with uniformly random
/// bytes or fail with [`VaultError::RandomSource`]. Falling back to a
/// non-cryptographic generator is not allowed.
pub trait SecureRandom {
    /// Fill `dest` with random bytes.
    fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<()>;

    /// Draw a uniformly random 32-bit value.
    fn next_u32(&mut self) -> Result<u32> {
        let mut buf = [0u8; 4];
        self.fill_bytes(&mut buf)?;
        Ok(u32::from_le_bytes(buf))
    }

    /// Draw a random index in `[0, bound)`.
    ///
    /// Implemented as a random `u32` reduced modulo `bound`. The modulo
    /// bias is negligible for the small bounds used by the word bank and
    /// is an accepted property of the sampling scheme.
    fn next_index(&mut self, bound: usize) -> Result<usize> {
        if bound == 0 {
            return Err(VaultError::InvalidInput(
                "Index bound must be positive".to_string(),
            ));
        }
        Ok(self.next_u32()? as usize % bound)
    }
}

/// Operating-system CSPRNG (`getrandom`).
#[derive(Debug, Default, Clone, Copy)]
pub struct OsRandom;

impl SecureRandom for OsRandom {
    fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<()> {
        getrandom::getrandom(dest).map_err(|e| VaultError::RandomSource(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_os_random_fills_buffer() {
        let mut rng = OsRandom;
        let mut buf = [0u8; 32];
        rng.fill_bytes(&mut buf).unwrap();
        // All-zero output after a successful fill is astronomically unlikely.
        assert!(buf.iter().any(|b| *b != 0));
    }

    #[test]
    fn test_next_index_within_bound() {
        let mut rng = OsRandom;
        for _ in 0..100 {
            let idx = rng.next_index(7).unwrap();
            assert!(idx < 7);
        }
    }

    #[test]
    fn test_next_index_zero_bound_rejected() {
        let mut rng = OsRandom;
        let result = rng.next_index(0);
        assert!(matches!(result, Err(VaultError::InvalidInput(_))));
    }
}
