//! Record identifier generation.
//!
//! Identifiers are 16 random bytes, lowercase hex encoded (32 characters).
//! At 128 bits the collision probability is negligible, so identifiers are
//! treated as unique by construction without a registry of issued ids.

use crate::error::Result;
use crate::random::{OsRandom, SecureRandom};

/// Number of random bytes in an identifier.
pub const ID_BYTES: usize = 16;

/// Generate a fresh record identifier from the OS random source.
pub fn generate_id() -> Result<String> {
    generate_id_with(&mut OsRandom)
}

/// Generate an identifier from the given random source.
pub fn generate_id_with(rng: &mut dyn SecureRandom) -> Result<String> {
    let mut bytes = [0u8; ID_BYTES];
    rng.fill_bytes(&mut bytes)?;
    Ok(hex::encode(bytes))
}
