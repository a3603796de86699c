// src/analysis/seed.rs
use sha2::{Digest, Sha256};

/// Maps a page label to a reproducible 32-bit seed.
///
/// The value is the first four bytes of the SHA-256 digest of the UTF-8 text,
/// read big-endian, so it is stable across runs and platforms.
pub fn seed(text: &str) -> u32 {
    let digest = Sha256::digest(text.as_bytes());
    u32::from_be_bytes([digest[0], digest[1], digest[2], digest[3]])
}
