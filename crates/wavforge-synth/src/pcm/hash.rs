//! PCM content hashing.

/// Computes the BLAKE3 hash of a PCM buffer as a lowercase hex string.
///
/// Only sample data is hashed, so the same render hashes identically whatever
/// container it is later written to.
pub fn pcm_hash(pcm: &[u8]) -> String {
    blake3::hash(pcm).to_hex().to_string()
}
