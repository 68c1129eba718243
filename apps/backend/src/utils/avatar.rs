//! Deterministic avatar hashes.
//!
//! Clients derive an avatar image from a stable hash of a player attribute:
//! the email (or id) for registered players, the display name for pseudo
//! players. The hash must be stable across processes, so it is a plain
//! blake3 digest of the input, hex encoded.

/// Hash an identifying string into a stable lowercase hex digest.
pub fn avatar_hash(input: &str) -> String {
    blake3::hash(input.as_bytes()).to_hex().to_string()
}
