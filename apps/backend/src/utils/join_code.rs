//! Short id (join code) generation for games.
//!
//! Short ids are 6-character uppercase alphanumeric codes that players type
//! to join a game. Generation is not globally unique by itself; the store
//! enforces uniqueness on create.

use rand::Rng;

use crate::domain::rules::SHORT_ID_LEN;

const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Generate a short id with the process RNG.
pub fn generate_short_id() -> String {
    generate_short_id_with(&mut rand::rng())
}

/// Generate a short id from a caller-supplied RNG.
///
/// Keeps the engine deterministic under test: pass a seeded RNG and the
/// code is reproducible.
pub fn generate_short_id_with<R: Rng + ?Sized>(rng: &mut R) -> String {
    let mut s = String::with_capacity(SHORT_ID_LEN);
    for _ in 0..SHORT_ID_LEN {
        let idx = rng.random_range(0..ALPHABET.len());
        s.push(ALPHABET[idx] as char);
    }
    s
}
