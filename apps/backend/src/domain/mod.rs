//! Domain layer: the game engine proper. Pure, synchronous, I/O-free.

pub mod game;
pub mod player;
pub mod round;
pub mod rules;
pub mod scoring;
pub mod snapshot;

#[cfg(test)]
mod tests_props;
#[cfg(test)]
mod tests_scoring;

// Re-exports for ergonomics
pub use game::{Game, GameStage};
pub use player::{PlayerId, PlayerRef, PseudoPlayer, RegisteredPlayer};
pub use round::{PlayerRoundResult, Round};
pub use rules::{rank_name, MAX_PLAYERS, PERFECT_CUT_BONUS};
