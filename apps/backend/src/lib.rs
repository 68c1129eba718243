#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

//! Threes scoring backend.
//!
//! The heart of the crate is [`domain`]: a synchronous, I/O-free game engine
//! for the multi-round card game Threes. [`repos`] defines the persistence
//! boundary, [`adapters`] ships an in-memory store, and [`services`]
//! orchestrates load-mutate-save cycles around the engine.

pub mod adapters;
pub mod domain;
pub mod errors;
pub mod repos;
pub mod services;
pub mod utils;


// Re-exports for public API
pub use domain::game::{Game, GameStage};
pub use domain::player::{PlayerId, PlayerRef, PseudoPlayer, RegisteredPlayer};
pub use domain::round::{PlayerRoundResult, Round};
pub use domain::snapshot::{GameDetail, GameSummary, PlayerPublic};
pub use errors::{ErrorCode, GameError};
pub use repos::games::{GameStore, StoredGame};
pub use services::GameService;

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
