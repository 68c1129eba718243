//! Game store contract.
//!
//! The engine never loads or saves itself. A caller loads a [`Game`] through
//! this trait, invokes engine operations, then persists the result. A naive
//! load-mutate-save cycle is subject to lost updates under concurrent
//! requests, so `update` is versioned: stores must reject a stale
//! `expected_lock_version` with an optimistic-lock conflict.

use async_trait::async_trait;

use crate::domain::game::Game;
use crate::errors::domain::{GameError, NotFoundKind};

/// A persisted aggregate together with its concurrency token.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredGame {
    pub game: Game,
    pub lock_version: i32,
}

#[async_trait]
pub trait GameStore: Send + Sync {
    async fn get_all(&self) -> Result<Vec<StoredGame>, GameError>;

    async fn find_by_id(&self, game_id: i64) -> Result<Option<StoredGame>, GameError>;

    /// Lookup by join code.
    async fn find_by_short_id(&self, short_id: &str) -> Result<Option<StoredGame>, GameError>;

    /// Persist a new game, assigning its storage id. Short ids are unique
    /// per store; a taken code fails with [`ConflictKind::JoinCodeConflict`].
    ///
    /// [`ConflictKind::JoinCodeConflict`]: crate::errors::domain::ConflictKind::JoinCodeConflict
    async fn create(&self, game: Game) -> Result<StoredGame, GameError>;

    /// Persist a mutated game under optimistic concurrency control.
    async fn update(&self, game: Game, expected_lock_version: i32)
        -> Result<StoredGame, GameError>;
}

/// Find a game by id or convert `None` into a `GameNotFound` error,
/// eliminating the repetitive `ok_or_else` pattern when a game must exist.
pub async fn require_game(store: &dyn GameStore, game_id: i64) -> Result<StoredGame, GameError> {
    store.find_by_id(game_id).await?.ok_or_else(|| {
        GameError::not_found(NotFoundKind::Game, format!("game {game_id} does not exist"))
    })
}
