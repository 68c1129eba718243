//! In-memory game store.
//!
//! Backs the service layer in tests and single-process deployments. The
//! lock-version discipline matches what a database-backed store would do,
//! so callers exercise the same optimistic-concurrency paths either way.

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::domain::game::Game;
use crate::errors::domain::{ConflictKind, GameError, NotFoundKind};
use crate::repos::games::{GameStore, StoredGame};

#[derive(Debug, Default)]
struct State {
    games: HashMap<i64, StoredGame>,
    next_id: i64,
}

/// Thread-safe in-memory [`GameStore`].
#[derive(Debug, Default)]
pub struct InMemoryGameStore {
    state: RwLock<State>,
}

impl InMemoryGameStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl GameStore for InMemoryGameStore {
    async fn get_all(&self) -> Result<Vec<StoredGame>, GameError> {
        let state = self.state.read();
        let mut games: Vec<StoredGame> = state.games.values().cloned().collect();
        games.sort_by_key(|s| s.game.id());
        Ok(games)
    }

    async fn find_by_id(&self, game_id: i64) -> Result<Option<StoredGame>, GameError> {
        Ok(self.state.read().games.get(&game_id).cloned())
    }

    async fn find_by_short_id(&self, short_id: &str) -> Result<Option<StoredGame>, GameError> {
        let state = self.state.read();
        Ok(state
            .games
            .values()
            .find(|s| s.game.short_id() == short_id)
            .cloned())
    }

    async fn create(&self, mut game: Game) -> Result<StoredGame, GameError> {
        let mut state = self.state.write();
        if state
            .games
            .values()
            .any(|s| s.game.short_id() == game.short_id())
        {
            return Err(GameError::conflict(
                ConflictKind::JoinCodeConflict,
                format!("join code {} is already in use", game.short_id()),
            ));
        }
        state.next_id += 1;
        let id = state.next_id;
        game.assign_id(id);
        let stored = StoredGame {
            game,
            lock_version: 1,
        };
        state.games.insert(id, stored.clone());
        Ok(stored)
    }

    async fn update(
        &self,
        game: Game,
        expected_lock_version: i32,
    ) -> Result<StoredGame, GameError> {
        let Some(id) = game.id() else {
            return Err(GameError::not_found(
                NotFoundKind::Game,
                "cannot update a game that was never created",
            ));
        };
        let mut state = self.state.write();
        let Some(existing) = state.games.get(&id) else {
            return Err(GameError::not_found(
                NotFoundKind::Game,
                format!("game {id} does not exist"),
            ));
        };
        if existing.lock_version != expected_lock_version {
            return Err(GameError::conflict(
                ConflictKind::OptimisticLock,
                format!(
                    "game {id}: expected lock version {expected_lock_version}, found {}",
                    existing.lock_version
                ),
            ));
        }
        let stored = StoredGame {
            game,
            lock_version: expected_lock_version + 1,
        };
        state.games.insert(id, stored.clone());
        Ok(stored)
    }
}
