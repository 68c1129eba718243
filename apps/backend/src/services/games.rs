//! Game orchestration service.
//!
//! Each operation loads the aggregate from the store, applies engine
//! operations, and persists under the loaded lock version. The engine stays
//! log-free; observability lives here.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::game::Game;
use crate::domain::player::RegisteredPlayer;
use crate::domain::snapshot::{GameDetail, GameSummary};
use crate::errors::domain::{GameError, NotFoundKind};
use crate::repos::games::{require_game, GameStore, StoredGame};
use crate::utils::join_code::generate_short_id;

/// Game application service.
pub struct GameService {
    store: Arc<dyn GameStore>,
}

impl GameService {
    pub fn new(store: Arc<dyn GameStore>) -> Self {
        Self { store }
    }

    /// Create a game with a freshly generated join code.
    pub async fn create_game(
        &self,
        name: &str,
        owner: RegisteredPlayer,
    ) -> Result<StoredGame, GameError> {
        let game = Game::new(name, owner, generate_short_id());
        let stored = self.store.create(game).await?;
        info!(
            game_id = ?stored.game.id(),
            short_id = %stored.game.short_id(),
            "Game created"
        );
        Ok(stored)
    }

    /// Join a game by its short id.
    pub async fn join_game(
        &self,
        short_id: &str,
        player: RegisteredPlayer,
    ) -> Result<StoredGame, GameError> {
        let stored = self.store.find_by_short_id(short_id).await?.ok_or_else(|| {
            GameError::not_found(
                NotFoundKind::Game,
                format!("no game with join code {short_id}"),
            )
        })?;
        let player_id = player.id.clone();

        let mut game = stored.game;
        game.add_player(player)?;
        let updated = self.store.update(game, stored.lock_version).await?;
        info!(game_id = ?updated.game.id(), player_id = %player_id, "Player joined");
        Ok(updated)
    }

    /// Add a pseudo player to a game.
    pub async fn add_pseudo_player(
        &self,
        game_id: i64,
        pseudo: crate::domain::player::PseudoPlayer,
    ) -> Result<StoredGame, GameError> {
        let stored = require_game(self.store.as_ref(), game_id).await?;
        let pseudo_id = pseudo.id.clone();

        let mut game = stored.game;
        game.add_pseudo_player(pseudo)?;
        let updated = self.store.update(game, stored.lock_version).await?;
        info!(game_id, pseudo_id = %pseudo_id, "Pseudo player added");
        Ok(updated)
    }

    /// Hand the game to another registered member.
    pub async fn change_owner(
        &self,
        game_id: i64,
        new_owner_id: &str,
    ) -> Result<StoredGame, GameError> {
        let stored = require_game(self.store.as_ref(), game_id).await?;

        let mut game = stored.game;
        let changed = game.change_owner(new_owner_id)?;
        if !changed {
            debug!(game_id, "Owner unchanged");
            return Ok(StoredGame {
                game,
                lock_version: stored.lock_version,
            });
        }
        let updated = self.store.update(game, stored.lock_version).await?;
        info!(game_id, new_owner_id, "Owner changed");
        Ok(updated)
    }

    /// Start the game and open the rank-3 round.
    pub async fn start_game(
        &self,
        game_id: i64,
        started_by: &RegisteredPlayer,
    ) -> Result<StoredGame, GameError> {
        let stored = require_game(self.store.as_ref(), game_id).await?;

        let mut game = stored.game;
        game.start(started_by)?;
        let updated = self.store.update(game, stored.lock_version).await?;
        info!(game_id, started_by = %started_by.id, "Game started");
        debug!(game_id, "Transition: -> InProgress, round 3 open");
        Ok(updated)
    }

    /// Record (or retroactively correct) one player's round result.
    pub async fn record_result(
        &self,
        game_id: i64,
        player_id: &str,
        points: u32,
        perfect_cut: bool,
        round_number: Option<u8>,
    ) -> Result<StoredGame, GameError> {
        let stored = require_game(self.store.as_ref(), game_id).await?;

        let mut game = stored.game;
        game.record_player_round_result(player_id, points, perfect_cut, round_number)?;
        let updated = self.store.update(game, stored.lock_version).await?;
        debug!(
            game_id,
            player_id,
            points,
            perfect_cut,
            round_number = ?round_number,
            "Result recorded"
        );
        Ok(updated)
    }

    /// Close the open round and advance to the next rank (or finish after
    /// the King round).
    pub async fn advance_round(&self, game_id: i64) -> Result<StoredGame, GameError> {
        let stored = require_game(self.store.as_ref(), game_id).await?;

        let mut game = stored.game;
        game.next_round()?;
        let updated = self.store.update(game, stored.lock_version).await?;
        info!(
            game_id,
            round = ?updated.game.current_round().map(|r| r.card_rank()),
            stage = %updated.game.stage(),
            "Round advanced"
        );
        Ok(updated)
    }

    /// Finish the game early.
    pub async fn finish_game(&self, game_id: i64) -> Result<StoredGame, GameError> {
        let stored = require_game(self.store.as_ref(), game_id).await?;

        let mut game = stored.game;
        game.finish();
        let updated = self.store.update(game, stored.lock_version).await?;
        info!(game_id, "Game finished");
        Ok(updated)
    }

    /// Listing snapshots for every stored game.
    pub async fn list_games(&self) -> Result<Vec<GameSummary>, GameError> {
        let all = self.store.get_all().await?;
        Ok(all.iter().map(|s| GameSummary::from(&s.game)).collect())
    }

    /// Rich snapshot with rounds, totals and current winners.
    pub async fn game_detail(&self, game_id: i64) -> Result<GameDetail, GameError> {
        let stored = require_game(self.store.as_ref(), game_id).await?;
        Ok(GameDetail::from(&stored.game))
    }
}
