//! Game aggregate: lifecycle, membership, round progression and standings.
//!
//! The aggregate is a self-contained unit of mutation. Every operation is a
//! synchronous in-memory transition that validates before it mutates, so a
//! failed call leaves the game exactly as it was. Concurrency across callers
//! is the store's problem (optimistic locking in [`crate::repos::games`]).

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::domain::player::{PlayerId, PlayerRef, PseudoPlayer, RegisteredPlayer};
use crate::domain::round::{PlayerRoundResult, Round};
use crate::domain::rules::{
    is_valid_rank, FIRST_RANK, KING_RANK, MAX_PLAYERS, MIN_PLAYERS_TO_START,
};
use crate::domain::scoring;
use crate::errors::domain::{ConflictKind, GameError, NotFoundKind};

/// Coarse lifecycle phase. Moves forward only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStage {
    /// Created, collecting players.
    Pre,
    /// Rounds are being played.
    InProgress,
    /// Finished, totals are final.
    Done,
}

impl fmt::Display for GameStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            GameStage::Pre => "pre",
            GameStage::InProgress => "in_progress",
            GameStage::Done => "done",
        };
        f.write_str(s)
    }
}

/// Aggregate root for one game of Threes.
#[derive(Debug, Clone, PartialEq)]
pub struct Game {
    id: Option<i64>,
    name: String,
    short_id: String,
    stage: GameStage,
    owner_id: PlayerId,
    players: Vec<RegisteredPlayer>,
    pseudo_players: Vec<PseudoPlayer>,
    rounds: Vec<Round>,
    started_at: Option<OffsetDateTime>,
    ended_at: Option<OffsetDateTime>,
}

impl Game {
    /// Create a game in `Pre` stage; the owner becomes the first player.
    ///
    /// The short id is injected rather than generated here, typically from
    /// [`crate::utils::join_code::generate_short_id`]. Global uniqueness of
    /// the code is the store's concern.
    pub fn new(name: impl Into<String>, owner: RegisteredPlayer, short_id: String) -> Self {
        let owner_id = owner.id.clone();
        Self {
            id: None,
            name: name.into(),
            short_id,
            stage: GameStage::Pre,
            owner_id,
            players: vec![owner],
            pseudo_players: Vec::new(),
            rounds: Vec::new(),
            started_at: None,
            ended_at: None,
        }
    }

    // --- identity & accessors ------------------------------------------------

    pub fn id(&self) -> Option<i64> {
        self.id
    }

    /// Storage identity, set by the store on create. Never generated here.
    pub fn assign_id(&mut self, id: i64) {
        self.id = Some(id);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn short_id(&self) -> &str {
        &self.short_id
    }

    pub fn stage(&self) -> GameStage {
        self.stage
    }

    pub fn owner_id(&self) -> &str {
        &self.owner_id
    }

    pub fn owner(&self) -> &RegisteredPlayer {
        // The owner is inserted at construction, reassignment only targets
        // registered members, and members are never removed.
        self.players
            .iter()
            .find(|p| p.id == self.owner_id)
            .expect("owner is always a registered member")
    }

    pub fn players(&self) -> &[RegisteredPlayer] {
        &self.players
    }

    pub fn pseudo_players(&self) -> &[PseudoPlayer] {
        &self.pseudo_players
    }

    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }

    pub fn started_at(&self) -> Option<OffsetDateTime> {
        self.started_at
    }

    pub fn ended_at(&self) -> Option<OffsetDateTime> {
        self.ended_at
    }

    /// Registered and pseudo players, in display order.
    pub fn all_players(&self) -> impl Iterator<Item = PlayerRef<'_>> {
        self.players
            .iter()
            .map(PlayerRef::Registered)
            .chain(self.pseudo_players.iter().map(PlayerRef::Pseudo))
    }

    pub fn player_count(&self) -> usize {
        self.players.len() + self.pseudo_players.len()
    }

    pub fn is_member(&self, player_id: &str) -> bool {
        self.all_players().any(|p| p.id() == player_id)
    }

    /// The open round: the last one, as long as it is unfinished and the
    /// game is still in progress. An early [`Game::finish`] leaves the last
    /// round unclosed, but a done game has no current round; history stays
    /// reachable only through an explicit round number.
    pub fn current_round(&self) -> Option<&Round> {
        if self.stage != GameStage::InProgress {
            return None;
        }
        self.rounds.last().filter(|r| !r.is_finished())
    }

    // --- membership -----------------------------------------------------------

    /// Add a registered player. Re-adding a member is idempotent success.
    pub fn add_player(&mut self, player: RegisteredPlayer) -> Result<bool, GameError> {
        self.ensure_pre_stage()?;
        if self.is_member(&player.id) {
            return Ok(true);
        }
        self.ensure_capacity()?;
        self.players.push(player);
        Ok(true)
    }

    /// Add a pseudo player. Unlike registered players, pseudo players must
    /// not reuse a display name already present in the game.
    pub fn add_pseudo_player(&mut self, player: PseudoPlayer) -> Result<bool, GameError> {
        self.ensure_pre_stage()?;
        if self.is_member(&player.id) {
            return Ok(true);
        }
        self.ensure_capacity()?;
        if self
            .all_players()
            .any(|p| p.display_name() == player.display_name)
        {
            return Err(GameError::conflict(
                ConflictKind::DuplicateDisplayName,
                format!(
                    "a player named '{}' is already in the game",
                    player.display_name
                ),
            ));
        }
        self.pseudo_players.push(player);
        Ok(true)
    }

    /// Reassign ownership to a registered member. Permitted in any stage.
    /// Returns `false` when the owner is unchanged.
    pub fn change_owner(&mut self, new_owner_id: &str) -> Result<bool, GameError> {
        if new_owner_id == self.owner_id {
            return Ok(false);
        }
        if !self.players.iter().any(|p| p.id == new_owner_id) {
            return Err(GameError::not_found(
                NotFoundKind::Player,
                format!("player {new_owner_id} is not a registered member of the game"),
            ));
        }
        self.owner_id = new_owner_id.to_string();
        Ok(true)
    }

    // --- lifecycle ------------------------------------------------------------

    /// Start the game and open the first round (rank 3).
    pub fn start(&mut self, started_by: &RegisteredPlayer) -> Result<(), GameError> {
        if started_by.id != self.owner_id {
            return Err(GameError::NonOwnerCannotStartGame {
                player_id: started_by.id.clone(),
            });
        }
        if self.stage != GameStage::Pre {
            return Err(GameError::validation("game has already started"));
        }
        if self.player_count() < MIN_PLAYERS_TO_START {
            return Err(GameError::validation(format!(
                "at least {MIN_PLAYERS_TO_START} players are required to start"
            )));
        }
        self.started_at = Some(OffsetDateTime::now_utc());
        self.stage = GameStage::InProgress;
        self.next_round()
    }

    /// Advance the game by one round.
    ///
    /// Finishes the open round (every member must have a recorded result),
    /// then either ends the game after the King round or opens the round at
    /// the next rank. Fails without state change when results are missing.
    pub fn next_round(&mut self) -> Result<(), GameError> {
        if self.stage != GameStage::InProgress {
            return Err(GameError::illegal_stage(GameStage::InProgress, self.stage));
        }
        self.finish_current_round()?;
        match self.rounds.last().map(Round::card_rank) {
            Some(KING_RANK) => self.finish(),
            Some(rank) => self.rounds.push(Round::new(rank + 1)),
            None => self.rounds.push(Round::new(FIRST_RANK)),
        }
        Ok(())
    }

    /// End the game, stamping `ended_at`. Idempotent; also serves as the
    /// explicit early-finish call before the King round is reached.
    pub fn finish(&mut self) {
        if self.stage == GameStage::Done {
            return;
        }
        self.ended_at = Some(OffsetDateTime::now_utc());
        self.stage = GameStage::Done;
    }

    // --- scoring ----------------------------------------------------------------

    /// Upsert one player's result for a round.
    ///
    /// Without `round_number` the open round is targeted. With it, any
    /// already-played round may be amended, finished or not: this is the
    /// retroactive-correction path. Recording never finishes or advances a
    /// round.
    pub fn record_player_round_result(
        &mut self,
        player_id: &str,
        points: u32,
        perfect_cut: bool,
        round_number: Option<u8>,
    ) -> Result<(), GameError> {
        // Totals are i32; reject points the accounting cannot represent.
        if points > i32::MAX as u32 {
            return Err(GameError::validation(format!(
                "card points must not exceed {}",
                i32::MAX
            )));
        }
        match round_number {
            None => {
                if self.current_round().is_none() {
                    return Err(GameError::validation("no round in progress"));
                }
            }
            Some(rank) => {
                if !is_valid_rank(rank) {
                    return Err(GameError::validation(format!(
                        "round number must lie between {FIRST_RANK} and {KING_RANK}, got {rank}"
                    )));
                }
                if !self.rounds.iter().any(|r| r.card_rank() == rank) {
                    return Err(GameError::not_found(
                        NotFoundKind::Round,
                        format!("round {rank} has not been played in this game"),
                    ));
                }
            }
        }
        if !self.is_member(player_id) {
            return Err(GameError::not_found(
                NotFoundKind::Player,
                format!("player {player_id} is not in the game"),
            ));
        }

        let result = PlayerRoundResult::new(player_id, points, perfect_cut);
        // Both targets were validated above.
        let round = match round_number {
            None => self.rounds.last_mut(),
            Some(rank) => self.rounds.iter_mut().find(|r| r.card_rank() == rank),
        };
        if let Some(round) = round {
            round.record_result(result);
        }
        Ok(())
    }

    /// Total for one player; see [`scoring::player_total`].
    pub fn get_player_points(&self, player_id: &str, include_unfinished: bool) -> i32 {
        scoring::player_total(&self.rounds, player_id, include_unfinished)
    }

    /// Totals for every current member. Live standings pass
    /// `include_unfinished = true` so the open round counts immediately.
    pub fn total_points_by_player(&self, include_unfinished: bool) -> BTreeMap<PlayerId, i32> {
        self.all_players()
            .map(|p| {
                let total = self.get_player_points(p.id(), include_unfinished);
                (p.id().to_string(), total)
            })
            .collect()
    }

    /// Current leaders: everyone tied at the minimum live total.
    ///
    /// Empty before the game starts and while fewer than two rounds exist;
    /// the opening round is always played at even stakes, so a single round
    /// of history is too early to call a leader.
    pub fn current_winners(&self) -> Vec<PlayerId> {
        if self.stage == GameStage::Pre || self.rounds.len() < 2 {
            return Vec::new();
        }
        scoring::winners(&self.total_points_by_player(true))
    }

    // --- internal helpers --------------------------------------------------------

    fn ensure_pre_stage(&self) -> Result<(), GameError> {
        if self.stage != GameStage::Pre {
            return Err(GameError::illegal_stage(GameStage::Pre, self.stage));
        }
        Ok(())
    }

    fn ensure_capacity(&self) -> Result<(), GameError> {
        if self.player_count() >= MAX_PLAYERS {
            return Err(GameError::validation(format!(
                "game is full ({MAX_PLAYERS} players max)"
            )));
        }
        Ok(())
    }

    /// Step 1 of the round-advance protocol: idempotent, and a no-op before
    /// the first round exists.
    fn finish_current_round(&mut self) -> Result<(), GameError> {
        let member_ids: Vec<PlayerId> =
            self.all_players().map(|p| p.id().to_string()).collect();
        let Some(round) = self.rounds.last_mut() else {
            return Ok(());
        };
        if round.is_finished() {
            return Ok(());
        }
        let missing = round.missing_results(member_ids.iter().map(String::as_str));
        if !missing.is_empty() {
            return Err(GameError::ResultNotRecordedForPlayers {
                round_no: round.card_rank(),
                missing_player_ids: missing,
            });
        }
        round.finish();
        Ok(())
    }
}
