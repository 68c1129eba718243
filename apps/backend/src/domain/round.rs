//! Round entity: per-round result capture and the completion gate.
//!
//! Rounds are owned by [`crate::domain::game::Game`] and never reference it
//! back; the aggregate is the only code that constructs, finishes or writes
//! into a round.

use std::collections::HashMap;

use time::OffsetDateTime;

use crate::domain::player::PlayerId;
use crate::domain::rules::PERFECT_CUT_BONUS;

/// A single player's score entry for one round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerRoundResult {
    pub user_id: PlayerId,
    /// Caller-supplied card points, never negative. The aggregate bounds
    /// them to `i32::MAX` on recording so [`Self::points`] stays exact.
    pub card_points: u32,
    /// 0, or [`PERFECT_CUT_BONUS`] when the player cut the active rank.
    pub perfect_cut_bonus: i32,
}

impl PlayerRoundResult {
    pub fn new(user_id: impl Into<PlayerId>, card_points: u32, perfect_cut: bool) -> Self {
        Self {
            user_id: user_id.into(),
            card_points,
            perfect_cut_bonus: if perfect_cut { PERFECT_CUT_BONUS } else { 0 },
        }
    }

    /// Net points this result contributes to the player's total.
    pub fn points(&self) -> i32 {
        self.card_points as i32 + self.perfect_cut_bonus
    }
}

/// One unit of play at a specific card rank (3..=13).
#[derive(Debug, Clone, PartialEq)]
pub struct Round {
    card_rank: u8,
    started_at: OffsetDateTime,
    ended_at: Option<OffsetDateTime>,
    player_results: HashMap<PlayerId, PlayerRoundResult>,
}

impl Round {
    /// Rounds are created by the aggregate, never directly by callers.
    pub(crate) fn new(card_rank: u8) -> Self {
        Self {
            card_rank,
            started_at: OffsetDateTime::now_utc(),
            ended_at: None,
            player_results: HashMap::new(),
        }
    }

    pub fn card_rank(&self) -> u8 {
        self.card_rank
    }

    pub fn started_at(&self) -> OffsetDateTime {
        self.started_at
    }

    pub fn ended_at(&self) -> Option<OffsetDateTime> {
        self.ended_at
    }

    pub fn is_finished(&self) -> bool {
        self.ended_at.is_some()
    }

    pub fn player_results(&self) -> &HashMap<PlayerId, PlayerRoundResult> {
        &self.player_results
    }

    /// Net points recorded for a player in this round; 0 when absent.
    pub fn player_points(&self, player_id: &str) -> i32 {
        self.player_results
            .get(player_id)
            .map(PlayerRoundResult::points)
            .unwrap_or(0)
    }

    /// Upsert a result; last write wins.
    pub(crate) fn record_result(&mut self, result: PlayerRoundResult) {
        self.player_results.insert(result.user_id.clone(), result);
    }

    /// Stamp `ended_at` once; finishing twice is a no-op.
    pub(crate) fn finish(&mut self) {
        if self.ended_at.is_none() {
            self.ended_at = Some(OffsetDateTime::now_utc());
        }
    }

    /// Ids among `member_ids` that have no recorded result yet.
    pub(crate) fn missing_results<'a>(
        &self,
        member_ids: impl Iterator<Item = &'a str>,
    ) -> Vec<PlayerId> {
        member_ids
            .filter(|id| !self.player_results.contains_key(*id))
            .map(str::to_string)
            .collect()
    }
}
