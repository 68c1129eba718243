//! Public snapshot API for observing game state without exposing internals.
//!
//! Two DTO shapes, stable across callers: [`GameSummary`] for listings, and
//! [`GameDetail`] for clients that render live standings.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::domain::game::{Game, GameStage};
use crate::domain::player::{PlayerId, PlayerRef};
use crate::domain::round::Round;
use crate::domain::rules::rank_name;

/// Public info about a single player in the game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerPublic {
    pub id: PlayerId,
    pub display_name: String,
    pub avatar_hash: String,
    pub is_pseudo: bool,
}

impl From<PlayerRef<'_>> for PlayerPublic {
    fn from(player: PlayerRef<'_>) -> Self {
        Self {
            id: player.id().to_string(),
            display_name: player.display_name().to_string(),
            avatar_hash: player.avatar_hash(),
            is_pseudo: player.is_pseudo(),
        }
    }
}

/// One recorded result inside a round snapshot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRoundResultPublic {
    pub user_id: PlayerId,
    pub card_points: u32,
    pub perfect_cut_bonus: i32,
    pub points: i32,
}

/// Public round facts.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoundPublic {
    pub card_rank: u8,
    pub rank_name: String,
    #[serde(with = "time::serde::rfc3339")]
    pub started_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339::option")]
    pub ended_at: Option<OffsetDateTime>,
    /// Sorted by user id for a stable wire shape.
    pub player_results: Vec<PlayerRoundResultPublic>,
}

impl From<&Round> for RoundPublic {
    fn from(round: &Round) -> Self {
        let mut player_results: Vec<PlayerRoundResultPublic> = round
            .player_results()
            .values()
            .map(|r| PlayerRoundResultPublic {
                user_id: r.user_id.clone(),
                card_points: r.card_points,
                perfect_cut_bonus: r.perfect_cut_bonus,
                points: r.points(),
            })
            .collect();
        player_results.sort_by(|a, b| a.user_id.cmp(&b.user_id));

        Self {
            card_rank: round.card_rank(),
            rank_name: rank_name(round.card_rank()).unwrap_or("Unknown").to_string(),
            started_at: round.started_at(),
            ended_at: round.ended_at(),
            player_results,
        }
    }
}

/// Listing-level snapshot of a game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSummary {
    pub id: Option<i64>,
    pub name: String,
    pub short_id: String,
    pub owner: PlayerPublic,
    /// Registered players first, then pseudo players, in join order.
    pub players: Vec<PlayerPublic>,
    pub stage: GameStage,
}

impl From<&Game> for GameSummary {
    fn from(game: &Game) -> Self {
        Self {
            id: game.id(),
            name: game.name().to_string(),
            short_id: game.short_id().to_string(),
            owner: PlayerRef::Registered(game.owner()).into(),
            players: game.all_players().map(PlayerPublic::from).collect(),
            stage: game.stage(),
        }
    }
}

/// Rich snapshot with round history and live standings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameDetail {
    #[serde(flatten)]
    pub summary: GameSummary,
    pub rounds: Vec<RoundPublic>,
    pub total_points_by_player: BTreeMap<PlayerId, i32>,
    pub current_winner_ids: Vec<PlayerId>,
}

impl From<&Game> for GameDetail {
    fn from(game: &Game) -> Self {
        Self {
            summary: GameSummary::from(game),
            rounds: game.rounds().iter().map(RoundPublic::from).collect(),
            total_points_by_player: game.total_points_by_player(true),
            current_winner_ids: game.current_winners(),
        }
    }
}
