//! Domain-level error type used across the game engine, stores and services.
//!
//! This error type is HTTP- and storage-agnostic. An outer API layer maps
//! each variant to a user-facing response via [`crate::errors::ErrorCode`].

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::domain::game::GameStage;

/// Domain-level not found entities (minimal set; extend as needed)
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NotFoundKind {
    Game,
    Player,
    Round,
    Other(String),
}

/// Domain-level conflict kinds (extend as needed)
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConflictKind {
    /// A member with the same display name already exists in the game.
    DuplicateDisplayName,
    /// A game with the same join code already exists in the store.
    JoinCodeConflict,
    /// Stale lock version on update.
    OptimisticLock,
    Other(String),
}

/// Central domain error type.
///
/// Every engine failure is synchronous and total: an operation either fully
/// applies or raises one of these before mutating the aggregate.
#[derive(Debug, Clone, PartialEq)]
pub enum GameError {
    /// Operation attempted in the wrong lifecycle stage.
    IllegalGameStage {
        expected: GameStage,
        actual: GameStage,
    },
    /// Only the owner may start a game.
    NonOwnerCannotStartGame { player_id: String },
    /// A round cannot finish while members have no recorded result.
    ResultNotRecordedForPlayers {
        round_no: u8,
        missing_player_ids: Vec<String>,
    },
    /// Input/user validation or business rule violation
    Validation(String),
    /// Semantic conflict
    Conflict(ConflictKind, String),
    /// Missing resource in domain terms
    NotFound(NotFoundKind, String),
}

impl Display for GameError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            GameError::IllegalGameStage { expected, actual } => {
                write!(f, "illegal game stage: expected {expected}, game is {actual}")
            }
            GameError::NonOwnerCannotStartGame { player_id } => {
                write!(f, "player {player_id} is not the owner and cannot start the game")
            }
            GameError::ResultNotRecordedForPlayers {
                round_no,
                missing_player_ids,
            } => {
                write!(
                    f,
                    "round {round_no} has no recorded result for players: {}",
                    missing_player_ids.join(", ")
                )
            }
            GameError::Validation(d) => write!(f, "validation error: {d}"),
            GameError::Conflict(kind, d) => write!(f, "conflict {kind:?}: {d}"),
            GameError::NotFound(kind, d) => write!(f, "not found {kind:?}: {d}"),
        }
    }
}

impl Error for GameError {}

impl GameError {
    pub fn illegal_stage(expected: GameStage, actual: GameStage) -> Self {
        Self::IllegalGameStage { expected, actual }
    }
    pub fn validation(detail: impl Into<String>) -> Self {
        Self::Validation(detail.into())
    }
    pub fn conflict(kind: ConflictKind, detail: impl Into<String>) -> Self {
        Self::Conflict(kind, detail.into())
    }
    pub fn not_found(kind: NotFoundKind, detail: impl Into<String>) -> Self {
        Self::NotFound(kind, detail.into())
    }
}
