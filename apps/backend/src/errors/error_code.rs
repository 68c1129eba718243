//! Error codes for the Threes backend API.
//!
//! This module defines all error codes used throughout the application.
//! Add new codes here; never pass ad-hoc strings as error codes.
//!
//! All error codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings
//! that an API layer would surface in responses.

use core::fmt;

use crate::errors::domain::{ConflictKind, GameError, NotFoundKind};

/// Centralized error codes for the Threes backend API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// Operation attempted in the wrong game stage
    IllegalGameStage,
    /// Non-owner tried to start the game
    NonOwnerCannotStartGame,
    /// A round was advanced with missing player results
    ResultNotRecordedForPlayers,
    /// General validation error
    ValidationError,
    /// A member with the same display name already exists
    DuplicateDisplayName,
    /// Join code already in use
    JoinCodeConflict,
    /// Stale lock version on update
    OptimisticLockConflict,
    /// General conflict
    Conflict,
    /// Game not found
    GameNotFound,
    /// Player not found in the game
    PlayerNotFound,
    /// Round not found in the game
    RoundNotFound,
    /// General not found
    NotFound,
}

impl ErrorCode {
    /// Canonical SCREAMING_SNAKE_CASE string for this code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::IllegalGameStage => "ILLEGAL_GAME_STAGE",
            ErrorCode::NonOwnerCannotStartGame => "NON_OWNER_CANNOT_START_GAME",
            ErrorCode::ResultNotRecordedForPlayers => "RESULT_NOT_RECORDED_FOR_PLAYERS",
            ErrorCode::ValidationError => "VALIDATION_ERROR",
            ErrorCode::DuplicateDisplayName => "DUPLICATE_DISPLAY_NAME",
            ErrorCode::JoinCodeConflict => "JOIN_CODE_CONFLICT",
            ErrorCode::OptimisticLockConflict => "OPTIMISTIC_LOCK_CONFLICT",
            ErrorCode::Conflict => "CONFLICT",
            ErrorCode::GameNotFound => "GAME_NOT_FOUND",
            ErrorCode::PlayerNotFound => "PLAYER_NOT_FOUND",
            ErrorCode::RoundNotFound => "ROUND_NOT_FOUND",
            ErrorCode::NotFound => "NOT_FOUND",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&GameError> for ErrorCode {
    fn from(err: &GameError) -> Self {
        match err {
            GameError::IllegalGameStage { .. } => ErrorCode::IllegalGameStage,
            GameError::NonOwnerCannotStartGame { .. } => ErrorCode::NonOwnerCannotStartGame,
            GameError::ResultNotRecordedForPlayers { .. } => {
                ErrorCode::ResultNotRecordedForPlayers
            }
            GameError::Validation(_) => ErrorCode::ValidationError,
            GameError::Conflict(kind, _) => match kind {
                ConflictKind::DuplicateDisplayName => ErrorCode::DuplicateDisplayName,
                ConflictKind::JoinCodeConflict => ErrorCode::JoinCodeConflict,
                ConflictKind::OptimisticLock => ErrorCode::OptimisticLockConflict,
                _ => ErrorCode::Conflict,
            },
            GameError::NotFound(kind, _) => match kind {
                NotFoundKind::Game => ErrorCode::GameNotFound,
                NotFoundKind::Player => ErrorCode::PlayerNotFound,
                NotFoundKind::Round => ErrorCode::RoundNotFound,
                _ => ErrorCode::NotFound,
            },
        }
    }
}

impl GameError {
    /// Error code for caller-side response mapping.
    pub fn code(&self) -> ErrorCode {
        ErrorCode::from(self)
    }
}
