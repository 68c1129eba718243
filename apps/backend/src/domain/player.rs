//! Player variants and the membership union.
//!
//! A game holds registered players (backed by an account) and pseudo players
//! (added by hand, unable to authenticate as themselves). Game logic almost
//! always wants the union of both, which [`PlayerRef`] provides without
//! collapsing the two kinds into one struct.

use serde::{Deserialize, Serialize};

use crate::utils::avatar::avatar_hash;

/// Stable identifier of a player, resolved by the identity layer.
pub type PlayerId = String;

/// A player with an underlying account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisteredPlayer {
    pub id: PlayerId,
    pub display_name: String,
    /// Preferred avatar source when present.
    pub email: Option<String>,
}

impl RegisteredPlayer {
    pub fn new(id: impl Into<PlayerId>, display_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            email: None,
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn avatar_hash(&self) -> String {
        avatar_hash(self.email.as_deref().unwrap_or(&self.id))
    }
}

/// A manually-added player without an account of their own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PseudoPlayer {
    pub id: PlayerId,
    pub display_name: String,
}

impl PseudoPlayer {
    pub fn new(id: impl Into<PlayerId>, display_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
        }
    }

    pub fn avatar_hash(&self) -> String {
        avatar_hash(&self.display_name)
    }
}

/// Borrowed view over either player kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerRef<'a> {
    Registered(&'a RegisteredPlayer),
    Pseudo(&'a PseudoPlayer),
}

impl PlayerRef<'_> {
    pub fn id(&self) -> &str {
        match self {
            PlayerRef::Registered(p) => &p.id,
            PlayerRef::Pseudo(p) => &p.id,
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            PlayerRef::Registered(p) => &p.display_name,
            PlayerRef::Pseudo(p) => &p.display_name,
        }
    }

    pub fn avatar_hash(&self) -> String {
        match self {
            PlayerRef::Registered(p) => p.avatar_hash(),
            PlayerRef::Pseudo(p) => p.avatar_hash(),
        }
    }

    pub fn is_pseudo(&self) -> bool {
        matches!(self, PlayerRef::Pseudo(_))
    }
}
