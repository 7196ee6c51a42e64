//! Error types for the rules engine.
//!
//! Rejected operations return a [`ValidationError`] wrapped in
//! [`DealError::Validation`]. A rejected operation never mutates the game.

use thiserror::Error;

use crate::cards::{CardId, Color};
use crate::core::Phase;

/// An operation's precondition is unmet.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("game is over")]
    GameOver,

    #[error("operation requires phase {expected:?}, game is in {actual:?}")]
    WrongPhase { expected: Phase, actual: Phase },

    #[error("no plays left this turn")]
    NoPlaysLeft,

    #[error("hand index {index} out of range (hand has {len} cards)")]
    HandIndexOutOfRange { index: usize, len: usize },

    #[error("card {card} is not a {expected} card")]
    WrongCardKind { card: CardId, expected: &'static str },

    #[error("{color} is not an eligible color for card {card}")]
    IneligibleColor { card: CardId, color: Color },

    #[error("no {0} properties held")]
    ColorNotHeld(Color),

    #[error("no full set can take this improvement")]
    NoImprovableSet,

    #[error("card {0} can only be played in response to an opponent")]
    ReactionOnly(CardId),
}

/// Engine errors.
#[derive(Error, Debug)]
pub enum DealError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The game's zones no longer account for every card exactly once.
    /// Fatal to the game instance.
    #[error("invariant violated: {0}")]
    InvariantViolation(String),

    #[error("invalid rules config: {0}")]
    InvalidConfig(String),

    #[error("snapshot error: {0}")]
    Snapshot(#[from] bincode::Error),
}

impl DealError {
    /// The validation failure, if this is one.
    #[must_use]
    pub fn validation(&self) -> Option<&ValidationError> {
        match self {
            DealError::Validation(e) => Some(e),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, DealError>;
