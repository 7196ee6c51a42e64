//! Actions and the game log.
//!
//! An [`Action`] is one caller decision during the play phase: which hand
//! card to use and how. Policies return actions; [`Game::apply`] dispatches
//! them to the matching engine operation.
//!
//! The log is the game's record of what happened. Every applied operation
//! appends one or more [`LogEntry`] values; nothing is ever removed. Each
//! entry carries a structured [`GameEvent`] whose `Display` impl gives the
//! human-readable line a presentation layer shows.
//!
//! [`Game::apply`]: crate::core::Game::apply

use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use crate::cards::{ActionKind, BuildingKind, Color};

/// A play-phase decision.
///
/// ## Example
///
/// ```
/// use deal_engine::cards::Color;
/// use deal_engine::core::Action;
///
/// let bank = Action::Bank { index: 0 };
/// let wild = Action::PlayProperty { index: 2, color: Some(Color::Orange) };
/// assert_ne!(bank, wild);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Move a hand card to the bank.
    Bank { index: usize },
    /// Play a property, optionally choosing a wild card's color.
    PlayProperty { index: usize, color: Option<Color> },
    /// Charge rent for a held color.
    PlayRent { index: usize, color: Color },
    /// Play an action card for its effect.
    PlayAction { index: usize },
    /// Attach a house or hotel to a full set.
    Build { index: usize },
    /// Finish the turn.
    EndTurn,
}

impl Action {
    /// The hand index this action uses, if any.
    #[must_use]
    pub fn hand_index(&self) -> Option<usize> {
        match *self {
            Action::Bank { index }
            | Action::PlayProperty { index, .. }
            | Action::PlayRent { index, .. }
            | Action::PlayAction { index }
            | Action::Build { index } => Some(index),
            Action::EndTurn => None,
        }
    }
}

/// Something that happened in the game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    GameStarted,
    Drew { count: usize },
    Banked { card: String, value: u32 },
    PlayedProperty { card: String, color: Color },
    PlayedAction { action: ActionKind },
    DoubleRentArmed,
    DoubleRentApplied,
    ChargedRent { color: Color, amount: u32 },
    PaidProperty { card: String },
    Paid { payer: String, paid: u32, owed: u32 },
    NothingToPay { payer: String },
    Stole { card: String },
    NothingToSteal,
    StoleSet { color: Color },
    NoSetToSteal,
    Swapped { given: String, taken: String },
    NothingToSwap,
    Built { building: BuildingKind, color: Color },
    BuildingBanked { building: BuildingKind },
    Discarded { card: String },
    TurnEnded,
    PolicyStopped { reason: String },
    Won { name: String },
}

impl std::fmt::Display for GameEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameEvent::GameStarted => write!(f, "Game started!"),
            GameEvent::Drew { count } => write!(f, "drew {} cards", count),
            GameEvent::Banked { card, value } => write!(f, "banked {} (${}M)", card, value),
            GameEvent::PlayedProperty { card, color } => write!(f, "played {} as {}", card, color),
            GameEvent::PlayedAction { action } => write!(f, "played {}", action.name()),
            GameEvent::DoubleRentArmed => write!(f, "Double Rent active!"),
            GameEvent::DoubleRentApplied => write!(f, "Double rent applied!"),
            GameEvent::ChargedRent { color, amount } => {
                write!(f, "charges ${}M rent for {}!", amount, color)
            }
            GameEvent::PaidProperty { card } => write!(f, "paid with property {}", card),
            GameEvent::Paid { payer, paid, owed } => {
                write!(f, "{} paid ${}M total (owed ${}M)", payer, paid, owed)
            }
            GameEvent::NothingToPay { payer } => write!(f, "{} has nothing to pay!", payer),
            GameEvent::Stole { card } => write!(f, "stole {}!", card),
            GameEvent::NothingToSteal => write!(f, "Nothing to steal!"),
            GameEvent::StoleSet { color } => write!(f, "stole the {} set!", color),
            GameEvent::NoSetToSteal => write!(f, "No complete sets to steal!"),
            GameEvent::Swapped { given, taken } => write!(f, "swapped {} for {}", given, taken),
            GameEvent::NothingToSwap => write!(f, "Nothing to swap!"),
            GameEvent::Built { building, color } => write!(f, "built a {} on {}", building, color),
            GameEvent::BuildingBanked { building } => {
                write!(f, "{} had no free slot and was banked", building)
            }
            GameEvent::Discarded { card } => write!(f, "discarded {}", card),
            GameEvent::TurnEnded => write!(f, "finished turn"),
            GameEvent::PolicyStopped { reason } => write!(f, "stopped early: {}", reason),
            GameEvent::Won { name } => write!(f, "{} WINS!", name),
        }
    }
}

/// One line of the game log.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Round the event happened in.
    pub round: u32,
    /// Acting player, `None` for table-wide events.
    pub player: Option<PlayerId>,
    pub event: GameEvent,
}
