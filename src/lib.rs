//! # deal-engine
//!
//! Rules engine for the Monopoly Deal card game between two players, one of
//! whom may be the built-in computer opponent.
//!
//! ## Design Principles
//!
//! 1. **Caller-owned state**: A [`Game`] is a plain value. Every turn
//!    operation takes `&mut Game`; there is no session or global state.
//!
//! 2. **Validate, then mutate**: A rejected operation returns a
//!    [`ValidationError`] and leaves the game untouched.
//!
//! 3. **Every card accounted for**: Each card lives in exactly one zone (deck,
//!    a hand, a bank, or a color group). The engine audits this after every
//!    operation and refuses to continue a game that fails.
//!
//! ## Modules
//!
//! - `cards`: Colors, card kinds, and the standard 106-card catalog
//! - `zones`: The deck and a player's per-color holdings
//! - `core`: Players, game state, actions, the log, RNG, configuration
//! - `effects`: Debt settlement and action card effects
//! - `rules`: The turn state machine, rent, and win detection
//! - `policy`: Automated players and the turn driver
//!
//! ## Example
//!
//! ```
//! use deal_engine::{GameBuilder, GreedyPolicy, play_turn};
//!
//! let mut game = GameBuilder::new().build(7).unwrap();
//! let mut cpu = GreedyPolicy;
//! while !game.is_over() && game.round() <= 3 {
//!     play_turn(&mut game, &mut cpu).unwrap();
//! }
//! assert!(game.audit().is_ok());
//! ```

pub mod cards;
pub mod core;
pub mod effects;
pub mod error;
pub mod policy;
pub mod rules;
pub mod zones;

// Re-export commonly used types
pub use crate::cards::{ActionKind, BuildingKind, Card, CardId, CardKind, Color, PropertyCard, RentColors};

pub use crate::core::{
    Action, Game, GameBuilder, GameEvent, GameMode, GameRng, LogEntry, Phase, Player, PlayerId, RulesConfig,
};

pub use crate::effects::{settle, ActionResolver, Settlement};

pub use crate::error::{DealError, Result, ValidationError};

pub use crate::policy::{play_turn, GreedyPolicy, RandomPolicy, TurnPolicy};

pub use crate::rules::GameResult;

pub use crate::zones::{ColorGroup, Deck, Holdings};
