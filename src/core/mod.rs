//! Core engine types: players, game state, actions, RNG, configuration.

pub mod action;
pub mod config;
pub mod player;
pub mod rng;
pub mod state;

pub use action::{Action, GameEvent, LogEntry};
pub use config::{GameMode, RulesConfig};
pub use player::{Player, PlayerId, PlayerMap};
pub use rng::GameRng;
pub use state::{Game, GameBuilder, Phase};
