//! Rules configuration.
//!
//! Every number the engine's logic depends on lives in `RulesConfig`, so
//! the rules can be audited and tests can run variants. `Default` is the
//! standard game.
//!
//! The color list doubles as the canonical iteration order: wherever the
//! engine must pick "the first" property or set (Sly Deal, Deal Breaker,
//! Forced Deal, building placement, settlement tie-breaks) it walks colors
//! in this order.

use serde::{Deserialize, Serialize};

use crate::cards::{Color, ColorMap};
use crate::error::{DealError, Result};

/// Who is sitting at the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameMode {
    /// Human ("You") against the automated opponent ("CPU").
    VsCpu,
    /// Two humans sharing one device.
    LocalTwoPlayer,
}

/// Numbers and tables the rules engine consumes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RulesConfig {
    /// Colors in canonical order. Must list every color exactly once.
    pub colors: Vec<Color>,

    /// Properties needed for a full set, per color.
    pub set_size: ColorMap<usize>,

    /// Rent owed by holding count: entry `i` is the rent for `i + 1` cards.
    pub rent: ColorMap<Vec<u32>>,

    /// Colors that never take houses or hotels.
    pub unimprovable: Vec<Color>,

    pub house_bonus: u32,
    pub hotel_bonus: u32,

    /// Hand size allowed at end of turn.
    pub max_hand: usize,

    /// Plays allowed per turn.
    pub plays_per_turn: u32,

    /// Cards dealt to each player at game start.
    pub opening_hand: usize,

    /// Cards drawn at turn start with an empty hand.
    pub empty_hand_draw: usize,

    /// Cards drawn at turn start otherwise.
    pub turn_draw: usize,

    /// Extra cards drawn by Pass Go.
    pub pass_go_draw: usize,

    pub birthday_amount: u32,
    pub debt_collector_amount: u32,

    /// Distinct full sets needed to win.
    pub sets_to_win: usize,
}

impl Default for RulesConfig {
    fn default() -> Self {
        use Color::*;

        let set_size = ColorMap::new(|c| match c {
            Brown | DarkBlue | Utility => 2,
            Railroad => 4,
            _ => 3,
        });

        let rent = ColorMap::new(|c| match c {
            Brown => vec![1, 2],
            LightBlue => vec![1, 2, 3],
            Pink => vec![1, 2, 4],
            Orange => vec![1, 3, 5],
            Red => vec![2, 3, 6],
            Yellow => vec![2, 4, 6],
            Green => vec![2, 4, 7],
            DarkBlue => vec![3, 8],
            Railroad => vec![1, 2, 3, 4],
            Utility => vec![1, 2],
        });

        Self {
            colors: Color::ALL.to_vec(),
            set_size,
            rent,
            unimprovable: vec![Railroad, Utility],
            house_bonus: 3,
            hotel_bonus: 4,
            max_hand: 7,
            plays_per_turn: 3,
            opening_hand: 5,
            empty_hand_draw: 5,
            turn_draw: 2,
            pass_go_draw: 2,
            birthday_amount: 2,
            debt_collector_amount: 5,
            sets_to_win: 3,
        }
    }
}

impl RulesConfig {
    /// Check the config is internally consistent.
    pub fn validate(&self) -> Result<()> {
        let mut seen = [false; Color::COUNT];
        for &color in &self.colors {
            if std::mem::replace(&mut seen[color.index()], true) {
                return Err(DealError::InvalidConfig(format!("{} listed twice", color)));
            }
        }
        if let Some(missing) = Color::ALL.into_iter().find(|c| !seen[c.index()]) {
            return Err(DealError::InvalidConfig(format!("{} missing from colors", missing)));
        }

        for (color, &size) in self.set_size.iter() {
            if size == 0 {
                return Err(DealError::InvalidConfig(format!("{} set size is zero", color)));
            }
        }
        for (color, schedule) in self.rent.iter() {
            if schedule.is_empty() {
                return Err(DealError::InvalidConfig(format!("{} has no rent schedule", color)));
            }
        }

        if self.plays_per_turn == 0 {
            return Err(DealError::InvalidConfig("plays_per_turn is zero".into()));
        }
        if self.sets_to_win == 0 {
            return Err(DealError::InvalidConfig("sets_to_win is zero".into()));
        }
        Ok(())
    }

    /// Whether houses and hotels may be built on `color`.
    #[must_use]
    pub fn is_improvable(&self, color: Color) -> bool {
        !self.unimprovable.contains(&color)
    }
}
