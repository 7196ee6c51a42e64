//! Players and per-player storage.
//!
//! ## PlayerId
//!
//! Seat index: the first player is `PlayerId(0)`.
//!
//! ## PlayerMap
//!
//! One entry per seat, backed by a `Vec` for O(1) access.
//!
//! ## Player
//!
//! Everything one player owns: hand, bank, and per-color holdings.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use crate::cards::{Card, CardId, Color};
use crate::core::RulesConfig;
use crate::zones::Holdings;

/// Seat index of a player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The other seat in a two-player game.
    #[must_use]
    pub const fn other(self) -> Self {
        Self(1 - self.0)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0 + 1)
    }
}

/// Per-player data storage with O(1) access.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a map from values in seat order.
    pub fn from_vec(data: Vec<T>) -> Self {
        assert!(!data.is_empty(), "Must have at least 1 player");
        Self { data }
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Mutable references to two different players at once.
    ///
    /// Panics if `a == b`.
    pub fn pair_mut(&mut self, a: PlayerId, b: PlayerId) -> (&mut T, &mut T) {
        assert_ne!(a, b, "pair_mut needs two different players");
        let (lo, hi) = (a.index().min(b.index()), a.index().max(b.index()));
        let (left, right) = self.data.split_at_mut(hi);
        let (low, high) = (&mut left[lo], &mut right[0]);
        if a.index() < b.index() {
            (low, high)
        } else {
            (high, low)
        }
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data.iter().enumerate().map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over (PlayerId, &mut T) pairs.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PlayerId, &mut T)> {
        self.data.iter_mut().enumerate().map(|(i, v)| (PlayerId(i as u8), v))
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}

/// One player's cards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,

    /// Seat is driven by the automated policy.
    pub is_cpu: bool,

    /// Cards in hand. Order is insertion order.
    pub hand: Vec<Card>,

    /// Banked cards, valued only by sum.
    pub bank: Vec<Card>,

    /// Played properties and improvements, per color.
    pub holdings: Holdings,

    /// A Double Rent is waiting for this player's next rent play.
    pub double_rent_pending: bool,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_cpu: false,
            hand: Vec::new(),
            bank: Vec::new(),
            holdings: Holdings::new(),
            double_rent_pending: false,
        }
    }

    /// Mark this seat as automated.
    #[must_use]
    pub fn cpu(mut self) -> Self {
        self.is_cpu = true;
        self
    }

    #[must_use]
    pub fn bank_total(&self) -> u32 {
        self.bank.iter().map(|c| c.value).sum()
    }

    /// Bank plus property value: everything a debt can be paid from.
    #[must_use]
    pub fn table_value(&self) -> u32 {
        self.bank_total() + self.holdings.property_value()
    }

    /// Anything in bank or properties.
    #[must_use]
    pub fn has_assets(&self) -> bool {
        !self.bank.is_empty() || !self.holdings.is_empty()
    }

    /// Properties held in `color`.
    #[must_use]
    pub fn prop_count(&self, color: Color) -> usize {
        self.holdings.count(color)
    }

    #[must_use]
    pub fn has_full_set(&self, color: Color, config: &RulesConfig) -> bool {
        self.prop_count(color) >= config.set_size[color]
    }

    /// Colors with a full set, in canonical order.
    #[must_use]
    pub fn full_sets(&self, config: &RulesConfig) -> Vec<Color> {
        config
            .colors
            .iter()
            .copied()
            .filter(|&c| self.has_full_set(c, config))
            .collect()
    }

    /// Ids of every card this player owns, in any zone.
    pub fn card_ids(&self) -> impl Iterator<Item = CardId> + '_ {
        self.hand
            .iter()
            .chain(self.bank.iter())
            .map(|c| c.id)
            .chain(self.holdings.card_ids())
    }
}
