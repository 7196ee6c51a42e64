//! The shared draw pile.
//!
//! The deck is an ordered zone: the top is the back of the vector, the
//! bottom is the front. Consumed action and rent cards and end-of-turn
//! discards are returned to the bottom, so the deck doubles as the discard
//! destination.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::{catalog, Card};
use crate::core::GameRng;

/// The shared draw pile.
///
/// Backed by `im::Vector` so cloning a game for lookahead is cheap and both
/// ends are O(1)-ish to push and pop.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vector<Card>,
}

impl Deck {
    /// Create a deck holding the full catalog, unshuffled.
    #[must_use]
    pub fn build() -> Self {
        Self::from_cards(catalog::standard_deck())
    }

    /// Create a deck from cards listed bottom first.
    #[must_use]
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    /// Randomize the order.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        let mut cards: Vec<Card> = self.cards.iter().cloned().collect();
        rng.shuffle(&mut cards);
        self.cards = cards.into_iter().collect();
    }

    /// Remove up to `n` cards from the top, topmost first.
    ///
    /// Returns fewer than `n` when the deck runs out.
    pub fn draw(&mut self, n: usize) -> Vec<Card> {
        let mut drawn = Vec::with_capacity(n.min(self.cards.len()));
        while drawn.len() < n {
            match self.cards.pop_back() {
                Some(card) => drawn.push(card),
                None => break,
            }
        }
        drawn
    }

    /// Put cards under the bottom, in the given order (the first card ends
    /// up lowest).
    pub fn return_to_bottom(&mut self, cards: impl IntoIterator<Item = Card>) {
        for card in cards {
            self.cards.push_front(card);
        }
    }

    /// Number of cards left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards from bottom to top.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}
