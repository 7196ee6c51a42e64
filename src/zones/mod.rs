//! Card zones outside a player's hand and bank.
//!
//! ## Key Types
//!
//! - `Deck`: The shared draw pile; consumed cards return to its bottom
//! - `ColorGroup`: Property cards and improvements for one color
//! - `Holdings`: A player's per-color groups

pub mod deck;
pub mod holdings;

pub use deck::Deck;
pub use holdings::{ColorGroup, Holdings};
