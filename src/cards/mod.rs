//! Card system: colors, card instances, and the deck catalog.
//!
//! ## Key Types
//!
//! - `Color` / `ColorMap`: The ten property colors and per-color storage
//! - `CardId`: Identity of one card within a deck
//! - `Card` / `CardKind`: A physical card and its kind-specific data
//! - `catalog`: The constant tables a deck is built from

pub mod card;
pub mod catalog;
pub mod color;

pub use card::{ActionKind, BuildingKind, Card, CardId, CardKind, ColorSet, PropertyCard, RentColors};
pub use color::{Color, ColorMap};
