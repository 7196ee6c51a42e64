//! Card instances.
//!
//! A `Card` is one physical card in a deck: an identity unique within that
//! deck, a display name, a face value, and a [`CardKind`] carrying the
//! kind-specific data. The face value is both the card's currency value and
//! its liquidation value during settlement.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::color::Color;

/// Identity of a card within one deck instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Eligible colors of a property or rent card. Most cards name one or two.
pub type ColorSet = SmallVec<[Color; 2]>;

/// Effect tag of an action card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    PassGo,
    DoubleRent,
    Birthday,
    DebtCollector,
    SlyDeal,
    DealBreaker,
    JustSayNo,
    ForcedDeal,
}

impl ActionKind {
    /// Display name as printed on the card.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            ActionKind::PassGo => "Pass Go",
            ActionKind::DoubleRent => "Double Rent",
            ActionKind::Birthday => "It's My Birthday",
            ActionKind::DebtCollector => "Debt Collector",
            ActionKind::SlyDeal => "Sly Deal",
            ActionKind::DealBreaker => "Deal Breaker",
            ActionKind::JustSayNo => "Just Say No",
            ActionKind::ForcedDeal => "Forced Deal",
        }
    }
}

/// Improvement type of a building card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BuildingKind {
    House,
    Hotel,
}

impl std::fmt::Display for BuildingKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BuildingKind::House => f.write_str("House"),
            BuildingKind::Hotel => f.write_str("Hotel"),
        }
    }
}

/// Colors a rent card can charge for.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RentColors {
    /// Charge for one of these colors.
    Colors(ColorSet),
    /// Charge for any color the player holds.
    Any,
}

impl RentColors {
    /// Whether this card can charge rent for `color`.
    #[must_use]
    pub fn covers(&self, color: Color) -> bool {
        match self {
            RentColors::Colors(colors) => colors.contains(&color),
            RentColors::Any => true,
        }
    }
}

/// A property card's color state.
///
/// `chosen` is always one of `eligible`; it changes only when the card is
/// played into a color group.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PropertyCard {
    eligible: ColorSet,
    chosen: Color,
}

impl PropertyCard {
    /// Create a property playable as any of `eligible`.
    ///
    /// Panics if `eligible` is empty.
    pub fn new(eligible: impl IntoIterator<Item = Color>) -> Self {
        let eligible: ColorSet = eligible.into_iter().collect();
        let chosen = *eligible.first().expect("property card needs at least one color");
        Self { eligible, chosen }
    }

    /// Eligible colors, first is the default.
    #[must_use]
    pub fn eligible(&self) -> &[Color] {
        &self.eligible
    }

    /// The color this card counts toward.
    #[must_use]
    pub fn chosen(&self) -> Color {
        self.chosen
    }

    /// Playable under more than one color.
    #[must_use]
    pub fn is_wild(&self) -> bool {
        self.eligible.len() > 1
    }

    /// Whether `color` is one of the eligible colors.
    #[must_use]
    pub fn is_eligible(&self, color: Color) -> bool {
        self.eligible.contains(&color)
    }

    /// Set the chosen color. Returns false (and changes nothing) if the
    /// color is not eligible.
    pub(crate) fn choose(&mut self, color: Color) -> bool {
        if self.is_eligible(color) {
            self.chosen = color;
            true
        } else {
            false
        }
    }
}

/// Kind-specific card data.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardKind {
    Money,
    Property(PropertyCard),
    Action(ActionKind),
    Rent(RentColors),
    Building(BuildingKind),
}

impl CardKind {
    /// Lowercase kind label, used in error messages.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            CardKind::Money => "money",
            CardKind::Property(_) => "property",
            CardKind::Action(_) => "action",
            CardKind::Rent(_) => "rent",
            CardKind::Building(_) => "building",
        }
    }
}

/// One physical card.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub name: String,
    pub value: u32,
    pub kind: CardKind,
}

impl Card {
    /// Create a card.
    pub fn new(id: CardId, name: impl Into<String>, value: u32, kind: CardKind) -> Self {
        Self {
            id,
            name: name.into(),
            value,
            kind,
        }
    }

    /// The property data, if this is a property card.
    #[must_use]
    pub fn as_property(&self) -> Option<&PropertyCard> {
        match &self.kind {
            CardKind::Property(p) => Some(p),
            _ => None,
        }
    }

    pub(crate) fn as_property_mut(&mut self) -> Option<&mut PropertyCard> {
        match &mut self.kind {
            CardKind::Property(p) => Some(p),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_money(&self) -> bool {
        matches!(self.kind, CardKind::Money)
    }

    #[must_use]
    pub fn is_property(&self) -> bool {
        matches!(self.kind, CardKind::Property(_))
    }

    /// The action tag, if this is an action card.
    #[must_use]
    pub fn action_kind(&self) -> Option<ActionKind> {
        match self.kind {
            CardKind::Action(kind) => Some(kind),
            _ => None,
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (${}M)", self.name, self.value)
    }
}
