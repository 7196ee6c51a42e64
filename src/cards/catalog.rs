//! The fixed card population of one deck.
//!
//! These tables are constants of the game, not runtime configuration.
//! [`standard_deck`] expands them into 106 cards with sequential ids in
//! table order.

use super::card::{ActionKind, BuildingKind, Card, CardId, CardKind, PropertyCard, RentColors};
use super::color::Color;

use Color::*;

/// Single-color properties: (color, value, count).
pub const PROPERTIES: [(Color, u32, usize); 10] = [
    (Brown, 1, 2),
    (LightBlue, 1, 3),
    (Pink, 2, 3),
    (Orange, 2, 3),
    (Red, 3, 3),
    (Yellow, 3, 3),
    (Green, 4, 3),
    (DarkBlue, 4, 2),
    (Railroad, 2, 4),
    (Utility, 2, 2),
];

/// Two-color wild properties: (name, value, colors). Listed once per card.
pub const WILD_PROPERTIES: [(&str, u32, [Color; 2]); 9] = [
    ("LtBlue/Brown", 1, [LightBlue, Brown]),
    ("LtBlue/Rail", 1, [LightBlue, Railroad]),
    ("Pink/Orange", 2, [Pink, Orange]),
    ("Pink/Orange", 2, [Pink, Orange]),
    ("Red/Yellow", 2, [Red, Yellow]),
    ("Red/Yellow", 2, [Red, Yellow]),
    ("DkBlue/Green", 4, [DarkBlue, Green]),
    ("Green/Rail", 4, [Green, Railroad]),
    ("Rail/Utility", 2, [Railroad, Utility]),
];

/// Any-color wild properties: (value, count).
pub const ANY_COLOR_WILDS: (u32, usize) = (0, 2);

/// Money: (denomination, count).
pub const MONEY: [(u32, usize); 6] = [(1, 6), (2, 5), (3, 3), (4, 3), (5, 2), (10, 1)];

/// Actions: (kind, value, count).
pub const ACTIONS: [(ActionKind, u32, usize); 8] = [
    (ActionKind::DealBreaker, 5, 2),
    (ActionKind::ForcedDeal, 3, 3),
    (ActionKind::SlyDeal, 3, 3),
    (ActionKind::JustSayNo, 4, 3),
    (ActionKind::DebtCollector, 3, 3),
    (ActionKind::Birthday, 2, 3),
    (ActionKind::DoubleRent, 1, 2),
    (ActionKind::PassGo, 1, 10),
];

/// Buildings: (kind, value, count).
pub const BUILDINGS: [(BuildingKind, u32, usize); 2] =
    [(BuildingKind::House, 3, 3), (BuildingKind::Hotel, 4, 2)];

/// Two-color rent cards: (name, value, colors, count).
pub const RENTS: [(&str, u32, [Color; 2], usize); 5] = [
    ("LtBlue/Brown", 1, [LightBlue, Brown], 2),
    ("Pink/Orange", 1, [Pink, Orange], 2),
    ("Red/Yellow", 1, [Red, Yellow], 2),
    ("DkBlue/Green", 1, [DarkBlue, Green], 2),
    ("Rail/Utility", 1, [Railroad, Utility], 2),
];

/// Any-color rent cards: (value, count).
pub const ANY_COLOR_RENTS: (u32, usize) = (3, 3);

/// Total number of cards in a deck built from these tables.
#[must_use]
pub fn deck_size() -> usize {
    PROPERTIES.iter().map(|p| p.2).sum::<usize>()
        + WILD_PROPERTIES.len()
        + ANY_COLOR_WILDS.1
        + MONEY.iter().map(|m| m.1).sum::<usize>()
        + ACTIONS.iter().map(|a| a.2).sum::<usize>()
        + BUILDINGS.iter().map(|b| b.2).sum::<usize>()
        + RENTS.iter().map(|r| r.3).sum::<usize>()
        + ANY_COLOR_RENTS.1
}

/// Expand the tables into cards, unshuffled.
#[must_use]
pub fn standard_deck() -> Vec<Card> {
    let mut cards = Vec::with_capacity(deck_size());
    let mut push = |name: String, value: u32, kind: CardKind| {
        let id = CardId::new(cards.len() as u32);
        cards.push(Card::new(id, name, value, kind));
    };

    for (color, value, count) in PROPERTIES {
        for _ in 0..count {
            push(color.name().to_string(), value, CardKind::Property(PropertyCard::new([color])));
        }
    }

    for (name, value, colors) in WILD_PROPERTIES {
        push(name.to_string(), value, CardKind::Property(PropertyCard::new(colors)));
    }

    let (value, count) = ANY_COLOR_WILDS;
    for _ in 0..count {
        push("Any Color".to_string(), value, CardKind::Property(PropertyCard::new(Color::ALL)));
    }

    for (value, count) in MONEY {
        for _ in 0..count {
            push(format!("${}M", value), value, CardKind::Money);
        }
    }

    for (kind, value, count) in ACTIONS {
        for _ in 0..count {
            push(kind.name().to_string(), value, CardKind::Action(kind));
        }
    }

    for (kind, value, count) in BUILDINGS {
        for _ in 0..count {
            push(kind.to_string(), value, CardKind::Building(kind));
        }
    }

    for (name, value, colors, count) in RENTS {
        for _ in 0..count {
            push(
                name.to_string(),
                value,
                CardKind::Rent(RentColors::Colors(colors.into_iter().collect())),
            );
        }
    }

    let (value, count) = ANY_COLOR_RENTS;
    for _ in 0..count {
        push("Any Color".to_string(), value, CardKind::Rent(RentColors::Any));
    }

    cards
}
