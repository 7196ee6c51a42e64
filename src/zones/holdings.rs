//! A player's table of played properties.
//!
//! Each color has one [`ColorGroup`]: the property cards counting toward
//! that color plus any improvement cards attached to it. Keeping both in
//! one unit means properties and improvements can never drift apart when a
//! whole set changes hands.

use serde::{Deserialize, Serialize};

use crate::cards::{BuildingKind, Card, CardId, CardKind, Color, ColorMap};

/// Property cards and improvements for one color.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorGroup {
    /// Property cards in play order.
    pub properties: Vec<Card>,
    house: Option<Card>,
    hotel: Option<Card>,
}

impl ColorGroup {
    /// Number of property cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    #[must_use]
    pub fn has_house(&self) -> bool {
        self.house.is_some()
    }

    #[must_use]
    pub fn has_hotel(&self) -> bool {
        self.hotel.is_some()
    }

    /// Whether the slot for `kind` is taken.
    #[must_use]
    pub fn has_building(&self, kind: BuildingKind) -> bool {
        match kind {
            BuildingKind::House => self.has_house(),
            BuildingKind::Hotel => self.has_hotel(),
        }
    }

    /// Attached improvement cards.
    pub fn buildings(&self) -> impl Iterator<Item = &Card> {
        self.house.iter().chain(self.hotel.iter())
    }

    /// Attach a building card. Returns the card back if it is not a
    /// building or its slot is already taken.
    pub fn attach(&mut self, card: Card) -> Result<(), Card> {
        let slot = match card.kind {
            CardKind::Building(BuildingKind::House) => &mut self.house,
            CardKind::Building(BuildingKind::Hotel) => &mut self.hotel,
            _ => return Err(card),
        };
        if slot.is_some() {
            return Err(card);
        }
        *slot = Some(card);
        Ok(())
    }

    /// Sum of property values.
    #[must_use]
    pub fn property_value(&self) -> u32 {
        self.properties.iter().map(|c| c.value).sum()
    }

    /// Ids of every card in the group, properties first.
    pub fn card_ids(&self) -> impl Iterator<Item = CardId> + '_ {
        self.properties.iter().chain(self.buildings()).map(|c| c.id)
    }

    /// Split into (properties, improvement cards).
    #[must_use]
    pub fn into_parts(self) -> (Vec<Card>, Vec<Card>) {
        let buildings = self.house.into_iter().chain(self.hotel).collect();
        (self.properties, buildings)
    }
}

/// Per-color groups for one player.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holdings {
    groups: ColorMap<ColorGroup>,
}

impl Holdings {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The group for a color.
    #[must_use]
    pub fn group(&self, color: Color) -> &ColorGroup {
        &self.groups[color]
    }

    pub fn group_mut(&mut self, color: Color) -> &mut ColorGroup {
        &mut self.groups[color]
    }

    /// Number of properties held in a color.
    #[must_use]
    pub fn count(&self, color: Color) -> usize {
        self.groups[color].len()
    }

    /// Iterate over groups in [`Color::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (Color, &ColorGroup)> {
        self.groups.iter()
    }

    /// Colors with at least one property, in [`Color::ALL`] order.
    pub fn held_colors(&self) -> impl Iterator<Item = Color> + '_ {
        self.groups.iter().filter(|(_, g)| !g.is_empty()).map(|(c, _)| c)
    }

    /// No property cards anywhere.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.iter().all(|(_, g)| g.is_empty())
    }

    /// Total property value across colors (improvements excluded).
    #[must_use]
    pub fn property_value(&self) -> u32 {
        self.groups.iter().map(|(_, g)| g.property_value()).sum()
    }

    /// Add a property card to the group for its chosen color.
    ///
    /// Non-property cards are returned unchanged.
    pub fn add_property(&mut self, card: Card) -> Result<Color, Card> {
        let Some(color) = card.as_property().map(|p| p.chosen()) else {
            return Err(card);
        };
        self.groups[color].properties.push(card);
        Ok(color)
    }

    /// Remove a property card by id from a color group.
    pub fn remove_property(&mut self, color: Color, id: CardId) -> Option<Card> {
        let group = &mut self.groups[color];
        let pos = group.properties.iter().position(|c| c.id == id)?;
        Some(group.properties.remove(pos))
    }

    /// Take a whole group, leaving an empty one behind.
    pub fn take_group(&mut self, color: Color) -> ColorGroup {
        std::mem::take(&mut self.groups[color])
    }

    /// Ids of every card held, properties and improvements.
    pub fn card_ids(&self) -> impl Iterator<Item = CardId> + '_ {
        self.groups.iter().flat_map(|(_, g)| g.card_ids())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::PropertyCard;

    fn prop(id: u32, colors: &[Color], value: u32) -> Card {
        Card::new(
            CardId::new(id),
            "prop",
            value,
            CardKind::Property(PropertyCard::new(colors.iter().copied())),
        )
    }

    fn building(id: u32, kind: BuildingKind) -> Card {
        Card::new(CardId::new(id), kind.to_string(), 3, CardKind::Building(kind))
    }

    #[test]
    fn test_add_property_uses_chosen_color() {
        let mut holdings = Holdings::new();
        let color = holdings.add_property(prop(1, &[Color::Pink, Color::Orange], 2)).unwrap();

        assert_eq!(color, Color::Pink);
        assert_eq!(holdings.count(Color::Pink), 1);
        assert_eq!(holdings.count(Color::Orange), 0);
        assert_eq!(holdings.held_colors().collect::<Vec<_>>(), vec![Color::Pink]);
    }

    #[test]
    fn test_add_non_property_rejected() {
        let mut holdings = Holdings::new();
        let money = Card::new(CardId::new(1), "$1M", 1, CardKind::Money);
        assert!(holdings.add_property(money).is_err());
        assert!(holdings.is_empty());
    }

    #[test]
    fn test_attach_one_per_slot() {
        let mut group = ColorGroup::default();
        assert!(group.attach(building(1, BuildingKind::House)).is_ok());
        assert!(group.has_house());
        assert!(!group.has_hotel());

        let rejected = group.attach(building(2, BuildingKind::House));
        assert_eq!(rejected.unwrap_err().id, CardId::new(2));

        assert!(group.attach(building(3, BuildingKind::Hotel)).is_ok());
        assert_eq!(group.buildings().count(), 2);
    }

    #[test]
    fn test_remove_and_take() {
        let mut holdings = Holdings::new();
        holdings.add_property(prop(1, &[Color::Brown], 1)).unwrap();
        holdings.add_property(prop(2, &[Color::Brown], 1)).unwrap();

        let removed = holdings.remove_property(Color::Brown, CardId::new(1)).unwrap();
        assert_eq!(removed.id, CardId::new(1));
        assert!(holdings.remove_property(Color::Brown, CardId::new(1)).is_none());

        let group = holdings.take_group(Color::Brown);
        assert_eq!(group.len(), 1);
        assert!(holdings.is_empty());
    }

    #[test]
    fn test_values_and_ids() {
        let mut holdings = Holdings::new();
        holdings.add_property(prop(1, &[Color::Green], 4)).unwrap();
        holdings.add_property(prop(2, &[Color::Red], 3)).unwrap();
        holdings.group_mut(Color::Green).attach(building(3, BuildingKind::House)).unwrap();

        assert_eq!(holdings.property_value(), 7);
        let mut ids: Vec<_> = holdings.card_ids().map(CardId::raw).collect();
        ids.sort_unstable();
        assert_eq!(ids, vec![1, 2, 3]);
    }
}
