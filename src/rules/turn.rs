//! The turn state machine.
//!
//! `TurnStart -> Play -> TurnStart` for the next seat. Every operation
//! checks all of its preconditions before touching the game, so a rejected
//! call leaves it exactly as it was. A successful call ends with a win check
//! and a zone audit.

use crate::cards::{ActionKind, BuildingKind, Card, CardKind, Color};
use crate::core::{Action, Game, GameEvent, Phase, PlayerId};
use crate::effects::{ActionResolver, Settlement};
use crate::error::{Result, ValidationError};

use super::rent::rent_for;
use super::win::check_win;

impl Game {
    // === Preconditions ===

    fn check_open(&self) -> Result<()> {
        self.ensure_sound()?;
        if self.winner.is_some() {
            return Err(ValidationError::GameOver.into());
        }
        Ok(())
    }

    fn check_phase(&self, expected: Phase) -> Result<()> {
        if self.phase != expected {
            return Err(ValidationError::WrongPhase {
                expected,
                actual: self.phase,
            }
            .into());
        }
        Ok(())
    }

    /// Common checks for a budgeted play; returns the chosen hand card.
    fn check_play(&self, index: usize) -> Result<&Card> {
        self.check_open()?;
        self.check_phase(Phase::Play)?;
        if self.plays_left == 0 {
            return Err(ValidationError::NoPlaysLeft.into());
        }
        let hand = &self.players[self.current].hand;
        hand.get(index).ok_or_else(|| {
            ValidationError::HandIndexOutOfRange {
                index,
                len: hand.len(),
            }
            .into()
        })
    }

    fn take_from_hand(&mut self, index: usize) -> Card {
        self.players[self.current].hand.remove(index)
    }

    fn finish_play(&mut self) -> Result<()> {
        self.plays_left -= 1;
        check_win(self);
        self.seal()
    }

    /// First canonical color where the current player could attach `kind`.
    fn build_target(&self, kind: BuildingKind) -> Option<Color> {
        let player = &self.players[self.current];
        self.config.colors.iter().copied().find(|&color| {
            self.config.is_improvable(color)
                && player.has_full_set(color, &self.config)
                && !player.holdings.group(color).has_building(kind)
        })
    }

    // === Operations ===

    /// Start the active player's turn: draw, refill the play budget, and
    /// enter the play phase.
    ///
    /// Draws `empty_hand_draw` cards from an empty hand, `turn_draw`
    /// otherwise. A short deck just yields fewer cards.
    pub fn draw_for_turn(&mut self) -> Result<()> {
        self.check_open()?;
        self.check_phase(Phase::TurnStart)?;

        let current = self.current;
        let n = if self.players[current].hand.is_empty() {
            self.config.empty_hand_draw
        } else {
            self.config.turn_draw
        };
        let drawn = self.deck.draw(n);
        let count = drawn.len();
        self.players[current].hand.extend(drawn);

        self.plays_left = self.config.plays_per_turn;
        self.phase = Phase::Play;
        self.record(Some(current), GameEvent::Drew { count });
        self.seal()
    }

    /// Move any hand card to the bank.
    pub fn bank_card(&mut self, index: usize) -> Result<()> {
        self.check_play(index)?;

        let current = self.current;
        let card = self.take_from_hand(index);
        let event = GameEvent::Banked {
            card: card.name.clone(),
            value: card.value,
        };
        self.players[current].bank.push(card);
        self.record(Some(current), event);
        self.finish_play()
    }

    /// Play a property card into its color group.
    ///
    /// `color` picks the group for a wild card and must be one of its
    /// eligible colors. Without it the card keeps its current color.
    pub fn play_property(&mut self, index: usize, color: Option<Color>) -> Result<()> {
        let card = self.check_play(index)?;
        let Some(property) = card.as_property() else {
            return Err(ValidationError::WrongCardKind {
                card: card.id,
                expected: "property",
            }
            .into());
        };
        if let Some(color) = color {
            if !property.is_eligible(color) {
                return Err(ValidationError::IneligibleColor { card: card.id, color }.into());
            }
        }

        let current = self.current;
        let mut card = self.take_from_hand(index);
        if let (Some(color), Some(property)) = (color, card.as_property_mut()) {
            property.choose(color);
        }
        let name = card.name.clone();
        let placed = match self.players[current].holdings.add_property(card) {
            Ok(color) => color,
            Err(card) => {
                self.players[current].hand.insert(index, card);
                return Err(self.poison(format!("holdings refused property {}", name)));
            }
        };
        self.record(Some(current), GameEvent::PlayedProperty { card: name, color: placed });
        self.finish_play()
    }

    /// Charge the opponent rent for a held color.
    ///
    /// A pending Double Rent doubles the charge and is consumed. The rent
    /// card goes to the deck bottom.
    pub fn play_rent(&mut self, index: usize, color: Color) -> Result<Settlement> {
        let card = self.check_play(index)?;
        let CardKind::Rent(colors) = &card.kind else {
            return Err(ValidationError::WrongCardKind {
                card: card.id,
                expected: "rent",
            }
            .into());
        };
        if !colors.covers(color) {
            return Err(ValidationError::IneligibleColor { card: card.id, color }.into());
        }
        if self.players[self.current].prop_count(color) == 0 {
            return Err(ValidationError::ColorNotHeld(color).into());
        }

        let current = self.current;
        let card = self.take_from_hand(index);
        self.deck.return_to_bottom([card]);

        let amount = rent_for(&self.players[current], color, &self.config);
        if self.players[current].double_rent_pending {
            self.players[current].double_rent_pending = false;
            self.record(Some(current), GameEvent::DoubleRentApplied);
        }
        self.record(Some(current), GameEvent::ChargedRent { color, amount });
        let settlement = self.collect(current.other(), current, amount);

        self.finish_play()?;
        Ok(settlement)
    }

    /// Play an action card for its effect. The card goes to the deck
    /// bottom before the effect resolves.
    pub fn play_action(&mut self, index: usize) -> Result<()> {
        let card = self.check_play(index)?;
        let Some(kind) = card.action_kind() else {
            return Err(ValidationError::WrongCardKind {
                card: card.id,
                expected: "action",
            }
            .into());
        };
        if kind == ActionKind::JustSayNo {
            return Err(ValidationError::ReactionOnly(card.id).into());
        }

        let current = self.current;
        let card = self.take_from_hand(index);
        self.deck.return_to_bottom([card]);
        self.record(Some(current), GameEvent::PlayedAction { action: kind });
        ActionResolver::resolve(self, current, kind);
        self.finish_play()
    }

    /// Attach a house or hotel to the first full, improvable set with a
    /// free slot for it.
    pub fn build(&mut self, index: usize) -> Result<()> {
        let card = self.check_play(index)?;
        let CardKind::Building(kind) = card.kind else {
            return Err(ValidationError::WrongCardKind {
                card: card.id,
                expected: "building",
            }
            .into());
        };
        let Some(color) = self.build_target(kind) else {
            return Err(ValidationError::NoImprovableSet.into());
        };

        let current = self.current;
        let card = self.take_from_hand(index);
        if let Err(card) = self.players[current].holdings.group_mut(color).attach(card) {
            let id = card.id;
            self.players[current].hand.insert(index, card);
            return Err(self.poison(format!("{} slot on {} refused card {}", kind, color, id)));
        }
        self.record(Some(current), GameEvent::Built { building: kind, color });
        self.finish_play()
    }

    /// Finish the active player's turn.
    ///
    /// Discards down to the hand limit, lowest value first (earliest in hand
    /// on ties), onto the deck bottom. Then passes to the other seat.
    pub fn end_turn(&mut self) -> Result<()> {
        self.check_open()?;
        self.check_phase(Phase::Play)?;

        let current = self.current;
        while self.players[current].hand.len() > self.config.max_hand {
            let hand = &self.players[current].hand;
            let Some(pos) = hand
                .iter()
                .enumerate()
                .min_by_key(|(_, c)| c.value)
                .map(|(i, _)| i)
            else {
                break;
            };
            let card = self.take_from_hand(pos);
            let name = card.name.clone();
            self.deck.return_to_bottom([card]);
            self.record(Some(current), GameEvent::Discarded { card: name });
        }
        self.record(Some(current), GameEvent::TurnEnded);

        let next = current.other();
        self.current = next;
        self.plays_left = self.config.plays_per_turn;
        self.phase = Phase::TurnStart;
        if next == PlayerId::new(0) {
            self.round += 1;
        }

        check_win(self);
        self.seal()
    }

    /// Dispatch an [`Action`] to its operation.
    pub fn apply(&mut self, action: &Action) -> Result<()> {
        match *action {
            Action::Bank { index } => self.bank_card(index),
            Action::PlayProperty { index, color } => self.play_property(index, color),
            Action::PlayRent { index, color } => self.play_rent(index, color).map(|_| ()),
            Action::PlayAction { index } => self.play_action(index),
            Action::Build { index } => self.build(index),
            Action::EndTurn => self.end_turn(),
        }
    }

    /// Every action [`Game::apply`] would accept right now.
    ///
    /// Empty outside the play phase and once the game is decided; the turn
    /// draw is not an [`Action`].
    #[must_use]
    pub fn legal_actions(&self) -> Vec<Action> {
        if self.check_open().is_err() || self.phase != Phase::Play {
            return Vec::new();
        }

        let mut actions = Vec::new();
        if self.plays_left > 0 {
            let player = &self.players[self.current];
            for (index, card) in player.hand.iter().enumerate() {
                actions.push(Action::Bank { index });

                match &card.kind {
                    CardKind::Money => {}
                    CardKind::Property(property) => {
                        if property.is_wild() {
                            actions.extend(property.eligible().iter().map(|&c| Action::PlayProperty {
                                index,
                                color: Some(c),
                            }));
                        } else {
                            actions.push(Action::PlayProperty { index, color: None });
                        }
                    }
                    CardKind::Rent(colors) => {
                        actions.extend(
                            self.config
                                .colors
                                .iter()
                                .filter(|&&c| colors.covers(c) && player.prop_count(c) > 0)
                                .map(|&color| Action::PlayRent { index, color }),
                        );
                    }
                    CardKind::Action(ActionKind::JustSayNo) => {}
                    CardKind::Action(_) => actions.push(Action::PlayAction { index }),
                    CardKind::Building(kind) => {
                        if self.build_target(*kind).is_some() {
                            actions.push(Action::Build { index });
                        }
                    }
                }
            }
        }
        actions.push(Action::EndTurn);
        actions
    }
}
