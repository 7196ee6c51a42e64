//! Action card effects.
//!
//! `ActionResolver` applies one action card's effect for the acting player
//! against the opponent. The turn engine has already validated the play,
//! removed the card from hand, and sent it to the deck bottom.
//!
//! Wherever an effect picks "the first" property or set, it walks colors in
//! the config's canonical order and, within a color, play order.

use crate::cards::{ActionKind, CardId, CardKind, Color};
use crate::core::{Game, GameEvent, Player, PlayerId, RulesConfig};

/// Applies action card effects.
pub struct ActionResolver;

impl ActionResolver {
    /// Apply `kind` for `actor` against the other seat.
    pub fn resolve(game: &mut Game, actor: PlayerId, kind: ActionKind) {
        let opponent = actor.other();

        match kind {
            ActionKind::PassGo => {
                let drawn = game.deck.draw(game.config.pass_go_draw);
                let count = drawn.len();
                game.players[actor].hand.extend(drawn);
                game.record(Some(actor), GameEvent::Drew { count });
            }

            ActionKind::DoubleRent => {
                game.players[actor].double_rent_pending = true;
                game.record(Some(actor), GameEvent::DoubleRentArmed);
            }

            ActionKind::Birthday => {
                let amount = game.config.birthday_amount;
                game.collect(opponent, actor, amount);
            }

            ActionKind::DebtCollector => {
                let amount = game.config.debt_collector_amount;
                game.collect(opponent, actor, amount);
            }

            ActionKind::SlyDeal => Self::sly_deal(game, actor, opponent),

            ActionKind::DealBreaker => Self::deal_breaker(game, actor, opponent),

            ActionKind::ForcedDeal => Self::forced_deal(game, actor, opponent),

            // Rejected by the turn engine before dispatch; a Just Say No
            // has no effect of its own.
            ActionKind::JustSayNo => {}
        }
    }

    /// Take the first property not in one of the opponent's full sets.
    fn sly_deal(game: &mut Game, actor: PlayerId, opponent: PlayerId) {
        let Some((color, id)) = first_loose_property(&game.players[opponent], &game.config) else {
            game.record(Some(actor), GameEvent::NothingToSteal);
            return;
        };

        let (thief, victim) = game.players.pair_mut(actor, opponent);
        let Some(card) = victim.holdings.remove_property(color, id) else {
            return;
        };
        let name = card.name.clone();
        if let Err(card) = thief.holdings.add_property(card) {
            thief.bank.push(card);
        }
        game.record(Some(actor), GameEvent::Stole { card: name });
    }

    /// Take the opponent's first full set, improvements included.
    fn deal_breaker(game: &mut Game, actor: PlayerId, opponent: PlayerId) {
        let Some(&color) = game.players[opponent].full_sets(&game.config).first() else {
            game.record(Some(actor), GameEvent::NoSetToSteal);
            return;
        };

        let (thief, victim) = game.players.pair_mut(actor, opponent);
        let (properties, buildings) = victim.holdings.take_group(color).into_parts();
        for card in properties {
            if let Err(card) = thief.holdings.add_property(card) {
                thief.bank.push(card);
            }
        }

        let mut banked = Vec::new();
        for card in buildings {
            if let Err(card) = thief.holdings.group_mut(color).attach(card) {
                if let CardKind::Building(kind) = card.kind {
                    banked.push(kind);
                }
                thief.bank.push(card);
            }
        }

        game.record(Some(actor), GameEvent::StoleSet { color });
        for building in banked {
            game.record(Some(actor), GameEvent::BuildingBanked { building });
        }
    }

    /// Swap the actor's first loose property for the opponent's.
    fn forced_deal(game: &mut Game, actor: PlayerId, opponent: PlayerId) {
        let given = first_loose_property(&game.players[actor], &game.config);
        let taken = first_loose_property(&game.players[opponent], &game.config);
        let (Some((give_color, give_id)), Some((take_color, take_id))) = (given, taken) else {
            game.record(Some(actor), GameEvent::NothingToSwap);
            return;
        };

        let (me, them) = game.players.pair_mut(actor, opponent);
        let Some(mine) = me.holdings.remove_property(give_color, give_id) else {
            return;
        };
        let Some(theirs) = them.holdings.remove_property(take_color, take_id) else {
            if let Err(card) = me.holdings.add_property(mine) {
                me.bank.push(card);
            }
            return;
        };

        let event = GameEvent::Swapped {
            given: mine.name.clone(),
            taken: theirs.name.clone(),
        };
        if let Err(card) = them.holdings.add_property(mine) {
            them.bank.push(card);
        }
        if let Err(card) = me.holdings.add_property(theirs) {
            me.bank.push(card);
        }
        game.record(Some(actor), event);
    }
}

/// First property, in canonical order, that is not part of a full set.
#[must_use]
pub fn first_loose_property(player: &Player, config: &RulesConfig) -> Option<(Color, CardId)> {
    config
        .colors
        .iter()
        .filter(|&&color| !player.has_full_set(color, config))
        .find_map(|&color| {
            player
                .holdings
                .group(color)
                .properties
                .first()
                .map(|card| (color, card.id))
        })
}
