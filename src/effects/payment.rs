//! Debt settlement.
//!
//! A debt is paid in whole cards, never split and never with change:
//!
//! 1. A payer with an empty bank and no properties pays nothing; the debt is
//!    forgiven.
//! 2. Bank cards go first, highest value first, into the payee's bank.
//! 3. If still short, properties go next, highest value first, into the
//!    payee's group for the card's chosen color. Ties keep canonical color
//!    order, then play order within the group.
//!
//! The last card moved may overshoot the amount owed.

use serde::{Deserialize, Serialize};

use crate::cards::{CardId, Color};
use crate::core::{Game, GameEvent, Player, PlayerId, RulesConfig};

/// What a settlement moved.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settlement {
    pub owed: u32,
    /// Realized amount, possibly more or less than `owed`.
    pub paid: u32,
    /// Bank cards moved to the payee's bank.
    pub bank_cards: Vec<CardId>,
    /// Property cards moved to the payee's holdings, with their names.
    pub properties: Vec<(CardId, String)>,
}

impl Settlement {
    /// The payer paid at least what was owed.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.paid >= self.owed
    }
}

/// Move value from `payer` to `payee` until `amount` is covered or the
/// payer runs out.
pub fn settle(payer: &mut Player, payee: &mut Player, amount: u32, config: &RulesConfig) -> Settlement {
    let mut settlement = Settlement {
        owed: amount,
        ..Settlement::default()
    };
    if !payer.has_assets() {
        return settlement;
    }

    payer.bank.sort_by(|a, b| b.value.cmp(&a.value));
    while settlement.paid < amount && !payer.bank.is_empty() {
        let card = payer.bank.remove(0);
        settlement.paid += card.value;
        settlement.bank_cards.push(card.id);
        payee.bank.push(card);
    }

    if settlement.paid < amount {
        let mut candidates: Vec<(Color, CardId, u32)> = config
            .colors
            .iter()
            .flat_map(|&color| {
                payer
                    .holdings
                    .group(color)
                    .properties
                    .iter()
                    .map(move |c| (color, c.id, c.value))
            })
            .collect();
        candidates.sort_by(|a, b| b.2.cmp(&a.2));

        for (color, id, _) in candidates {
            if settlement.paid >= amount {
                break;
            }
            let Some(card) = payer.holdings.remove_property(color, id) else {
                continue;
            };
            settlement.paid += card.value;
            settlement.properties.push((card.id, card.name.clone()));
            if let Err(card) = payee.holdings.add_property(card) {
                payee.bank.push(card);
            }
        }
    }

    settlement
}

impl Game {
    /// Settle a debt between two seats and log it.
    pub(crate) fn collect(&mut self, payer: PlayerId, payee: PlayerId, amount: u32) -> Settlement {
        let (from, to) = self.players.pair_mut(payer, payee);
        let payer_name = from.name.clone();
        let had_assets = from.has_assets();
        let settlement = settle(from, to, amount, &self.config);

        if !had_assets {
            self.record(Some(payer), GameEvent::NothingToPay { payer: payer_name });
            return settlement;
        }

        for (_, name) in &settlement.properties {
            self.record(Some(payer), GameEvent::PaidProperty { card: name.clone() });
        }
        self.record(
            Some(payer),
            GameEvent::Paid {
                payer: payer_name,
                paid: settlement.paid,
                owed: amount,
            },
        );
        settlement
    }
}
