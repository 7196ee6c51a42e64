use crate::cards::{ActionKind, CardKind};
use crate::core::{Action, Game, Phase};

use super::TurnPolicy;

/// The built-in computer opponent.
///
/// Each play takes the first match of: a property (its current color), a
/// money card to the bank, a Pass Go / Birthday / Debt Collector, and
/// finally the first hand card to the bank. Stops when the budget is spent
/// or the hand is empty.
#[derive(Clone, Copy, Debug, Default)]
pub struct GreedyPolicy;

impl GreedyPolicy {
    const GOOD_ACTIONS: [ActionKind; 3] = [ActionKind::PassGo, ActionKind::Birthday, ActionKind::DebtCollector];
}

impl TurnPolicy for GreedyPolicy {
    fn next_action(&mut self, game: &Game) -> Option<Action> {
        if game.is_over() || game.phase() != Phase::Play || game.plays_left() == 0 {
            return None;
        }
        let hand = &game.current_player().hand;
        if hand.is_empty() {
            return None;
        }

        if let Some(index) = hand.iter().position(|c| c.is_property()) {
            return Some(Action::PlayProperty { index, color: None });
        }
        if let Some(index) = hand.iter().position(|c| c.is_money()) {
            return Some(Action::Bank { index });
        }
        let good_action = hand
            .iter()
            .position(|c| matches!(c.kind, CardKind::Action(kind) if Self::GOOD_ACTIONS.contains(&kind)));
        if let Some(index) = good_action {
            return Some(Action::PlayAction { index });
        }
        Some(Action::Bank { index: 0 })
    }
}
