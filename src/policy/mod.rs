//! Automated players.
//!
//! A [`TurnPolicy`] picks the next play for whoever is active; [`play_turn`]
//! drives one whole turn with it: the turn draw, plays until the policy is
//! done or the budget runs out, then the end of turn.

mod greedy;
mod random;

pub use greedy::GreedyPolicy;
pub use random::RandomPolicy;

use crate::core::{Action, Game, GameEvent, Phase};
use crate::error::{DealError, Result, ValidationError};

/// Chooses plays for the active player.
pub trait TurnPolicy {
    /// The next play, or `None` to end the turn.
    ///
    /// Returning [`Action::EndTurn`] also ends the turn.
    fn next_action(&mut self, game: &Game) -> Option<Action>;
}

/// Play the active player's whole turn with `policy`.
///
/// Returns the number of plays made. A play the engine rejects stops the
/// turn early and is logged; the turn still ends normally. A decided game
/// and invariant failures are returned as errors.
pub fn play_turn<P: TurnPolicy + ?Sized>(game: &mut Game, policy: &mut P) -> Result<usize> {
    if game.is_over() {
        return Err(ValidationError::GameOver.into());
    }
    if game.phase() == Phase::TurnStart {
        game.draw_for_turn()?;
    }

    let mut plays = 0;
    let limit = game.config().plays_per_turn as usize + game.current_player().hand.len();
    for _ in 0..limit {
        if game.is_over() {
            return Ok(plays);
        }
        let Some(action) = policy.next_action(game) else {
            break;
        };
        if action == Action::EndTurn {
            break;
        }

        match game.apply(&action) {
            Ok(()) => plays += 1,
            Err(DealError::Validation(e)) => {
                let current = game.current_id();
                game.record(Some(current), GameEvent::PolicyStopped { reason: e.to_string() });
                break;
            }
            Err(e) => return Err(e),
        }
    }

    if !game.is_over() {
        game.end_turn()?;
    }
    Ok(plays)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, CardId, CardKind};
    use crate::core::{GameBuilder, RulesConfig};
    use crate::zones::Deck;

    /// Always asks for the same action.
    struct Stubborn(Action);

    impl TurnPolicy for Stubborn {
        fn next_action(&mut self, _game: &Game) -> Option<Action> {
            Some(self.0.clone())
        }
    }

    fn money_game(cards: u32) -> Game {
        let deck = Deck::from_cards((0..cards).map(|i| Card::new(CardId::new(i), "$1M", 1, CardKind::Money)));
        GameBuilder::new()
            .config(RulesConfig {
                opening_hand: 2,
                ..RulesConfig::default()
            })
            .stacked_deck(deck)
            .build(0)
            .unwrap()
    }

    #[test]
    fn test_budget_stops_the_turn() {
        let mut game = money_game(20);
        let plays = play_turn(&mut game, &mut Stubborn(Action::Bank { index: 0 })).unwrap();

        assert_eq!(plays, 3);
        assert_eq!(game.current_id().index(), 1);
        let stopped = game
            .log()
            .iter()
            .any(|e| matches!(e.event, GameEvent::PolicyStopped { .. }));
        assert!(stopped);
    }

    #[test]
    fn test_rejected_play_ends_turn() {
        let mut game = money_game(20);
        let plays = play_turn(&mut game, &mut Stubborn(Action::PlayAction { index: 0 })).unwrap();

        assert_eq!(plays, 0);
        assert_eq!(game.phase(), Phase::TurnStart);
        assert_eq!(game.player(crate::core::PlayerId::new(0)).hand.len(), 4);
    }

    #[test]
    fn test_end_turn_action() {
        let mut game = money_game(20);
        let plays = play_turn(&mut game, &mut Stubborn(Action::EndTurn)).unwrap();
        assert_eq!(plays, 0);
        assert_eq!(game.round(), 1);
        assert_eq!(game.current_id().index(), 1);
    }
}
