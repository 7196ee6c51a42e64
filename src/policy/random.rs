use crate::core::{Action, Game, GameRng};

use super::TurnPolicy;

/// Picks uniformly among [`Game::legal_actions`], ending the turn included.
#[derive(Clone, Debug)]
pub struct RandomPolicy {
    rng: GameRng,
}

impl RandomPolicy {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self { rng: GameRng::new(seed) }
    }
}

impl TurnPolicy for RandomPolicy {
    fn next_action(&mut self, game: &Game) -> Option<Action> {
        let actions = game.legal_actions();
        self.rng.choose(&actions).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameBuilder;

    #[test]
    fn test_only_legal_actions() {
        let mut game = GameBuilder::new().build(11).unwrap();
        let mut policy = RandomPolicy::new(4);
        assert_eq!(policy.next_action(&game), None);

        game.draw_for_turn().unwrap();
        for _ in 0..20 {
            let action = policy.next_action(&game).unwrap();
            assert!(game.legal_actions().contains(&action));
        }
    }
}
