//! Win detection.
//!
//! A player wins the moment they hold full sets in `sets_to_win` distinct
//! colors. The first detection is recorded on the game and freezes it.

use serde::{Deserialize, Serialize};

use crate::cards::Color;
use crate::core::{Game, GameEvent, Player, PlayerId, RulesConfig};

/// How a finished game ended.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    pub winner: PlayerId,
    pub name: String,
    /// Round the game was decided in.
    pub round: u32,
    /// The winner's full sets, canonical order.
    pub sets: Vec<Color>,
}

/// Whether `player` has enough full sets to win.
#[must_use]
pub fn has_won(player: &Player, config: &RulesConfig) -> bool {
    player.full_sets(config).len() >= config.sets_to_win
}

/// Record a winner if there is one. Seats are checked in order; an
/// already recorded winner is returned unchanged.
pub fn check_win(game: &mut Game) -> Option<PlayerId> {
    if game.winner.is_some() {
        return game.winner;
    }

    let winner = game
        .players
        .iter()
        .find(|(_, p)| has_won(p, &game.config))
        .map(|(id, p)| (id, p.name.clone()));

    if let Some((id, name)) = winner {
        game.winner = Some(id);
        game.record(Some(id), GameEvent::Won { name });
    }
    game.winner
}

impl Game {
    /// The outcome, once a winner is recorded.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        let winner = self.winner?;
        let player = &self.players[winner];
        let round = self
            .log
            .iter()
            .rev()
            .find(|entry| matches!(entry.event, GameEvent::Won { .. }))
            .map_or(self.round, |entry| entry.round);
        Some(GameResult {
            winner,
            name: player.name.clone(),
            round,
            sets: player.full_sets(&self.config),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, CardId, CardKind, PropertyCard};

    fn fill(player: &mut Player, color: Color, count: usize, next_id: &mut u32) {
        for _ in 0..count {
            let card = Card::new(CardId::new(*next_id), color.name(), 1, CardKind::Property(PropertyCard::new([color])));
            *next_id += 1;
            player.holdings.add_property(card).unwrap();
        }
    }

    #[test]
    fn test_three_sets_win() {
        let config = RulesConfig::default();
        let mut player = Player::new("A");
        let mut id = 0;
        fill(&mut player, Color::Brown, 2, &mut id);
        fill(&mut player, Color::DarkBlue, 2, &mut id);
        assert!(!has_won(&player, &config));

        fill(&mut player, Color::Utility, 2, &mut id);
        assert!(has_won(&player, &config));
    }

    #[test]
    fn test_two_sets_never_win() {
        let config = RulesConfig::default();
        let mut player = Player::new("A");
        let mut id = 0;
        fill(&mut player, Color::Brown, 5, &mut id);
        fill(&mut player, Color::Railroad, 4, &mut id);
        fill(&mut player, Color::Green, 2, &mut id);
        fill(&mut player, Color::Red, 2, &mut id);
        assert!(!has_won(&player, &config));
    }

    #[test]
    fn test_sets_to_win_configurable() {
        let config = RulesConfig {
            sets_to_win: 1,
            ..RulesConfig::default()
        };
        let mut player = Player::new("A");
        let mut id = 0;
        fill(&mut player, Color::Brown, 2, &mut id);
        assert!(has_won(&player, &config));
    }
}
