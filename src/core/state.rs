//! Game state.
//!
//! ## Game
//!
//! One match: rules config, deck, both players, whose turn it is, the
//! remaining play budget, the phase, the round counter, the winner, and the
//! log. A `Game` is a plain value owned by the caller. It changes only
//! through the transition operations in [`crate::rules`]; the engine never
//! keeps a copy.
//!
//! ## GameBuilder
//!
//! Creates a game: builds and shuffles a deck (or takes a stacked one for
//! tests), seats the players, and deals opening hands.

use im::Vector;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::action::{GameEvent, LogEntry};
use super::config::{GameMode, RulesConfig};
use super::player::{Player, PlayerId, PlayerMap};
use super::rng::GameRng;
use crate::error::{DealError, Result};
use crate::zones::Deck;

/// Turn phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for the active player's turn draw.
    TurnStart,
    /// The active player may make plays until the budget runs out.
    Play,
}

/// A match in progress.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Game {
    pub(crate) config: RulesConfig,
    pub(crate) mode: GameMode,
    pub(crate) deck: Deck,
    pub(crate) players: PlayerMap<Player>,
    pub(crate) current: PlayerId,
    pub(crate) plays_left: u32,
    pub(crate) phase: Phase,
    pub(crate) round: u32,
    pub(crate) winner: Option<PlayerId>,
    pub(crate) log: Vector<LogEntry>,
    /// Cards in play when the game was created; every audit must find
    /// exactly this many.
    card_count: usize,
    poisoned: bool,
}

impl Game {
    /// Start a standard game with a random shuffle.
    ///
    /// `names` overrides the default seat names for the mode.
    pub fn new_game(mode: GameMode, names: Option<[&str; 2]>) -> Result<Self> {
        let mut builder = GameBuilder::new().mode(mode);
        if let Some([first, second]) = names {
            builder = builder.player_names(first, second);
        }
        builder.build_with_rng(&mut GameRng::from_entropy())
    }

    // === Read access ===

    #[must_use]
    pub fn config(&self) -> &RulesConfig {
        &self.config
    }

    #[must_use]
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id]
    }

    /// Both players in seat order.
    pub fn players(&self) -> impl Iterator<Item = (PlayerId, &Player)> {
        self.players.iter()
    }

    /// Whose turn it is.
    #[must_use]
    pub fn current_id(&self) -> PlayerId {
        self.current
    }

    #[must_use]
    pub fn current_player(&self) -> &Player {
        &self.players[self.current]
    }

    #[must_use]
    pub fn opponent(&self) -> &Player {
        &self.players[self.current.other()]
    }

    #[must_use]
    pub fn plays_left(&self) -> u32 {
        self.plays_left
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Round number, starting at 1; advances when play returns to the
    /// first seat.
    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    /// The append-only log, oldest first.
    #[must_use]
    pub fn log(&self) -> &Vector<LogEntry> {
        &self.log
    }

    /// An invariant audit failed; the game can no longer be played.
    #[must_use]
    pub fn is_poisoned(&self) -> bool {
        self.poisoned
    }

    // === Log ===

    pub(crate) fn record(&mut self, player: Option<PlayerId>, event: GameEvent) {
        self.log.push_back(LogEntry {
            round: self.round,
            player,
            event,
        });
    }

    // === Invariants ===

    /// Check that every card is in exactly one zone and none went missing.
    pub fn audit(&self) -> Result<()> {
        let mut seen = FxHashSet::default();
        let ids = self
            .deck
            .iter()
            .map(|c| c.id)
            .chain(self.players.iter().flat_map(|(_, p)| p.card_ids()));

        for id in ids {
            if !seen.insert(id) {
                return Err(DealError::InvariantViolation(format!(
                    "card {} found in two zones",
                    id
                )));
            }
        }

        if seen.len() != self.card_count {
            return Err(DealError::InvariantViolation(format!(
                "expected {} cards across zones, found {}",
                self.card_count,
                seen.len()
            )));
        }
        Ok(())
    }

    /// Fail if the game was poisoned by an earlier audit.
    pub(crate) fn ensure_sound(&self) -> Result<()> {
        if self.poisoned {
            return Err(DealError::InvariantViolation(
                "game was abandoned after an earlier invariant failure".into(),
            ));
        }
        Ok(())
    }

    /// Audit after a transition; a failure poisons the game.
    pub(crate) fn seal(&mut self) -> Result<()> {
        if let Err(e) = self.audit() {
            self.poisoned = true;
            return Err(e);
        }
        Ok(())
    }

    /// Mark the game unplayable and build the error to return.
    pub(crate) fn poison(&mut self, reason: impl Into<String>) -> DealError {
        self.poisoned = true;
        DealError::InvariantViolation(reason.into())
    }

    // === Persistence ===

    /// Encode the whole game.
    pub fn snapshot(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode a game produced by [`Game::snapshot`].
    ///
    /// The decoded config, seats, and play budget are checked before the
    /// zone audit, so a restored game can always be played.
    pub fn restore(bytes: &[u8]) -> Result<Self> {
        let game: Game = bincode::deserialize(bytes)?;
        game.config.validate()?;
        game.check_seats()?;
        game.audit()?;
        Ok(game)
    }

    fn check_seats(&self) -> Result<()> {
        let seats = self.players.iter().count();
        if seats != 2 {
            return Err(DealError::InvariantViolation(format!("expected 2 seats, found {}", seats)));
        }
        if self.current.index() >= seats {
            return Err(DealError::InvariantViolation(format!("active seat {} does not exist", self.current)));
        }
        if let Some(winner) = self.winner.filter(|w| w.index() >= seats) {
            return Err(DealError::InvariantViolation(format!("winner {} does not exist", winner)));
        }
        if self.plays_left > self.config.plays_per_turn {
            return Err(DealError::InvariantViolation(format!(
                "{} plays left exceeds the budget of {}",
                self.plays_left, self.config.plays_per_turn
            )));
        }
        Ok(())
    }
}

/// Builder for creating a [`Game`].
pub struct GameBuilder {
    mode: GameMode,
    names: Option<(String, String)>,
    config: RulesConfig,
    stacked: Option<Deck>,
}

impl Default for GameBuilder {
    fn default() -> Self {
        Self {
            mode: GameMode::VsCpu,
            names: None,
            config: RulesConfig::default(),
            stacked: None,
        }
    }
}

impl GameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(mut self, mode: GameMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn player_names(mut self, first: impl Into<String>, second: impl Into<String>) -> Self {
        self.names = Some((first.into(), second.into()));
        self
    }

    pub fn config(mut self, config: RulesConfig) -> Self {
        self.config = config;
        self
    }

    /// Use this deck as-is instead of building and shuffling the catalog.
    /// The top of the deck is dealt first.
    pub fn stacked_deck(mut self, deck: Deck) -> Self {
        self.stacked = Some(deck);
        self
    }

    /// Build the game, shuffling with a seeded RNG.
    pub fn build(self, seed: u64) -> Result<Game> {
        self.build_with_rng(&mut GameRng::new(seed))
    }

    /// Build the game, shuffling with the given RNG.
    pub fn build_with_rng(self, rng: &mut GameRng) -> Result<Game> {
        self.config.validate()?;

        let deck = match self.stacked {
            Some(deck) => deck,
            None => {
                let mut deck = Deck::build();
                deck.shuffle(rng);
                deck
            }
        };

        let (first, second) = self.names.unwrap_or_else(|| match self.mode {
            GameMode::VsCpu => ("You".to_string(), "CPU".to_string()),
            GameMode::LocalTwoPlayer => ("Player 1".to_string(), "Player 2".to_string()),
        });
        let mut second = Player::new(second);
        if self.mode == GameMode::VsCpu {
            second = second.cpu();
        }

        let mut game = Game {
            card_count: deck.len(),
            config: self.config,
            mode: self.mode,
            deck,
            players: PlayerMap::from_vec(vec![Player::new(first), second]),
            current: PlayerId::new(0),
            plays_left: 0,
            phase: Phase::TurnStart,
            round: 1,
            winner: None,
            log: Vector::new(),
            poisoned: false,
        };
        game.plays_left = game.config.plays_per_turn;

        for (_, player) in game.players.iter_mut() {
            let hand = game.deck.draw(game.config.opening_hand);
            player.hand.extend(hand);
        }
        game.record(None, GameEvent::GameStarted);

        game.seal()?;
        Ok(game)
    }
}
