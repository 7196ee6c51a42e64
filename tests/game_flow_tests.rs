//! Whole-turn scenarios driven through the public engine API.
//!
//! Each test stacks the deck so both opening hands are known, then plays
//! turns the way a presentation layer would.

use deal_engine::cards::{ActionKind, BuildingKind, Card, CardId, CardKind, Color, PropertyCard, RentColors};
use deal_engine::core::{Game, GameBuilder, GameEvent, Phase, PlayerId, RulesConfig};
use deal_engine::error::{DealError, ValidationError};
use deal_engine::zones::Deck;

const P0: PlayerId = PlayerId::new(0);
const P1: PlayerId = PlayerId::new(1);

// =============================================================================
// Helpers
// =============================================================================

fn money(id: u32, value: u32) -> Card {
    Card::new(CardId::new(id), format!("${}M", value), value, CardKind::Money)
}

fn prop(id: u32, color: Color, value: u32) -> Card {
    Card::new(CardId::new(id), color.name(), value, CardKind::Property(PropertyCard::new([color])))
}

fn action(id: u32, kind: ActionKind) -> Card {
    Card::new(CardId::new(id), kind.name(), 1, CardKind::Action(kind))
}

fn rent(id: u32, a: Color, b: Color) -> Card {
    Card::new(
        CardId::new(id),
        "Rent",
        1,
        CardKind::Rent(RentColors::Colors([a, b].into_iter().collect())),
    )
}

fn building(id: u32, kind: BuildingKind) -> Card {
    let value = match kind {
        BuildingKind::House => 3,
        BuildingKind::Hotel => 4,
    };
    Card::new(CardId::new(id), kind.to_string(), value, CardKind::Building(kind))
}

/// Deal `first` and `second` as opening hands (same size), with `filler`
/// $1M cards left in the deck for turn draws.
fn stacked_game(first: Vec<Card>, second: Vec<Card>, filler: u32, config: RulesConfig) -> Game {
    assert_eq!(first.len(), second.len());
    let config = RulesConfig {
        opening_hand: first.len(),
        ..config
    };
    let mut cards: Vec<Card> = (0..filler).map(|i| money(1000 + i, 1)).collect();
    cards.extend(second.into_iter().rev());
    cards.extend(first.into_iter().rev());
    GameBuilder::new()
        .config(config)
        .stacked_deck(Deck::from_cards(cards))
        .build(0)
        .unwrap()
}

/// Position of card `id` in the active player's hand.
fn idx(game: &Game, id: u32) -> usize {
    game.current_player()
        .hand
        .iter()
        .position(|c| c.id == CardId::new(id))
        .unwrap_or_else(|| panic!("card #{} not in hand", id))
}

fn skip_turn(game: &mut Game) {
    game.draw_for_turn().unwrap();
    game.end_turn().unwrap();
}

// =============================================================================
// Scenarios
// =============================================================================

/// Bank, complete Brown over two turns, then lose $2M to a Birthday.
#[test]
fn test_bank_build_set_then_birthday() {
    let mut game = stacked_game(
        vec![money(1, 2), prop(2, Color::Brown, 1), prop(3, Color::Brown, 1)],
        vec![action(10, ActionKind::Birthday), money(11, 1), money(12, 1)],
        20,
        RulesConfig::default(),
    );

    game.draw_for_turn().unwrap();
    game.bank_card(idx(&game, 1)).unwrap();
    assert_eq!(game.current_player().bank_total(), 2);
    assert_eq!(game.plays_left(), 2);

    game.play_property(idx(&game, 2), None).unwrap();
    assert!(!game.current_player().has_full_set(Color::Brown, game.config()));
    game.end_turn().unwrap();

    skip_turn(&mut game);

    game.draw_for_turn().unwrap();
    game.play_property(idx(&game, 3), None).unwrap();
    assert!(game.player(P0).has_full_set(Color::Brown, game.config()));
    game.end_turn().unwrap();

    game.draw_for_turn().unwrap();
    game.play_action(idx(&game, 10)).unwrap();

    assert_eq!(game.player(P0).bank_total(), 0);
    assert_eq!(game.player(P1).bank_total(), 2);
    assert_eq!(game.player(P0).prop_count(Color::Brown), 2);
    assert!(game.log().iter().any(|e| e.event
        == GameEvent::Paid {
            payer: "You".into(),
            paid: 2,
            owed: 2
        }));
    assert!(game.audit().is_ok());
}

/// Double Rent survives the turn change and doubles the next rent.
#[test]
fn test_double_rent_carries_to_next_rent() {
    let mut game = stacked_game(
        vec![
            action(1, ActionKind::DoubleRent),
            rent(2, Color::LightBlue, Color::Brown),
            prop(3, Color::Brown, 1),
        ],
        vec![money(10, 5), money(11, 1), money(12, 1)],
        20,
        RulesConfig::default(),
    );

    game.draw_for_turn().unwrap();
    game.play_property(idx(&game, 3), None).unwrap();
    game.play_action(idx(&game, 1)).unwrap();
    assert!(game.current_player().double_rent_pending);
    game.end_turn().unwrap();

    game.draw_for_turn().unwrap();
    game.bank_card(idx(&game, 10)).unwrap();
    game.end_turn().unwrap();

    game.draw_for_turn().unwrap();
    assert!(game.current_player().double_rent_pending);
    let settlement = game.play_rent(idx(&game, 2), Color::Brown).unwrap();

    assert_eq!(settlement.owed, 2);
    assert_eq!(settlement.paid, 5);
    assert!(!game.current_player().double_rent_pending);
    assert!(game.log().iter().any(|e| e.event == GameEvent::DoubleRentApplied));
    assert!(game.log().iter().any(|e| e.event
        == GameEvent::ChargedRent {
            color: Color::Brown,
            amount: 2
        }));
}

/// House and hotel add to rent on a full set; a short payer pays what
/// they have.
#[test]
fn test_improved_rent_and_short_payment() {
    let mut game = stacked_game(
        vec![
            prop(1, Color::Brown, 1),
            prop(2, Color::Brown, 1),
            building(3, BuildingKind::House),
            building(4, BuildingKind::Hotel),
            rent(5, Color::LightBlue, Color::Brown),
        ],
        vec![money(10, 1), money(11, 1), money(12, 1), money(13, 1), money(14, 1)],
        20,
        RulesConfig::default(),
    );

    game.draw_for_turn().unwrap();
    game.play_property(idx(&game, 1), None).unwrap();
    game.play_property(idx(&game, 2), None).unwrap();
    game.build(idx(&game, 3)).unwrap();
    assert!(game.current_player().holdings.group(Color::Brown).has_house());
    game.end_turn().unwrap();

    game.draw_for_turn().unwrap();
    for id in [10, 11, 12] {
        game.bank_card(idx(&game, id)).unwrap();
    }
    game.end_turn().unwrap();

    game.draw_for_turn().unwrap();
    game.build(idx(&game, 4)).unwrap();
    let settlement = game.play_rent(idx(&game, 5), Color::Brown).unwrap();

    assert_eq!(settlement.owed, 2 + 3 + 4);
    assert_eq!(settlement.paid, 3);
    assert!(!settlement.is_complete());
    assert_eq!(game.player(P1).bank_total(), 0);
    assert_eq!(game.player(P0).bank_total(), 3);
}

/// A second house has nowhere to go once the only full set has one.
#[test]
fn test_second_house_rejected() {
    let mut game = stacked_game(
        vec![
            prop(1, Color::Brown, 1),
            prop(2, Color::Brown, 1),
            building(3, BuildingKind::House),
            building(4, BuildingKind::House),
        ],
        vec![money(10, 1), money(11, 1), money(12, 1), money(13, 1)],
        20,
        RulesConfig::default(),
    );

    game.draw_for_turn().unwrap();
    game.play_property(idx(&game, 1), None).unwrap();
    game.play_property(idx(&game, 2), None).unwrap();
    game.build(idx(&game, 3)).unwrap();
    game.end_turn().unwrap();
    skip_turn(&mut game);

    game.draw_for_turn().unwrap();
    let err = game.build(idx(&game, 4)).unwrap_err();
    assert_eq!(err.validation(), Some(&ValidationError::NoImprovableSet));
    assert_eq!(game.plays_left(), 3);
}

/// A Sly Deal through the engine moves the card and uses one play.
#[test]
fn test_sly_deal_through_engine() {
    let mut game = stacked_game(
        vec![action(1, ActionKind::SlyDeal), money(2, 1)],
        vec![prop(10, Color::Green, 4), money(11, 1)],
        20,
        RulesConfig::default(),
    );

    skip_turn(&mut game);
    game.draw_for_turn().unwrap();
    game.play_property(idx(&game, 10), None).unwrap();
    game.end_turn().unwrap();

    game.draw_for_turn().unwrap();
    game.play_action(idx(&game, 1)).unwrap();
    assert_eq!(game.player(P0).prop_count(Color::Green), 1);
    assert_eq!(game.player(P1).prop_count(Color::Green), 0);
    assert_eq!(game.plays_left(), 2);
    assert_eq!(game.deck().iter().next().map(|c| c.id), Some(CardId::new(1)));
}

// =============================================================================
// Rejections
// =============================================================================

/// A rejected play changes nothing, including the log.
#[test]
fn test_rejection_leaves_game_untouched() {
    let mut game = stacked_game(
        vec![money(1, 1), action(2, ActionKind::JustSayNo)],
        vec![money(10, 1), money(11, 1)],
        20,
        RulesConfig::default(),
    );
    game.draw_for_turn().unwrap();
    let before = game.snapshot().unwrap();

    let attempts: Vec<DealError> = vec![
        game.play_property(idx(&game, 1), None).unwrap_err(),
        game.play_rent(idx(&game, 1), Color::Red).unwrap_err(),
        game.play_action(idx(&game, 2)).unwrap_err(),
        game.build(idx(&game, 1)).unwrap_err(),
        game.bank_card(99).unwrap_err(),
    ];
    for err in &attempts {
        assert!(err.validation().is_some(), "{}", err);
    }
    assert_eq!(game.snapshot().unwrap(), before);
}

/// Ending the turn is allowed with plays unused, and the hand is trimmed.
#[test]
fn test_end_turn_early_trims_hand() {
    let first: Vec<Card> = (0..8).map(|i| money(i, i + 1)).collect();
    let second: Vec<Card> = (0..8).map(|i| money(100 + i, 1)).collect();
    let mut game = stacked_game(first, second, 20, RulesConfig::default());

    game.draw_for_turn().unwrap();
    assert_eq!(game.current_player().hand.len(), 10);
    game.end_turn().unwrap();

    let hand = &game.player(P0).hand;
    assert_eq!(hand.len(), 7);
    let discards = game
        .log()
        .iter()
        .filter(|e| matches!(e.event, GameEvent::Discarded { .. }))
        .count();
    assert_eq!(discards, 3);
    assert_eq!(game.phase(), Phase::TurnStart);
    assert_eq!(game.current_id(), P1);
}

// =============================================================================
// Winning
// =============================================================================

/// Three full sets over two turns wins on the sixth play, not before.
#[test]
fn test_three_sets_win_and_freeze() {
    let mut game = stacked_game(
        vec![
            prop(1, Color::Brown, 1),
            prop(2, Color::Brown, 1),
            prop(3, Color::DarkBlue, 4),
            prop(4, Color::DarkBlue, 4),
            prop(5, Color::Utility, 2),
            prop(6, Color::Utility, 2),
        ],
        (10..16).map(|i| money(i, 1)).collect(),
        20,
        RulesConfig::default(),
    );

    game.draw_for_turn().unwrap();
    for id in [1, 2, 3] {
        game.play_property(idx(&game, id), None).unwrap();
    }
    game.end_turn().unwrap();
    skip_turn(&mut game);

    game.draw_for_turn().unwrap();
    game.play_property(idx(&game, 4), None).unwrap();
    game.play_property(idx(&game, 5), None).unwrap();
    assert_eq!(game.winner(), None);
    game.play_property(idx(&game, 6), None).unwrap();

    assert_eq!(game.winner(), Some(P0));
    let result = game.result().unwrap();
    assert_eq!(result.name, "You");
    assert_eq!(result.round, 2);
    assert_eq!(result.sets, vec![Color::Brown, Color::DarkBlue, Color::Utility]);

    let err = game.end_turn().unwrap_err();
    assert_eq!(err.validation(), Some(&ValidationError::GameOver));
    assert!(game.legal_actions().is_empty());
}

/// A lower win threshold ends the game sooner.
#[test]
fn test_configurable_sets_to_win() {
    let config = RulesConfig {
        sets_to_win: 1,
        ..RulesConfig::default()
    };
    let mut game = stacked_game(
        vec![prop(1, Color::Brown, 1), prop(2, Color::Brown, 1)],
        vec![money(10, 1), money(11, 1)],
        20,
        config,
    );

    game.draw_for_turn().unwrap();
    game.play_property(idx(&game, 1), None).unwrap();
    game.play_property(idx(&game, 2), None).unwrap();
    assert!(game.is_over());
    assert!(matches!(game.log().back().map(|e| &e.event), Some(GameEvent::Won { .. })));
}
