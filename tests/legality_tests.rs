//! Legality checks through the public rules API.

mod common;

use common::{card, table};
use mules_court::core::PlayerId;
use mules_court::rules::{forced_play, valid_plays, validate_card_play, validate_draw, validate_end_turn};
use mules_court::{Action, CardId, CardType, Choice, GameState, IllegalAction, Phase, RulesOracle, StandardRules};

fn p(i: u8) -> PlayerId {
    PlayerId::new(i)
}

/// Seat 0 in the play phase holding `first` and `second` (ids 100, 101).
fn holding(first: CardType, second: CardType, seats: usize) -> GameState {
    let mut hands = vec![CardType::Informant; seats];
    hands[0] = first;
    let mut state = table(&hands, &[second]);
    let drawn = state.deck.pop().unwrap();
    let seat = &mut state.players[0];
    seat.hand.push(drawn);
    seat.hand[0] = card(100, first);
    seat.hand[1] = card(101, second);
    state.phase = Phase::Play;
    assert_eq!(state.integrity_check(), Ok(()));
    state
}

/// Rejection reasons come in priority order.
#[test]
fn test_card_play_reason_priority() {
    let mut state = holding(CardType::Informant, CardType::Mule, 2);

    state.phase = Phase::Draw;
    assert!(matches!(
        validate_card_play(&state, p(0), CardId::new(100)),
        Err(IllegalAction::WrongPhase { expected: Phase::Play, actual: Phase::Draw })
    ));

    state.phase = Phase::Play;
    assert_eq!(
        validate_card_play(&state, p(1), CardId::new(100)),
        Err(IllegalAction::NotYourTurn(p(1)))
    );

    state.players[0].is_eliminated = true;
    assert_eq!(
        validate_card_play(&state, p(0), CardId::new(100)),
        Err(IllegalAction::Eliminated(p(0)))
    );

    state.players[0].is_eliminated = false;
    assert_eq!(
        validate_card_play(&state, p(0), CardId::new(7)),
        Err(IllegalAction::CardNotInHand { player: p(0), card: CardId::new(7) })
    );

    let hand = std::mem::take(&mut state.players[0].hand);
    assert_eq!(
        validate_card_play(&state, p(0), CardId::new(100)),
        Err(IllegalAction::EmptyHand(p(0)))
    );
    state.players[0].hand = hand;

    assert_eq!(validate_card_play(&state, p(0), CardId::new(101)), Ok(()));
}

/// First Speaker with a dangerous card must go first.
#[test]
fn test_forced_discard_rule() {
    for dangerous in [CardType::MayorIndbur, CardType::BaytaDarell, CardType::ToranDarell] {
        let state = holding(CardType::FirstSpeaker, dangerous, 3);
        let seat = &state.players[0];

        assert_eq!(forced_play(seat).map(|c| c.id), Some(CardId::new(100)));
        assert_eq!(valid_plays(seat), vec![card(100, CardType::FirstSpeaker)]);
        assert_eq!(
            validate_card_play(&state, p(0), CardId::new(101)),
            Err(IllegalAction::ForcedDiscard { required: CardId::new(100) })
        );
        assert_eq!(validate_card_play(&state, p(0), CardId::new(100)), Ok(()));
    }
}

/// Harmless companions leave both cards playable.
#[test]
fn test_no_forced_discard_with_safe_card() {
    for other in [CardType::Mule, CardType::ShieldedMind, CardType::EblingMis] {
        let state = holding(CardType::FirstSpeaker, other, 2);
        let seat = &state.players[0];

        assert_eq!(forced_play(seat), None);
        assert_eq!(valid_plays(seat).len(), 2);
        assert_eq!(validate_card_play(&state, p(0), CardId::new(101)), Ok(()));
    }
}

/// A single card is always a valid play.
#[test]
fn test_single_card_always_valid() {
    let mut state = holding(CardType::FirstSpeaker, CardType::MayorIndbur, 2);
    state.players[0].hand.remove(0);
    assert_eq!(valid_plays(&state.players[0]), vec![card(101, CardType::MayorIndbur)]);
}

/// Draws need the draw phase, the right seat and a deck.
#[test]
fn test_draw_legality() {
    let mut state = table(&[CardType::Informant, CardType::Mule], &[CardType::Magnifico]);

    assert_eq!(validate_draw(&state, p(0)), Ok(()));
    assert_eq!(validate_draw(&state, p(1)), Err(IllegalAction::NotYourTurn(p(1))));

    state.deck.clear();
    assert_eq!(validate_draw(&state, p(0)), Err(IllegalAction::DeckEmpty));
}

/// Turns end only once the drawn card is gone.
#[test]
fn test_end_turn_legality() {
    let mut state = holding(CardType::Informant, CardType::Mule, 2);
    assert_eq!(validate_end_turn(&state, p(0)), Err(IllegalAction::TurnIncomplete(p(0))));

    state.players[0].is_eliminated = true;
    assert_eq!(validate_end_turn(&state, p(0)), Ok(()));

    state.players[0].is_eliminated = false;
    state.players[0].hand.pop();
    assert_eq!(validate_end_turn(&state, p(0)), Ok(()));

    state.phase = Phase::Draw;
    assert!(validate_end_turn(&state, p(0)).is_err());
}

/// Targeting rules across card types.
#[test]
fn test_target_rules() {
    let mut state = holding(CardType::Informant, CardType::Mule, 4);
    state.players[1].is_protected = true;
    state.players[2].is_eliminated = true;
    state.players[0].is_protected = true;
    let rules = StandardRules;

    for card_type in [CardType::HanPritcher, CardType::EblingMis, CardType::MayorIndbur] {
        assert_eq!(
            rules.validate_target(&state, p(0), p(0), card_type),
            Err(IllegalAction::SelfTarget(card_type))
        );
        assert_eq!(
            rules.validate_target(&state, p(0), p(1), card_type),
            Err(IllegalAction::TargetProtected(p(1)))
        );
        assert_eq!(rules.validate_target(&state, p(0), p(3), card_type), Ok(()));
    }

    for darell in [CardType::BaytaDarell, CardType::ToranDarell] {
        assert_eq!(rules.validate_target(&state, p(0), p(0), darell), Ok(()));
        assert_eq!(rules.validate_target(&state, p(0), p(1), darell), Ok(()));
    }

    assert_eq!(
        rules.validate_target(&state, p(0), p(2), CardType::BaytaDarell),
        Err(IllegalAction::TargetEliminated(p(2)))
    );
    assert_eq!(
        rules.validate_target(&state, p(0), p(9), CardType::BaytaDarell),
        Err(IllegalAction::UnknownPlayer(p(9)))
    );
}

/// A lone protected opponent leaves nothing to aim at.
#[test]
fn test_has_valid_targets_two_player() {
    let mut state = holding(CardType::Informant, CardType::EblingMis, 2);
    let rules = StandardRules;
    assert!(rules.has_valid_targets(&state, p(0), CardType::EblingMis));

    state.players[1].is_protected = true;
    assert!(!rules.has_valid_targets(&state, p(0), CardType::EblingMis));
    assert!(!rules.has_valid_targets(&state, p(0), CardType::MayorIndbur));
    assert!(rules.has_valid_targets(&state, p(0), CardType::ToranDarell));
}

/// The action space per phase.
#[test]
fn test_legal_actions_by_phase() {
    let rules = StandardRules;
    let mut state = holding(CardType::Informant, CardType::ShieldedMind, 3);

    // Informant names ten characters; Shielded Mind takes no choice.
    let actions = rules.legal_actions(&state, p(0));
    assert_eq!(actions.len(), 11);
    assert!(actions.contains(&Action::play_naming(CardId::new(100), CardType::Mule)));
    assert!(!actions.contains(&Action::play_naming(CardId::new(100), CardType::Informant)));
    assert!(actions.contains(&Action::Play { card: CardId::new(101), choice: Choice::None }));
    assert!(rules.legal_actions(&state, p(1)).is_empty());

    state.players[0].hand.pop();
    assert_eq!(rules.legal_actions(&state, p(0)), vec![Action::EndTurn]);

    state.phase = Phase::Draw;
    assert_eq!(rules.legal_actions(&state, p(0)), vec![Action::Draw]);

    state.phase = Phase::RoundEnd;
    assert_eq!(rules.legal_actions(&state, p(2)), vec![Action::StartNewRound]);

    state.phase = Phase::GameEnd;
    assert!(rules.legal_actions(&state, p(0)).is_empty());
}

/// Targeted cards list one action per legal target.
#[test]
fn test_legal_actions_per_target() {
    let rules = StandardRules;
    let mut state = holding(CardType::Mule, CardType::BaytaDarell, 4);
    state.players[3].is_eliminated = true;

    let actions = rules.legal_actions(&state, p(0));
    let bayta_targets: Vec<PlayerId> = actions
        .iter()
        .filter_map(|a| match a {
            Action::Play { card, choice: Choice::Target(t) } if *card == CardId::new(101) => Some(*t),
            _ => None,
        })
        .collect();
    assert_eq!(bayta_targets, vec![p(0), p(1), p(2)]);
    // Plus the Mule, which takes no choice.
    assert_eq!(actions.len(), 4);
}
