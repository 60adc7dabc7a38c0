//! Shared helpers for integration tests.

#![allow(dead_code)]

use mules_court::cards::DECK_SIZE;
use mules_court::{create_deck, Card, CardId, CardType, CourtGame, GameConfig, GameState, Phase};
use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Initialize test logging once.
///
/// Level comes from `TEST_LOG`, then `RUST_LOG`, then `"warn"`.
pub fn init() {
    INITIALIZED.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}

pub fn card(id: u32, card_type: CardType) -> Card {
    Card::new(CardId::new(id), card_type)
}

/// A round-1 table in the draw phase with seat 0 to act.
///
/// `hands[i]` is seat i's single card; `deck` is listed bottom to top. The
/// rest of the sixteen go under `deck`, except that 2-3 seats set one aside,
/// so every table holds a full deck.
pub fn table(hands: &[CardType], deck: &[CardType]) -> GameState {
    let tokens = GameConfig::new(hands.len()).validate().unwrap();
    let mut state = GameState::new(hands.len(), tokens);
    let mut ids = 0..;
    let mut next = |card_type: CardType| card(ids.next().unwrap(), card_type);

    for (seat, &card_type) in state.players.iter_mut().zip(hands) {
        seat.hand.push(next(card_type));
    }
    let mut rest = unlisted(hands, deck).into_iter().map(&mut next);
    if hands.len() < 4 {
        state.removed_card = rest.next();
    }
    state.deck.extend(rest);
    state.deck.extend(deck.iter().map(|&card_type| next(card_type)));
    state.round = 1;
    state.phase = Phase::Draw;
    state
}

/// Like [`table`], but late in the round: `deck` is all that is left, and an
/// extra last seat is already out, holding every spent card in its discard
/// pile.
pub fn late_table(hands: &[CardType], deck: &[CardType]) -> GameState {
    let mut seats = hands.to_vec();
    seats.push(CardType::Informant);
    let mut state = table(&seats, deck);

    let top = state.deck.split_off(state.deck.len() - deck.len());
    let spent = std::mem::replace(&mut state.deck, top);
    let out = state.players.last_mut().unwrap();
    let held: Vec<Card> = out.hand.drain(..).collect();
    out.discard_pile.extend(held);
    out.discard_pile.extend(spent);
    out.is_eliminated = true;
    state
}

/// The sixteen card types less those already placed, trimmed to fill the
/// deck exactly.
fn unlisted(hands: &[CardType], deck: &[CardType]) -> Vec<CardType> {
    let mut rest: Vec<CardType> = create_deck(0).iter().map(|c| c.card_type).collect();
    for placed in hands.iter().chain(deck) {
        if let Some(pos) = rest.iter().position(|t| t == placed) {
            rest.remove(pos);
        }
    }
    rest.truncate(DECK_SIZE.saturating_sub(hands.len() + deck.len()));
    rest
}

/// Resume a game from a hand-built state.
pub fn resume(state: GameState) -> CourtGame {
    init();
    CourtGame::from_snapshot(GameConfig::new(state.player_count()), state).unwrap()
}

/// A game resumed from [`table`].
pub fn rigged_game(hands: &[CardType], deck: &[CardType]) -> CourtGame {
    resume(table(hands, deck))
}

/// A game resumed from [`late_table`].
pub fn late_game(hands: &[CardType], deck: &[CardType]) -> CourtGame {
    resume(late_table(hands, deck))
}
