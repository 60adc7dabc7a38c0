//! Deck construction and shuffling.

use super::definition::CardType;
use super::instance::{Card, CardId};
use crate::core::GameRng;

/// Cards in a full deck.
pub const DECK_SIZE: usize = 16;

/// Build a full, unshuffled deck in catalog order.
///
/// Cards get consecutive ids starting at `first_id`, so a caller that hands
/// out `first_id + DECK_SIZE` next time never reuses an id.
#[must_use]
pub fn create_deck(first_id: u32) -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    let mut next_id = first_id;

    for card_type in CardType::ALL {
        for _ in 0..card_type.copies() {
            deck.push(Card::new(CardId::new(next_id), card_type));
            next_id += 1;
        }
    }

    deck
}

/// Return a uniformly shuffled copy of `deck`; the input is left untouched.
#[must_use]
pub fn shuffle_deck(deck: &[Card], rng: &mut GameRng) -> Vec<Card> {
    let mut shuffled = deck.to_vec();
    rng.shuffle(&mut shuffled);
    shuffled
}
