//! Round setup and round-end evaluation.

use serde::{Deserialize, Serialize};

use crate::cards::{create_deck, shuffle_deck, DECK_SIZE};
use crate::core::{removed_card_count, GameRng, GameState, Phase, PlayerId};

/// Why a round ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundEndReason {
    /// Everyone else was eliminated.
    LastStanding,
    /// The deck ran out; the highest hand won.
    DeckEmpty { hand_value: u8, discard_value: u32 },
}

/// Result of evaluating the table at the end of a turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundVerdict {
    /// Round goes on.
    Continue,
    /// Round is over and `winner` earns a token.
    Won { winner: PlayerId, reason: RoundEndReason },
    /// Round is over with nobody left standing.
    Void,
}

/// Deal round `round` (1-based) into `state`.
///
/// Resets every seat (tokens survive), shuffles a fresh deck with ids
/// `(round - 1) * 16 ..`, sets one card aside for 2-3 players, deals one
/// card to each seat in order, and hands the first turn to `first`.
pub fn deal_round(state: &mut GameState, rng: &GameRng, round: u32, first: PlayerId) {
    let first_id = round.saturating_sub(1) * DECK_SIZE as u32;
    let mut round_rng = rng.for_context(&format!("round-{round}"));

    for player in &mut state.players {
        player.reset_for_round();
    }

    state.deck = shuffle_deck(&create_deck(first_id), &mut round_rng);
    state.removed_card = if removed_card_count(state.player_count()) > 0 {
        state.deck.pop()
    } else {
        None
    };
    for player in &mut state.players {
        if let Some(card) = state.deck.pop() {
            player.hand.push(card);
        }
    }

    state.round = round;
    state.round_winner = None;
    state.current_player_index = first.index();
    state.phase = Phase::Draw;
}

/// Evaluate round-end conditions, in order:
///
/// 1. one seat left standing wins
/// 2. an empty deck ends the round; the highest hand wins, ties broken by
///    discard-pile total, then by the lower seat
pub fn round_verdict(state: &GameState) -> RoundVerdict {
    let mut active = state.active_players();
    let Some(first) = active.next() else {
        return RoundVerdict::Void;
    };
    if active.next().is_none() {
        return RoundVerdict::Won {
            winner: first.id,
            reason: RoundEndReason::LastStanding,
        };
    }
    if !state.deck.is_empty() {
        return RoundVerdict::Continue;
    }

    state
        .active_players()
        .max_by_key(|p| (p.hand_value(), p.discard_value(), std::cmp::Reverse(p.id)))
        .map_or(RoundVerdict::Void, |p| RoundVerdict::Won {
            winner: p.id,
            reason: RoundEndReason::DeckEmpty {
                hand_value: p.hand_value(),
                discard_value: p.discard_value(),
            },
        })
}
