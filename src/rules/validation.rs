//! Card-play legality.
//!
//! Pure predicates over `GameState`. A rejected check returns the reason as
//! an [`IllegalAction`]; nothing here mutates state.

use thiserror::Error;

use crate::cards::{Card, CardId, CardType};
use crate::core::{GameState, Phase, Player, PlayerId};

/// Why an action is not legal right now.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum IllegalAction {
    #[error("expected phase {expected:?}, game is in {actual:?}")]
    WrongPhase { expected: Phase, actual: Phase },

    #[error("it is not {0}'s turn")]
    NotYourTurn(PlayerId),

    #[error("{0} is out of the round")]
    Eliminated(PlayerId),

    #[error("{0} has no cards in hand")]
    EmptyHand(PlayerId),

    #[error("{card} is not in {player}'s hand")]
    CardNotInHand { player: PlayerId, card: CardId },

    #[error("First Speaker must be discarded first")]
    ForcedDiscard { required: CardId },

    #[error("the deck is empty")]
    DeckEmpty,

    #[error("{0} must play a card before ending the turn")]
    TurnIncomplete(PlayerId),

    #[error("{0} is not seated at this table")]
    UnknownPlayer(PlayerId),

    #[error("{0} cannot be targeted: out of the round")]
    TargetEliminated(PlayerId),

    #[error("{0:?} cannot target its own player")]
    SelfTarget(CardType),

    #[error("{0} is protected")]
    TargetProtected(PlayerId),
}

/// Outcome of a legality check.
pub type Validation = Result<(), IllegalAction>;

/// Check that `player` may play `card` now.
///
/// Reasons are reported in priority order: phase, turn, elimination, empty
/// hand, card not held, forced First Speaker discard.
pub fn validate_card_play(state: &GameState, player: PlayerId, card: CardId) -> Validation {
    current_turn(state, player, Phase::Play)?;
    let seat = &state.players[player.index()];
    if seat.hand.is_empty() {
        return Err(IllegalAction::EmptyHand(player));
    }
    if !seat.holds(card) {
        return Err(IllegalAction::CardNotInHand { player, card });
    }
    if let Some(forced) = forced_play(seat) {
        if forced.id != card {
            return Err(IllegalAction::ForcedDiscard { required: forced.id });
        }
    }
    Ok(())
}

/// Check that `player` may draw now.
pub fn validate_draw(state: &GameState, player: PlayerId) -> Validation {
    current_turn(state, player, Phase::Draw)?;
    if state.deck.is_empty() {
        return Err(IllegalAction::DeckEmpty);
    }
    Ok(())
}

/// Check that `player` may end the turn now.
///
/// The turn is complete once the drawn card is gone (played or
/// auto-discarded) or the player was knocked out during it.
pub fn validate_end_turn(state: &GameState, player: PlayerId) -> Validation {
    if state.phase != Phase::Play {
        return Err(IllegalAction::WrongPhase {
            expected: Phase::Play,
            actual: state.phase,
        });
    }
    if state.current_player_id() != player {
        return Err(IllegalAction::NotYourTurn(player));
    }
    let seat = state
        .player(player)
        .ok_or(IllegalAction::UnknownPlayer(player))?;
    if !seat.is_eliminated && seat.hand.len() > 1 {
        return Err(IllegalAction::TurnIncomplete(player));
    }
    Ok(())
}

fn current_turn(state: &GameState, player: PlayerId, phase: Phase) -> Validation {
    if state.phase != phase {
        return Err(IllegalAction::WrongPhase {
            expected: phase,
            actual: state.phase,
        });
    }
    if state.current_player_id() != player {
        return Err(IllegalAction::NotYourTurn(player));
    }
    let seat = state
        .player(player)
        .ok_or(IllegalAction::UnknownPlayer(player))?;
    if seat.is_eliminated {
        return Err(IllegalAction::Eliminated(player));
    }
    Ok(())
}

/// True when the hand holds First Speaker together with a dangerous card.
#[must_use]
pub fn must_discard_first_speaker(player: &Player) -> bool {
    player.holds_type(CardType::FirstSpeaker)
        && player.hand.iter().any(|c| c.card_type.is_dangerous())
}

/// The First Speaker card a player is forced to discard, if any.
#[must_use]
pub fn forced_play(player: &Player) -> Option<Card> {
    if must_discard_first_speaker(player) {
        player.find_type(CardType::FirstSpeaker).copied()
    } else {
        None
    }
}

/// Cards the player may choose between.
///
/// A single card is always playable; with two cards the forced First
/// Speaker is the only option when it applies.
#[must_use]
pub fn valid_plays(player: &Player) -> Vec<Card> {
    if player.hand.len() < 2 {
        return player.hand.to_vec();
    }
    match forced_play(player) {
        Some(forced) => vec![forced],
        None => player.hand.to_vec(),
    }
}
