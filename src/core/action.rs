//! Action representation.
//!
//! An `Action` is everything a seat can ask the state machine to do. A play
//! carries a `Choice`, which keeps "nothing chosen" distinct from a choice
//! that later turns out to be illegal.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use crate::cards::{CardId, CardType};

/// The extra input a played card may need.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Choice {
    /// No target and no named character.
    #[default]
    None,
    /// A target player, for the targeted abilities.
    Target(PlayerId),
    /// A named character, for the Informant.
    Name(CardType),
}

impl Choice {
    /// The chosen target, if any.
    #[must_use]
    pub fn target(self) -> Option<PlayerId> {
        match self {
            Choice::Target(player) => Some(player),
            _ => None,
        }
    }

    /// The named character, if any.
    #[must_use]
    pub fn named(self) -> Option<CardType> {
        match self {
            Choice::Name(card_type) => Some(card_type),
            _ => None,
        }
    }
}

/// A complete game action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Draw the top card of the deck.
    Draw,
    /// Play a card from hand.
    Play { card: CardId, choice: Choice },
    /// Finish the turn and evaluate round-end conditions.
    EndTurn,
    /// Deal the next round, or end the game if someone has enough tokens.
    StartNewRound,
}

impl Action {
    /// Play a card with no choice attached.
    #[must_use]
    pub fn play(card: CardId) -> Self {
        Action::Play {
            card,
            choice: Choice::None,
        }
    }

    /// Play a card at a target player.
    #[must_use]
    pub fn play_at(card: CardId, target: PlayerId) -> Self {
        Action::Play {
            card,
            choice: Choice::Target(target),
        }
    }

    /// Play a card naming a character.
    #[must_use]
    pub fn play_naming(card: CardId, named: CardType) -> Self {
        Action::Play {
            card,
            choice: Choice::Name(named),
        }
    }
}

/// A recorded action with metadata for history tracking.
///
/// Used for:
/// - Session logs and replay
/// - Debugging
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The seat that took this action.
    pub player: PlayerId,

    /// The action taken.
    pub action: Action,

    /// Round number when the action was taken.
    pub round: u32,

    /// Sequence number across the whole game (for ordering).
    pub sequence: u64,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(player: PlayerId, action: Action, round: u32, sequence: u64) -> Self {
        Self {
            player,
            action,
            round,
            sequence,
        }
    }
}
