//! Effect outcomes.
//!
//! Every resolution produces an `EffectOutcome`: a message for the table,
//! the seats knocked out, and (for Han Pritcher / Bail Channis) the hand the
//! acting player looked at. The viewed hand is handed back to the caller
//! only; it is never written into `GameState`.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{Card, CardType};
use crate::core::PlayerId;

/// A hand revealed privately to the acting player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewedHand {
    pub player: PlayerId,
    pub cards: Vec<Card>,
}

/// Result of resolving one played card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectOutcome {
    /// The card that was resolved.
    pub card_type: CardType,

    /// Human-readable summary.
    pub message: String,

    /// Seats eliminated by this effect.
    pub eliminated: SmallVec<[PlayerId; 3]>,

    pub viewed_hand: Option<ViewedHand>,

    /// False when the ability did nothing (missing or unusable choice).
    pub applied: bool,
}

impl EffectOutcome {
    /// An ability that resolved.
    #[must_use]
    pub fn applied(card_type: CardType, message: impl Into<String>) -> Self {
        Self {
            card_type,
            message: message.into(),
            eliminated: SmallVec::new(),
            viewed_hand: None,
            applied: true,
        }
    }

    /// An ability that had nothing to act on. State is unchanged.
    #[must_use]
    pub fn no_effect(card_type: CardType, message: impl Into<String>) -> Self {
        Self {
            applied: false,
            ..Self::applied(card_type, message)
        }
    }

    /// Attach eliminated seats (builder pattern).
    #[must_use]
    pub fn with_eliminated(mut self, players: impl IntoIterator<Item = PlayerId>) -> Self {
        self.eliminated.extend(players);
        self
    }

    /// Attach a privately viewed hand (builder pattern).
    #[must_use]
    pub fn with_viewed_hand(mut self, viewed: ViewedHand) -> Self {
        self.viewed_hand = Some(viewed);
        self
    }
}
