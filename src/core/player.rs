//! Player identification and per-seat round data.
//!
//! ## PlayerId
//!
//! Seat index for a 2-4 player game. Seats are fixed for the whole game:
//! elimination is a flag on [`Player`], never a removal.
//!
//! ## Player
//!
//! Hand, discard pile, devotion tokens and the two per-round flags.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{Card, CardId, CardType};

/// Seat identifier.
///
/// Player indices are 0-based: the first seat is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all seats for a game with `player_count` players.
    ///
    /// ```
    /// use mules_court::core::PlayerId;
    ///
    /// let seats: Vec<_> = PlayerId::all(3).collect();
    /// assert_eq!(seats, vec![PlayerId::new(0), PlayerId::new(1), PlayerId::new(2)]);
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Cards held by a player. Never more than two.
pub type Hand = SmallVec<[Card; 2]>;

/// One seat at the table.
///
/// `devotion_tokens` survive across rounds; everything else is reset by
/// [`Player::reset_for_round`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub hand: Hand,
    /// Played and discarded cards, oldest first.
    pub discard_pile: Vec<Card>,
    pub devotion_tokens: u32,
    pub is_protected: bool,
    pub is_eliminated: bool,
}

impl Player {
    /// Create a player with an empty hand and no tokens.
    #[must_use]
    pub fn new(id: PlayerId) -> Self {
        Self {
            id,
            hand: Hand::new(),
            discard_pile: Vec::new(),
            devotion_tokens: 0,
            is_protected: false,
            is_eliminated: false,
        }
    }

    /// Clear hand, discards and flags, keeping identity and tokens.
    pub fn reset_for_round(&mut self) {
        self.hand.clear();
        self.discard_pile.clear();
        self.is_protected = false;
        self.is_eliminated = false;
    }

    /// Still in the current round.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.is_eliminated
    }

    /// Check if the hand contains a specific card instance.
    #[must_use]
    pub fn holds(&self, card: CardId) -> bool {
        self.hand.iter().any(|c| c.id == card)
    }

    /// Check if the hand contains any card of the given type.
    #[must_use]
    pub fn holds_type(&self, card_type: CardType) -> bool {
        self.hand.iter().any(|c| c.card_type == card_type)
    }

    /// Find a held card of the given type.
    #[must_use]
    pub fn find_type(&self, card_type: CardType) -> Option<&Card> {
        self.hand.iter().find(|c| c.card_type == card_type)
    }

    /// Remove a card from the hand by id.
    pub fn take_from_hand(&mut self, card: CardId) -> Option<Card> {
        let pos = self.hand.iter().position(|c| c.id == card)?;
        Some(self.hand.remove(pos))
    }

    /// Highest card value in hand, 0 for an empty hand.
    #[must_use]
    pub fn hand_value(&self) -> u8 {
        self.hand.iter().map(|c| c.value).max().unwrap_or(0)
    }

    /// Sum of all discarded card values.
    #[must_use]
    pub fn discard_value(&self) -> u32 {
        self.discard_pile.iter().map(|c| u32::from(c.value)).sum()
    }
}
