//! Card instances - one physical card in the deck.
//!
//! A `Card` is immutable: its id, type and value never change while it moves
//! between the deck, hands, discard piles and the set-aside slot.

use serde::{Deserialize, Serialize};

use super::definition::CardType;

/// Unique identifier for one card instance.
///
/// Ids are unique for the whole game: every round's deck gets fresh ones.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// A card in play.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub card_type: CardType,
    /// Copy of `card_type.value()`, kept on the instance for display.
    pub value: u8,
}

impl Card {
    /// Create a card of the given type.
    #[must_use]
    pub const fn new(id: CardId, card_type: CardType) -> Self {
        Self {
            id,
            card_type,
            value: card_type.value(),
        }
    }

    /// Display name from the catalog.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.card_type.definition().name
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name(), self.value)
    }
}
