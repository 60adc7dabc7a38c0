//! Card definitions - the fixed catalog of the court.
//!
//! Eleven character types make up the sixteen-card deck. `CardType` is a
//! closed enum so every effect match is exhaustive; the display text lives
//! in a static `CardDefinition` table used for outcome messages.

use serde::{Deserialize, Serialize};

/// One of the eleven characters.
///
/// Serialized as the kebab-case slug (`"han-pritcher"`, `"mule"`, ...).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CardType {
    Informant,
    HanPritcher,
    BailChannis,
    EblingMis,
    Magnifico,
    ShieldedMind,
    BaytaDarell,
    ToranDarell,
    MayorIndbur,
    FirstSpeaker,
    Mule,
}

impl CardType {
    /// Every card type, in catalog order.
    pub const ALL: [CardType; 11] = [
        CardType::Informant,
        CardType::HanPritcher,
        CardType::BailChannis,
        CardType::EblingMis,
        CardType::Magnifico,
        CardType::ShieldedMind,
        CardType::BaytaDarell,
        CardType::ToranDarell,
        CardType::MayorIndbur,
        CardType::FirstSpeaker,
        CardType::Mule,
    ];

    /// Point rank (1-8), used for comparisons and tie-breaks.
    #[must_use]
    pub const fn value(self) -> u8 {
        match self {
            CardType::Informant => 1,
            CardType::HanPritcher | CardType::BailChannis => 2,
            CardType::EblingMis | CardType::Magnifico => 3,
            CardType::ShieldedMind => 4,
            CardType::BaytaDarell | CardType::ToranDarell => 5,
            CardType::MayorIndbur => 6,
            CardType::FirstSpeaker => 7,
            CardType::Mule => 8,
        }
    }

    /// Number of copies in a full deck.
    #[must_use]
    pub const fn copies(self) -> usize {
        match self {
            CardType::Informant => 5,
            CardType::ShieldedMind => 2,
            _ => 1,
        }
    }

    /// Stable slug, identical to the serde name.
    #[must_use]
    pub fn slug(self) -> &'static str {
        self.definition().slug
    }

    /// Static display data for this type.
    #[must_use]
    pub fn definition(self) -> &'static CardDefinition {
        &CATALOG[self as usize]
    }

    /// Cards that cannot be played while First Speaker is held.
    #[must_use]
    pub const fn is_dangerous(self) -> bool {
        matches!(
            self,
            CardType::MayorIndbur | CardType::BaytaDarell | CardType::ToranDarell
        )
    }

    /// Abilities that need a target player.
    #[must_use]
    pub const fn needs_target(self) -> bool {
        matches!(
            self,
            CardType::HanPritcher
                | CardType::BailChannis
                | CardType::EblingMis
                | CardType::Magnifico
                | CardType::BaytaDarell
                | CardType::ToranDarell
                | CardType::MayorIndbur
        )
    }

    /// Darell cards may target their own player and ignore protection.
    #[must_use]
    pub const fn is_darell(self) -> bool {
        matches!(self, CardType::BaytaDarell | CardType::ToranDarell)
    }
}

impl std::fmt::Display for CardType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.definition().name)
    }
}

/// Static card definition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CardDefinition {
    pub card_type: CardType,
    pub slug: &'static str,
    pub name: &'static str,
    pub value: u8,
    pub copies: usize,
    pub ability: &'static str,
    pub flavor: &'static str,
}

const fn def(
    card_type: CardType,
    slug: &'static str,
    name: &'static str,
    ability: &'static str,
    flavor: &'static str,
) -> CardDefinition {
    CardDefinition {
        card_type,
        slug,
        name,
        value: card_type.value(),
        copies: card_type.copies(),
        ability,
        flavor,
    }
}

/// Indexed by `CardType as usize`.
static CATALOG: [CardDefinition; 11] = [
    def(
        CardType::Informant,
        "informant",
        "Informant",
        "Name a character other than Informant. Every other exposed player holding it is out of the round.",
        "Someone always talks.",
    ),
    def(
        CardType::HanPritcher,
        "han-pritcher",
        "Han Pritcher",
        "Look at another player's hand.",
        "A loyal officer, until he wasn't.",
    ),
    def(
        CardType::BailChannis,
        "bail-channis",
        "Bail Channis",
        "Look at another player's hand.",
        "He searched for Star's End and found only himself.",
    ),
    def(
        CardType::EblingMis,
        "ebling-mis",
        "Ebling Mis",
        "Compare hands with another player. The lower value is out of the round.",
        "So close to the answer.",
    ),
    def(
        CardType::Magnifico,
        "magnifico",
        "Magnifico",
        "Compare hands with another player. The lower value is out of the round.",
        "The clown plays the visi-sonor.",
    ),
    def(
        CardType::ShieldedMind,
        "shielded-mind",
        "Shielded Mind",
        "You cannot be targeted until the next card is played.",
        "A static field no Mentalic can pierce.",
    ),
    def(
        CardType::BaytaDarell,
        "bayta-darell",
        "Bayta Darell",
        "Choose any player, yourself included. They discard their hand and draw a new card.",
        "She fired the shot that saved the Plan.",
    ),
    def(
        CardType::ToranDarell,
        "toran-darell",
        "Toran Darell",
        "Choose any player, yourself included. They discard their hand and draw a new card.",
        "A trader's son with a steady hand.",
    ),
    def(
        CardType::MayorIndbur,
        "mayor-indbur",
        "Mayor Indbur",
        "Trade hands with another player.",
        "Order above all, even above sense.",
    ),
    def(
        CardType::FirstSpeaker,
        "first-speaker",
        "First Speaker",
        "Must be discarded if held with Mayor Indbur, Bayta Darell or Toran Darell.",
        "The Second Foundation does not reveal itself.",
    ),
    def(
        CardType::Mule,
        "mule",
        "The Mule",
        "If you discard the Mule, you are out of the round.",
        "No one predicted him.",
    ),
];
