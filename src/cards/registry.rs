//! Card catalog lookup.
//!
//! The `CardCatalog` indexes the static definitions by type and by slug so a
//! boundary layer can turn user or wire input (`"han-pritcher"`) into a
//! `CardType`. An unknown slug is a configuration error, never a silent
//! default.

use std::str::FromStr;

use rustc_hash::FxHashMap;

use super::definition::{CardDefinition, CardType};
use crate::core::ConfigError;

/// Registry of the eleven card definitions.
///
/// ## Example
///
/// ```
/// use mules_court::cards::{CardCatalog, CardType};
///
/// let catalog = CardCatalog::new();
/// assert_eq!(catalog.lookup("magnifico").unwrap(), CardType::Magnifico);
/// assert!(catalog.lookup("hari-seldon").is_err());
/// ```
#[derive(Clone, Debug)]
pub struct CardCatalog {
    by_type: FxHashMap<CardType, &'static CardDefinition>,
    by_slug: FxHashMap<&'static str, CardType>,
}

impl Default for CardCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl CardCatalog {
    /// Build the catalog from the static definitions.
    #[must_use]
    pub fn new() -> Self {
        let mut by_type = FxHashMap::default();
        let mut by_slug = FxHashMap::default();

        for card_type in CardType::ALL {
            let def = card_type.definition();
            by_type.insert(card_type, def);
            by_slug.insert(def.slug, card_type);
        }

        Self { by_type, by_slug }
    }

    /// Get a card definition by type.
    #[must_use]
    pub fn get(&self, card_type: CardType) -> &'static CardDefinition {
        // Every variant is inserted in `new`.
        self.by_type
            .get(&card_type)
            .copied()
            .unwrap_or_else(|| card_type.definition())
    }

    /// Resolve a slug or display name to a card type.
    pub fn lookup(&self, name: &str) -> Result<CardType, ConfigError> {
        let key = name.trim();
        if let Some(card_type) = self.by_slug.get(key) {
            return Ok(*card_type);
        }

        self.by_type
            .values()
            .find(|def| def.name.eq_ignore_ascii_case(key))
            .map(|def| def.card_type)
            .ok_or_else(|| ConfigError::UnknownCardType(name.to_string()))
    }

    /// Get the number of registered card types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_type.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_type.is_empty()
    }

    /// Iterate over all definitions in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &'static CardDefinition> + '_ {
        CardType::ALL.into_iter().map(move |t| self.get(t))
    }
}

impl FromStr for CardType {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CardCatalog::new().lookup(s)
    }
}
