//! Card system: catalog, instances, registry and deck builder.
//!
//! ## Key Types
//!
//! - `CardType`: the eleven characters (closed enum)
//! - `CardDefinition`: static display data (name, value, copies, ability text)
//! - `Card` / `CardId`: one physical card
//! - `CardCatalog`: slug and name lookup
//! - `create_deck` / `shuffle_deck`: the sixteen-card deck

pub mod deck;
pub mod definition;
pub mod instance;
pub mod registry;

pub use deck::{create_deck, shuffle_deck, DECK_SIZE};
pub use definition::{CardDefinition, CardType};
pub use instance::{Card, CardId};
pub use registry::CardCatalog;
