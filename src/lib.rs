//! # mules-court
//!
//! Rules engine for The Mule's Court, a hidden-hand elimination card game
//! for 2-4 players.
//!
//! ## Design Principles
//!
//! 1. **Closed Card Set**: `CardType` is an enum and every ability is an
//!    exhaustive match, so a missing case is a compile error.
//!
//! 2. **No-op Illegal Calls**: Illegal calls on `CourtGame` are no-ops
//!    that return `None`. Callers pre-check through the rules oracle.
//!
//! 3. **Deterministic**: One seed drives every shuffle. The same seed and
//!    the same actions reproduce the same game.
//!
//! ## Modules
//!
//! - `core`: Players, state, phases, actions, RNG, configuration
//! - `cards`: Card catalog, instances and the deck builder
//! - `rules`: Legality checks and the `RulesOracle` trait
//! - `effects`: Targeting and card ability resolution
//! - `games`: The court round/turn state machine
//! - `session`: Session records and sinks
//! - `strategy`: Decision strategies and the self-play driver

pub mod cards;
pub mod core;
pub mod effects;
pub mod games;
pub mod rules;
pub mod session;
pub mod strategy;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionRecord, Choice, ConfigError, GameConfig, GameRng, GameState, Hand,
    IntegrityError, Phase, Player, PlayerId,
};

pub use crate::cards::{create_deck, shuffle_deck, Card, CardCatalog, CardDefinition, CardId, CardType};

pub use crate::rules::{IllegalAction, RulesOracle, StandardRules, Validation};

pub use crate::effects::{EffectOutcome, EffectResolver, ViewedHand};

pub use crate::games::court::{CourtGame, DrawReport, PlayReport, RoundEndReason, RoundStart, TurnEnd};

pub use crate::session::{JsonLinesSink, MemorySink, NullSink, SessionError, SessionRecord, SessionSink};

pub use crate::strategy::{play_game, DecisionStrategy, LowestCardStrategy, UniformStrategy};
