//! Effect system for card abilities.
//!
//! - `EffectResolver`: applies a played card's ability to game state
//! - `EffectOutcome`: message, eliminations and privately viewed hands
//! - Targeting: which seats an ability may be aimed at
//!
//! ## Resolution contract
//!
//! Choices are validated before resolution. The resolver assumes a legal,
//! already-chosen action; a missing choice resolves as a no-op with an
//! informational message instead of an error, so a UI can re-prompt.

mod effect;
mod resolver;
mod targeting;

pub use effect::{EffectOutcome, ViewedHand};
pub use resolver::EffectResolver;
pub use targeting::{has_valid_targets, valid_targets, validate_target};
