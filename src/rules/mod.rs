//! Legality checking.
//!
//! - `validation`: pure predicates for draws, plays and turn ends, returning
//!   an `IllegalAction` reason on rejection
//! - `engine`: the `RulesOracle` trait that strategies query, and the
//!   `StandardRules` implementation
//!
//! Target legality lives with the abilities in `effects`.

pub mod engine;
pub mod validation;

pub use engine::{RulesOracle, StandardRules};
pub use validation::{
    forced_play, must_discard_first_speaker, valid_plays, validate_card_play, validate_draw,
    validate_end_turn, IllegalAction, Validation,
};
