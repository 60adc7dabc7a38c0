//! Pluggable decision strategies.
//!
//! - `policy`: the `DecisionStrategy` trait and the shipped strategies
//! - `driver`: `play_game`, running a whole game with one strategy
//!
//! Strategies see state read-only and discover legal moves through a
//! [`RulesOracle`](crate::rules::RulesOracle). The game validates whatever
//! they propose.

mod driver;
mod policy;

pub use driver::play_game;
pub use policy::{DecisionStrategy, LowestCardStrategy, UniformStrategy};
