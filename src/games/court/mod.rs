//! The Mule's Court.
//!
//! A round/turn state machine over [`GameState`](crate::core::GameState):
//!
//! - Each player holds one card; on their turn they draw a second and play one
//! - Played cards resolve through the effect resolver
//! - A round ends when one player is left standing or the deck runs out
//! - The round winner earns a devotion token; enough tokens wins the game
//!
//! Supports 2-4 players.

mod game;
mod round;

pub use game::{CourtGame, DrawReport, PlayReport, RoundStart, TurnEnd};
pub use round::{deal_round, round_verdict, RoundEndReason, RoundVerdict};
