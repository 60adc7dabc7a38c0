//! Core engine types: players, state, actions, RNG, configuration.
//!
//! These are the plain-data building blocks. The rules that act on them live
//! in `rules`, `effects` and `games::court`.

pub mod action;
pub mod config;
pub mod player;
pub mod rng;
pub mod state;

pub use action::{Action, ActionRecord, Choice};
pub use config::{
    removed_card_count, tokens_to_win_for, ConfigError, GameConfig, MAX_PLAYERS, MIN_PLAYERS,
};
pub use player::{Hand, Player, PlayerId};
pub use rng::GameRng;
pub use state::{GameState, IntegrityError, Phase};
