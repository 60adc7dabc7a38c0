//! Game configuration.
//!
//! A game is fully described by its player count, a seed, and the seat that
//! opens the first round. Everything else (deck contents, token threshold,
//! cards set aside) follows from the player count.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::player::PlayerId;
use super::state::IntegrityError;

/// Smallest supported table.
pub const MIN_PLAYERS: usize = 2;
/// Largest supported table.
pub const MAX_PLAYERS: usize = 4;

/// Fatal setup errors. These indicate an integration mistake, not a player
/// action, and are returned from constructors instead of being clamped.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("player count must be between 2 and 4, got {0}")]
    InvalidPlayerCount(usize),

    #[error("first player {0} is not seated at this table")]
    InvalidFirstPlayer(PlayerId),

    #[error("unknown card type: {0}")]
    UnknownCardType(String),

    #[error("snapshot is not a playable state: {0}")]
    InvalidSnapshot(#[from] IntegrityError),
}

/// Devotion tokens needed to win the game.
///
/// ```
/// use mules_court::core::tokens_to_win_for;
///
/// assert_eq!(tokens_to_win_for(2).unwrap(), 7);
/// assert_eq!(tokens_to_win_for(3).unwrap(), 5);
/// assert_eq!(tokens_to_win_for(4).unwrap(), 4);
/// assert!(tokens_to_win_for(5).is_err());
/// ```
pub fn tokens_to_win_for(player_count: usize) -> Result<u32, ConfigError> {
    if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&player_count) {
        return Err(ConfigError::InvalidPlayerCount(player_count));
    }
    Ok(match player_count {
        2 => 7,
        3 => 5,
        _ => 4,
    })
}

/// Cards set aside face-down at the start of each round.
#[must_use]
pub const fn removed_card_count(player_count: usize) -> usize {
    if player_count < 4 {
        1
    } else {
        0
    }
}

/// Game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of seats (2-4).
    pub player_count: usize,

    /// Seed for every shuffle in the game.
    pub seed: u64,

    /// Seat that opens round 1. Later rounds open with the previous winner.
    pub first_player: PlayerId,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_count: MIN_PLAYERS,
            seed: 42,
            first_player: PlayerId::new(0),
        }
    }
}

impl GameConfig {
    /// Create a config for `player_count` seats with the default seed.
    #[must_use]
    pub fn new(player_count: usize) -> Self {
        Self {
            player_count,
            ..Self::default()
        }
    }

    /// Set the shuffle seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the seat that opens round 1.
    #[must_use]
    pub fn with_first_player(mut self, player: PlayerId) -> Self {
        self.first_player = player;
        self
    }

    /// Check the config, returning the token threshold it implies.
    pub fn validate(&self) -> Result<u32, ConfigError> {
        let tokens = tokens_to_win_for(self.player_count)?;
        if self.first_player.index() >= self.player_count {
            return Err(ConfigError::InvalidFirstPlayer(self.first_player));
        }
        Ok(tokens)
    }
}
