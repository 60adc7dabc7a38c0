//! Game state: the single aggregate the state machine owns.
//!
//! ## GameState
//!
//! - Seats, in fixed order for the whole game
//! - The deck (top = end of vec)
//! - Current seat and phase
//! - Token threshold, set once from the player count
//! - The card set aside at round start (2-3 players)
//!
//! Every field is plain data so a snapshot can be serialized, compared and
//! restored losslessly.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::player::{Player, PlayerId};
use crate::cards::{Card, DECK_SIZE};

/// Round/turn phase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Phase {
    /// Before the first round is dealt. Never revisited.
    #[default]
    Setup,
    /// Current seat must draw.
    Draw,
    /// Current seat holds its drawn card and must play (or end the turn).
    Play,
    /// Round resolved; waiting for the next deal.
    RoundEnd,
    /// Someone reached the token threshold. Terminal.
    GameEnd,
}

/// Violations reported by [`GameState::integrity_check`].
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum IntegrityError {
    #[error("{player} holds {size} cards")]
    HandTooLarge { player: PlayerId, size: usize },

    #[error("expected {expected} cards in play, found {found}")]
    CardCount { expected: usize, found: usize },

    #[error("card id {0} appears more than once")]
    DuplicateCard(u32),

    #[error("current player index {0} is out of range")]
    CurrentOutOfRange(usize),

    #[error("current player {0} is eliminated")]
    CurrentEliminated(PlayerId),

    #[error("seat {index} holds player id {found}")]
    SeatMismatch { index: usize, found: PlayerId },
}

/// Full game state.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Seats in turn order; index == `PlayerId::index()`.
    pub players: Vec<Player>,

    /// Draw pile (top = end of vec).
    pub deck: Vec<Card>,

    pub current_player_index: usize,

    pub phase: Phase,

    /// Devotion tokens that win the game.
    pub tokens_to_win: u32,

    /// Card set aside face-down this round (2-3 players only).
    pub removed_card: Option<Card>,

    /// 1-based round counter, 0 before the first deal.
    pub round: u32,

    /// Winner of the most recently resolved round.
    pub round_winner: Option<PlayerId>,
}

impl GameState {
    /// Create an undealt state with one seat per player.
    #[must_use]
    pub fn new(player_count: usize, tokens_to_win: u32) -> Self {
        Self {
            players: PlayerId::all(player_count).map(Player::new).collect(),
            tokens_to_win,
            ..Self::default()
        }
    }

    /// Get player count.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Look up a seat.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id.index())
    }

    /// Look up a seat mutably.
    pub fn player_mut(&mut self, id: PlayerId) -> Option<&mut Player> {
        self.players.get_mut(id.index())
    }

    /// The seat whose turn it is.
    ///
    /// An index past `u8::MAX` maps to `PlayerId(255)`, which no table seats.
    #[must_use]
    pub fn current_player_id(&self) -> PlayerId {
        PlayerId::new(u8::try_from(self.current_player_index).unwrap_or(u8::MAX))
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> Option<&Player> {
        self.players.get(self.current_player_index)
    }

    /// Seats still in the round.
    pub fn active_players(&self) -> impl Iterator<Item = &Player> {
        self.players.iter().filter(|p| p.is_active())
    }

    /// Highest card value in a seat's hand.
    #[must_use]
    pub fn hand_value(&self, id: PlayerId) -> u8 {
        self.player(id).map_or(0, Player::hand_value)
    }

    /// Total value of a seat's discard pile.
    #[must_use]
    pub fn discard_value(&self, id: PlayerId) -> u32 {
        self.player(id).map_or(0, Player::discard_value)
    }

    /// First non-eliminated seat after `index`, wrapping around.
    #[must_use]
    pub fn next_active_after(&self, index: usize) -> Option<usize> {
        let count = self.players.len();
        (1..=count)
            .map(|offset| (index + offset) % count)
            .find(|&i| self.players[i].is_active())
    }

    /// Seat that has reached the token threshold, if any.
    #[must_use]
    pub fn game_winner(&self) -> Option<PlayerId> {
        self.players
            .iter()
            .filter(|p| p.devotion_tokens >= self.tokens_to_win)
            .max_by_key(|p| (p.devotion_tokens, std::cmp::Reverse(p.id)))
            .map(|p| p.id)
    }

    /// Cards currently accounted for across deck, hands, discards and the
    /// set-aside slot.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.deck.len()
            + self
                .players
                .iter()
                .map(|p| p.hand.len() + p.discard_pile.len())
                .sum::<usize>()
            + usize::from(self.removed_card.is_some())
    }

    fn all_cards(&self) -> impl Iterator<Item = &Card> {
        self.deck
            .iter()
            .chain(self.players.iter().flat_map(|p| p.hand.iter().chain(&p.discard_pile)))
            .chain(self.removed_card.iter())
    }

    /// Verify the structural invariants of a dealt round.
    ///
    /// Checks hand sizes, card conservation, id uniqueness and the current
    /// seat. A `Setup` state has nothing dealt and always passes.
    pub fn integrity_check(&self) -> Result<(), IntegrityError> {
        if self.phase == Phase::Setup {
            return Ok(());
        }

        for (index, player) in self.players.iter().enumerate() {
            if player.id.index() != index {
                return Err(IntegrityError::SeatMismatch { index, found: player.id });
            }
            if player.hand.len() > 2 {
                return Err(IntegrityError::HandTooLarge {
                    player: player.id,
                    size: player.hand.len(),
                });
            }
        }

        let found = self.card_count();
        if found != DECK_SIZE {
            return Err(IntegrityError::CardCount { expected: DECK_SIZE, found });
        }

        let mut seen = FxHashSet::default();
        for card in self.all_cards() {
            if !seen.insert(card.id) {
                return Err(IntegrityError::DuplicateCard(card.id.raw()));
            }
        }

        let current = self
            .current_player()
            .ok_or(IntegrityError::CurrentOutOfRange(self.current_player_index))?;
        // A seat can be knocked out mid-turn, so only the draw phase is strict.
        if self.phase == Phase::Draw && current.is_eliminated {
            return Err(IntegrityError::CurrentEliminated(current.id));
        }

        Ok(())
    }
}
