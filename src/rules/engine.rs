//! The rules oracle: the legal action space for a seat.
//!
//! A decision strategy (AI, UI prompt, network peer) never touches state.
//! It asks a `RulesOracle` what is legal and proposes one `Action`.
//!
//! ## Implementation Notes
//!
//! - All methods are pure reads of `GameState`
//! - `legal_actions` has a default built from the finer-grained checks, so an
//!   alternative oracle only needs to override the predicates it changes

use crate::cards::{Card, CardId, CardType};
use crate::core::{Action, Choice, GameState, Phase, Player, PlayerId};
use crate::effects;

use super::validation::{self, Validation};

/// Legality interface exposed to decision strategies.
pub trait RulesOracle {
    /// Check a card play (phase, turn, hand, forced discard).
    fn validate_card_play(&self, state: &GameState, player: PlayerId, card: CardId) -> Validation;

    /// Check a target for a card ability.
    fn validate_target(
        &self,
        state: &GameState,
        actor: PlayerId,
        target: PlayerId,
        card_type: CardType,
    ) -> Validation;

    /// Whether any seat is a legal target for `card_type`.
    fn has_valid_targets(&self, state: &GameState, actor: PlayerId, card_type: CardType) -> bool;

    /// Cards the player may choose between.
    fn valid_plays(&self, player: &Player) -> Vec<Card>;

    /// The card the player is forced to play, if any.
    fn forced_play(&self, player: &Player) -> Option<Card>;

    /// Check a draw.
    fn validate_draw(&self, state: &GameState, player: PlayerId) -> Validation;

    /// Check an end-of-turn request.
    fn validate_end_turn(&self, state: &GameState, player: PlayerId) -> Validation;

    // === Convenience Methods ===

    /// Every choice worth offering for a card of `card_type`.
    ///
    /// Targeted abilities with no legal target still get `Choice::None`:
    /// the card can be played and simply does nothing.
    fn choices_for(&self, state: &GameState, actor: PlayerId, card_type: CardType) -> Vec<Choice> {
        if card_type == CardType::Informant {
            return CardType::ALL
                .into_iter()
                .filter(|&t| t != CardType::Informant)
                .map(Choice::Name)
                .collect();
        }
        if !card_type.needs_target() {
            return vec![Choice::None];
        }

        let targets: Vec<Choice> = PlayerId::all(state.player_count())
            .filter(|&t| self.validate_target(state, actor, t, card_type).is_ok())
            .map(Choice::Target)
            .collect();
        if targets.is_empty() {
            vec![Choice::None]
        } else {
            targets
        }
    }

    /// Enumerate all legal actions for a seat.
    ///
    /// Returns empty if the seat cannot act.
    fn legal_actions(&self, state: &GameState, player: PlayerId) -> Vec<Action> {
        match state.phase {
            Phase::Setup | Phase::GameEnd => Vec::new(),
            Phase::RoundEnd => vec![Action::StartNewRound],
            Phase::Draw => {
                if self.validate_draw(state, player).is_ok() {
                    vec![Action::Draw]
                } else {
                    Vec::new()
                }
            }
            Phase::Play => {
                let Some(seat) = state.player(player) else {
                    return Vec::new();
                };
                if self.validate_end_turn(state, player).is_ok() {
                    return vec![Action::EndTurn];
                }

                let mut actions = Vec::new();
                for card in self.valid_plays(seat) {
                    if self.validate_card_play(state, player, card.id).is_err() {
                        continue;
                    }
                    for choice in self.choices_for(state, player, card.card_type) {
                        actions.push(Action::Play { card: card.id, choice });
                    }
                }
                actions
            }
        }
    }
}

/// The standard rules of the court.
#[derive(Clone, Copy, Debug, Default)]
pub struct StandardRules;

impl RulesOracle for StandardRules {
    fn validate_card_play(&self, state: &GameState, player: PlayerId, card: CardId) -> Validation {
        validation::validate_card_play(state, player, card)
    }

    fn validate_target(
        &self,
        state: &GameState,
        actor: PlayerId,
        target: PlayerId,
        card_type: CardType,
    ) -> Validation {
        effects::validate_target(state, actor, target, card_type)
    }

    fn has_valid_targets(&self, state: &GameState, actor: PlayerId, card_type: CardType) -> bool {
        effects::has_valid_targets(state, actor, card_type)
    }

    fn valid_plays(&self, player: &Player) -> Vec<Card> {
        validation::valid_plays(player)
    }

    fn forced_play(&self, player: &Player) -> Option<Card> {
        validation::forced_play(player)
    }

    fn validate_draw(&self, state: &GameState, player: PlayerId) -> Validation {
        validation::validate_draw(state, player)
    }

    fn validate_end_turn(&self, state: &GameState, player: PlayerId) -> Validation {
        validation::validate_end_turn(state, player)
    }
}
