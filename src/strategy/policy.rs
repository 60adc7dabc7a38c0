//! Decision strategies.
//!
//! Strategies are trait-based so seats can be driven by anything:
//! - `LowestCardStrategy`: the shipped heuristic
//! - `UniformStrategy`: uniform over the legal action space
//!
//! A strategy only reads state and asks the oracle what is legal.

use crate::cards::{Card, CardType};
use crate::core::{Action, Choice, GameRng, GameState, Phase, PlayerId};
use crate::rules::RulesOracle;

/// Proposes one action for a seat.
pub trait DecisionStrategy {
    /// Choose an action for `seat`.
    ///
    /// Returns `None` if the seat has nothing legal to do.
    fn decide(
        &mut self,
        state: &GameState,
        seat: PlayerId,
        oracle: &dyn RulesOracle,
    ) -> Option<Action>;
}

/// Draw whenever possible, then play the lowest card.
///
/// Targets are picked uniformly at random, preferring opponents when a
/// self-target is also legal. Informant names a random character.
#[derive(Clone, Debug)]
pub struct LowestCardStrategy {
    rng: GameRng,
}

impl LowestCardStrategy {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed).for_context("lowest-card"),
        }
    }

    fn choice_for(
        &mut self,
        state: &GameState,
        seat: PlayerId,
        card_type: CardType,
        oracle: &dyn RulesOracle,
    ) -> Choice {
        if card_type == CardType::Informant {
            let names: Vec<CardType> = CardType::ALL
                .into_iter()
                .filter(|&t| t != CardType::Informant)
                .collect();
            return self.rng.choose(&names).map_or(Choice::None, |&t| Choice::Name(t));
        }
        if !card_type.needs_target() {
            return Choice::None;
        }

        let targets: Vec<PlayerId> = PlayerId::all(state.player_count())
            .filter(|&t| oracle.validate_target(state, seat, t, card_type).is_ok())
            .collect();
        let opponents: Vec<PlayerId> = targets.iter().copied().filter(|&t| t != seat).collect();
        let pool = if opponents.is_empty() { &targets } else { &opponents };
        self.rng.choose(pool).map_or(Choice::None, |&t| Choice::Target(t))
    }
}

impl DecisionStrategy for LowestCardStrategy {
    fn decide(
        &mut self,
        state: &GameState,
        seat: PlayerId,
        oracle: &dyn RulesOracle,
    ) -> Option<Action> {
        match state.phase {
            Phase::Setup | Phase::GameEnd => None,
            Phase::RoundEnd => Some(Action::StartNewRound),
            Phase::Draw => oracle.validate_draw(state, seat).ok().map(|()| Action::Draw),
            Phase::Play => {
                if oracle.validate_end_turn(state, seat).is_ok() {
                    return Some(Action::EndTurn);
                }
                let player = state.player(seat)?;
                let card: Card = oracle
                    .valid_plays(player)
                    .into_iter()
                    .filter(|c| oracle.validate_card_play(state, seat, c.id).is_ok())
                    .min_by_key(|c| c.value)?;
                let choice = self.choice_for(state, seat, card.card_type, oracle);
                Some(Action::Play { card: card.id, choice })
            }
        }
    }
}

/// Uniform over [`RulesOracle::legal_actions`].
#[derive(Clone, Debug)]
pub struct UniformStrategy {
    rng: GameRng,
}

impl UniformStrategy {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed).for_context("uniform"),
        }
    }
}

impl DecisionStrategy for UniformStrategy {
    fn decide(
        &mut self,
        state: &GameState,
        seat: PlayerId,
        oracle: &dyn RulesOracle,
    ) -> Option<Action> {
        let actions = oracle.legal_actions(state, seat);
        self.rng.choose(&actions).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardId;
    use crate::rules::StandardRules;

    fn card(id: u32, card_type: CardType) -> Card {
        Card::new(CardId::new(id), card_type)
    }

    fn play_state(hand: &[CardType], others: usize) -> GameState {
        let mut state = GameState::new(others + 1, 5);
        for (i, &t) in hand.iter().enumerate() {
            state.players[0].hand.push(card(i as u32, t));
        }
        for (offset, seat) in state.players.iter_mut().skip(1).enumerate() {
            seat.hand.push(card(10 + offset as u32, CardType::Informant));
        }
        state.deck.push(card(20, CardType::Magnifico));
        state.phase = Phase::Play;
        state
    }

    #[test]
    fn test_draws_in_draw_phase() {
        let mut state = play_state(&[CardType::Mule], 1);
        state.phase = Phase::Draw;
        let mut strategy = LowestCardStrategy::new(1);

        assert_eq!(
            strategy.decide(&state, PlayerId::new(0), &StandardRules),
            Some(Action::Draw)
        );
        assert_eq!(strategy.decide(&state, PlayerId::new(1), &StandardRules), None);
    }

    #[test]
    fn test_plays_lowest_card() {
        let state = play_state(&[CardType::Mule, CardType::ShieldedMind], 1);
        let mut strategy = LowestCardStrategy::new(1);

        assert_eq!(
            strategy.decide(&state, PlayerId::new(0), &StandardRules),
            Some(Action::play(CardId::new(1)))
        );
    }

    #[test]
    fn test_respects_forced_play() {
        let state = play_state(&[CardType::ToranDarell, CardType::FirstSpeaker], 1);
        let mut strategy = LowestCardStrategy::new(1);

        assert_eq!(
            strategy.decide(&state, PlayerId::new(0), &StandardRules),
            Some(Action::play(CardId::new(1)))
        );
    }

    #[test]
    fn test_prefers_opponent_for_darell() {
        let state = play_state(&[CardType::Mule, CardType::BaytaDarell], 2);
        let mut strategy = LowestCardStrategy::new(3);

        for _ in 0..20 {
            let action = strategy.decide(&state, PlayerId::new(0), &StandardRules).unwrap();
            let Action::Play { choice: Choice::Target(target), .. } = action else {
                panic!("expected a targeted play, got {action:?}");
            };
            assert_ne!(target, PlayerId::new(0));
        }
    }

    #[test]
    fn test_darell_targets_protected_opponent() {
        let mut state = play_state(&[CardType::Mule, CardType::ToranDarell], 1);
        state.players[1].is_protected = true;
        let mut strategy = LowestCardStrategy::new(1);

        // Darells ignore protection, so the opponent stays the preferred target.
        assert_eq!(
            strategy.decide(&state, PlayerId::new(0), &StandardRules),
            Some(Action::play_at(CardId::new(1), PlayerId::new(1)))
        );
    }

    #[test]
    fn test_no_target_when_all_protected() {
        let mut state = play_state(&[CardType::Mule, CardType::HanPritcher], 1);
        state.players[1].is_protected = true;
        let mut strategy = LowestCardStrategy::new(1);

        assert_eq!(
            strategy.decide(&state, PlayerId::new(0), &StandardRules),
            Some(Action::play(CardId::new(1)))
        );
    }

    #[test]
    fn test_informant_names_a_character() {
        let state = play_state(&[CardType::Mule, CardType::Informant], 1);
        let mut strategy = LowestCardStrategy::new(1);

        let action = strategy.decide(&state, PlayerId::new(0), &StandardRules).unwrap();
        let Action::Play { choice: Choice::Name(named), .. } = action else {
            panic!("expected a naming play, got {action:?}");
        };
        assert_ne!(named, CardType::Informant);
    }

    #[test]
    fn test_ends_turn_after_play() {
        let state = play_state(&[CardType::Mule], 1);
        let mut strategy = LowestCardStrategy::new(1);
        assert_eq!(
            strategy.decide(&state, PlayerId::new(0), &StandardRules),
            Some(Action::EndTurn)
        );
    }

    #[test]
    fn test_round_end_and_game_end() {
        let mut state = play_state(&[CardType::Mule], 1);
        let mut strategy = LowestCardStrategy::new(1);

        state.phase = Phase::RoundEnd;
        assert_eq!(
            strategy.decide(&state, PlayerId::new(1), &StandardRules),
            Some(Action::StartNewRound)
        );
        state.phase = Phase::GameEnd;
        assert_eq!(strategy.decide(&state, PlayerId::new(0), &StandardRules), None);
    }

    #[test]
    fn test_uniform_picks_legal_action() {
        let state = play_state(&[CardType::Mule, CardType::EblingMis], 2);
        let legal = StandardRules.legal_actions(&state, PlayerId::new(0));
        let mut strategy = UniformStrategy::new(9);

        for _ in 0..10 {
            let action = strategy.decide(&state, PlayerId::new(0), &StandardRules).unwrap();
            assert!(legal.contains(&action));
        }
    }
}
