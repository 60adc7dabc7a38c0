//! Target legality for card abilities.
//!
//! - Targets must be seated and still in the round
//! - Only the Darell cards may target their own player
//! - Protection blocks every ability except the Darell cards, and never
//!   blocks targeting yourself

use crate::cards::CardType;
use crate::core::{GameState, PlayerId};
use crate::rules::{IllegalAction, Validation};

/// Check that `actor` may aim a `card_type` ability at `target`.
pub fn validate_target(
    state: &GameState,
    actor: PlayerId,
    target: PlayerId,
    card_type: CardType,
) -> Validation {
    let seat = state
        .player(target)
        .ok_or(IllegalAction::UnknownPlayer(target))?;
    if seat.is_eliminated {
        return Err(IllegalAction::TargetEliminated(target));
    }

    if target == actor {
        return if card_type.is_darell() {
            Ok(())
        } else {
            Err(IllegalAction::SelfTarget(card_type))
        };
    }

    if seat.is_protected && !card_type.is_darell() {
        return Err(IllegalAction::TargetProtected(target));
    }
    Ok(())
}

/// Every seat `actor` could legally aim a `card_type` ability at.
#[must_use]
pub fn valid_targets(state: &GameState, actor: PlayerId, card_type: CardType) -> Vec<PlayerId> {
    PlayerId::all(state.player_count())
        .filter(|&target| validate_target(state, actor, target, card_type).is_ok())
        .collect()
}

/// Whether a targeted ability can fire at all.
///
/// In a two-player game the only opponent may be protected, leaving a
/// Mayor or Ebling Mis with nothing to aim at.
#[must_use]
pub fn has_valid_targets(state: &GameState, actor: PlayerId, card_type: CardType) -> bool {
    PlayerId::all(state.player_count())
        .any(|target| validate_target(state, actor, target, card_type).is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(player_count: usize) -> GameState {
        GameState::new(player_count, 5)
    }

    #[test]
    fn test_opponent_is_valid() {
        let state = table(3);
        assert_eq!(
            validate_target(&state, PlayerId::new(0), PlayerId::new(2), CardType::EblingMis),
            Ok(())
        );
    }

    #[test]
    fn test_unknown_target() {
        let state = table(2);
        assert_eq!(
            validate_target(&state, PlayerId::new(0), PlayerId::new(3), CardType::HanPritcher),
            Err(IllegalAction::UnknownPlayer(PlayerId::new(3)))
        );
    }

    #[test]
    fn test_eliminated_target() {
        let mut state = table(3);
        state.players[1].is_eliminated = true;
        assert_eq!(
            validate_target(&state, PlayerId::new(0), PlayerId::new(1), CardType::BaytaDarell),
            Err(IllegalAction::TargetEliminated(PlayerId::new(1)))
        );
    }

    #[test]
    fn test_self_target_only_for_darells() {
        let state = table(2);
        let p0 = PlayerId::new(0);

        for card_type in CardType::ALL {
            let result = validate_target(&state, p0, p0, card_type);
            if card_type.is_darell() {
                assert_eq!(result, Ok(()));
            } else {
                assert_eq!(result, Err(IllegalAction::SelfTarget(card_type)));
            }
        }
    }

    #[test]
    fn test_protection() {
        let mut state = table(2);
        state.players[1].is_protected = true;
        let (p0, p1) = (PlayerId::new(0), PlayerId::new(1));

        assert_eq!(
            validate_target(&state, p0, p1, CardType::EblingMis),
            Err(IllegalAction::TargetProtected(p1))
        );
        assert_eq!(validate_target(&state, p0, p1, CardType::ToranDarell), Ok(()));
    }

    #[test]
    fn test_protection_never_blocks_self() {
        let mut state = table(2);
        state.players[0].is_protected = true;
        let p0 = PlayerId::new(0);
        assert_eq!(validate_target(&state, p0, p0, CardType::BaytaDarell), Ok(()));
    }

    #[test]
    fn test_has_valid_targets_two_player_protected() {
        let mut state = table(2);
        state.players[1].is_protected = true;
        let p0 = PlayerId::new(0);

        assert!(!has_valid_targets(&state, p0, CardType::MayorIndbur));
        assert!(!has_valid_targets(&state, p0, CardType::HanPritcher));
        assert!(has_valid_targets(&state, p0, CardType::BaytaDarell));
        assert_eq!(valid_targets(&state, p0, CardType::BaytaDarell).len(), 2);
    }

    #[test]
    fn test_valid_targets_four_player() {
        let mut state = table(4);
        state.players[2].is_eliminated = true;
        state.players[3].is_protected = true;

        assert_eq!(
            valid_targets(&state, PlayerId::new(0), CardType::Magnifico),
            vec![PlayerId::new(1)]
        );
    }
}
