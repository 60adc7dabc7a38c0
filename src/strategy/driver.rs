//! Self-play driver.

use tracing::{debug, warn};

use super::policy::DecisionStrategy;
use crate::core::PlayerId;
use crate::games::court::CourtGame;
use crate::rules::StandardRules;
use crate::session::SessionSink;

/// Drive `game` with one strategy for every seat until the game ends or
/// `max_actions` actions have been applied.
///
/// Returns the game winner, or `None` if the game did not finish (action
/// limit reached, or the strategy proposed nothing legal).
pub fn play_game<S: SessionSink>(
    game: &mut CourtGame<S>,
    strategy: &mut dyn DecisionStrategy,
    max_actions: usize,
) -> Option<PlayerId> {
    let rules = StandardRules;
    let mut applied = 0;

    while !game.is_over() && applied < max_actions {
        let seat = game.state().current_player_id();
        let Some(action) = strategy.decide(game.state(), seat, &rules) else {
            warn!(%seat, phase = ?game.state().phase, "strategy proposed no action");
            return None;
        };
        if !game.apply_action(seat, &action) {
            warn!(%seat, ?action, "strategy proposed an illegal action");
            return None;
        }
        applied += 1;
    }

    debug!(applied, finished = game.is_over(), "self-play stopped");
    if game.is_over() {
        game.game_winner()
    } else {
        None
    }
}
