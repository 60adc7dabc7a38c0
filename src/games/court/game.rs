//! The court game: round/turn state machine over `GameState`.

use tracing::{debug, info, warn};

use super::round::{deal_round, round_verdict, RoundEndReason, RoundVerdict};
use crate::cards::{Card, CardId};
use crate::core::{Action, ActionRecord, Choice, ConfigError, GameConfig, GameRng, GameState, Phase, PlayerId};
use crate::effects::{validate_target, EffectOutcome, EffectResolver};
use crate::rules::{validate_card_play, validate_draw, validate_end_turn, IllegalAction};
use crate::session::{NullSink, SessionRecord, SessionSink};

/// What a successful draw did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DrawReport {
    pub player: PlayerId,
    pub card: Card,
    /// First Speaker, if the draw forced it out of the hand.
    pub auto_discarded: Option<Card>,
}

/// What a successful play did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayReport {
    pub player: PlayerId,
    pub card: Card,
    pub outcome: EffectOutcome,
}

/// Result of ending a turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnEnd {
    /// Turn passed to this seat.
    Next(PlayerId),
    /// The round is over; `winner` earned a token.
    RoundWon { winner: PlayerId, reason: RoundEndReason },
    /// The round is over and nobody was left to win it.
    RoundVoid,
}

/// Result of leaving the round-end phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundStart {
    /// A new round was dealt.
    Dealt { round: u32, first_player: PlayerId },
    /// Someone had enough tokens; the game is over.
    GameOver { winner: PlayerId },
}

/// A game in progress.
///
/// Every mutating call either succeeds, records the action to the session
/// sink and returns a report, or returns `None` and leaves the state
/// untouched.
#[derive(Clone, Debug)]
pub struct CourtGame<S: SessionSink = NullSink> {
    config: GameConfig,
    state: GameState,
    rng: GameRng,
    sink: S,
    sequence: u64,
}

impl CourtGame<NullSink> {
    /// Create a game and deal the first round.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        Self::with_sink(config, NullSink)
    }

    /// Resume from a recorded state.
    ///
    /// The state must match the config's table and pass
    /// [`GameState::integrity_check`]. Session sequence numbers restart at
    /// zero.
    pub fn from_snapshot(config: GameConfig, state: GameState) -> Result<Self, ConfigError> {
        config.validate()?;
        if state.player_count() != config.player_count {
            return Err(ConfigError::InvalidPlayerCount(state.player_count()));
        }
        if let Err(error) = state.integrity_check() {
            warn!(%error, round = state.round, phase = ?state.phase, "snapshot rejected");
            return Err(error.into());
        }
        Ok(Self {
            rng: GameRng::new(config.seed),
            config,
            state,
            sink: NullSink,
            sequence: 0,
        })
    }
}

impl<S: SessionSink> CourtGame<S> {
    /// Create a game recording into `sink`, and deal the first round.
    pub fn with_sink(config: GameConfig, sink: S) -> Result<Self, ConfigError> {
        let tokens_to_win = config.validate()?;
        let first_player = config.first_player;
        let mut game = Self {
            rng: GameRng::new(config.seed),
            state: GameState::new(config.player_count, tokens_to_win),
            config,
            sink,
            sequence: 0,
        };
        game.deal(first_player);
        Ok(game)
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Owned copy of the current state.
    #[must_use]
    pub fn snapshot(&self) -> GameState {
        self.state.clone()
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.state.phase == Phase::GameEnd
    }

    /// Seat that has reached the token threshold, if any.
    #[must_use]
    pub fn game_winner(&self) -> Option<PlayerId> {
        self.state.game_winner()
    }

    /// Draw the top card for the current seat.
    ///
    /// Moves to the play phase, then forces out First Speaker if the new
    /// hand requires it.
    pub fn draw_card(&mut self) -> Option<DrawReport> {
        let player = self.state.current_player_id();
        if let Err(reason) = validate_draw(&self.state, player) {
            return self.reject("draw", player, &reason);
        }
        let card = self.state.deck.pop()?;
        self.state.players[player.index()].hand.push(card);
        self.state.phase = Phase::Play;
        let auto_discarded = EffectResolver::auto_discard_first_speaker(&mut self.state, player);

        debug!(
            %player,
            card = %card.id,
            deck = self.state.deck.len(),
            auto_discarded = auto_discarded.is_some(),
            "card drawn"
        );
        self.record(player, Action::Draw);
        Some(DrawReport { player, card, auto_discarded })
    }

    /// Play a card from the current seat's two-card hand.
    ///
    /// Protection on every other seat lapses once the ability resolves.
    /// The turn does not advance; call [`CourtGame::end_turn`].
    pub fn play_card(&mut self, card: CardId, choice: Choice) -> Option<PlayReport> {
        let player = self.state.current_player_id();
        if let Err(reason) = validate_card_play(&self.state, player, card) {
            return self.reject("play", player, &reason);
        }
        let seat = &self.state.players[player.index()];
        if seat.hand.len() < 2 {
            warn!(%player, card = %card, "play ignored: turn already played");
            return None;
        }
        let card_type = seat.hand.iter().find(|c| c.id == card)?.card_type;
        if let Some(target) = choice.target().filter(|_| card_type.needs_target()) {
            if let Err(reason) = validate_target(&self.state, player, target, card_type) {
                return self.reject("play", player, &reason);
            }
        }

        let seat = &mut self.state.players[player.index()];
        let played = seat.take_from_hand(card)?;
        seat.discard_pile.push(played);
        let outcome = EffectResolver::apply_card_effect(&mut self.state, &played, player, choice);
        for other in self.state.players.iter_mut().filter(|p| p.id != player) {
            other.is_protected = false;
        }

        debug!(%player, card = %played, message = %outcome.message, "card played");
        self.record(player, Action::Play { card, choice });
        Some(PlayReport { player, card: played, outcome })
    }

    /// Finish the current turn: settle the round or pass to the next seat.
    pub fn end_turn(&mut self) -> Option<TurnEnd> {
        let player = self.state.current_player_id();
        if let Err(reason) = validate_end_turn(&self.state, player) {
            return self.reject("end turn", player, &reason);
        }

        let result = match round_verdict(&self.state) {
            RoundVerdict::Continue => {
                let next = self.state.next_active_after(self.state.current_player_index)?;
                self.state.current_player_index = next;
                self.state.phase = Phase::Draw;
                let next = PlayerId::new(next as u8);
                debug!(from = %player, to = %next, "turn passed");
                TurnEnd::Next(next)
            }
            RoundVerdict::Won { winner, reason } => {
                self.state.players[winner.index()].devotion_tokens += 1;
                self.state.round_winner = Some(winner);
                self.state.phase = Phase::RoundEnd;
                info!(
                    round = self.state.round,
                    %winner,
                    ?reason,
                    tokens = self.state.players[winner.index()].devotion_tokens,
                    "round won"
                );
                TurnEnd::RoundWon { winner, reason }
            }
            RoundVerdict::Void => {
                self.state.round_winner = None;
                self.state.phase = Phase::RoundEnd;
                info!(round = self.state.round, "round ended with no survivors");
                TurnEnd::RoundVoid
            }
        };

        self.record(player, Action::EndTurn);
        Some(result)
    }

    /// Leave the round-end phase: end the game if someone has enough tokens,
    /// otherwise deal the next round, started by the last round's winner.
    pub fn start_new_round(&mut self) -> Option<RoundStart> {
        let actor = self.state.round_winner.unwrap_or_else(|| self.state.current_player_id());
        if self.state.phase != Phase::RoundEnd {
            let reason = IllegalAction::WrongPhase {
                expected: Phase::RoundEnd,
                actual: self.state.phase,
            };
            return self.reject("start round", actor, &reason);
        }

        let result = if let Some(winner) = self.state.game_winner() {
            self.state.phase = Phase::GameEnd;
            info!(
                %winner,
                rounds = self.state.round,
                tokens = self.state.players[winner.index()].devotion_tokens,
                "game over"
            );
            RoundStart::GameOver { winner }
        } else {
            self.deal(actor);
            RoundStart::Dealt {
                round: self.state.round,
                first_player: actor,
            }
        };

        self.record(actor, Action::StartNewRound);
        Some(result)
    }

    /// Route any action through the state machine on behalf of `seat`.
    ///
    /// Turn actions must come from the current seat; any seat may start the
    /// next round. Returns whether the action took effect.
    pub fn apply_action(&mut self, seat: PlayerId, action: &Action) -> bool {
        if !matches!(action, Action::StartNewRound) && seat != self.state.current_player_id() {
            warn!(%seat, current = %self.state.current_player_id(), "action from wrong seat ignored");
            return false;
        }
        match *action {
            Action::Draw => self.draw_card().is_some(),
            Action::Play { card, choice } => self.play_card(card, choice).is_some(),
            Action::EndTurn => self.end_turn().is_some(),
            Action::StartNewRound => self.start_new_round().is_some(),
        }
    }

    fn deal(&mut self, first: PlayerId) {
        let round = self.state.round + 1;
        deal_round(&mut self.state, &self.rng, round, first);
        info!(
            round,
            first_player = %first,
            removed = self.state.removed_card.is_some(),
            "round dealt"
        );
    }

    fn reject<T>(&self, call: &'static str, player: PlayerId, reason: &IllegalAction) -> Option<T> {
        warn!(%player, phase = ?self.state.phase, %reason, "{call} ignored");
        None
    }

    fn record(&mut self, actor: PlayerId, action: Action) {
        let action = ActionRecord::new(actor, action, self.state.round, self.sequence);
        self.sequence += 1;
        let record = SessionRecord::new(action, self.state.clone());
        if let Err(error) = self.sink.append(&record) {
            warn!(%error, sequence = record.action.sequence, "session sink rejected record");
        }
    }
}
