//! Effect resolution - applying a played card to game state.
//!
//! The resolver trusts its caller: the choice has already been checked by
//! the legality functions. A missing or unusable choice resolves as a no-op
//! with an informational message, never an error.

use tracing::debug;

use super::effect::{EffectOutcome, ViewedHand};
use crate::cards::{Card, CardType};
use crate::core::{Choice, GameState, PlayerId};
use crate::rules::must_discard_first_speaker;

/// Resolves card abilities on game state.
pub struct EffectResolver;

impl EffectResolver {
    /// Apply `played`'s ability for `actor`.
    ///
    /// The card must already have left the actor's hand.
    pub fn apply_card_effect(
        state: &mut GameState,
        played: &Card,
        actor: PlayerId,
        choice: Choice,
    ) -> EffectOutcome {
        let card_type = played.card_type;
        let outcome = match card_type {
            CardType::Informant => Self::informant(state, actor, choice),
            CardType::HanPritcher | CardType::BailChannis => {
                Self::view_hand(state, actor, card_type, choice)
            }
            CardType::EblingMis | CardType::Magnifico => {
                Self::compare_hands(state, actor, card_type, choice)
            }
            CardType::ShieldedMind => Self::shield(state, actor),
            CardType::BaytaDarell | CardType::ToranDarell => {
                Self::discard_and_redraw(state, actor, card_type, choice)
            }
            CardType::MayorIndbur => Self::swap_hands(state, actor, choice),
            CardType::FirstSpeaker => EffectOutcome::applied(
                card_type,
                format!("{actor} plays the First Speaker. Nothing happens."),
            ),
            CardType::Mule => Self::mule(state, actor),
        };

        debug!(
            %actor,
            card = card_type.slug(),
            applied = outcome.applied,
            eliminated = outcome.eliminated.len(),
            "effect resolved"
        );
        outcome
    }

    /// Whether the player's hand forces an immediate First Speaker discard.
    #[must_use]
    pub fn check_first_speaker_auto_discard(state: &GameState, player: PlayerId) -> bool {
        state.player(player).is_some_and(must_discard_first_speaker)
    }

    /// Move First Speaker straight to the discard pile, with no effect.
    ///
    /// Returns the discarded card, or `None` when the forced-discard
    /// condition does not hold.
    pub fn auto_discard_first_speaker(state: &mut GameState, player: PlayerId) -> Option<Card> {
        if !Self::check_first_speaker_auto_discard(state, player) {
            return None;
        }
        let seat = state.player_mut(player)?;
        let id = seat.find_type(CardType::FirstSpeaker)?.id;
        let card = seat.take_from_hand(id)?;
        seat.discard_pile.push(card);

        debug!(%player, card = %card.id, "first speaker auto-discarded");
        Some(card)
    }

    fn eliminate(state: &mut GameState, player: PlayerId) {
        if let Some(seat) = state.player_mut(player) {
            seat.is_eliminated = true;
        }
    }

    fn informant(state: &mut GameState, actor: PlayerId, choice: Choice) -> EffectOutcome {
        let card_type = CardType::Informant;
        let named = match choice.named() {
            Some(CardType::Informant) => {
                return EffectOutcome::no_effect(
                    card_type,
                    format!("{actor}'s Informant cannot name another Informant."),
                );
            }
            Some(named) => named,
            None => {
                return EffectOutcome::no_effect(
                    card_type,
                    format!("{actor}'s Informant named no one."),
                );
            }
        };

        let caught: Vec<PlayerId> = state
            .players
            .iter()
            .filter(|p| p.id != actor && p.is_active() && !p.is_protected && p.holds_type(named))
            .map(|p| p.id)
            .collect();

        if caught.is_empty() {
            return EffectOutcome::applied(
                card_type,
                format!("{actor}'s Informant names {named}. No one is exposed."),
            );
        }

        for &player in &caught {
            Self::eliminate(state, player);
        }
        let names: Vec<String> = caught.iter().map(ToString::to_string).collect();
        EffectOutcome::applied(
            card_type,
            format!(
                "{actor}'s Informant names {named}. {} exposed and out of the round.",
                names.join(", ")
            ),
        )
        .with_eliminated(caught)
    }

    fn view_hand(
        state: &GameState,
        actor: PlayerId,
        card_type: CardType,
        choice: Choice,
    ) -> EffectOutcome {
        let Some(seat) = choice.target().and_then(|t| state.player(t)) else {
            return EffectOutcome::no_effect(
                card_type,
                format!("{actor}'s {card_type} has no one to look at."),
            );
        };

        EffectOutcome::applied(
            card_type,
            format!("{actor}'s {card_type} looks at {}'s hand.", seat.id),
        )
        .with_viewed_hand(ViewedHand {
            player: seat.id,
            cards: seat.hand.to_vec(),
        })
    }

    fn compare_hands(
        state: &mut GameState,
        actor: PlayerId,
        card_type: CardType,
        choice: Choice,
    ) -> EffectOutcome {
        let Some(target) = choice.target().filter(|&t| t != actor && state.player(t).is_some())
        else {
            return EffectOutcome::no_effect(
                card_type,
                format!("{actor}'s {card_type} has no one to compare with."),
            );
        };

        let mine = state.hand_value(actor);
        let theirs = state.hand_value(target);

        let loser = match mine.cmp(&theirs) {
            std::cmp::Ordering::Less => actor,
            std::cmp::Ordering::Greater => target,
            std::cmp::Ordering::Equal => {
                return EffectOutcome::applied(
                    card_type,
                    format!("{actor} and {target} compare hands. It is a tie."),
                );
            }
        };

        Self::eliminate(state, loser);
        EffectOutcome::applied(
            card_type,
            format!("{actor} and {target} compare hands. {loser} holds less and is out."),
        )
        .with_eliminated([loser])
    }

    fn shield(state: &mut GameState, actor: PlayerId) -> EffectOutcome {
        if let Some(seat) = state.player_mut(actor) {
            seat.is_protected = true;
        }
        EffectOutcome::applied(
            CardType::ShieldedMind,
            format!("{actor} is shielded until the next card is played."),
        )
    }

    fn discard_and_redraw(
        state: &mut GameState,
        actor: PlayerId,
        card_type: CardType,
        choice: Choice,
    ) -> EffectOutcome {
        let Some(target) = choice.target().filter(|&t| state.player(t).is_some()) else {
            return EffectOutcome::no_effect(
                card_type,
                format!("{actor}'s {card_type} has no target."),
            );
        };

        let drawn = state.deck.pop();
        let seat = &mut state.players[target.index()];
        let discarded: Vec<Card> = seat.hand.drain(..).collect();
        seat.discard_pile.extend(discarded.iter().copied());
        if let Some(card) = drawn {
            seat.hand.push(card);
        }

        let discarded_names: Vec<&str> = discarded.iter().map(Card::name).collect();
        let draw_note = if drawn.is_some() {
            "draws a new card"
        } else {
            "cannot draw, the deck is empty"
        };
        EffectOutcome::applied(
            card_type,
            format!(
                "{actor}'s {card_type}: {target} discards {} and {draw_note}.",
                if discarded_names.is_empty() {
                    "nothing".to_string()
                } else {
                    discarded_names.join(", ")
                }
            ),
        )
    }

    fn swap_hands(state: &mut GameState, actor: PlayerId, choice: Choice) -> EffectOutcome {
        let card_type = CardType::MayorIndbur;
        let Some(target) = choice
            .target()
            .filter(|&t| t != actor && state.player(t).is_some() && state.player(actor).is_some())
        else {
            return EffectOutcome::no_effect(
                card_type,
                format!("{actor}'s Mayor Indbur has no one to trade with."),
            );
        };

        let (a, b) = (actor.index(), target.index());
        let mine = std::mem::take(&mut state.players[a].hand);
        let theirs = std::mem::replace(&mut state.players[b].hand, mine);
        state.players[a].hand = theirs;

        EffectOutcome::applied(card_type, format!("{actor} trades hands with {target}."))
    }

    fn mule(state: &mut GameState, actor: PlayerId) -> EffectOutcome {
        Self::eliminate(state, actor);
        EffectOutcome::applied(
            CardType::Mule,
            format!("{actor} reveals the Mule and is out of the round."),
        )
        .with_eliminated([actor])
    }
}
