//! Drives the engine-controlled seats.
//!
//! A bot turn is a run of actions by one seat: answer a claim window, draw,
//! declare any quads, discard. It ends when another seat becomes active or
//! the hand finishes.

use super::controller;
use crate::core::{Action, EngineResult, GameState, Rejection, Response, TableConfig, TurnStep};
use crate::policy::DiscardPolicy;
use crate::tiles::Tile;

/// Upper bound on actions in one bot turn.
const MAX_TURN_ACTIONS: usize = 16;

/// The action a bot takes at the current step, or `None` once finished.
#[must_use]
pub fn choose_action(
    state: &GameState,
    config: &TableConfig,
    policy: &impl DiscardPolicy,
) -> Option<Action> {
    match state.step() {
        TurnStep::Finished(_) => None,
        TurnStep::AwaitingDraw(_) => Some(Action::Draw),
        TurnStep::AwaitingDiscard(seat) => {
            let player = state.player(seat);
            if config.bots_declare_quads {
                if let Some(&kind) = controller::quad_candidates(player).first() {
                    return Some(Action::DeclareQuad(kind));
                }
            }
            let hand: Vec<Tile> = player.hand.iter().copied().collect();
            policy.choose_discard(&hand).map(|t| Action::Discard(t.id))
        }
        TurnStep::AwaitingResponse(pending) => {
            let response = if pending.offers(Response::Win) {
                Response::Win
            } else if config.bots_claim_discards {
                pending.best()
            } else {
                Response::Pass
            };
            Some(Action::Respond(response))
        }
    }
}

/// Play the active bot seat until it hands over or the hand ends.
pub fn advance_bot(
    state: &GameState,
    config: &TableConfig,
    policy: &impl DiscardPolicy,
) -> EngineResult<GameState> {
    if state.is_finished() {
        return Err(Rejection::GameFinished);
    }
    let seat = state.active_seat();
    if seat.is_human() {
        return Err(Rejection::NotBotSeat { seat });
    }

    let mut current = state.clone();
    for _ in 0..MAX_TURN_ACTIONS {
        if current.is_finished() || current.active_seat() != seat {
            break;
        }
        let Some(action) = choose_action(&current, config, policy) else {
            break;
        };
        current = controller::apply(&current, action)?;
    }
    Ok(current)
}

/// Run bot turns until the human seat is active or the hand ends.
pub fn advance_until_human(
    state: &GameState,
    config: &TableConfig,
    policy: &impl DiscardPolicy,
) -> EngineResult<GameState> {
    let mut current = state.clone();
    while !current.is_finished() && !current.active_seat().is_human() {
        current = advance_bot(&current, config, policy)?;
    }
    Ok(current)
}
