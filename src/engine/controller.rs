//! Pure turn transitions.
//!
//! Every function takes a snapshot and returns a fresh one; the input is
//! never touched. A refused request comes back as a `Rejection` and the
//! caller keeps its old snapshot.
//!
//! Turn cycle: draw → win check → discard → claim check → advance.
//! A claim hands the turn straight to the claimant without a draw.

use crate::core::{
    Action, EngineResult, GameState, Outcome, PendingAction, PlayerState, Rejection, Response,
    Seat, TurnEvent, TurnStep, Win, WinKind,
};
use crate::rules::{interrupt, win};
use crate::tiles::{Meld, MeldKind, Tile, TileId, TileKind};

/// Take the front tile of the live pile.
pub fn try_draw(state: &GameState, seat: Seat) -> EngineResult<GameState> {
    ensure_step(state, seat, "draw")?;

    let mut next = state.clone();
    let Some(tile) = next.deck.pop_front() else {
        next.finish(Outcome::Exhausted);
        return Ok(next);
    };

    next.players[seat].receive(tile);
    next.record(seat, TurnEvent::Drew(tile));
    check_self_drawn(&mut next, seat);
    Ok(next)
}

/// Throw one held tile and open a claim window if anyone qualifies.
pub fn try_discard(state: &GameState, seat: Seat, id: TileId) -> EngineResult<GameState> {
    ensure_step(state, seat, "discard")?;

    let mut next = state.clone();
    let player = &mut next.players[seat];
    let tile = player
        .take(id)
        .ok_or(Rejection::TileNotHeld { seat, tile: id })?;
    player.discards.push_back(tile);
    next.record(seat, TurnEvent::Discarded(tile));

    match interrupt::resolve(&next, seat, tile) {
        Some(pending) => next.pending = Some(pending),
        None => pass_turn(&mut next),
    }
    Ok(next)
}

/// Answer the open claim window.
pub fn try_respond(state: &GameState, seat: Seat, response: Response) -> EngineResult<GameState> {
    ensure_step(state, seat, "response")?;
    let pending = state
        .pending
        .clone()
        .ok_or(Rejection::WrongStep { expected: "response" })?;
    if !pending.offers(response) {
        return Err(Rejection::ResponseNotOffered { response });
    }

    let mut next = state.clone();
    next.pending = None;

    match response {
        Response::Pass => {
            next.record(seat, TurnEvent::Passed(pending.tile));
            pass_turn(&mut next);
        }
        Response::Win => {
            let tile = lift_discard(&mut next, &pending);
            next.players[seat].hand.push_back(tile);
            record_claim(&mut next, seat, response, &pending);
            let hand = next.players[seat].sorted_hand();
            next.finish(Outcome::Win(Win {
                winner: seat,
                kind: WinKind::OnDiscard { from: pending.discarder },
                hand,
            }));
        }
        Response::Triplet => {
            let held = next.players[seat]
                .take_kind(pending.tile.kind, 2)
                .ok_or(Rejection::ResponseNotOffered { response })?;
            let tile = lift_discard(&mut next, &pending);
            let meld = Meld::claimed_triplet([held[0], held[1]], tile, pending.discarder);
            next.players[seat].melds.push_back(meld);
            next.turn = seat;
            record_claim(&mut next, seat, response, &pending);
        }
        Response::Quad => {
            let held = next.players[seat]
                .take_kind(pending.tile.kind, 3)
                .ok_or(Rejection::ResponseNotOffered { response })?;
            let tile = lift_discard(&mut next, &pending);
            let meld = Meld::claimed_quad([held[0], held[1], held[2]], tile, pending.discarder);
            next.players[seat].melds.push_back(meld);
            next.turn = seat;
            record_claim(&mut next, seat, response, &pending);
            replacement_draw(&mut next, seat);
        }
    }
    Ok(next)
}

/// Declare a concealed quad or upgrade a claimed triplet, then draw a
/// replacement from the back of the pile.
pub fn try_declare_quad(state: &GameState, seat: Seat, kind: TileKind) -> EngineResult<GameState> {
    ensure_step(state, seat, "discard")?;

    let mut next = state.clone();
    let player = &mut next.players[seat];
    let no_quad = Rejection::NoQuad { seat, kind };

    let meld_kind = if player.count_of(kind) == 4 {
        let held = player.take_kind(kind, 4).ok_or(no_quad)?;
        player
            .melds
            .push_back(Meld::concealed_quad([held[0], held[1], held[2], held[3]]));
        MeldKind::ConcealedQuad
    } else {
        let index = upgradeable_triplet(player, kind).ok_or_else(|| no_quad.clone())?;
        let fourth = player.take_kind(kind, 1).ok_or_else(|| no_quad.clone())?;
        let upgraded = player.melds[index].upgraded(fourth[0]).ok_or(no_quad)?;
        player.melds.set(index, upgraded);
        MeldKind::UpgradedQuad
    };

    next.record(seat, TurnEvent::DeclaredQuad { kind: meld_kind, face: kind });
    replacement_draw(&mut next, seat);
    Ok(next)
}

/// Kinds `player` could declare a quad of right now, canonical order.
#[must_use]
pub fn quad_candidates(player: &PlayerState) -> Vec<TileKind> {
    player
        .counts()
        .present()
        .filter(|&(kind, n)| n == 4 || upgradeable_triplet(player, kind).is_some())
        .map(|(kind, _)| kind)
        .collect()
}

/// Every action the active seat may take.
#[must_use]
pub fn legal_actions(state: &GameState) -> Vec<Action> {
    match state.step() {
        TurnStep::Finished(_) => Vec::new(),
        TurnStep::AwaitingDraw(_) => vec![Action::Draw],
        TurnStep::AwaitingDiscard(seat) => {
            let player = state.player(seat);
            let quads = quad_candidates(player).into_iter().map(Action::DeclareQuad);
            player
                .sorted_hand()
                .into_iter()
                .map(|t| Action::Discard(t.id))
                .chain(quads)
                .collect()
        }
        TurnStep::AwaitingResponse(pending) => {
            pending.options.iter().copied().map(Action::Respond).collect()
        }
    }
}

/// Apply an action on behalf of the active seat.
pub fn apply(state: &GameState, action: Action) -> EngineResult<GameState> {
    let seat = state.active_seat();
    match action {
        Action::Draw => try_draw(state, seat),
        Action::Discard(id) => try_discard(state, seat, id),
        Action::DeclareQuad(kind) => try_declare_quad(state, seat, kind),
        Action::Respond(response) => try_respond(state, seat, response),
    }
}

// === Helpers ===

/// Is `seat` active, and is the hand at the step this action needs?
fn ensure_step(state: &GameState, seat: Seat, wanted: &'static str) -> EngineResult<()> {
    if state.is_finished() {
        return Err(Rejection::GameFinished);
    }
    let active = state.active_seat();
    if seat != active {
        return Err(Rejection::NotActive { seat, active });
    }
    let current = step_name(&state.step());
    if current != wanted {
        return Err(Rejection::WrongStep { expected: current });
    }
    Ok(())
}

fn step_name(step: &TurnStep) -> &'static str {
    match step {
        TurnStep::AwaitingDraw(_) => "draw",
        TurnStep::AwaitingDiscard(_) => "discard",
        TurnStep::AwaitingResponse(_) => "response",
        TurnStep::Finished(_) => "nothing",
    }
}

fn upgradeable_triplet(player: &PlayerState, kind: TileKind) -> Option<usize> {
    if player.count_of(kind) == 0 {
        return None;
    }
    player
        .melds
        .iter()
        .position(|m| m.kind == MeldKind::Triplet && m.face == kind)
}

/// Move the turn on from the current holder; an empty pile ends the hand.
fn pass_turn(state: &mut GameState) {
    state.advance_turn();
    if state.deck.is_empty() {
        state.finish(Outcome::Exhausted);
    }
}

/// Take the claimed tile back off the discarder's pile.
fn lift_discard(state: &mut GameState, pending: &PendingAction) -> Tile {
    let pile = &mut state.players[pending.discarder].discards;
    if let Some(index) = pile.iter().rposition(|t| t.id == pending.tile.id) {
        pile.remove(index);
    }
    pending.tile
}

fn record_claim(state: &mut GameState, seat: Seat, response: Response, pending: &PendingAction) {
    state.record(
        seat,
        TurnEvent::Claimed {
            response,
            tile: pending.tile,
            from: pending.discarder,
        },
    );
}

/// Draw off the back after a quad. Counts as the seat's own draw.
fn replacement_draw(state: &mut GameState, seat: Seat) {
    let Some(tile) = state.deck.pop_back() else {
        state.finish(Outcome::Exhausted);
        return;
    };
    state.players[seat].receive(tile);
    state.record(seat, TurnEvent::ReplacementDraw(tile));
    check_self_drawn(state, seat);
}

fn check_self_drawn(state: &mut GameState, seat: Seat) {
    let player = &state.players[seat];
    if win::is_winning_hand(player.hand.iter(), player.melds.len()) {
        let hand = player.sorted_hand();
        state.finish(Outcome::Win(Win {
            winner: seat,
            kind: WinKind::SelfDrawn,
            hand,
        }));
    }
}
