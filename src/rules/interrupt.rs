//! Claim resolution for a fresh discard.
//!
//! Each other seat's best claim is ranked Win, Quad, Triplet. The highest
//! wins the window outright; lower claims are never offered. On a tie the
//! seat nearer in rotation after the discarder takes it.

use super::win::wins_with;
use crate::core::{GameState, PendingAction, Response, Seat};
use crate::tiles::Tile;

/// Which claim, if any, `seat` could make on `tile`.
#[must_use]
pub fn claim_for(state: &GameState, seat: Seat, tile: Tile) -> Option<Response> {
    let player = state.player(seat);
    if wins_with(player.hand.iter(), player.melds.len(), tile.kind) {
        return Some(Response::Win);
    }
    match player.count_of(tile.kind) {
        3 => Some(Response::Quad),
        2 => Some(Response::Triplet),
        _ => None,
    }
}

/// Open a claim window on `tile`, discarded by `discarder`, if anyone
/// qualifies.
#[must_use]
pub fn resolve(state: &GameState, discarder: Seat, tile: Tile) -> Option<PendingAction> {
    let mut best: Option<(Seat, Response)> = None;
    for seat in discarder.others() {
        let Some(claim) = claim_for(state, seat, tile) else {
            continue;
        };
        // Strictly better only: the earlier seat keeps a tie.
        if best.map_or(true, |(_, held)| priority(claim) > priority(held)) {
            best = Some((seat, claim));
        }
    }
    best.map(|(responder, claim)| PendingAction::new(responder, claim, tile, discarder))
}

fn priority(response: Response) -> u8 {
    match response {
        Response::Win => 3,
        Response::Quad => 2,
        Response::Triplet => 1,
        Response::Pass => 0,
    }
}
