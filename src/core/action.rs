//! Actions a seat can take, and the turn history they leave behind.
//!
//! Every state transition is driven by an `Action`:
//! - `Draw`: take the front tile of the live pile
//! - `Discard(id)`: throw one held physical tile
//! - `DeclareQuad(kind)`: concealed quad or triplet upgrade, own turn only
//! - `Respond(r)`: answer a pending claim window

use serde::{Deserialize, Serialize};

use super::seat::Seat;
use crate::tiles::{MeldKind, Tile, TileId, TileKind};

/// Answer to a contested discard.
///
/// Declaration order is priority order: `Win` beats `Quad` beats `Triplet`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Response {
    /// Claim the discard to complete a winning hand.
    Win,
    /// Claim the discard to form an open quad (holding three).
    Quad,
    /// Claim the discard to form a triplet (holding two).
    Triplet,
    /// Decline.
    Pass,
}

impl std::fmt::Display for Response {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Response::Win => "win",
            Response::Quad => "quad",
            Response::Triplet => "triplet",
            Response::Pass => "pass",
        };
        f.write_str(name)
    }
}

/// A complete game action for the active seat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    Draw,
    Discard(TileId),
    DeclareQuad(TileKind),
    Respond(Response),
}

/// What happened in one history entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnEvent {
    Drew(Tile),
    /// Draw from the back of the deck after a quad.
    ReplacementDraw(Tile),
    Discarded(Tile),
    DeclaredQuad { kind: MeldKind, face: TileKind },
    Claimed { response: Response, tile: Tile, from: Seat },
    Passed(Tile),
}

/// A recorded event with metadata for history tracking.
///
/// Used for replay/debugging and by front ends rendering the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// The seat the event belongs to.
    pub seat: Seat,

    /// Round number when the event happened.
    pub round: u32,

    /// Position in the hand's history (0-based).
    pub sequence: u32,

    pub event: TurnEvent,
}

impl TurnRecord {
    #[must_use]
    pub fn new(seat: Seat, round: u32, sequence: u32, event: TurnEvent) -> Self {
        Self {
            seat,
            round,
            sequence,
            event,
        }
    }
}
