//! Game state: seats, deck, turn, outcome.
//!
//! ## GameState
//!
//! One immutable value per point in the hand. Transitions in
//! [`crate::engine`] clone it, change the clone and hand it back, so any
//! snapshot a caller keeps stays valid.
//!
//! Uses `im` persistent vectors so those clones share structure.
//!
//! ## Turn step
//!
//! The state-machine step is derived rather than stored:
//! - `outcome` set → `Finished`
//! - `pending` set → `AwaitingResponse`
//! - turn holder has `hand + 3 × melds == 14` → `AwaitingDiscard`
//! - otherwise → `AwaitingDraw`

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::action::{Response, TurnEvent, TurnRecord};
use super::config::TableConfig;
use super::error::SnapshotError;
use super::seat::{Seat, SeatMap};
use crate::tiles::{deal, Meld, Tile, TileCounts, TileId, TileKind};

/// Tiles in a complete hand (concealed tiles plus three per meld).
pub const COMPLETE_HAND: usize = 14;

/// Everything one seat owns.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    pub seat: Seat,
    pub name: String,

    /// Concealed tiles. Order is display-only.
    pub hand: Vector<Tile>,

    /// Discards in the order they were thrown. Claimed tiles are removed.
    pub discards: Vector<Tile>,

    pub melds: Vector<Meld>,

    /// Most recent draw, for highlighting.
    pub last_drawn: Option<TileId>,
}

impl PlayerState {
    #[must_use]
    pub fn new(seat: Seat, name: impl Into<String>, hand: impl IntoIterator<Item = Tile>) -> Self {
        Self {
            seat,
            name: name.into(),
            hand: hand.into_iter().collect(),
            discards: Vector::new(),
            melds: Vector::new(),
            last_drawn: None,
        }
    }

    /// Hand size measured against a complete hand: each meld counts three.
    #[must_use]
    pub fn effective_size(&self) -> usize {
        self.hand.len() + 3 * self.melds.len()
    }

    /// Does this seat owe a discard?
    #[must_use]
    pub fn owes_discard(&self) -> bool {
        self.effective_size() == COMPLETE_HAND
    }

    #[must_use]
    pub fn counts(&self) -> TileCounts {
        TileCounts::from_tiles(self.hand.iter())
    }

    /// Copies of a kind in the concealed hand.
    #[must_use]
    pub fn count_of(&self, kind: TileKind) -> usize {
        self.hand.iter().filter(|t| t.is(kind)).count()
    }

    /// The held tile with the given identity.
    #[must_use]
    pub fn held(&self, id: TileId) -> Option<Tile> {
        self.hand.iter().find(|t| t.id == id).copied()
    }

    /// Concealed hand in canonical order.
    #[must_use]
    pub fn sorted_hand(&self) -> Vec<Tile> {
        let mut hand: Vec<Tile> = self.hand.iter().copied().collect();
        hand.sort_unstable();
        hand
    }

    pub(crate) fn take(&mut self, id: TileId) -> Option<Tile> {
        let index = self.hand.iter().position(|t| t.id == id)?;
        Some(self.hand.remove(index))
    }

    /// Remove `n` tiles of a kind, lowest identity first.
    ///
    /// Leaves the hand untouched and returns `None` if fewer are held.
    pub(crate) fn take_kind(&mut self, kind: TileKind, n: usize) -> Option<SmallVec<[Tile; 4]>> {
        let mut matching: SmallVec<[Tile; 4]> =
            self.hand.iter().filter(|t| t.is(kind)).copied().collect();
        if matching.len() < n {
            return None;
        }
        matching.sort_unstable();
        matching.truncate(n);
        self.hand.retain(|t| !matching.contains(t));
        Some(matching)
    }

    pub(crate) fn receive(&mut self, tile: Tile) {
        self.hand.push_back(tile);
        self.last_drawn = Some(tile.id);
    }

    /// Every tile this seat accounts for: hand, melds, discards.
    pub fn all_tiles(&self) -> impl Iterator<Item = &Tile> {
        self.hand
            .iter()
            .chain(self.melds.iter().flat_map(|m| m.tiles.iter()))
            .chain(self.discards.iter())
    }
}

/// Coarse lifecycle of a hand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Playing,
    Finished,
}

/// How a win was completed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum WinKind {
    /// Completed on the winner's own draw (including replacement draws).
    SelfDrawn,
    /// Completed by claiming another seat's discard.
    OnDiscard { from: Seat },
}

/// A declared win.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Win {
    pub winner: Seat,
    pub kind: WinKind,
    /// Winner's concealed hand at the moment of the win, canonical order.
    pub hand: Vec<Tile>,
}

/// Terminal result of a hand.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Win(Win),
    /// The live pile ran out with no claim pending.
    Exhausted,
}

impl Outcome {
    #[must_use]
    pub fn winner(&self) -> Option<Seat> {
        match self {
            Outcome::Win(win) => Some(win.winner),
            Outcome::Exhausted => None,
        }
    }
}

/// An open claim window on a discard.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingAction {
    /// The only seat allowed to respond.
    pub responder: Seat,
    /// Legal responses, best first. Always ends with `Pass`.
    pub options: SmallVec<[Response; 2]>,
    pub tile: Tile,
    pub discarder: Seat,
}

impl PendingAction {
    #[must_use]
    pub fn new(responder: Seat, claim: Response, tile: Tile, discarder: Seat) -> Self {
        let mut options = SmallVec::new();
        options.push(claim);
        options.push(Response::Pass);
        Self {
            responder,
            options,
            tile,
            discarder,
        }
    }

    #[must_use]
    pub fn offers(&self, response: Response) -> bool {
        self.options.contains(&response)
    }

    /// Highest-priority option.
    #[must_use]
    pub fn best(&self) -> Response {
        self.options.iter().copied().min().unwrap_or(Response::Pass)
    }
}

/// State-machine step, derived from a `GameState`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TurnStep {
    AwaitingDraw(Seat),
    AwaitingDiscard(Seat),
    AwaitingResponse(PendingAction),
    Finished(Outcome),
}

/// Complete state of one hand.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub phase: Phase,

    pub players: SeatMap<PlayerState>,

    /// Live pile. Front = next draw, back = next replacement draw.
    pub deck: Vector<Tile>,

    /// Seat holding the turn. While a claim window is open this is still
    /// the discarder; the responder is in `pending`.
    pub turn: Seat,

    /// Starts at 1; +1 each time the rotation wraps to `Seat::FIRST`.
    pub round: u32,

    pub history: Vector<TurnRecord>,

    pub outcome: Option<Outcome>,

    pub pending: Option<PendingAction>,
}

impl GameState {
    /// Deal a hand from an ordered deck.
    ///
    /// The first seat is left awaiting its first draw.
    #[must_use]
    pub fn from_deck(config: &TableConfig, deck: &[Tile]) -> Self {
        let dealt = deal(deck);
        let players = SeatMap::new(|seat| {
            PlayerState::new(seat, config.seat_names[seat].clone(), dealt.hands[seat].clone())
        });

        Self {
            phase: Phase::Playing,
            players,
            deck: dealt.remaining.into_iter().collect(),
            turn: Seat::FIRST,
            round: 1,
            history: Vector::new(),
            outcome: None,
            pending: None,
        }
    }

    #[must_use]
    pub fn player(&self, seat: Seat) -> &PlayerState {
        &self.players[seat]
    }

    /// The one seat expected to act next.
    #[must_use]
    pub fn active_seat(&self) -> Seat {
        self.pending.as_ref().map_or(self.turn, |p| p.responder)
    }

    /// Current state-machine step.
    #[must_use]
    pub fn step(&self) -> TurnStep {
        if let Some(outcome) = &self.outcome {
            return TurnStep::Finished(outcome.clone());
        }
        if let Some(pending) = &self.pending {
            return TurnStep::AwaitingResponse(pending.clone());
        }
        if self.players[self.turn].owes_discard() {
            TurnStep::AwaitingDiscard(self.turn)
        } else {
            TurnStep::AwaitingDraw(self.turn)
        }
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Finished
    }

    #[must_use]
    pub fn winner(&self) -> Option<Seat> {
        self.outcome.as_ref().and_then(Outcome::winner)
    }

    /// Discards visible to `seat`: every other seat's pile, rotation order.
    pub fn opponent_discards(&self, seat: Seat) -> impl Iterator<Item = &Tile> {
        self.players
            .iter()
            .filter(move |(s, _)| *s != seat)
            .flat_map(|(_, p)| p.discards.iter())
    }

    /// Every tile on the table: hands, melds, discard piles, live pile.
    pub fn all_tiles(&self) -> impl Iterator<Item = &Tile> {
        self.players
            .values()
            .flat_map(PlayerState::all_tiles)
            .chain(self.deck.iter())
    }

    /// Tile conservation: all 84 identities present exactly once.
    #[must_use]
    pub fn conserves_tiles(&self) -> bool {
        let mut seen = [false; crate::tiles::DECK_SIZE];
        let mut total = 0;
        for tile in self.all_tiles() {
            let slot = match seen.get_mut(tile.id.raw() as usize) {
                Some(slot) => slot,
                None => return false,
            };
            if *slot {
                return false;
            }
            *slot = true;
            total += 1;
        }
        total == crate::tiles::DECK_SIZE
    }

    /// Encode a snapshot for transport.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode a snapshot produced by [`GameState::to_bytes`].
    ///
    /// Tiles are validated as they decode; the whole table must then hold
    /// every identity exactly once.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        let state: GameState = bincode::deserialize(bytes)?;
        if !state.conserves_tiles() {
            return Err(SnapshotError::TilesNotConserved);
        }
        Ok(state)
    }

    // === Mutation helpers for the turn controller (working copies only) ===

    pub(crate) fn record(&mut self, seat: Seat, event: TurnEvent) {
        let sequence = self.history.len() as u32;
        self.history
            .push_back(TurnRecord::new(seat, self.round, sequence, event));
    }

    /// Pass the turn to the next seat in rotation.
    pub(crate) fn advance_turn(&mut self) {
        self.turn = self.turn.next();
        if self.turn == Seat::FIRST {
            self.round += 1;
        }
    }

    pub(crate) fn finish(&mut self, outcome: Outcome) {
        self.phase = Phase::Finished;
        self.outcome = Some(outcome);
        self.pending = None;
    }
}
