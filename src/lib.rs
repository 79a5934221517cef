//! # gap-five
//!
//! Rules engine for three-player gap-five mahjong: two numbered suits and the
//! dragons, three seats, and a hand that is worth more when it waits on the 5
//! between a held 4 and 6.
//!
//! ## Design Principles
//!
//! 1. **Pure transitions**: every operation takes a `GameState` and returns
//!    the next one. Nothing is mutated in place, nothing blocks, nothing logs.
//!
//! 2. **Refusals are values**: an illegal request returns the input state
//!    unchanged (or a `Rejection` from the `try_` forms), never a panic.
//!
//! 3. **Deterministic**: the same seed deals the same hand, and bots make the
//!    same choices from the same state.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: cheap snapshot clones via `im-rs`, so a
//!   front end can keep every state it has shown.
//!
//! - **Derived turn step**: the state machine's step is computed from the
//!   state (outcome, open claim, hand parity) rather than stored.
//!
//! ## Modules
//!
//! - `tiles`: tile vocabulary, counts, melds, deck and deal
//! - `core`: seats, game state, actions, RNG, configuration, errors
//! - `rules`: win detection, claim resolution, the gap-five pattern
//! - `policy`: discard heuristic for engine-driven seats
//! - `engine`: turn controller, bot driver and the `Table` facade
//! - `report`: post-discard reports and the commentary seam
//! - `log`: leveled stderr macros for the binaries

#[macro_use]
pub mod log;

pub mod core;
pub mod tiles;
pub mod rules;
pub mod policy;
pub mod engine;
pub mod report;

// Re-export commonly used types
pub use crate::core::{
    Action, EngineResult, GameRng, GameState, Outcome, PendingAction, Phase, PlayerState,
    Rejection, Response, Seat, SeatMap, SnapshotError, TableConfig, TurnEvent, TurnRecord,
    TurnStep, Win, WinKind,
};

pub use crate::tiles::{Meld, MeldKind, Suit, Tile, TileCounts, TileId, TileKind};

pub use crate::rules::{has_gap_five_potential, is_winning_hand, RulesEngine};

pub use crate::policy::{DiscardHeuristic, DiscardPolicy, HeuristicWeights};

pub use crate::engine::Table;

pub use crate::report::{
    commentary_or_fallback, Commentator, CommentaryError, DiscardReport, LocalCoach,
};
