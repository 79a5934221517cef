//! Core types: seats, state, actions, RNG, configuration, errors.
//!
//! Everything here is rule-agnostic plumbing. Rule evaluation lives in
//! `rules`, transitions in `engine`.

pub mod seat;
pub mod rng;
pub mod config;
pub mod action;
pub mod error;
pub mod state;

pub use seat::{Seat, SeatMap, SEAT_COUNT};
pub use rng::GameRng;
pub use config::TableConfig;
pub use action::{Action, Response, TurnEvent, TurnRecord};
pub use error::{EngineResult, Rejection, SnapshotError};
pub use state::{
    GameState, Outcome, PendingAction, Phase, PlayerState, TurnStep, Win, WinKind, COMPLETE_HAND,
};
