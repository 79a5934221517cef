//! Rule evaluation.
//!
//! - `win`: does a hand complete?
//! - `interrupt`: who may claim a discard, and how?
//! - `gap_five`: the 4/6 pattern the variant is named after
//! - `engine`: the `RulesEngine` trait tying actions to transitions
//!
//! Everything here reads state; nothing here changes it.

pub mod engine;
pub mod gap_five;
pub mod interrupt;
pub mod win;

pub use engine::RulesEngine;
pub use gap_five::{breaks_gap_candidate, has_gap_five_potential};
pub use interrupt::{claim_for, resolve};
pub use win::{is_complete, is_winning_hand, wins_with};
