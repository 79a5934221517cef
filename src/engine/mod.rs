//! Turn sequencing.
//!
//! - `controller`: pure transitions for draw, discard, claims and quads
//! - `bot`: plays the engine-driven seats with a `DiscardPolicy`
//! - `table`: the front-end facade, human operations and hand creation

pub mod bot;
pub mod controller;
pub mod table;

pub use bot::{advance_bot, advance_until_human, choose_action};
pub use controller::{
    apply, legal_actions, quad_candidates, try_declare_quad, try_discard, try_draw, try_respond,
};
pub use table::Table;
