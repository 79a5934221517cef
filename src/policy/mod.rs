//! Discard policies for engine-driven seats.
//!
//! Policies are trait-based so a front end can swap in its own:
//! - `DiscardHeuristic`: greedy keep-value scoring (default)

pub mod heuristic;

pub use heuristic::{DiscardHeuristic, HeuristicWeights};

use crate::tiles::Tile;

/// Chooses which tile a seat throws.
pub trait DiscardPolicy {
    /// Pick the tile to discard, or `None` for an empty hand.
    fn choose_discard(&self, hand: &[Tile]) -> Option<Tile>;

    /// Pick a tile and return it with the hand that remains.
    fn discard(&self, hand: &[Tile]) -> Option<(Tile, Vec<Tile>)> {
        let tile = self.choose_discard(hand)?;
        let rest = hand.iter().copied().filter(|t| t.id != tile.id).collect();
        Some((tile, rest))
    }
}
