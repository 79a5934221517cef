//! Greedy single-ply discard scoring.
//!
//! Every tile gets a keep-value; the lowest is thrown. Scores depend only on
//! the tile's kind and the kinds around it, so they are computed once per
//! distinct kind.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::DiscardPolicy;
use crate::rules::gap_five::gap_partner;
use crate::tiles::{Tile, TileCounts, TileKind};

/// Keep-value weights.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeuristicWeights {
    /// Per copy of the tile's own kind in hand (the tile itself included).
    pub per_copy: i32,

    /// A same-suit tile one rank away is held.
    pub neighbor_one: i32,

    /// A same-suit tile two ranks away is held.
    pub neighbor_two: i32,

    /// The tile is a 4 or 6 and the other side of the gap is held.
    pub gap_five: i32,

    /// Flat value for dragons.
    pub honor: i32,
}

impl Default for HeuristicWeights {
    fn default() -> Self {
        Self {
            per_copy: 10,
            neighbor_one: 5,
            neighbor_two: 2,
            gap_five: 15,
            honor: 3,
        }
    }
}

/// Discard policy used for the non-human seats.
#[derive(Clone, Debug, Default)]
pub struct DiscardHeuristic {
    weights: HeuristicWeights,
}

impl DiscardHeuristic {
    #[must_use]
    pub fn new(weights: HeuristicWeights) -> Self {
        Self { weights }
    }

    /// Keep-value of one kind given the whole hand.
    #[must_use]
    pub fn score(&self, counts: &TileCounts, kind: TileKind) -> i32 {
        let w = &self.weights;
        let mut score = w.per_copy * i32::from(counts.get(kind));

        if !kind.suit().is_numbered() {
            return score + w.honor;
        }

        let held = |offset: i8| {
            [offset, -offset]
                .into_iter()
                .filter_map(|o| kind.offset(o))
                .any(|k| counts.get(k) > 0)
        };
        if held(1) {
            score += w.neighbor_one;
        }
        if held(2) {
            score += w.neighbor_two;
        }
        if gap_partner(kind).is_some_and(|partner| counts.get(partner) > 0) {
            score += w.gap_five;
        }
        score
    }

    /// Scores for each distinct kind in the hand.
    #[must_use]
    pub fn kind_scores(&self, hand: &[Tile]) -> FxHashMap<TileKind, i32> {
        let counts = TileCounts::from_tiles(hand);
        counts
            .present()
            .map(|(kind, _)| (kind, self.score(&counts, kind)))
            .collect()
    }
}

impl DiscardPolicy for DiscardHeuristic {
    fn choose_discard(&self, hand: &[Tile]) -> Option<Tile> {
        let scores = self.kind_scores(hand);
        hand.iter()
            .copied()
            .min_by_key(|tile| (scores.get(&tile.kind).copied().unwrap_or(0), *tile))
    }
}
