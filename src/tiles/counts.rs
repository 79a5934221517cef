//! Per-kind tile counts.
//!
//! Rule evaluation never looks at tile identity, so hands are reduced to
//! a fixed array of counts indexed by `TileKind::index()`.

use super::tile::{Tile, TileKind, KIND_COUNT};

/// Multiset of tile kinds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct TileCounts([u8; KIND_COUNT]);

impl TileCounts {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Count the kinds of the given tiles.
    pub fn from_tiles<'a>(tiles: impl IntoIterator<Item = &'a Tile>) -> Self {
        Self::from_kinds(tiles.into_iter().map(|t| t.kind))
    }

    /// Count the given kinds.
    pub fn from_kinds(kinds: impl IntoIterator<Item = TileKind>) -> Self {
        let mut counts = Self::new();
        for kind in kinds {
            counts.add(kind, 1);
        }
        counts
    }

    #[must_use]
    pub fn get(&self, kind: TileKind) -> u8 {
        self.0[kind.index()]
    }

    pub fn add(&mut self, kind: TileKind, n: u8) {
        self.0[kind.index()] += n;
    }

    /// Remove `n` copies of a kind.
    ///
    /// Returns false and leaves the counts untouched if fewer than `n` are present.
    pub fn remove(&mut self, kind: TileKind, n: u8) -> bool {
        let slot = &mut self.0[kind.index()];
        if *slot < n {
            return false;
        }
        *slot -= n;
        true
    }

    /// Total number of tiles.
    #[must_use]
    pub fn total(&self) -> usize {
        self.0.iter().map(|&c| c as usize).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|&c| c == 0)
    }

    /// First kind present, in canonical order.
    #[must_use]
    pub fn first_kind(&self) -> Option<TileKind> {
        self.0
            .iter()
            .position(|&c| c > 0)
            .and_then(TileKind::from_index)
    }

    /// Kinds present with their counts, in canonical order.
    pub fn present(&self) -> impl Iterator<Item = (TileKind, u8)> + '_ {
        self.0
            .iter()
            .enumerate()
            .filter_map(|(i, &c)| {
                if c == 0 {
                    return None;
                }
                TileKind::from_index(i).map(|k| (k, c))
            })
    }
}
