//! Declared melds.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::tile::{Tile, TileKind};
use crate::core::Seat;

/// How a meld was formed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MeldKind {
    /// Three of a kind, completed by claiming a discard.
    Triplet,
    /// Four of a kind drawn by the owner alone.
    ConcealedQuad,
    /// A claimed triplet upgraded with a self-drawn fourth tile.
    UpgradedQuad,
    /// Four of a kind completed by claiming a discard.
    OpenQuad,
}

impl MeldKind {
    #[must_use]
    pub const fn is_quad(self) -> bool {
        !matches!(self, MeldKind::Triplet)
    }
}

/// The discard a meld was built from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClaimSource {
    pub tile: Tile,
    pub from: Seat,
}

/// A face-up group owned by one seat.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meld {
    pub kind: MeldKind,
    /// The kind every tile in the meld shares.
    pub face: TileKind,
    pub tiles: SmallVec<[Tile; 4]>,
    /// Absent for concealed quads.
    pub claimed: Option<ClaimSource>,
}

impl Meld {
    /// Triplet from two held tiles plus a claimed discard.
    #[must_use]
    pub fn claimed_triplet(held: [Tile; 2], claimed: Tile, from: Seat) -> Self {
        let mut tiles: SmallVec<[Tile; 4]> = SmallVec::from_slice(&held);
        tiles.push(claimed);
        Self {
            kind: MeldKind::Triplet,
            face: claimed.kind,
            tiles,
            claimed: Some(ClaimSource { tile: claimed, from }),
        }
    }

    /// Open quad from three held tiles plus a claimed discard.
    #[must_use]
    pub fn claimed_quad(held: [Tile; 3], claimed: Tile, from: Seat) -> Self {
        let mut tiles: SmallVec<[Tile; 4]> = SmallVec::from_slice(&held);
        tiles.push(claimed);
        Self {
            kind: MeldKind::OpenQuad,
            face: claimed.kind,
            tiles,
            claimed: Some(ClaimSource { tile: claimed, from }),
        }
    }

    /// Concealed quad from four held tiles.
    #[must_use]
    pub fn concealed_quad(held: [Tile; 4]) -> Self {
        Self {
            kind: MeldKind::ConcealedQuad,
            face: held[0].kind,
            tiles: SmallVec::from_buf(held),
            claimed: None,
        }
    }

    /// Upgrade a triplet with its fourth tile. Returns `None` for anything
    /// other than a triplet of the same kind.
    #[must_use]
    pub fn upgraded(&self, fourth: Tile) -> Option<Self> {
        if self.kind != MeldKind::Triplet || fourth.kind != self.face {
            return None;
        }
        let mut tiles = self.tiles.clone();
        tiles.push(fourth);
        Some(Self {
            kind: MeldKind::UpgradedQuad,
            face: self.face,
            tiles,
            claimed: self.claimed,
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }
}
