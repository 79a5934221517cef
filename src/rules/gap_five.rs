//! The gap-five pattern: a 4 and a 6 of the same numbered suit, waiting on
//! the 5 to close an internal run.

use crate::tiles::{Suit, Tile, TileCounts, TileKind};

/// Does any numbered suit in the hand hold both its 4 and its 6?
#[must_use]
pub fn has_gap_five_potential(counts: &TileCounts) -> bool {
    Suit::NUMBERED.iter().any(|&suit| holds_gap(counts, suit))
}

/// Does this suit hold both its 4 and its 6?
#[must_use]
pub fn holds_gap(counts: &TileCounts, suit: Suit) -> bool {
    match (TileKind::new(suit, 4), TileKind::new(suit, 6)) {
        (Some(four), Some(six)) => counts.get(four) > 0 && counts.get(six) > 0,
        _ => false,
    }
}

/// Is this kind one side of a gap (a numbered 4 or 6)?
#[must_use]
pub fn is_gap_side(kind: TileKind) -> bool {
    kind.suit().is_numbered() && matches!(kind.rank(), 4 | 6)
}

/// The other side of the gap for a 4 or a 6.
#[must_use]
pub fn gap_partner(kind: TileKind) -> Option<TileKind> {
    match kind.rank() {
        4 if kind.suit().is_numbered() => kind.offset(2),
        6 if kind.suit().is_numbered() => kind.offset(-2),
        _ => None,
    }
}

/// Did discarding `tile` from `before` throw away one side of a held gap?
#[must_use]
pub fn breaks_gap_candidate(before: &TileCounts, tile: Tile) -> bool {
    is_gap_side(tile.kind) && holds_gap(before, tile.kind.suit())
}
