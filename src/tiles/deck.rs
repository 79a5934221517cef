//! Deck construction, shuffling and dealing.
//!
//! The deck is an ordered list; the front is the next normal draw and the
//! back feeds quad replacement draws.

use super::tile::{Tile, TileKind, COPIES_PER_KIND, DECK_SIZE};
use crate::core::{GameRng, SeatMap};

/// Tiles dealt to each seat.
pub const HAND_SIZE: usize = 13;

/// Tiles left in the live pile after dealing.
pub const LIVE_PILE_SIZE: usize = DECK_SIZE - 3 * HAND_SIZE;

/// Build the canonical 84-tile deck.
///
/// Kinds in canonical order, four copies each. Tile ids follow the
/// layout of [`Tile::copy_of`].
#[must_use]
pub fn build_deck() -> Vec<Tile> {
    TileKind::all()
        .flat_map(|kind| (0..COPIES_PER_KIND).map(move |copy| Tile::copy_of(kind, copy)))
        .collect()
}

/// Return a uniformly shuffled copy of the deck.
#[must_use]
pub fn shuffle(deck: &[Tile], rng: &mut GameRng) -> Vec<Tile> {
    let mut shuffled = deck.to_vec();
    rng.shuffle(&mut shuffled);
    shuffled
}

/// Result of dealing a deck.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Deal {
    /// Thirteen tiles per seat, canonical order.
    pub hands: SeatMap<Vec<Tile>>,
    /// Live pile, front = next draw.
    pub remaining: Vec<Tile>,
}

/// Deal three hands off the front of the deck, in rotation order.
#[must_use]
pub fn deal(deck: &[Tile]) -> Deal {
    let mut rest = deck;
    let mut next_hand = || {
        let (hand, tail) = rest.split_at(rest.len().min(HAND_SIZE));
        rest = tail;
        sorted(hand.to_vec())
    };
    let hands = SeatMap::from_array([next_hand(), next_hand(), next_hand()]);

    Deal {
        hands,
        remaining: rest.to_vec(),
    }
}

/// Sort tiles into canonical order. Display only.
#[must_use]
pub fn sorted(mut tiles: Vec<Tile>) -> Vec<Tile> {
    tiles.sort_unstable();
    tiles
}

/// Build a full deck whose deal produces the given hands.
///
/// Layout: the three hands in rotation order, then `draws` (front of the
/// live pile, in draw order), then every unused tile in canonical order,
/// then `replacements` reversed so that the first entry is the first
/// replacement draw off the back.
///
/// Returns `None` if a hand is not exactly thirteen tiles or a kind is
/// requested more than four times. Intended for reproducible scenarios.
#[must_use]
pub fn rig_deck(
    hands: [&[TileKind]; 3],
    draws: &[TileKind],
    replacements: &[TileKind],
) -> Option<Vec<Tile>> {
    if hands.iter().any(|h| h.len() != HAND_SIZE) {
        return None;
    }

    let mut used = [0usize; super::tile::KIND_COUNT];
    let mut take = |kind: TileKind| -> Option<Tile> {
        let copy = used[kind.index()];
        if copy >= COPIES_PER_KIND {
            return None;
        }
        used[kind.index()] += 1;
        Some(Tile::copy_of(kind, copy))
    };

    let mut front = Vec::with_capacity(DECK_SIZE);
    for &kind in hands.iter().flat_map(|h| h.iter()).chain(draws) {
        front.push(take(kind)?);
    }
    let mut back = Vec::with_capacity(replacements.len());
    for &kind in replacements {
        back.push(take(kind)?);
    }

    let taken: Vec<Tile> = front.iter().chain(back.iter()).copied().collect();
    let filler = build_deck().into_iter().filter(|t| !taken.contains(t));

    front.extend(filler);
    front.extend(back.into_iter().rev());
    Some(front)
}
