//! Winning-hand detection.
//!
//! A hand wins when its concealed tiles split into one pair plus
//! `4 - melds` groups, each group a triplet or a same-suit run of three.
//! Declared melds already count as groups.

use crate::core::COMPLETE_HAND;
use crate::tiles::{Tile, TileCounts, TileKind};

/// Can the concealed counts complete a hand alongside `meld_count` melds?
///
/// Returns false without searching unless `total + 3 × melds == 14`.
#[must_use]
pub fn is_complete(counts: &TileCounts, meld_count: usize) -> bool {
    if counts.total() + 3 * meld_count != COMPLETE_HAND {
        return false;
    }

    let pair_candidates: Vec<TileKind> = counts
        .present()
        .filter(|&(_, c)| c >= 2)
        .map(|(kind, _)| kind)
        .collect();

    pair_candidates.into_iter().any(|pair| {
        let mut rest = *counts;
        rest.remove(pair, 2) && forms_groups(&mut rest)
    })
}

/// Does this concealed hand win alongside `meld_count` melds?
#[must_use]
pub fn is_winning_hand<'a>(hand: impl IntoIterator<Item = &'a Tile>, meld_count: usize) -> bool {
    is_complete(&TileCounts::from_tiles(hand), meld_count)
}

/// Would adding `extra` to the hand complete it?
#[must_use]
pub fn wins_with<'a>(
    hand: impl IntoIterator<Item = &'a Tile>,
    meld_count: usize,
    extra: TileKind,
) -> bool {
    let mut counts = TileCounts::from_tiles(hand);
    counts.add(extra, 1);
    is_complete(&counts, meld_count)
}

/// Backtrack on the first remaining kind: triplet first, then run.
fn forms_groups(counts: &mut TileCounts) -> bool {
    let Some(kind) = counts.first_kind() else {
        return true;
    };

    if counts.remove(kind, 3) {
        if forms_groups(counts) {
            return true;
        }
        counts.add(kind, 3);
    }

    if let Some(run) = kind.run_from() {
        if run.iter().all(|&k| counts.get(k) > 0) {
            for &k in &run {
                counts.remove(k, 1);
            }
            if forms_groups(counts) {
                return true;
            }
            for &k in &run {
                counts.add(k, 1);
            }
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tiles::{parse_kinds, tiles_of};

    fn counts(labels: &str) -> TileCounts {
        TileCounts::from_kinds(parse_kinds(labels).unwrap())
    }

    #[test]
    fn test_four_triplets_and_pair() {
        let hand = counts("1D 1D 1D 5D 5D 5D 9B 9B 9B Red Red Red White White");
        assert!(is_complete(&hand, 0));
    }

    #[test]
    fn test_runs_and_pair() {
        let hand = counts("1D 2D 3D 4D 5D 6D 7B 8B 9B 2B 3B 4B Green Green");
        assert!(is_complete(&hand, 0));
    }

    #[test]
    fn test_one_tile_short() {
        let hand = counts("1D 1D 1D 5D 5D 5D 9B 9B 9B Red Red Red White");
        assert!(!is_complete(&hand, 0));
    }

    #[test]
    fn test_wrong_size_is_rejected_early() {
        let hand = counts("1D 1D 1D 5D 5D 5D 9B 9B 9B Red Red Red White White");
        assert!(!is_complete(&hand, 1));
    }

    #[test]
    fn test_with_melds() {
        let hand = counts("2B 3B 4B White White");
        assert!(is_complete(&hand, 3));

        let hand = counts("White White");
        assert!(is_complete(&hand, 4));
    }

    #[test]
    fn test_dragons_never_run() {
        let hand = counts("Red Green White 1D 1D 1D 2D 2D 2D 3D 3D 3D 4D 4D");
        assert!(!is_complete(&hand, 0));
    }

    #[test]
    fn test_no_wraparound() {
        let hand = counts("8D 9D 1D 2B 2B 2B 3B 3B 3B 4B 4B 4B 5B 5B");
        assert!(!is_complete(&hand, 0));
    }

    #[test]
    fn test_needs_backtracking() {
        // Only the 5D pair works; the 1D and 9D triplets must stay whole.
        let hand = counts("1D 1D 1D 2D 3D 4D 5D 6D 7D 8D 9D 9D 9D 5D");
        assert!(is_complete(&hand, 0));
    }

    #[test]
    fn test_no_pair() {
        let hand = counts("1D 2D 3D 4D 5D 6D 7D 8D 9D 1B 2B 3B 4B 6B");
        assert!(!is_complete(&hand, 0));
    }

    #[test]
    fn test_wins_with() {
        let kinds = parse_kinds("4D 6D 1B 1B 1B 2B 2B 2B 3B 3B 3B Red Red").unwrap();
        let hand = tiles_of(&kinds);
        assert!(wins_with(&hand, 0, TileKind::dots(5)));
        assert!(!wins_with(&hand, 0, TileKind::dots(7)));
        assert!(!is_winning_hand(&hand, 0));
    }
}
