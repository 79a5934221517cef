//! Post-discard reports and the commentary seam.
//!
//! A `DiscardReport` is a flat, serializable record of one discard decision.
//! It is handed to a `Commentator`, which turns it into free text. The text
//! never feeds back into the game, and a failed commentator only changes what
//! the player reads.

mod coach;

pub use coach::LocalCoach;

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::{GameState, Seat, TurnEvent};
use crate::rules::{breaks_gap_candidate, has_gap_five_potential};
use crate::tiles::{Tile, TileCounts};

/// Responses slower than this are called out by commentators.
pub const SLOW_RESPONSE: Duration = Duration::from_millis(8000);

/// Everything a commentator needs to judge one discard.
///
/// Tiles are rendered as short labels (`"5D"`, `"7B"`, `"Red"`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscardReport {
    pub round: u32,
    pub seat: Seat,
    pub hand_before: Vec<String>,
    pub discarded: String,
    pub hand_after: Vec<String>,
    /// The seat's own discard pile, this discard included.
    pub own_discards: Vec<String>,
    pub opponent_discards: Vec<String>,
    pub latency_ms: u64,
    pub gap_five_before: bool,
    pub gap_five_after: bool,
    /// The discard was a 4 or 6 whose suit held both 4 and 6.
    pub broke_gap_candidate: bool,
    /// Copies of the discarded kind in the hand before discarding.
    pub copies_held: usize,
    pub deck_remaining: usize,
}

impl DiscardReport {
    /// Build the report for the discard `seat` made between two snapshots.
    ///
    /// Returns `None` if `after` does not extend `before` with a discard by
    /// `seat`.
    #[must_use]
    pub fn capture(
        before: &GameState,
        after: &GameState,
        seat: Seat,
        latency: Duration,
    ) -> Option<Self> {
        let tile = after
            .history
            .iter()
            .skip(before.history.len())
            .find_map(|record| match record.event {
                TurnEvent::Discarded(tile) if record.seat == seat => Some(tile),
                _ => None,
            })?;

        let player = before.player(seat);
        let hand_before = player.sorted_hand();
        if !hand_before.contains(&tile) {
            return None;
        }
        let hand_after: Vec<Tile> = hand_before.iter().copied().filter(|t| *t != tile).collect();

        let counts_before = TileCounts::from_tiles(&hand_before);
        let counts_after = TileCounts::from_tiles(&hand_after);

        Some(Self {
            round: before.round,
            seat,
            hand_before: labels(&hand_before),
            discarded: tile.to_string(),
            hand_after: labels(&hand_after),
            own_discards: labels(player.discards.iter().chain(std::iter::once(&tile))),
            opponent_discards: labels(before.opponent_discards(seat)),
            latency_ms: u64::try_from(latency.as_millis()).unwrap_or(u64::MAX),
            gap_five_before: has_gap_five_potential(&counts_before),
            gap_five_after: has_gap_five_potential(&counts_after),
            broke_gap_candidate: breaks_gap_candidate(&counts_before, tile),
            copies_held: usize::from(counts_before.get(tile.kind)),
            deck_remaining: before.deck.len(),
        })
    }

    #[must_use]
    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

fn labels<'a>(tiles: impl IntoIterator<Item = &'a Tile>) -> Vec<String> {
    tiles.into_iter().map(Tile::to_string).collect()
}

/// Failure of the external commentary service.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CommentaryError {
    /// The service could not be reached.
    Unavailable(String),
    /// The service answered with something unusable.
    Malformed(String),
}

impl fmt::Display for CommentaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommentaryError::Unavailable(msg) => write!(f, "commentary unavailable: {}", msg),
            CommentaryError::Malformed(msg) => write!(f, "malformed commentary: {}", msg),
        }
    }
}

impl std::error::Error for CommentaryError {}

/// Turns a discard report into free text.
pub trait Commentator {
    fn comment(&self, report: &DiscardReport) -> Result<String, CommentaryError>;
}

/// Shown in place of commentary when the service fails.
pub const FALLBACK_COMMENTARY: &str = "[Grade: ?] The coach walked out: network connection failed.";

/// Commentary prefixed with the response time, or the fallback line.
#[must_use]
pub fn commentary_or_fallback(commentator: &impl Commentator, report: &DiscardReport) -> String {
    let body = commentator
        .comment(report)
        .unwrap_or_else(|_| FALLBACK_COMMENTARY.to_string());
    format!("Took {:.2}s\n\n{}", report.latency().as_secs_f64(), body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TableConfig;
    use crate::engine::controller::{try_discard, try_draw};
    use crate::tiles::{parse_kinds, rig_deck, TileKind};

    const HUMAN: &str = "4D 6D 6D 9D 1B 2B 3B 7B 8B 9B Red Green White";
    const OTHER: &str = "1D 2D 3D 5D 7D 8D 4B 5B 6B 3B Red Green White";

    /// Human to act with `draw` in hand.
    fn human_to_discard(draw: &str) -> GameState {
        let other = parse_kinds(OTHER).unwrap();
        let human = parse_kinds(HUMAN).unwrap();
        let draws = parse_kinds(draw).unwrap();
        let deck = rig_deck([&other, &other, &human], &draws, &[]).unwrap();
        let mut state = GameState::from_deck(&TableConfig::default(), &deck);
        state.turn = Seat::Human;
        try_draw(&state, Seat::Human).unwrap()
    }

    fn discard_kind(state: &GameState, kind: TileKind) -> GameState {
        let tile = state
            .player(Seat::Human)
            .hand
            .iter()
            .find(|t| t.is(kind))
            .copied()
            .unwrap();
        try_discard(state, Seat::Human, tile.id).unwrap()
    }

    #[test]
    fn test_capture_keeping_gap() {
        let before = human_to_discard("1D");
        let after = discard_kind(&before, TileKind::dots(9));
        let latency = Duration::from_millis(1500);
        let report = DiscardReport::capture(&before, &after, Seat::Human, latency).unwrap();

        assert_eq!(report.discarded, "9D");
        assert_eq!(report.hand_before.len(), 14);
        assert_eq!(report.hand_after.len(), 13);
        assert_eq!(report.own_discards, vec!["9D".to_string()]);
        assert!(report.gap_five_before);
        assert!(report.gap_five_after);
        assert!(!report.broke_gap_candidate);
        assert_eq!(report.copies_held, 1);
        assert_eq!(report.deck_remaining, 44);
        assert_eq!(report.latency_ms, 1500);
    }

    #[test]
    fn test_capture_breaking_gap() {
        let before = human_to_discard("1D");
        let after = discard_kind(&before, TileKind::dots(4));
        let report = DiscardReport::capture(&before, &after, Seat::Human, Duration::ZERO).unwrap();

        assert!(report.broke_gap_candidate);
        assert!(report.gap_five_before);
        assert!(!report.gap_five_after);
    }

    #[test]
    fn test_capture_without_discard() {
        let before = human_to_discard("1D");
        assert!(DiscardReport::capture(&before, &before, Seat::Human, Duration::ZERO).is_none());
    }

    #[test]
    fn test_json_fields() {
        let before = human_to_discard("1D");
        let after = discard_kind(&before, TileKind::dots(9));
        let report = DiscardReport::capture(&before, &after, Seat::Human, Duration::ZERO).unwrap();

        let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(json["discarded"], "9D");
        assert_eq!(json["broke_gap_candidate"], false);
        assert_eq!(json["seat"], "Human");
    }

    struct Offline;

    impl Commentator for Offline {
        fn comment(&self, _: &DiscardReport) -> Result<String, CommentaryError> {
            Err(CommentaryError::Unavailable("connection refused".into()))
        }
    }

    struct Echo;

    impl Commentator for Echo {
        fn comment(&self, report: &DiscardReport) -> Result<String, CommentaryError> {
            Ok(format!("threw {}", report.discarded))
        }
    }

    #[test]
    fn test_commentary_or_fallback() {
        let before = human_to_discard("1D");
        let after = discard_kind(&before, TileKind::dots(9));
        let latency = Duration::from_millis(2350);
        let report = DiscardReport::capture(&before, &after, Seat::Human, latency).unwrap();

        assert_eq!(commentary_or_fallback(&Echo, &report), "Took 2.35s\n\nthrew 9D");
        assert_eq!(
            commentary_or_fallback(&Offline, &report),
            format!("Took 2.35s\n\n{}", FALLBACK_COMMENTARY)
        );
    }
}
