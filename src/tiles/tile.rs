//! Tile vocabulary: suits, kinds and physical tiles.
//!
//! A `TileKind` is what the rules care about: a suit and a rank.
//! A `Tile` is one of the four physical copies of a kind, carrying a
//! `TileId` so a front end can track it across reorderings.
//!
//! Tile labels used in `Display`/`FromStr`:
//! - Dots: `1D` .. `9D`
//! - Bamboo: `1B` .. `9B`
//! - Dragons: `Red`, `Green`, `White`

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of distinct tile kinds (9 + 9 + 3).
pub const KIND_COUNT: usize = 21;

/// Physical copies of each kind.
pub const COPIES_PER_KIND: usize = 4;

/// Total tiles in a deck.
pub const DECK_SIZE: usize = KIND_COUNT * COPIES_PER_KIND;

/// Tile category. Declaration order is the canonical display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    Dots,
    Bamboo,
    /// Honor category: Red (1), Green (2), White (3). Never forms runs.
    Dragons,
}

impl Suit {
    /// The two numbered suits.
    pub const NUMBERED: [Suit; 2] = [Suit::Dots, Suit::Bamboo];

    /// Can this suit form runs?
    #[must_use]
    pub const fn is_numbered(self) -> bool {
        !matches!(self, Suit::Dragons)
    }

    /// Number of ranks in this suit.
    #[must_use]
    pub const fn rank_count(self) -> u8 {
        match self {
            Suit::Dots | Suit::Bamboo => 9,
            Suit::Dragons => 3,
        }
    }

    const fn base(self) -> usize {
        match self {
            Suit::Dots => 0,
            Suit::Bamboo => 9,
            Suit::Dragons => 18,
        }
    }
}

/// A tile kind: suit plus rank. The only thing rule evaluation looks at.
///
/// Field order gives the canonical ordering (suit, then rank). Decoding
/// goes through [`TileKind::new`], so an out-of-range rank is a decode error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawTileKind")]
pub struct TileKind {
    suit: Suit,
    rank: u8,
}

impl TileKind {
    pub const RED: TileKind = TileKind { suit: Suit::Dragons, rank: 1 };
    pub const GREEN: TileKind = TileKind { suit: Suit::Dragons, rank: 2 };
    pub const WHITE: TileKind = TileKind { suit: Suit::Dragons, rank: 3 };

    /// Create a kind, validating the rank for the suit.
    #[must_use]
    pub const fn new(suit: Suit, rank: u8) -> Option<Self> {
        if rank >= 1 && rank <= suit.rank_count() {
            Some(Self { suit, rank })
        } else {
            None
        }
    }

    /// A Dots kind. Panics on a rank outside 1..=9.
    #[must_use]
    pub const fn dots(rank: u8) -> Self {
        assert!(rank >= 1 && rank <= 9, "rank must be 1-9");
        Self { suit: Suit::Dots, rank }
    }

    /// A Bamboo kind. Panics on a rank outside 1..=9.
    #[must_use]
    pub const fn bamboo(rank: u8) -> Self {
        assert!(rank >= 1 && rank <= 9, "rank must be 1-9");
        Self { suit: Suit::Bamboo, rank }
    }

    #[must_use]
    pub const fn suit(self) -> Suit {
        self.suit
    }

    #[must_use]
    pub const fn rank(self) -> u8 {
        self.rank
    }

    /// Dense index in `0..KIND_COUNT`, canonical order.
    #[must_use]
    pub const fn index(self) -> usize {
        self.suit.base() + self.rank as usize - 1
    }

    /// Inverse of [`TileKind::index`].
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        let (suit, base) = match index {
            0..=8 => (Suit::Dots, 0),
            9..=17 => (Suit::Bamboo, 9),
            18..=20 => (Suit::Dragons, 18),
            _ => return None,
        };
        Some(Self {
            suit,
            rank: (index - base + 1) as u8,
        })
    }

    /// All kinds in canonical order.
    pub fn all() -> impl Iterator<Item = TileKind> {
        (0..KIND_COUNT).filter_map(TileKind::from_index)
    }

    /// Same-suit kind `offset` ranks away, for numbered suits only.
    #[must_use]
    pub fn offset(self, offset: i8) -> Option<TileKind> {
        if !self.suit.is_numbered() {
            return None;
        }
        let rank = self.rank as i8 + offset;
        if (1..=9).contains(&rank) {
            TileKind::new(self.suit, rank as u8)
        } else {
            None
        }
    }

    /// The run starting at this kind, if one is geometrically possible.
    ///
    /// Only numbered suits with rank <= 7 start a run; there is no wraparound.
    #[must_use]
    pub fn run_from(self) -> Option<[TileKind; 3]> {
        if self.suit.is_numbered() && self.rank <= 7 {
            Some([
                self,
                TileKind { suit: self.suit, rank: self.rank + 1 },
                TileKind { suit: self.suit, rank: self.rank + 2 },
            ])
        } else {
            None
        }
    }
}

impl fmt::Display for TileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.suit {
            Suit::Dots => write!(f, "{}D", self.rank),
            Suit::Bamboo => write!(f, "{}B", self.rank),
            Suit::Dragons => f.write_str(match self.rank {
                1 => "Red",
                2 => "Green",
                _ => "White",
            }),
        }
    }
}

#[derive(Deserialize)]
struct RawTileKind {
    suit: Suit,
    rank: u8,
}

impl TryFrom<RawTileKind> for TileKind {
    type Error = InvalidTile;

    fn try_from(raw: RawTileKind) -> Result<Self, Self::Error> {
        TileKind::new(raw.suit, raw.rank).ok_or(InvalidTile::Rank {
            suit: raw.suit,
            rank: raw.rank,
        })
    }
}

/// A decoded tile that no deck could contain.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InvalidTile {
    /// Rank outside the suit's range.
    Rank { suit: Suit, rank: u8 },
    /// Identity outside the deck, or belonging to another kind.
    Identity { kind: TileKind, id: u8 },
}

impl fmt::Display for InvalidTile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidTile::Rank { suit, rank } => write!(f, "no rank {} in {:?}", rank, suit),
            InvalidTile::Identity { kind, id } => {
                write!(f, "tile #{} is not a copy of {}", id, kind)
            }
        }
    }
}

impl std::error::Error for InvalidTile {}

/// Error parsing a tile label.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseTileError {
    pub input: String,
}

impl fmt::Display for ParseTileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid tile label '{}'", self.input)
    }
}

impl std::error::Error for ParseTileError {}

impl FromStr for TileKind {
    type Err = ParseTileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseTileError { input: s.to_string() };
        match s {
            "Red" => return Ok(TileKind::RED),
            "Green" => return Ok(TileKind::GREEN),
            "White" => return Ok(TileKind::WHITE),
            _ => {}
        }

        let mut chars = s.chars();
        let (Some(digit), Some(letter), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(err());
        };
        let rank = digit.to_digit(10).ok_or_else(err)? as u8;
        let suit = match letter {
            'D' => Suit::Dots,
            'B' => Suit::Bamboo,
            _ => return Err(err()),
        };
        TileKind::new(suit, rank).ok_or_else(err)
    }
}

/// Parse a whitespace-separated list of tile labels.
///
/// ```
/// use gap_five::tiles::{parse_kinds, TileKind};
///
/// let kinds = parse_kinds("4D 6D Red").unwrap();
/// assert_eq!(kinds, vec![TileKind::dots(4), TileKind::dots(6), TileKind::RED]);
/// ```
pub fn parse_kinds(labels: &str) -> Result<Vec<TileKind>, ParseTileError> {
    labels.split_whitespace().map(str::parse).collect()
}

/// Identity of one physical tile, `0..DECK_SIZE`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TileId(pub u8);

impl TileId {
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }
}

/// A physical tile.
///
/// Ordering is canonical: by kind, then identity (deterministic tie-break).
/// Decoding checks the identity against the deck layout of [`Tile::copy_of`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawTile")]
pub struct Tile {
    pub kind: TileKind,
    pub id: TileId,
}

impl Tile {
    /// The `copy`-th physical tile of a kind, using the deck's id layout.
    #[must_use]
    pub const fn copy_of(kind: TileKind, copy: usize) -> Self {
        Self {
            kind,
            id: TileId((kind.index() * COPIES_PER_KIND + copy) as u8),
        }
    }

    /// Does this tile match the given kind? Identity is ignored.
    #[must_use]
    pub fn is(&self, kind: TileKind) -> bool {
        self.kind == kind
    }
}

#[derive(Deserialize)]
struct RawTile {
    kind: TileKind,
    id: TileId,
}

impl TryFrom<RawTile> for Tile {
    type Error = InvalidTile;

    fn try_from(raw: RawTile) -> Result<Self, Self::Error> {
        let id = raw.id.raw() as usize;
        if id < DECK_SIZE && id / COPIES_PER_KIND == raw.kind.index() {
            Ok(Tile { kind: raw.kind, id: raw.id })
        } else {
            Err(InvalidTile::Identity { kind: raw.kind, id: raw.id.raw() })
        }
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.kind.fmt(f)
    }
}

/// Physical tiles for a list of kinds, giving repeated kinds distinct copies.
///
/// Panics if a kind appears more than four times.
///
/// ```
/// use gap_five::tiles::{tiles_of, TileKind};
///
/// let tiles = tiles_of(&[TileKind::RED, TileKind::RED]);
/// assert_ne!(tiles[0].id, tiles[1].id);
/// ```
#[must_use]
pub fn tiles_of(kinds: &[TileKind]) -> Vec<Tile> {
    let mut used = [0usize; KIND_COUNT];
    kinds
        .iter()
        .map(|&kind| {
            let copy = used[kind.index()];
            assert!(copy < COPIES_PER_KIND, "more than four copies of {kind}");
            used[kind.index()] += 1;
            Tile::copy_of(kind, copy)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_rejects_impossible_tiles() {
        let five = Tile::copy_of(TileKind::dots(5), 2);
        let json = serde_json::to_string(&five).unwrap();
        assert_eq!(serde_json::from_str::<Tile>(&json).unwrap(), five);

        let zero_rank = json.replace("\"rank\":5", "\"rank\":0");
        assert!(serde_json::from_str::<Tile>(&zero_rank).is_err());
        let white_four = r#"{"suit":"Dragons","rank":4}"#;
        assert!(serde_json::from_str::<TileKind>(white_four).is_err());

        let foreign_id = json.replace(&format!("\"id\":{}", five.id.raw()), "\"id\":0");
        assert!(serde_json::from_str::<Tile>(&foreign_id).is_err());
        let past_deck = json.replace(&format!("\"id\":{}", five.id.raw()), "\"id\":200");
        assert!(serde_json::from_str::<Tile>(&past_deck).is_err());
    }

    #[test]
    fn test_kind_index_roundtrip() {
        for (i, kind) in TileKind::all().enumerate() {
            assert_eq!(kind.index(), i);
            assert_eq!(TileKind::from_index(i), Some(kind));
        }
        assert_eq!(TileKind::all().count(), KIND_COUNT);
        assert_eq!(TileKind::from_index(KIND_COUNT), None);
    }

    #[test]
    fn test_canonical_order() {
        assert!(TileKind::dots(9) < TileKind::bamboo(1));
        assert!(TileKind::bamboo(9) < TileKind::RED);
        assert!(TileKind::RED < TileKind::WHITE);
    }

    #[test]
    fn test_new_validates_rank() {
        assert!(TileKind::new(Suit::Dots, 0).is_none());
        assert!(TileKind::new(Suit::Bamboo, 10).is_none());
        assert!(TileKind::new(Suit::Dragons, 4).is_none());
        assert_eq!(TileKind::new(Suit::Dragons, 2), Some(TileKind::GREEN));
    }

    #[test]
    fn test_run_from() {
        assert!(TileKind::dots(7).run_from().is_some());
        assert!(TileKind::dots(8).run_from().is_none());
        assert!(TileKind::bamboo(9).run_from().is_none());
        assert!(TileKind::RED.run_from().is_none());
    }

    #[test]
    fn test_offset() {
        assert_eq!(TileKind::dots(4).offset(2), Some(TileKind::dots(6)));
        assert_eq!(TileKind::dots(1).offset(-1), None);
        assert_eq!(TileKind::GREEN.offset(1), None);
    }

    #[test]
    fn test_labels() {
        assert_eq!(TileKind::dots(5).to_string(), "5D");
        assert_eq!(TileKind::bamboo(1).to_string(), "1B");
        assert_eq!(TileKind::WHITE.to_string(), "White");

        for kind in TileKind::all() {
            assert_eq!(kind.to_string().parse::<TileKind>(), Ok(kind));
        }
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("0D".parse::<TileKind>().is_err());
        assert!("5X".parse::<TileKind>().is_err());
        assert!("55D".parse::<TileKind>().is_err());
        assert!("".parse::<TileKind>().is_err());
        assert!(parse_kinds("1D Blue").is_err());
    }

    #[test]
    fn test_tiles_of_assigns_copies() {
        let red = TileKind::RED;
        let tiles = tiles_of(&[red, red, red, red]);
        let mut ids: Vec<_> = tiles.iter().map(|t| t.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), 4);
    }

    #[test]
    #[should_panic(expected = "more than four copies")]
    fn test_tiles_of_fifth_copy() {
        let _ = tiles_of(&[TileKind::RED; 5]);
    }
}
