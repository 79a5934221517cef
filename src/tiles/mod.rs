//! Tile & deck model: tile vocabulary, counts, melds, deck construction.
//!
//! Only `TileKind` matters for rules. `TileId` exists so a front end can
//! follow individual physical tiles and so a discard can name one of them.

pub mod counts;
pub mod deck;
pub mod meld;
pub mod tile;

pub use counts::TileCounts;
pub use deck::{build_deck, deal, rig_deck, shuffle, sorted, Deal, HAND_SIZE, LIVE_PILE_SIZE};
pub use meld::{ClaimSource, Meld, MeldKind};
pub use tile::{
    parse_kinds, tiles_of, InvalidTile, ParseTileError, Suit, Tile, TileId, TileKind,
    COPIES_PER_KIND, DECK_SIZE, KIND_COUNT,
};
