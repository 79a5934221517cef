//! Seat identification and per-seat data storage.
//!
//! ## Seat
//!
//! The table always has exactly three seats. Turn order is fixed:
//! `Upper → Lower → Human → Upper ...`. The round counter advances
//! each time the rotation wraps back to `Seat::FIRST`.
//!
//! ## SeatMap
//!
//! Per-seat storage backed by a fixed `[T; 3]` for O(1) access.
//! Supports iteration and indexing by `Seat`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Number of seats at the table.
pub const SEAT_COUNT: usize = 3;

/// One of the three fixed seats.
///
/// `Upper` and `Lower` are played by the engine's discard heuristic;
/// `Human` waits for external choices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Seat {
    /// Upper opponent. Opens every hand.
    Upper,
    /// Lower opponent.
    Lower,
    /// The human seat.
    Human,
}

impl Seat {
    /// All seats in rotation order.
    pub const ALL: [Seat; SEAT_COUNT] = [Seat::Upper, Seat::Lower, Seat::Human];

    /// The seat that opens the hand and whose turn starts a new round.
    pub const FIRST: Seat = Seat::Upper;

    /// Get the seat index (0-based, rotation order).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Seat::Upper => 0,
            Seat::Lower => 1,
            Seat::Human => 2,
        }
    }

    /// Seat at the given rotation index, if any.
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Seat> {
        match index {
            0 => Some(Seat::Upper),
            1 => Some(Seat::Lower),
            2 => Some(Seat::Human),
            _ => None,
        }
    }

    /// Next seat in rotation.
    ///
    /// ```
    /// use gap_five::core::Seat;
    ///
    /// assert_eq!(Seat::Upper.next(), Seat::Lower);
    /// assert_eq!(Seat::Human.next(), Seat::Upper);
    /// ```
    #[must_use]
    pub const fn next(self) -> Seat {
        match self {
            Seat::Upper => Seat::Lower,
            Seat::Lower => Seat::Human,
            Seat::Human => Seat::Upper,
        }
    }

    /// The other two seats, nearest first in rotation order.
    #[must_use]
    pub const fn others(self) -> [Seat; 2] {
        [self.next(), self.next().next()]
    }

    /// Is this the human seat?
    #[must_use]
    pub const fn is_human(self) -> bool {
        matches!(self, Seat::Human)
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Seat::Upper => "Upper",
            Seat::Lower => "Lower",
            Seat::Human => "Human",
        };
        f.write_str(name)
    }
}

/// Per-seat data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use gap_five::core::{Seat, SeatMap};
///
/// let mut discards: SeatMap<u32> = SeatMap::new(|_| 0);
/// discards[Seat::Lower] += 1;
///
/// assert_eq!(discards[Seat::Lower], 1);
/// assert_eq!(discards[Seat::Human], 0);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeatMap<T> {
    data: [T; SEAT_COUNT],
}

impl<T> SeatMap<T> {
    /// Create a new SeatMap with values from a factory function.
    pub fn new(factory: impl Fn(Seat) -> T) -> Self {
        Self {
            data: Seat::ALL.map(factory),
        }
    }

    /// Create a SeatMap from values given in rotation order.
    pub fn from_array(data: [T; SEAT_COUNT]) -> Self {
        Self { data }
    }

    /// Create a new SeatMap with all entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a seat's data.
    #[must_use]
    pub fn get(&self, seat: Seat) -> &T {
        &self.data[seat.index()]
    }

    /// Get a mutable reference to a seat's data.
    pub fn get_mut(&mut self, seat: Seat) -> &mut T {
        &mut self.data[seat.index()]
    }

    /// Iterate over (Seat, &T) pairs in rotation order.
    pub fn iter(&self) -> impl Iterator<Item = (Seat, &T)> {
        Seat::ALL.into_iter().zip(self.data.iter())
    }

    /// Iterate over (Seat, &mut T) pairs in rotation order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Seat, &mut T)> {
        Seat::ALL.into_iter().zip(self.data.iter_mut())
    }

    /// Iterate over values in rotation order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }
}

impl<T: Default> Default for SeatMap<T> {
    fn default() -> Self {
        Self::new(|_| T::default())
    }
}

impl<T> Index<Seat> for SeatMap<T> {
    type Output = T;

    fn index(&self, seat: Seat) -> &Self::Output {
        self.get(seat)
    }
}

impl<T> IndexMut<Seat> for SeatMap<T> {
    fn index_mut(&mut self, seat: Seat) -> &mut Self::Output {
        self.get_mut(seat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seat_rotation() {
        assert_eq!(Seat::Upper.next(), Seat::Lower);
        assert_eq!(Seat::Lower.next(), Seat::Human);
        assert_eq!(Seat::Human.next(), Seat::Upper);
    }

    #[test]
    fn test_seat_index_roundtrip() {
        for seat in Seat::ALL {
            assert_eq!(Seat::from_index(seat.index()), Some(seat));
        }
        assert_eq!(Seat::from_index(3), None);
    }

    #[test]
    fn test_others_nearest_first() {
        assert_eq!(Seat::Upper.others(), [Seat::Lower, Seat::Human]);
        assert_eq!(Seat::Human.others(), [Seat::Upper, Seat::Lower]);
    }

    #[test]
    fn test_seat_map_new() {
        let map: SeatMap<usize> = SeatMap::new(|s| s.index() * 10);

        assert_eq!(map[Seat::Upper], 0);
        assert_eq!(map[Seat::Lower], 10);
        assert_eq!(map[Seat::Human], 20);
    }

    #[test]
    fn test_seat_map_mutation() {
        let mut map: SeatMap<i32> = SeatMap::with_value(0);

        map[Seat::Lower] = 7;
        for (_, v) in map.iter_mut() {
            *v += 1;
        }

        assert_eq!(map[Seat::Upper], 1);
        assert_eq!(map[Seat::Lower], 8);
    }

    #[test]
    fn test_seat_map_iter_order() {
        let map = SeatMap::from_array(["a", "b", "c"]);
        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs, vec![(Seat::Upper, &"a"), (Seat::Lower, &"b"), (Seat::Human, &"c")]);
    }

    #[test]
    fn test_seat_map_serialization() {
        let map: SeatMap<i32> = SeatMap::new(|s| s.index() as i32 + 1);
        let json = serde_json::to_string(&map).unwrap();
        let deserialized: SeatMap<i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
    }
}
