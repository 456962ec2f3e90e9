//! Integer grid coordinates.
//!
//! `Coord` is `Copy + Ord + Hash` so it works as a map key and sorts in
//! x-major order without ceremony.

use std::fmt;

/// Unit offsets probed at every search expansion: +y, −y, +x, −x.
///
/// Breadth-first tie-breaking depends on this order, so it is fixed.
pub const PROBE_ORDER: [(i32, i32); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

/// A cell position on the grid.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The coordinate shifted by `(dx, dy)`.
    #[inline]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self { x: self.x.wrapping_add(dx), y: self.y.wrapping_add(dy) }
    }

    /// The four 4-connected neighbours in [`PROBE_ORDER`].
    ///
    /// No bounds checking happens here; callers filter with
    /// [`GridModel::is_valid`][crate::GridModel::is_valid].
    #[inline]
    pub fn neighbours(self) -> impl Iterator<Item = Coord> {
        PROBE_ORDER.into_iter().map(move |(dx, dy)| self.offset(dx, dy))
    }

    /// `true` if `other` differs by exactly one unit along exactly one axis.
    #[inline]
    pub fn is_adjacent(self, other: Coord) -> bool {
        self.manhattan(other) == 1
    }

    /// Manhattan distance; a lower bound on the hop count between two cells.
    #[inline]
    pub fn manhattan(self, other: Coord) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

impl From<(i32, i32)> for Coord {
    #[inline]
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl From<Coord> for (i32, i32) {
    #[inline]
    fn from(c: Coord) -> Self {
        (c.x, c.y)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
