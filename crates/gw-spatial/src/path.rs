//! A walk over the grid.

use gw_core::Coord;

use crate::{SpatialError, SpatialResult};

/// Ordered, non-empty sequence of coordinates where consecutive entries are
/// 4-adjacent.
///
/// A single-coordinate path is valid and has zero hops.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    coords: Vec<Coord>,
}

impl Path {
    /// The zero-hop path that starts and ends at `at`.
    pub fn single(at: Coord) -> Self {
        Self { coords: vec![at] }
    }

    /// Validate `coords` and wrap them.
    pub fn new(coords: Vec<Coord>) -> SpatialResult<Self> {
        if coords.is_empty() {
            return Err(SpatialError::EmptyPath);
        }
        if let Some(w) = coords.windows(2).find(|w| !w[0].is_adjacent(w[1])) {
            return Err(SpatialError::Disjoint { from: w[0], to: w[1] });
        }
        Ok(Self { coords })
    }

    /// Wrap coordinates already known to form a walk (search output).
    pub(crate) fn from_walk(coords: Vec<Coord>) -> Self {
        debug_assert!(!coords.is_empty());
        debug_assert!(coords.windows(2).all(|w| w[0].is_adjacent(w[1])));
        Self { coords }
    }

    #[inline]
    pub fn start(&self) -> Coord {
        self.coords[0]
    }

    #[inline]
    pub fn end(&self) -> Coord {
        self.coords[self.coords.len() - 1]
    }

    /// Number of unit moves: coordinate count minus one.
    #[inline]
    pub fn hops(&self) -> u32 {
        (self.coords.len() - 1) as u32
    }

    /// `true` if start and end coincide and nothing was walked.
    pub fn is_trivial(&self) -> bool {
        self.coords.len() == 1
    }

    pub fn coords(&self) -> &[Coord] {
        &self.coords
    }

    pub fn into_coords(self) -> Vec<Coord> {
        self.coords
    }

    pub fn contains(&self, c: Coord) -> bool {
        self.coords.contains(&c)
    }

    /// Extend this path with `leg`, whose first coordinate must equal this
    /// path's last.  The shared junction appears once in the result.
    pub fn append_leg(&mut self, leg: &Path) -> SpatialResult<()> {
        if leg.start() != self.end() {
            return Err(SpatialError::LegMismatch { path_end: self.end(), leg_start: leg.start() });
        }
        self.coords.extend_from_slice(&leg.coords[1..]);
        Ok(())
    }
}

impl TryFrom<Vec<Coord>> for Path {
    type Error = SpatialError;

    fn try_from(coords: Vec<Coord>) -> SpatialResult<Self> {
        Path::new(coords)
    }
}

impl AsRef<[Coord]> for Path {
    fn as_ref(&self) -> &[Coord] {
        &self.coords
    }
}
