//! Memoised pairwise shortest paths over a set of points of interest.
//!
//! # Cache contract
//!
//! Entries are keyed by the *ordered* pair `(from, to)`.  The grid is
//! undirected, so `d(a, b) == d(b, a)` in practice, but nothing here relies
//! on that: each direction is searched on its own.
//!
//! A cached `None` means "searched and unreachable".  A pair absent from the
//! cache means "never searched"; the read-only accessors report that as
//! [`SpatialError::PairNotComputed`] instead of guessing a distance.
//!
//! Two ways to fill the cache:
//!
//! - [`prime`][DistanceOracle::prime]: eager, all N×(N−1) ordered pairs of a
//!   point set (parallel with the `parallel` feature).
//! - [`path`][DistanceOracle::path] / [`distance`][DistanceOracle::distance]:
//!   lazy, one search on first request.

use rustc_hash::FxHashMap;
use tracing::{debug, trace};

use gw_core::{Coord, GridModel};

use crate::{BfsFinder, Path, PathFinder, SpatialError, SpatialResult};

/// Pairwise distance service over one grid snapshot.
///
/// Membership of points in must-visit or terminal sets is irrelevant here;
/// the oracle answers for whatever pairs it is asked about.
pub struct DistanceOracle<'g, F: PathFinder = BfsFinder> {
    grid:     &'g GridModel,
    finder:   F,
    cache:    FxHashMap<(Coord, Coord), Option<Path>>,
    searches: usize,
}

impl<'g> DistanceOracle<'g, BfsFinder> {
    /// Oracle backed by the default breadth-first finder.
    pub fn new(grid: &'g GridModel) -> Self {
        Self::with_finder(grid, BfsFinder)
    }
}

impl<'g, F: PathFinder> DistanceOracle<'g, F> {
    pub fn with_finder(grid: &'g GridModel, finder: F) -> Self {
        Self {
            grid,
            finder,
            cache:    FxHashMap::default(),
            searches: 0,
        }
    }

    pub fn grid(&self) -> &'g GridModel {
        self.grid
    }

    /// Number of ordered pairs currently cached (self pairs included).
    pub fn cached_pairs(&self) -> usize {
        self.cache.len()
    }

    /// Number of searches run so far.
    pub fn searches(&self) -> usize {
        self.searches
    }

    /// Compute every ordered pair among `points` that is not cached yet.
    ///
    /// Duplicate points are ignored.  Self pairs are filled with the trivial
    /// path without a search.
    pub fn prime(&mut self, points: &[Coord]) {
        let mut unique: Vec<Coord> = Vec::with_capacity(points.len());
        for &p in points {
            if !unique.contains(&p) {
                unique.push(p);
            }
        }

        for &p in &unique {
            self.cache.entry((p, p)).or_insert_with(|| Some(Path::single(p)));
        }

        let missing: Vec<(Coord, Coord)> = unique
            .iter()
            .flat_map(|&a| unique.iter().map(move |&b| (a, b)))
            .filter(|&(a, b)| a != b && !self.cache.contains_key(&(a, b)))
            .collect();

        let count = missing.len();
        let grid = self.grid;
        let finder = &self.finder;

        #[cfg(not(feature = "parallel"))]
        let computed: Vec<((Coord, Coord), Option<Path>)> = missing
            .into_iter()
            .map(|(a, b)| ((a, b), finder.find_to(grid, a, b)))
            .collect();

        #[cfg(feature = "parallel")]
        let computed: Vec<((Coord, Coord), Option<Path>)> = {
            use rayon::prelude::*;

            missing
                .into_par_iter()
                .map(|(a, b)| ((a, b), finder.find_to(grid, a, b)))
                .collect()
        };

        let unreachable = computed.iter().filter(|(_, p)| p.is_none()).count();
        self.searches += count;
        self.cache.extend(computed);

        debug!(points = unique.len(), searched = count, unreachable, "primed distance oracle");
    }

    /// Shortest path `from → to`, searching on first request.
    pub fn path(&mut self, from: Coord, to: Coord) -> Option<&Path> {
        if !self.cache.contains_key(&(from, to)) {
            let found = if from == to {
                Some(Path::single(from))
            } else {
                self.searches += 1;
                self.finder.find_to(self.grid, from, to)
            };
            trace!(%from, %to, hops = ?found.as_ref().map(Path::hops), "oracle miss");
            self.cache.insert((from, to), found);
        }
        self.cache.get(&(from, to)).and_then(Option::as_ref)
    }

    /// Hop count `from → to`, searching on first request.  `None` means
    /// unreachable.
    pub fn distance(&mut self, from: Coord, to: Coord) -> Option<u32> {
        self.path(from, to).map(Path::hops)
    }

    /// Read-only lookup of a cached pair.
    ///
    /// `Ok(None)` is a computed "unreachable"; an uncached pair is an error.
    pub fn lookup(&self, from: Coord, to: Coord) -> SpatialResult<Option<&Path>> {
        self.cache
            .get(&(from, to))
            .map(Option::as_ref)
            .ok_or(SpatialError::PairNotComputed { from, to })
    }

    /// Read-only hop count of a cached pair.  See [`lookup`][Self::lookup].
    pub fn lookup_distance(&self, from: Coord, to: Coord) -> SpatialResult<Option<u32>> {
        self.lookup(from, to).map(|p| p.map(Path::hops))
    }

    /// One uncached multi-target search: shortest path from `origin` to the
    /// nearest member of `targets`.
    pub fn nearest(&self, origin: Coord, targets: &[Coord]) -> Option<Path> {
        self.finder.find(self.grid, origin, targets)
    }
}
