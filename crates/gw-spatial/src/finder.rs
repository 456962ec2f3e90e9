//! Path-finder trait and default breadth-first implementation.
//!
//! # Pluggability
//!
//! `DistanceOracle` calls searches through the [`PathFinder`] trait, so an
//! application can swap in another engine (A*, jump-point search) without
//! touching the oracle or the optimizer.  Every move costs one hop, which
//! makes plain BFS optimal and the default [`BfsFinder`] sufficient.
//!
//! # Tie-breaking
//!
//! Neighbours are probed in [`gw_core::coord::PROBE_ORDER`] (+y, −y, +x, −x)
//! and a target ends the search the moment it is discovered.  Among targets
//! at equal hop count the first one discovered wins, and among equally short
//! walks the one built from earlier probes wins.  Both are deterministic.

use std::collections::VecDeque;

use rustc_hash::{FxHashMap, FxHashSet};

use gw_core::{Coord, GridModel};

use crate::Path;

// ── PathFinder trait ──────────────────────────────────────────────────────────

/// Pluggable shortest-path engine.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync` so the oracle can share one finder
/// across Rayon workers when the `parallel` feature is on.
pub trait PathFinder: Send + Sync {
    /// Shortest walk from `origin` to the nearest member of `targets`.
    ///
    /// Returns `None` if no target is reachable.  If `origin` is itself a
    /// target the trivial one-coordinate path is returned.
    fn find(&self, grid: &GridModel, origin: Coord, targets: &[Coord]) -> Option<Path>;

    /// Convenience wrapper for a single target.
    fn find_to(&self, grid: &GridModel, origin: Coord, target: Coord) -> Option<Path> {
        self.find(grid, origin, &[target])
    }
}

// ── BfsFinder ─────────────────────────────────────────────────────────────────

/// Level-order search over the 4-connected neighbour relation.
///
/// Expands only into cells for which [`GridModel::is_valid`] holds and
/// never re-enqueues a visited cell, so each call is O(cells) in time and
/// space.
#[derive(Copy, Clone, Debug, Default)]
pub struct BfsFinder;

impl PathFinder for BfsFinder {
    fn find(&self, grid: &GridModel, origin: Coord, targets: &[Coord]) -> Option<Path> {
        let targets: FxHashSet<Coord> = targets.iter().copied().collect();
        bfs(grid, origin, &targets)
    }
}

// ── BFS internals ─────────────────────────────────────────────────────────────

fn bfs(grid: &GridModel, origin: Coord, targets: &FxHashSet<Coord>) -> Option<Path> {
    if targets.contains(&origin) {
        return Some(Path::single(origin));
    }
    if targets.is_empty() {
        return None;
    }

    // parent[c] = cell that discovered c.  The origin maps to itself and
    // doubles as the visited set.
    let mut parent: FxHashMap<Coord, Coord> = FxHashMap::default();
    parent.insert(origin, origin);

    let mut frontier = VecDeque::from([origin]);

    while let Some(cur) = frontier.pop_front() {
        for next in cur.neighbours() {
            if !grid.is_valid(next) || parent.contains_key(&next) {
                continue;
            }
            parent.insert(next, cur);

            if targets.contains(&next) {
                return Some(reconstruct(&parent, origin, next));
            }
            frontier.push_back(next);
        }
    }

    None
}

fn reconstruct(parent: &FxHashMap<Coord, Coord>, origin: Coord, end: Coord) -> Path {
    let mut coords = vec![end];
    let mut cur = end;
    while cur != origin {
        cur = parent[&cur];
        coords.push(cur);
    }
    coords.reverse();
    Path::from_walk(coords)
}
