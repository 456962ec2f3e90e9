//! Unit tests for gw-spatial.
//!
//! All tests use hand-written or seeded synthetic grids, no files.

#[cfg(test)]
mod helpers {
    use gw_core::{Coord, GridBuilder, GridModel};
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    pub fn c(x: i32, y: i32) -> Coord {
        Coord::new(x, y)
    }

    /// `w`×`h` grid with roughly `density` of its cells blocked.
    pub fn random_grid(seed: u64, w: i32, h: i32, density: f64) -> GridModel {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut b = GridBuilder::new();
        for x in 0..w {
            for y in 0..h {
                b.add_cell(c(x, y), rng.gen_bool(density)).unwrap();
            }
        }
        b.build().unwrap()
    }

    /// Hop distance by repeated relaxation until nothing changes.  Slow and
    /// obviously correct; only for cross-checking the search.
    pub fn brute_force_hops(grid: &GridModel, from: Coord, to: Coord) -> Option<u32> {
        let cells: Vec<Coord> = {
            let b = grid.bounds();
            (b.min_x..=b.max_x)
                .flat_map(|x| (b.min_y..=b.max_y).map(move |y| c(x, y)))
                .filter(|&p| grid.is_valid(p))
                .collect()
        };
        let mut dist: std::collections::HashMap<Coord, u32> = Default::default();
        dist.insert(from, 0);
        loop {
            let mut changed = false;
            for &p in &cells {
                let best = [c(0, 1), c(0, -1), c(1, 0), c(-1, 0)]
                    .iter()
                    .filter_map(|d| dist.get(&c(p.x + d.x, p.y + d.y)))
                    .min()
                    .map(|d| d + 1);
                if let Some(nd) = best {
                    if dist.get(&p).is_none_or(|&cur| nd < cur) && p != from {
                        dist.insert(p, nd);
                        changed = true;
                    }
                }
            }
            if !changed {
                break;
            }
        }
        dist.get(&to).copied()
    }
}

// ── Path ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod path {
    use super::helpers::c;
    use crate::{Path, SpatialError};

    #[test]
    fn single_has_zero_hops() {
        let p = Path::single(c(3, 3));
        assert_eq!(p.hops(), 0);
        assert!(p.is_trivial());
        assert_eq!(p.start(), p.end());
    }

    #[test]
    fn new_rejects_empty_and_jumps() {
        assert!(matches!(Path::new(vec![]), Err(SpatialError::EmptyPath)));
        let err = Path::new(vec![c(0, 0), c(1, 1)]).unwrap_err();
        assert!(matches!(err, SpatialError::Disjoint { .. }));
        assert!(Path::new(vec![c(0, 0), c(0, 0)]).is_err());
    }

    #[test]
    fn append_leg_drops_junction() {
        let mut p = Path::new(vec![c(0, 0), c(1, 0)]).unwrap();
        let leg = Path::new(vec![c(1, 0), c(1, 1), c(1, 2)]).unwrap();
        p.append_leg(&leg).unwrap();
        assert_eq!(p.coords(), &[c(0, 0), c(1, 0), c(1, 1), c(1, 2)]);
        assert_eq!(p.hops(), 3);

        p.append_leg(&Path::single(c(1, 2))).unwrap();
        assert_eq!(p.hops(), 3);
    }

    #[test]
    fn append_leg_rejects_gap() {
        let mut p = Path::single(c(0, 0));
        let leg = Path::new(vec![c(5, 5), c(5, 6)]).unwrap();
        assert!(matches!(p.append_leg(&leg), Err(SpatialError::LegMismatch { .. })));
    }
}

// ── BFS ───────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod bfs {
    use gw_core::GridModel;

    use super::helpers::{brute_force_hops, c, random_grid};
    use crate::{BfsFinder, PathFinder};

    #[test]
    fn origin_in_targets_is_trivial() {
        let grid = GridModel::from_rows(&["..."]).unwrap();
        let p = BfsFinder.find(&grid, c(1, 0), &[c(2, 0), c(1, 0)]).unwrap();
        assert_eq!(p.coords(), &[c(1, 0)]);
        assert_eq!(p.hops(), 0);
    }

    #[test]
    fn open_3x3_corner_to_corner() {
        let grid = GridModel::from_rows(&["...", "...", "..."]).unwrap();
        let p = BfsFinder.find_to(&grid, c(0, 0), c(2, 2)).unwrap();
        assert_eq!(p.hops(), 4);
        // +y is probed first, so the walk climbs before it turns.
        assert_eq!(p.coords(), &[c(0, 0), c(0, 1), c(0, 2), c(1, 2), c(2, 2)]);
    }

    #[test]
    fn search_is_deterministic() {
        let grid = random_grid(7, 12, 12, 0.2);
        let a = BfsFinder.find_to(&grid, c(0, 0), c(11, 11));
        let b = BfsFinder.find_to(&grid, c(0, 0), c(11, 11));
        assert_eq!(a, b);
    }

    #[test]
    fn routes_around_centre_obstacle() {
        let grid = GridModel::from_rows(&["...", ".#.", "..."]).unwrap();
        let p = BfsFinder.find_to(&grid, c(0, 0), c(2, 2)).unwrap();
        assert_eq!(p.hops(), 4);
        assert!(!p.contains(c(1, 1)));
    }

    #[test]
    fn wall_forces_detour() {
        // y=1 row is walled except at x=2.
        let grid = GridModel::from_rows(&["...", "##.", "..."]).unwrap();
        let p = BfsFinder.find_to(&grid, c(0, 0), c(0, 2)).unwrap();
        assert_eq!(p.hops(), 6);
        assert!(p.coords().iter().all(|&q| grid.is_valid(q)));
    }

    #[test]
    fn enclosed_target_is_unreachable() {
        let grid = GridModel::from_rows(&[".....", "..#..", ".#.#.", "..#..", "....."]).unwrap();
        assert!(BfsFinder.find_to(&grid, c(0, 0), c(2, 2)).is_none());
    }

    #[test]
    fn blocked_target_is_unreachable() {
        let grid = GridModel::from_rows(&["..#"]).unwrap();
        assert!(BfsFinder.find_to(&grid, c(0, 0), c(2, 0)).is_none());
    }

    #[test]
    fn empty_target_set_is_unreachable() {
        let grid = GridModel::from_rows(&["..."]).unwrap();
        assert!(BfsFinder.find(&grid, c(0, 0), &[]).is_none());
    }

    #[test]
    fn nearest_of_several_targets() {
        let grid = GridModel::from_rows(&["....."]).unwrap();
        let p = BfsFinder.find(&grid, c(0, 0), &[c(4, 0), c(2, 0)]).unwrap();
        assert_eq!(p.end(), c(2, 0));
        assert_eq!(p.hops(), 2);
    }

    #[test]
    fn equidistant_targets_tie_break_by_probe_order() {
        let grid = GridModel::from_rows(&["...", "...", "..."]).unwrap();
        let p = BfsFinder.find(&grid, c(1, 1), &[c(2, 1), c(1, 2)]).unwrap();
        assert_eq!(p.end(), c(1, 2));
    }

    #[test]
    fn hops_match_brute_force_on_random_grids() {
        for seed in 0..20 {
            let grid = random_grid(seed, 8, 7, 0.3);
            let origin = c(0, 0);
            if !grid.is_valid(origin) {
                continue;
            }
            for x in 0..8 {
                for y in 0..7 {
                    let target = c(x, y);
                    let found = BfsFinder.find_to(&grid, origin, target);
                    let expected = if grid.is_valid(target) {
                        brute_force_hops(&grid, origin, target)
                    } else {
                        None
                    };
                    assert_eq!(found.as_ref().map(|p| p.hops()), expected, "seed {seed} target {target}");
                    if let Some(p) = found {
                        assert_eq!(p.start(), origin);
                        assert_eq!(p.end(), target);
                        assert!(p.coords().windows(2).all(|w| w[0].is_adjacent(w[1])));
                        assert!(p.coords().iter().all(|&q| grid.is_valid(q)));
                    }
                }
            }
        }
    }
}

// ── DistanceOracle ────────────────────────────────────────────────────────────

#[cfg(test)]
mod oracle {
    use gw_core::GridModel;

    use super::helpers::{c, random_grid};
    use crate::{DistanceOracle, SpatialError};

    #[test]
    fn prime_fills_all_ordered_pairs() {
        let grid = GridModel::from_rows(&["....", "....", "...."]).unwrap();
        let mut oracle = DistanceOracle::new(&grid);
        let points = [c(0, 0), c(3, 2), c(1, 1), c(3, 2)];
        oracle.prime(&points);
        // 3 unique points: 6 ordered pairs searched + 3 self pairs.
        assert_eq!(oracle.searches(), 6);
        assert_eq!(oracle.cached_pairs(), 9);
        assert_eq!(oracle.lookup_distance(c(0, 0), c(3, 2)).unwrap(), Some(5));
        assert_eq!(oracle.lookup_distance(c(1, 1), c(1, 1)).unwrap(), Some(0));

        // Re-priming the same set searches nothing new.
        oracle.prime(&points);
        assert_eq!(oracle.searches(), 6);
    }

    #[test]
    fn unknown_pair_is_an_error_not_a_distance() {
        let grid = GridModel::from_rows(&["...."]).unwrap();
        let mut oracle = DistanceOracle::new(&grid);
        oracle.prime(&[c(0, 0), c(1, 0)]);
        let err = oracle.lookup(c(0, 0), c(3, 0)).unwrap_err();
        assert!(matches!(err, SpatialError::PairNotComputed { .. }));
    }

    #[test]
    fn unreachable_pair_is_cached_as_none() {
        let grid = GridModel::from_rows(&[".#."]).unwrap();
        let mut oracle = DistanceOracle::new(&grid);
        oracle.prime(&[c(0, 0), c(2, 0)]);
        assert_eq!(oracle.lookup_distance(c(0, 0), c(2, 0)).unwrap(), None);
        assert!(oracle.lookup(c(2, 0), c(0, 0)).unwrap().is_none());
    }

    #[test]
    fn lazy_distance_memoises() {
        let grid = GridModel::from_rows(&["...", "...", "..."]).unwrap();
        let mut oracle = DistanceOracle::new(&grid);
        assert_eq!(oracle.distance(c(0, 0), c(2, 2)), Some(4));
        assert_eq!(oracle.distance(c(0, 0), c(2, 2)), Some(4));
        assert_eq!(oracle.searches(), 1);
        // The reverse direction is its own entry.
        assert!(oracle.lookup(c(2, 2), c(0, 0)).is_err());
        assert_eq!(oracle.distance(c(2, 2), c(0, 0)), Some(4));
        assert_eq!(oracle.searches(), 2);
    }

    #[test]
    fn self_distance_needs_no_search() {
        let grid = GridModel::from_rows(&["..."]).unwrap();
        let mut oracle = DistanceOracle::new(&grid);
        assert_eq!(oracle.distance(c(1, 0), c(1, 0)), Some(0));
        assert_eq!(oracle.searches(), 0);
    }

    #[test]
    fn distances_are_symmetric_on_random_grids() {
        for seed in 100..110 {
            let grid = random_grid(seed, 9, 9, 0.25);
            let points: Vec<_> = [c(0, 0), c(8, 8), c(4, 4), c(0, 8), c(8, 0), c(2, 6)]
                .into_iter()
                .filter(|&p| grid.is_valid(p))
                .collect();
            let mut oracle = DistanceOracle::new(&grid);
            oracle.prime(&points);
            for &a in &points {
                for &b in &points {
                    assert_eq!(
                        oracle.lookup_distance(a, b).unwrap(),
                        oracle.lookup_distance(b, a).unwrap(),
                        "seed {seed}: {a} vs {b}"
                    );
                }
            }
        }
    }

    #[test]
    fn nearest_uses_multi_target_search() {
        let grid = GridModel::from_rows(&["......"]).unwrap();
        let oracle = DistanceOracle::new(&grid);
        let p = oracle.nearest(c(0, 0), &[c(5, 0), c(3, 0)]).unwrap();
        assert_eq!(p.end(), c(3, 0));
        assert_eq!(oracle.cached_pairs(), 0);
    }
}
