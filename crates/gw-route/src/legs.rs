//! Dense leg-cost tables pulled from a primed oracle.
//!
//! Unreachable legs are stored as [`INF`].  Costs are `u64` so that a sum of
//! any number of finite `u32` hop counts cannot overflow.

use gw_core::Coord;
use gw_spatial::{DistanceOracle, PathFinder};

use crate::RouteResult;

pub(crate) const INF: u64 = u64::MAX;

/// Leg costs indexed by must-visit position `0..k` and terminal position
/// `0..t`.
pub(crate) struct Legs {
    pub k:           usize,
    pub t:           usize,
    /// origin → must_visit[j]
    pub from_origin: Vec<u64>,
    /// must_visit[i] → must_visit[j], row-major `i * k + j`
    pub between:     Vec<u64>,
    /// must_visit[i] → terminals[t], row-major `i * t + j`
    pub to_terminal: Vec<u64>,
}

impl Legs {
    /// Read every leg from `oracle`, which must already be primed with the
    /// origin, must-visit points, and terminals.
    pub fn collect<F: PathFinder>(
        oracle:     &DistanceOracle<'_, F>,
        origin:     Coord,
        must_visit: &[Coord],
        terminals:  &[Coord],
    ) -> RouteResult<Self> {
        let (k, t) = (must_visit.len(), terminals.len());
        let cost = |a: Coord, b: Coord| -> RouteResult<u64> {
            Ok(oracle.lookup_distance(a, b)?.map_or(INF, u64::from))
        };

        let mut from_origin = Vec::with_capacity(k);
        for &m in must_visit {
            from_origin.push(cost(origin, m)?);
        }

        let mut between = Vec::with_capacity(k * k);
        let mut to_terminal = Vec::with_capacity(k * t);
        for &a in must_visit {
            for &b in must_visit {
                between.push(cost(a, b)?);
            }
            for &term in terminals {
                to_terminal.push(cost(a, term)?);
            }
        }

        Ok(Self { k, t, from_origin, between, to_terminal })
    }

    #[inline]
    pub fn between(&self, i: usize, j: usize) -> u64 {
        self.between[i * self.k + j]
    }

    /// Cheapest terminal from must-visit `i`: `(terminal index, cost)`.
    /// Ties go to the earlier terminal.  `None` if none is reachable.
    pub fn best_terminal(&self, i: usize) -> Option<(usize, u64)> {
        let row = &self.to_terminal[i * self.t..(i + 1) * self.t];
        let mut best: Option<(usize, u64)> = None;
        for (ti, &c) in row.iter().enumerate() {
            if c != INF && best.is_none_or(|(_, b)| c < b) {
                best = Some((ti, c));
            }
        }
        best
    }
}

/// A visiting order with its chosen terminal and total cost.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Tour {
    /// Indices into the must-visit list, in visiting order.
    pub order:    Vec<usize>,
    /// Index into the terminal list.
    pub terminal: usize,
    pub cost:     u64,
}
