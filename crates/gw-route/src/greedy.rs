//! Nearest-neighbour visiting order.
//!
//! An approximation: each step moves to the closest unvisited must-visit
//! point (ties to the earlier one in input order), then to the closest
//! terminal.  O(k²) comparisons; no optimality guarantee.

use crate::legs::{INF, Legs, Tour};

/// `None` as soon as no unvisited point, or no terminal, is reachable from
/// the current position.
pub(crate) fn solve(legs: &Legs) -> Option<Tour> {
    let k = legs.k;
    let mut visited = vec![false; k];
    let mut order = Vec::with_capacity(k);
    let mut total: u64 = 0;
    let mut current: Option<usize> = None;

    for _ in 0..k {
        let mut best = INF;
        let mut best_next = None;
        for j in (0..k).filter(|&j| !visited[j]) {
            let c = match current {
                None => legs.from_origin[j],
                Some(i) => legs.between(i, j),
            };
            if c < best {
                best = c;
                best_next = Some(j);
            }
        }
        let next = best_next?;
        visited[next] = true;
        order.push(next);
        total += best;
        current = Some(next);
    }

    let (terminal, last_leg) = legs.best_terminal(current?)?;
    Some(Tour { order, terminal, cost: total + last_leg })
}
