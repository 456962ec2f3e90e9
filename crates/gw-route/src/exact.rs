//! Exact visiting order by bitmask dynamic programming.
//!
//! State `(mask, pos)`: the must-visit points in `mask` are done and we stand
//! on `must_visit[pos]` (`pos ∈ mask`).  `cost(mask, pos)` is the cheapest
//! completion from there:
//!
//! ```text
//! cost(full, pos) = min_t  to_terminal[pos][t]
//! cost(mask, pos) = min_j∉mask  between[pos][j] + cost(mask | 1<<j, j)
//! answer          = min_j  from_origin[j] + cost(1<<j, j)
//! ```
//!
//! Every transition adds a bit, so sweeping masks from `full` down to `1`
//! solves each state once, after all states it depends on.  The table holds
//! `2^k × k` costs plus the arg-min choice used to replay the optimum.

use crate::legs::{INF, Legs, Tour};
use crate::RouteObserver;

/// Sentinel for "no choice recorded".
const NONE: u32 = u32::MAX;

/// Solve `legs` exactly.  `None` if no order reaches a terminal.
///
/// `legs.k` must be between 1 and 20.
pub(crate) fn solve<O: RouteObserver>(legs: &Legs, observer: &mut O) -> Option<Tour> {
    let k = legs.k;
    debug_assert!((1..=20).contains(&k));

    let full: usize = (1 << k) - 1;
    let slot = |mask: usize, pos: usize| mask * k + pos;

    let mut cost = vec![INF; (full + 1) * k];
    // For full masks `choice` holds the terminal index; otherwise the next
    // must-visit index.
    let mut choice = vec![NONE; (full + 1) * k];

    for pos in 0..k {
        if let Some((t, c)) = legs.best_terminal(pos) {
            cost[slot(full, pos)] = c;
            choice[slot(full, pos)] = t as u32;
        }
        observer.on_state_solved(full as u32, pos, finite(cost[slot(full, pos)]));
    }

    for mask in (1..full).rev() {
        for pos in (0..k).filter(|&p| mask & (1 << p) != 0) {
            let mut best = INF;
            let mut best_next = NONE;
            for next in (0..k).filter(|&j| mask & (1 << j) == 0) {
                let leg = legs.between(pos, next);
                let rest = cost[slot(mask | (1 << next), next)];
                if leg == INF || rest == INF {
                    continue;
                }
                if leg + rest < best {
                    best = leg + rest;
                    best_next = next as u32;
                }
            }
            cost[slot(mask, pos)] = best;
            choice[slot(mask, pos)] = best_next;
            observer.on_state_solved(mask as u32, pos, finite(best));
        }
    }

    let mut total = INF;
    let mut first = 0;
    for j in 0..k {
        let leg = legs.from_origin[j];
        let rest = cost[slot(1 << j, j)];
        if leg != INF && rest != INF && leg + rest < total {
            total = leg + rest;
            first = j;
        }
    }
    if total == INF {
        return None;
    }

    let mut order = Vec::with_capacity(k);
    let (mut mask, mut pos) = (1usize << first, first);
    order.push(first);
    while mask != full {
        let next = choice[slot(mask, pos)] as usize;
        order.push(next);
        mask |= 1 << next;
        pos = next;
    }

    Some(Tour { order, terminal: choice[slot(full, pos)] as usize, cost: total })
}

#[inline]
fn finite(c: u64) -> Option<u64> {
    (c != INF).then_some(c)
}
