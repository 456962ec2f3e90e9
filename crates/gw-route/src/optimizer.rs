//! `RouteOptimizer` and its result type.

use gw_core::{Coord, GridModel};
use gw_spatial::{DistanceOracle, Path, PathFinder};
use tracing::debug;

use crate::legs::{Legs, Tour};
use crate::{exact, greedy};
use crate::{RouteConfig, RouteError, RouteObserver, RouteQuery, RouteResult};

// ── Strategy ──────────────────────────────────────────────────────────────────

/// How the visiting order was chosen.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strategy {
    /// Empty must-visit set: straight to the nearest terminal.
    Direct,
    /// Bitmask DP; the order is optimal.
    Exact,
    /// Nearest-neighbour heuristic; the order is an approximation.
    Greedy,
}

// ── RoutePlan ─────────────────────────────────────────────────────────────────

/// A complete walk from the origin through every must-visit point to one
/// terminal.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoutePlan {
    /// One continuous walk, no immediately repeated coordinate.
    pub path:        Path,
    /// Must-visit points in the order they are visited.
    pub visit_order: Vec<Coord>,
    /// The terminal the walk ends on.
    pub terminal:    Coord,
    /// Hop count of `path`.
    pub total_hops:  u32,
    pub strategy:    Strategy,
}

// ── RouteOptimizer ────────────────────────────────────────────────────────────

/// Fixed-start, free-terminal Hamiltonian-path optimizer over a
/// [`DistanceOracle`].
///
/// # Example
///
/// ```rust,ignore
/// let grid = GridModel::from_rows(&["....", "....", "...."])?;
/// let mut oracle = DistanceOracle::new(&grid);
/// let query = RouteQuery::new(origin, must_visit, terminals);
/// let plan = RouteOptimizer::default().optimize(&query, &mut oracle, &mut NoopObserver)?;
/// ```
#[derive(Clone, Debug, Default)]
pub struct RouteOptimizer {
    config: RouteConfig,
}

impl RouteOptimizer {
    pub fn new(config: RouteConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RouteConfig {
        &self.config
    }

    /// Strategy that a must-visit set of size `k` will use.
    pub fn strategy_for(&self, k: usize) -> Strategy {
        match k {
            0 => Strategy::Direct,
            k if k <= self.config.effective_threshold() => Strategy::Exact,
            _ => Strategy::Greedy,
        }
    }

    /// Plan the cheapest walk for `query`.
    ///
    /// Precondition errors are raised before the oracle is touched.  Any
    /// unreachable required leg fails the whole query; no partial route is
    /// ever returned.
    pub fn optimize<F: PathFinder, O: RouteObserver>(
        &self,
        query:    &RouteQuery,
        oracle:   &mut DistanceOracle<'_, F>,
        observer: &mut O,
    ) -> RouteResult<RoutePlan> {
        let result = self.run(query, oracle, observer);
        match &result {
            Ok(plan) => observer.on_complete(plan),
            Err(e) => observer.on_failure(e),
        }
        result
    }

    fn run<F: PathFinder, O: RouteObserver>(
        &self,
        query:    &RouteQuery,
        oracle:   &mut DistanceOracle<'_, F>,
        observer: &mut O,
    ) -> RouteResult<RoutePlan> {
        check_preconditions(query, oracle.grid())?;

        let k = query.must_visit().len();
        let strategy = self.strategy_for(k);
        observer.on_strategy(strategy, k);

        if strategy == Strategy::Direct {
            let path = oracle
                .nearest(query.origin(), query.terminals())
                .ok_or(RouteError::Unreachable)?;
            observer.on_step(path.start(), path.end(), path.hops());
            return Ok(RoutePlan {
                terminal:    path.end(),
                total_hops:  path.hops(),
                visit_order: Vec::new(),
                path,
                strategy,
            });
        }

        oracle.prime(&query.points());
        let legs = Legs::collect(oracle, query.origin(), query.must_visit(), query.terminals())?;

        let tour = match strategy {
            Strategy::Exact => exact::solve(&legs, observer),
            _ => greedy::solve(&legs),
        }
        .ok_or(RouteError::Unreachable)?;

        debug!(?strategy, cost = tour.cost, order = ?tour.order, "visiting order chosen");

        let plan = assemble(query, oracle, &tour, strategy, observer)?;
        verify(query, &plan, tour.cost)?;
        Ok(plan)
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn check_preconditions(query: &RouteQuery, grid: &GridModel) -> RouteResult<()> {
    if query.terminals().is_empty() {
        return Err(RouteError::NoTerminals);
    }
    if !grid.in_bounds(query.origin()) {
        return Err(RouteError::OriginOutOfBounds(query.origin()));
    }
    if let Some(&c) = query.must_visit().iter().find(|&&c| !grid.in_bounds(c)) {
        return Err(RouteError::MustVisitOutOfBounds(c));
    }
    if let Some(&c) = query.terminals().iter().find(|&&c| !grid.in_bounds(c)) {
        return Err(RouteError::TerminalOutOfBounds(c));
    }
    Ok(())
}

/// Turn a tour into waypoints and stitch the cached legs between them.
fn assemble<F: PathFinder, O: RouteObserver>(
    query:    &RouteQuery,
    oracle:   &DistanceOracle<'_, F>,
    tour:     &Tour,
    strategy: Strategy,
    observer: &mut O,
) -> RouteResult<RoutePlan> {
    let visit_order: Vec<Coord> = tour.order.iter().map(|&i| query.must_visit()[i]).collect();
    let terminal = query.terminals()[tour.terminal];

    let mut path = Path::single(query.origin());
    let mut from = query.origin();
    for to in visit_order.iter().copied().chain(std::iter::once(terminal)) {
        let leg = oracle.lookup(from, to)?.ok_or(RouteError::Unreachable)?;
        observer.on_step(from, to, leg.hops());
        path.append_leg(leg)?;
        from = to;
    }

    Ok(RoutePlan {
        total_hops: path.hops(),
        path,
        visit_order,
        terminal,
        strategy,
    })
}

/// Post-conditions every plan must meet.  A failure here means the oracle
/// or the ordering disagreed with itself.
fn verify(query: &RouteQuery, plan: &RoutePlan, expected_cost: u64) -> RouteResult<()> {
    if plan.path.start() != query.origin() {
        return Err(RouteError::Inconsistent(format!(
            "path starts at {} instead of the origin {}",
            plan.path.start(),
            query.origin()
        )));
    }
    if !query.terminals().contains(&plan.path.end()) {
        return Err(RouteError::Inconsistent(format!(
            "path ends at {}, which is not a terminal",
            plan.path.end()
        )));
    }
    let mut seen = plan.visit_order.clone();
    seen.sort_unstable();
    let mut wanted = query.must_visit().to_vec();
    wanted.sort_unstable();
    if seen != wanted {
        return Err(RouteError::Inconsistent("visit order is not a permutation of the must-visit set".into()));
    }
    if let Some(missed) = query.must_visit().iter().find(|&&c| !plan.path.contains(c)) {
        return Err(RouteError::Inconsistent(format!("path never reaches {missed}")));
    }
    if u64::from(plan.total_hops) != expected_cost {
        return Err(RouteError::Inconsistent(format!(
            "stitched path has {} hops but the tour costs {expected_cost}",
            plan.total_hops
        )));
    }
    Ok(())
}
