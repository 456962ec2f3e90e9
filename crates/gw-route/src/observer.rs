//! Optimizer observer trait for tracing and instrumentation.
//!
//! The optimizer is a pure computation; observers only watch.  Nothing an
//! observer does can change the result.

use gw_core::Coord;
use tracing::{debug, trace, warn};

use crate::{RouteError, RoutePlan, Strategy};

/// Callbacks invoked by [`RouteOptimizer::optimize`][crate::RouteOptimizer::optimize].
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
pub trait RouteObserver {
    /// Called once the strategy is chosen, before any ordering work.
    fn on_strategy(&mut self, _strategy: Strategy, _must_visit: usize) {}

    /// Called for each DP state once its cost is final (exact branch only).
    /// `cost` is `None` when the state cannot reach a terminal.
    fn on_state_solved(&mut self, _mask: u32, _pos: usize, _cost: Option<u64>) {}

    /// Called for each leg as the final path is stitched together.
    fn on_step(&mut self, _from: Coord, _to: Coord, _hops: u32) {}

    /// Called with the finished plan.
    fn on_complete(&mut self, _plan: &RoutePlan) {}

    /// Called instead of `on_complete` when optimization fails.
    fn on_failure(&mut self, _error: &RouteError) {}
}

/// A [`RouteObserver`] that does nothing.
pub struct NoopObserver;

impl RouteObserver for NoopObserver {}

/// Forwards optimizer progress to `tracing` events.
///
/// DP states are logged at `trace`, legs and strategy at `debug`.
#[derive(Default)]
pub struct TracingObserver {
    states: u64,
}

impl TracingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// DP states seen so far.
    pub fn states(&self) -> u64 {
        self.states
    }
}

impl RouteObserver for TracingObserver {
    fn on_strategy(&mut self, strategy: Strategy, must_visit: usize) {
        debug!(?strategy, must_visit, "route strategy chosen");
    }

    fn on_state_solved(&mut self, mask: u32, pos: usize, cost: Option<u64>) {
        self.states += 1;
        trace!(mask = format_args!("{mask:#b}"), pos, ?cost, "dp state");
    }

    fn on_step(&mut self, from: Coord, to: Coord, hops: u32) {
        debug!(%from, %to, hops, "leg");
    }

    fn on_complete(&mut self, plan: &RoutePlan) {
        debug!(
            hops = plan.total_hops,
            terminal = %plan.terminal,
            states = self.states,
            "route complete"
        );
    }

    fn on_failure(&mut self, error: &RouteError) {
        warn!(%error, "route failed");
    }
}
