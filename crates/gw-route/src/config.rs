//! Optimizer configuration.

/// Knobs for [`RouteOptimizer`][crate::RouteOptimizer].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteConfig {
    /// Largest must-visit count solved exactly.  Above it the greedy
    /// nearest-neighbour heuristic is used.
    ///
    /// Clamped to [`RouteConfig::MAX_EXACT_THRESHOLD`]; the DP table holds
    /// `k × 2^k` states.
    pub exact_threshold: usize,
}

impl RouteConfig {
    /// Hard ceiling on the exact branch (20 → ~21 M states).
    pub const MAX_EXACT_THRESHOLD: usize = 20;

    /// Threshold actually applied.
    pub fn effective_threshold(&self) -> usize {
        self.exact_threshold.min(Self::MAX_EXACT_THRESHOLD)
    }
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self { exact_threshold: 12 }
    }
}
