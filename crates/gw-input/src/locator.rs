//! Pulls the origin, terminal candidates, and must-visit set out of a
//! labelled grid.

use tracing::{debug, warn};

use gw_core::{Coord, GridModel};
use gw_route::RouteQuery;

use crate::{InputError, InputResult};

// ── Config ────────────────────────────────────────────────────────────────────

/// Which labels and categories mean what.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LocatorConfig {
    /// Label of the single origin cell.
    pub origin_label:          String,
    /// Label shared by all terminal candidates.
    pub terminal_label:        String,
    /// Structure categories that must be visited.
    pub must_visit_categories: Vec<i32>,
    /// Keep must-visit cells that are blocked.  Off by default: a blocked
    /// cell can never be stood on.
    pub include_blocked:       bool,
}

impl Default for LocatorConfig {
    fn default() -> Self {
        Self {
            origin_label:          "MyHome".into(),
            terminal_label:        "BandalgomCoffee".into(),
            must_visit_categories: vec![1, 2],
            include_blocked:       false,
        }
    }
}

// ── Results ───────────────────────────────────────────────────────────────────

/// Outcome of the origin search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OriginLookup {
    Found(Coord),
    Missing,
    /// More than one cell carries the origin label; all of them, in grid
    /// order.
    Ambiguous(Vec<Coord>),
}

/// Everything the locator found, before validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PointsOfInterest {
    pub origin:     OriginLookup,
    pub terminals:  Vec<Coord>,
    pub must_visit: Vec<Coord>,
}

impl PointsOfInterest {
    /// Validate and turn into a [`RouteQuery`].
    ///
    /// A missing or ambiguous origin and an empty terminal set are reported
    /// here, before any search is attempted.
    pub fn into_query(self) -> InputResult<RouteQuery> {
        let origin = match self.origin {
            OriginLookup::Found(c) => c,
            OriginLookup::Missing => return Err(InputError::MissingOrigin),
            OriginLookup::Ambiguous(coords) => return Err(InputError::AmbiguousOrigin(coords)),
        };
        if self.terminals.is_empty() {
            return Err(InputError::NoTerminals);
        }
        Ok(RouteQuery::new(origin, self.must_visit, self.terminals))
    }
}

// ── PointLocator ──────────────────────────────────────────────────────────────

#[derive(Clone, Debug, Default)]
pub struct PointLocator {
    config: LocatorConfig,
}

impl PointLocator {
    pub fn new(config: LocatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LocatorConfig {
        &self.config
    }

    /// Scan every recorded cell once, in grid order.
    pub fn locate(&self, grid: &GridModel) -> PointsOfInterest {
        let cfg = &self.config;
        let mut origins = Vec::new();
        let mut terminals = Vec::new();
        let mut must_visit = Vec::new();

        for (coord, attrs) in grid.cells() {
            match attrs.label.as_deref().map(str::trim) {
                Some(l) if l == cfg.origin_label => origins.push(coord),
                Some(l) if l == cfg.terminal_label => terminals.push(coord),
                _ => {}
            }
            let wanted = attrs
                .category
                .is_some_and(|c| cfg.must_visit_categories.contains(&c));
            if wanted && (cfg.include_blocked || !attrs.blocked) {
                must_visit.push(coord);
            }
        }

        let origin = match origins.len() {
            0 => OriginLookup::Missing,
            1 => OriginLookup::Found(origins[0]),
            n => {
                warn!(count = n, "origin label appears more than once");
                OriginLookup::Ambiguous(origins)
            }
        };

        debug!(
            ?origin,
            terminals = terminals.len(),
            must_visit = must_visit.len(),
            "points of interest located"
        );

        PointsOfInterest { origin, terminals, must_visit }
    }
}
