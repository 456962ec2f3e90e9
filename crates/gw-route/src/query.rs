//! The question put to the optimizer.

use std::collections::HashSet;

use gw_core::Coord;

/// Start point, must-visit set, and terminal candidates.
///
/// Duplicates collapse on construction, keeping first-occurrence order.  That
/// order is the enumeration order used for tie-breaking.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteQuery {
    origin:     Coord,
    must_visit: Vec<Coord>,
    terminals:  Vec<Coord>,
}

impl RouteQuery {
    pub fn new(
        origin:     Coord,
        must_visit: impl IntoIterator<Item = Coord>,
        terminals:  impl IntoIterator<Item = Coord>,
    ) -> Self {
        Self {
            origin,
            must_visit: dedup(must_visit),
            terminals:  dedup(terminals),
        }
    }

    /// Plain origin-to-nearest-terminal query.
    pub fn direct(origin: Coord, terminals: impl IntoIterator<Item = Coord>) -> Self {
        Self::new(origin, [], terminals)
    }

    pub fn origin(&self) -> Coord {
        self.origin
    }

    pub fn must_visit(&self) -> &[Coord] {
        &self.must_visit
    }

    pub fn terminals(&self) -> &[Coord] {
        &self.terminals
    }

    /// Origin, must-visit points, then terminals, without duplicates.
    pub fn points(&self) -> Vec<Coord> {
        dedup(
            std::iter::once(self.origin)
                .chain(self.must_visit.iter().copied())
                .chain(self.terminals.iter().copied()),
        )
    }
}

fn dedup(items: impl IntoIterator<Item = Coord>) -> Vec<Coord> {
    let mut seen = HashSet::new();
    items.into_iter().filter(|c| seen.insert(*c)).collect()
}
