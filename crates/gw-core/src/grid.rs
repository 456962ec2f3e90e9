//! Read-only grid model and its builder.
//!
//! # Data layout
//!
//! Cells are stored densely over the bounding box of every recorded
//! coordinate, in x-major order:
//!
//! ```text
//! index(x, y) = (x - min_x) * height + (y - min_y)
//! ```
//!
//! A separate `blocked` bitmap mirrors the obstacle flag so that the
//! search inner loop touches one `bool` per probe.  Coordinates inside the
//! bounds that were never recorded are open, unlabelled space.
//!
//! A `GridModel` is built once per run via [`GridBuilder`] and never mutated.

use std::collections::{BTreeMap, HashMap};

use crate::{Coord, CoreError, CoreResult};

/// Upper limit on the dense bounding box, in cells.
const MAX_CELLS: u64 = 1 << 26;

// ── CellAttributes ────────────────────────────────────────────────────────────

/// Everything known about one recorded cell.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellAttributes {
    /// Impassable (e.g. a construction site).
    pub blocked: bool,
    /// Structure category; `Some(0)` and `None` both mean "no structure".
    pub category: Option<i32>,
    /// Structure label resolved from the category table.
    pub label: Option<String>,
    /// Area the cell belongs to, when the input carries one.
    pub area: Option<i32>,
}

impl CellAttributes {
    /// `true` if the cell carries a non-zero structure category.
    #[inline]
    pub fn is_structure(&self) -> bool {
        matches!(self.category, Some(c) if c != 0)
    }
}

// ── Bounds ────────────────────────────────────────────────────────────────────

/// Inclusive coordinate bounds derived from the recorded cells.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    pub min_x: i32,
    pub max_x: i32,
    pub min_y: i32,
    pub max_y: i32,
}

impl Bounds {
    #[inline]
    pub fn contains(&self, c: Coord) -> bool {
        c.x >= self.min_x && c.x <= self.max_x && c.y >= self.min_y && c.y <= self.max_y
    }

    #[inline]
    pub fn width(&self) -> usize {
        (self.max_x as i64 - self.min_x as i64 + 1) as usize
    }

    #[inline]
    pub fn height(&self) -> usize {
        (self.max_y as i64 - self.min_y as i64 + 1) as usize
    }
}

// ── GridModel ─────────────────────────────────────────────────────────────────

/// Immutable view over cell coordinates, bounds, and obstacle flags.
///
/// Queries never fail: coordinates outside [`bounds`][Self::bounds] are
/// simply invalid, since callers probe coordinates produced by offsetting
/// existing ones.
#[derive(Clone, Debug)]
pub struct GridModel {
    bounds:   Bounds,
    /// Obstacle flag per dense index.
    blocked:  Vec<bool>,
    /// Recorded attributes per dense index; `None` for unrecorded cells.
    cells:    Vec<Option<CellAttributes>>,
    recorded: usize,
}

impl GridModel {
    /// Build a grid from rows of text: `#` is blocked, anything else open.
    ///
    /// Row `i` is `y = i`, column `j` is `x = j`.  Every character becomes a
    /// recorded cell, so the bounds are exactly the text rectangle (ragged
    /// rows leave unrecorded open cells on the right).
    pub fn from_rows(rows: &[&str]) -> CoreResult<Self> {
        let mut b = GridBuilder::new();
        for (y, row) in rows.iter().enumerate() {
            for (x, ch) in row.chars().enumerate() {
                b.add_cell(Coord::new(x as i32, y as i32), ch == '#')?;
            }
        }
        b.build()
    }

    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn width(&self) -> usize {
        self.bounds.width()
    }

    pub fn height(&self) -> usize {
        self.bounds.height()
    }

    /// Number of recorded cells (not the bounding-box area).
    pub fn len(&self) -> usize {
        self.recorded
    }

    pub fn is_empty(&self) -> bool {
        self.recorded == 0
    }

    #[inline]
    pub fn in_bounds(&self, c: Coord) -> bool {
        self.bounds.contains(c)
    }

    /// `true` if `c` lies inside the bounds and is not blocked.
    #[inline]
    pub fn is_valid(&self, c: Coord) -> bool {
        match self.index(c) {
            Some(i) => !self.blocked[i],
            None => false,
        }
    }

    /// `true` only for in-bounds cells recorded as blocked.
    #[inline]
    pub fn is_blocked(&self, c: Coord) -> bool {
        self.index(c).is_some_and(|i| self.blocked[i])
    }

    /// Recorded attributes of `c`, or `None` for unknown coordinates.
    pub fn attributes(&self, c: Coord) -> Option<&CellAttributes> {
        self.index(c).and_then(|i| self.cells[i].as_ref())
    }

    /// All recorded cells in x-major, then y, order.
    pub fn cells(&self) -> impl Iterator<Item = (Coord, &CellAttributes)> + '_ {
        let h = self.bounds.height();
        let (min_x, min_y) = (self.bounds.min_x, self.bounds.min_y);
        self.cells.iter().enumerate().filter_map(move |(i, cell)| {
            cell.as_ref().map(|attrs| {
                let c = Coord::new(min_x + (i / h) as i32, min_y + (i % h) as i32);
                (c, attrs)
            })
        })
    }

    /// Count of structure cells per label.  Unlabelled structures are
    /// counted under their category number.
    pub fn category_summary(&self) -> BTreeMap<String, usize> {
        let mut summary = BTreeMap::new();
        for (_, attrs) in self.cells() {
            if !attrs.is_structure() {
                continue;
            }
            let key = match (&attrs.label, attrs.category) {
                (Some(label), _) => label.clone(),
                (None, Some(c)) => c.to_string(),
                (None, None) => continue,
            };
            *summary.entry(key).or_insert(0) += 1;
        }
        summary
    }

    #[inline]
    fn index(&self, c: Coord) -> Option<usize> {
        if !self.bounds.contains(c) {
            return None;
        }
        let dx = (c.x as i64 - self.bounds.min_x as i64) as usize;
        let dy = (c.y as i64 - self.bounds.min_y as i64) as usize;
        Some(dx * self.bounds.height() + dy)
    }
}

// ── GridBuilder ───────────────────────────────────────────────────────────────

/// Incremental builder for [`GridModel`].
///
/// ```rust,ignore
/// let mut b = GridBuilder::new();
/// b.add_cell(Coord::new(0, 0), false)?;
/// b.add_cell(Coord::new(1, 0), true)?;
/// b.set_structure(Coord::new(0, 0), 3, Some("MyHome".into()), Some(1));
/// let grid = b.build()?;
/// ```
#[derive(Default)]
pub struct GridBuilder {
    cells: HashMap<Coord, CellAttributes>,
}

impl GridBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `coord` with its obstacle flag.
    ///
    /// Re-adding a coordinate with the same flag is a no-op; a different
    /// flag is rejected.
    pub fn add_cell(&mut self, coord: Coord, blocked: bool) -> CoreResult<()> {
        match self.cells.get(&coord) {
            Some(existing) if existing.blocked != blocked => {
                Err(CoreError::ConflictingObstacle(coord))
            }
            Some(_) => Ok(()),
            None => {
                self.cells.insert(coord, CellAttributes { blocked, ..Default::default() });
                Ok(())
            }
        }
    }

    /// Attach structure data to `coord`, recording it as open if unseen.
    pub fn set_structure(
        &mut self,
        coord:    Coord,
        category: i32,
        label:    Option<String>,
        area:     Option<i32>,
    ) {
        let cell = self.cells.entry(coord).or_default();
        cell.category = Some(category);
        cell.label = label;
        cell.area = area;
    }

    pub fn contains(&self, coord: Coord) -> bool {
        self.cells.contains_key(&coord)
    }

    /// Drop every recorded cell for which `keep` returns `false`.
    pub fn retain(&mut self, mut keep: impl FnMut(Coord, &CellAttributes) -> bool) {
        self.cells.retain(|&c, attrs| keep(c, attrs));
    }

    /// Derive bounds and lay out the dense arrays.
    pub fn build(self) -> CoreResult<GridModel> {
        let mut coords = self.cells.keys();
        let first = coords.next().ok_or(CoreError::EmptyGrid)?;
        let mut bounds = Bounds { min_x: first.x, max_x: first.x, min_y: first.y, max_y: first.y };
        for c in coords {
            bounds.min_x = bounds.min_x.min(c.x);
            bounds.max_x = bounds.max_x.max(c.x);
            bounds.min_y = bounds.min_y.min(c.y);
            bounds.max_y = bounds.max_y.max(c.y);
        }

        let (w, h) = (bounds.width() as u64, bounds.height() as u64);
        if w.saturating_mul(h) > MAX_CELLS {
            return Err(CoreError::TooLarge { width: w, height: h });
        }

        let total = (w * h) as usize;
        let recorded = self.cells.len();
        let mut blocked = vec![false; total];
        let mut cells: Vec<Option<CellAttributes>> = vec![None; total];
        for (c, attrs) in self.cells {
            let i = (c.x - bounds.min_x) as usize * h as usize + (c.y - bounds.min_y) as usize;
            blocked[i] = attrs.blocked;
            cells[i] = Some(attrs);
        }

        Ok(GridModel { bounds, blocked, cells, recorded })
    }
}
