//! Plain-text map of a grid with a walk drawn over it.
//!
//! | Glyph | Meaning                         |
//! |-------|---------------------------------|
//! | `S`   | first coordinate of the walk    |
//! | `E`   | last coordinate of the walk     |
//! | `*`   | other coordinates on the walk   |
//! | `#`   | blocked                         |
//! | `o`   | structure (non-zero category)   |
//! | `.`   | open                            |
//!
//! Earlier table rows take precedence.  One text row per `y`, smallest `y` first; `x` grows
//! left to right.

use std::fmt;
use std::path::Path as FsPath;

use gw_core::{Coord, GridModel};
use gw_spatial::Path;
use rustc_hash::FxHashSet;

use crate::OutputResult;

pub struct AsciiMap<'g> {
    grid:  &'g GridModel,
    walk:  FxHashSet<Coord>,
    start: Option<Coord>,
    end:   Option<Coord>,
}

impl<'g> AsciiMap<'g> {
    pub fn new(grid: &'g GridModel) -> Self {
        Self { grid, walk: FxHashSet::default(), start: None, end: None }
    }

    /// Overlay `path`.  A later call replaces the previous overlay.
    pub fn with_path(mut self, path: &Path) -> Self {
        self.walk = path.coords().iter().copied().collect();
        self.start = Some(path.start());
        self.end = Some(path.end());
        self
    }

    /// Glyph for one coordinate.
    pub fn glyph(&self, c: Coord) -> char {
        if self.start == Some(c) {
            'S'
        } else if self.end == Some(c) {
            'E'
        } else if self.walk.contains(&c) {
            '*'
        } else if self.grid.is_blocked(c) {
            '#'
        } else if self.grid.attributes(c).is_some_and(|a| a.is_structure()) {
            'o'
        } else {
            '.'
        }
    }

    /// Render to a string, one line per row, each ending in `\n`.
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Render into `file`, replacing its contents.
    pub fn save(&self, file: &FsPath) -> OutputResult<()> {
        std::fs::write(file, self.render())?;
        Ok(())
    }
}

impl fmt::Display for AsciiMap<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let b = self.grid.bounds();
        for y in b.min_y..=b.max_y {
            let row: String = (b.min_x..=b.max_x).map(|x| self.glyph(Coord::new(x, y))).collect();
            writeln!(f, "{row}")?;
        }
        Ok(())
    }
}
