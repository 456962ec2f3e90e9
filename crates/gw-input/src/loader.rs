//! CSV loader for the three grid relations.
//!
//! # CSV format
//!
//! Three files, joined on `(x, y)` and `category`:
//!
//! ```csv
//! # area_map.csv
//! x, y, ConstructionSite
//! 1, 1, 0
//!
//! # area_struct.csv
//! x, y, category, area
//! 1, 1, 3, 1
//!
//! # area_category.csv
//! category, struct
//! 3, MyHome
//! ```
//!
//! Headers and fields are whitespace-trimmed.  A non-zero
//! `ConstructionSite` marks the cell blocked.  Structure rows left-join onto
//! map rows (structures off the map are dropped) and labels left-join onto
//! structures (unknown categories get no label).

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, Trim};
use serde::Deserialize;
use tracing::debug;

use gw_core::{Coord, GridBuilder, GridModel};

use crate::InputResult;

pub const MAP_FILE:      &str = "area_map.csv";
pub const STRUCT_FILE:   &str = "area_struct.csv";
pub const CATEGORY_FILE: &str = "area_category.csv";

// ── CSV records ───────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct MapRecord {
    x: i32,
    y: i32,
    #[serde(rename = "ConstructionSite")]
    construction_site: i32,
}

#[derive(Deserialize)]
struct StructRecord {
    x:        i32,
    y:        i32,
    category: i32,
    #[serde(default)]
    area:     Option<i32>,
}

#[derive(Deserialize)]
struct CategoryRecord {
    category: i32,
    #[serde(rename = "struct")]
    label:    String,
}

// ── Options ───────────────────────────────────────────────────────────────────

/// Loader options.
#[derive(Clone, Debug, Default)]
pub struct LoadOptions {
    /// When non-empty, keep only cells whose structure row names one of
    /// these areas.  Cells without an area are dropped too.
    pub areas: Vec<i32>,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load the grid from the three standard files in `dir`.
pub fn load_grid_dir(dir: &Path, opts: &LoadOptions) -> InputResult<GridModel> {
    let map = File::open(dir.join(MAP_FILE))?;
    let structs = File::open(dir.join(STRUCT_FILE))?;
    let categories = File::open(dir.join(CATEGORY_FILE))?;
    load_grid_readers(map, structs, categories, opts)
}

/// Like [`load_grid_dir`] but accepts any `Read` sources.
///
/// Useful for testing (pass a `std::io::Cursor`).
pub fn load_grid_readers<M: Read, S: Read, C: Read>(
    map:        M,
    structs:    S,
    categories: C,
    opts:       &LoadOptions,
) -> InputResult<GridModel> {
    let labels: HashMap<i32, String> = reader(categories)
        .deserialize::<CategoryRecord>()
        .map(|r| r.map(|r| (r.category, r.label)))
        .collect::<Result<_, _>>()?;

    let mut builder = GridBuilder::new();
    for row in reader(map).deserialize::<MapRecord>() {
        let row = row?;
        builder.add_cell(Coord::new(row.x, row.y), row.construction_site != 0)?;
    }

    let mut off_map = 0usize;
    for row in reader(structs).deserialize::<StructRecord>() {
        let row = row?;
        let coord = Coord::new(row.x, row.y);
        if !builder.contains(coord) {
            off_map += 1;
            continue;
        }
        builder.set_structure(coord, row.category, labels.get(&row.category).cloned(), row.area);
    }

    if !opts.areas.is_empty() {
        builder.retain(|_, attrs| attrs.area.is_some_and(|a| opts.areas.contains(&a)));
    }

    let grid = builder.build()?;
    debug!(
        cells = grid.len(),
        width = grid.width(),
        height = grid.height(),
        off_map,
        "grid loaded"
    );
    Ok(grid)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn reader<R: Read>(r: R) -> csv::Reader<R> {
    ReaderBuilder::new().trim(Trim::All).from_reader(r)
}
