//! gridwalk — plan a walk over a labelled grid read from three CSV tables.
//!
//! Loads `area_map.csv`, `area_struct.csv` and `area_category.csv` from
//! `--data-dir`, finds the origin (`MyHome`), the terminal candidates
//! (`BandalgomCoffee`) and the must-visit structures, then either walks
//! straight to the nearest terminal (`--mode shortest`) or plans the
//! cheapest tour through every must-visit cell (`--mode tour`).
//!
//! Usage:
//!   cargo run -p gridwalk -- --data-dir demos/gridwalk/data
//!   cargo run -p gridwalk -- --data-dir demos/gridwalk/data --mode shortest --csv route.csv
//!
//! Progress is logged through `tracing`:
//!   RUST_LOG=gw_route=debug cargo run -p gridwalk -- --data-dir demos/gridwalk/data

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use gw_core::GridModel;
use gw_input::{LoadOptions, LocatorConfig, PointLocator, load_grid_dir};
use gw_output::{AsciiMap, CsvPathWriter, PathWriter};
use gw_route::{RouteConfig, RouteOptimizer, RoutePlan, RouteQuery, TracingObserver};
use gw_spatial::DistanceOracle;

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Nearest terminal, ignoring must-visit structures
    Shortest,
    /// Every must-visit structure, then the cheapest terminal
    Tour,
}

/// Plan a walk over a labelled grid
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory holding area_map.csv, area_struct.csv and area_category.csv
    #[arg(short, long)]
    data_dir: PathBuf,

    #[arg(short, long, value_enum, default_value_t = Mode::Tour)]
    mode: Mode,

    /// Keep only cells in this area (repeatable)
    #[arg(long = "area")]
    areas: Vec<i32>,

    /// Write the walk as x,y rows to this file
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Write a text map with the walk overlaid to this file
    #[arg(long)]
    map: Option<PathBuf>,

    /// Largest must-visit count solved exactly
    #[arg(long, default_value_t = RouteConfig::default().exact_threshold)]
    exact_threshold: usize,

    /// Print the structure count per category after loading
    #[arg(long)]
    summary: bool,
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("gridwalk=info".parse()?))
        .init();

    let args = Args::parse();

    let t0 = Instant::now();
    let grid = load_grid_dir(&args.data_dir, &LoadOptions { areas: args.areas.clone() })
        .with_context(|| format!("loading grid from {}", args.data_dir.display()))?;
    info!(
        cells = grid.len(),
        width = grid.width(),
        height = grid.height(),
        elapsed_ms = t0.elapsed().as_millis() as u64,
        "grid loaded"
    );

    if args.summary {
        print_summary(&grid);
    }

    let query = PointLocator::new(LocatorConfig::default())
        .locate(&grid)
        .into_query()
        .context("locating points of interest")?;
    let query = match args.mode {
        Mode::Shortest => RouteQuery::direct(query.origin(), query.terminals().iter().copied()),
        Mode::Tour => query,
    };

    let optimizer = RouteOptimizer::new(RouteConfig { exact_threshold: args.exact_threshold });
    let mut oracle = DistanceOracle::new(&grid);
    let mut observer = TracingObserver::new();

    let t1 = Instant::now();
    let plan = match optimizer.optimize(&query, &mut oracle, &mut observer) {
        Ok(plan) => plan,
        Err(e) if e.is_unreachable() => {
            println!("no route found");
            return Ok(());
        }
        Err(e) => return Err(e).context("planning route"),
    };
    info!(
        searches = oracle.searches(),
        elapsed_ms = t1.elapsed().as_millis() as u64,
        "route planned"
    );

    print_plan(&plan);

    if let Some(file) = &args.csv {
        let mut writer = CsvPathWriter::create(file)
            .with_context(|| format!("creating {}", file.display()))?;
        writer.write_path(&plan.path)?;
        writer.finish()?;
        println!("path written to {}", file.display());
    }

    if let Some(file) = &args.map {
        AsciiMap::new(&grid)
            .with_path(&plan.path)
            .save(file)
            .with_context(|| format!("writing {}", file.display()))?;
        println!("map written to {}", file.display());
    }

    Ok(())
}

// ── Reporting ─────────────────────────────────────────────────────────────────

fn print_summary(grid: &GridModel) {
    println!("=== structures ===");
    for (label, count) in grid.category_summary() {
        println!("{label:<20} {count:>6}");
    }
}

fn print_plan(plan: &RoutePlan) {
    println!("=== route ===");
    println!("strategy   : {:?}", plan.strategy);
    println!("hops       : {}", plan.total_hops);
    println!("terminal   : {}", plan.terminal);
    if !plan.visit_order.is_empty() {
        let order: Vec<String> = plan.visit_order.iter().map(ToString::to_string).collect();
        println!("visit order: {}", order.join(" -> "));
    }
}
