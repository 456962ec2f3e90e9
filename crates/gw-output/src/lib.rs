//! `gw-output` — writers for finished walks.
//!
//! | Module       | Contents                                               |
//! |--------------|--------------------------------------------------------|
//! | [`writer`]   | `PathWriter` trait                                     |
//! | [`csv`]      | `CsvPathWriter` — header `x,y`, one row per coordinate |
//! | [`ascii`]    | `AsciiMap` — grid as text with the walk overlaid       |
//! | [`observer`] | `PlanOutputObserver` — writes the plan on completion   |
//! | [`error`]    | `OutputError`, `OutputResult<T>`                       |
//!
//! # Usage
//!
//! ```rust,ignore
//! use gw_output::{CsvPathWriter, PathWriter};
//!
//! let mut w = CsvPathWriter::create(Path::new("route.csv"))?;
//! w.write_path(&plan.path)?;
//! w.finish()?;
//! ```

pub mod ascii;
pub mod csv;
pub mod error;
pub mod observer;
pub mod writer;


pub use ascii::AsciiMap;
pub use self::csv::CsvPathWriter;
pub use error::{OutputError, OutputResult};
pub use observer::PlanOutputObserver;
pub use writer::PathWriter;
