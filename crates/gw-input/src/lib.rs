//! `gw-input` — from labelled CSV tables to a [`RouteQuery`].
//!
//! # Crate layout
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`loader`]  | `load_grid_dir`, `load_grid_readers`, `LoadOptions`       |
//! | [`locator`] | `PointLocator`, `LocatorConfig`, `OriginLookup`, `PointsOfInterest` |
//! | [`error`]   | `InputError`, `InputResult<T>`                            |
//!
//! # Usage
//!
//! ```rust,ignore
//! let grid = load_grid_dir(Path::new("data"), &LoadOptions::default())?;
//! let query = PointLocator::default().locate(&grid).into_query()?;
//! ```
//!
//! [`RouteQuery`]: gw_route::RouteQuery

pub mod error;
pub mod loader;
pub mod locator;


pub use error::{InputError, InputResult};
pub use loader::{LoadOptions, load_grid_dir, load_grid_readers};
pub use locator::{LocatorConfig, OriginLookup, PointLocator, PointsOfInterest};
