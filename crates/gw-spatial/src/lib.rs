//! `gw-spatial` — shortest paths and pairwise distances on a [`GridModel`].
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`path`]    | `Path` — a validated 4-connected walk                       |
//! | [`finder`]  | `PathFinder` trait, `BfsFinder`                             |
//! | [`oracle`]  | `DistanceOracle` — memoised ordered-pair distances          |
//! | [`error`]   | `SpatialError`, `SpatialResult<T>`                          |
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                    |
//! |------------|-----------------------------------------------------------|
//! | `parallel` | `DistanceOracle::prime` runs its searches via Rayon.      |
//! | `serde`    | Derives `Serialize`/`Deserialize` on `Path`.              |
//!
//! [`GridModel`]: gw_core::GridModel

pub mod error;
pub mod finder;
pub mod oracle;
pub mod path;

#[cfg(test)]
mod tests;

pub use error::{SpatialError, SpatialResult};
pub use finder::{BfsFinder, PathFinder};
pub use oracle::DistanceOracle;
pub use path::Path;
