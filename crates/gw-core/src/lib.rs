//! `gw-core` — foundational types for the `gridwalk` route planner.
//!
//! This crate is a dependency of every other `gw-*` crate.  It has no
//! `gw-*` dependencies and a single external one (`thiserror`, plus optional
//! `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                                |
//! |-------------|---------------------------------------------------------|
//! | [`coord`]   | `Coord`, 4-connected neighbour enumeration              |
//! | [`grid`]    | `GridModel`, `GridBuilder`, `CellAttributes`, `Bounds`  |
//! | [`error`]   | `CoreError`, `CoreResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public value types.  |

pub mod coord;
pub mod error;
pub mod grid;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use coord::Coord;
pub use error::{CoreError, CoreResult};
pub use grid::{Bounds, CellAttributes, GridBuilder, GridModel};
