//! Spatial-subsystem error type.
//!
//! "No path exists" is not an error here: finders and the oracle answer
//! `None` for that.  These variants cover malformed paths and misuse of a
//! read-only oracle.

use thiserror::Error;

use gw_core::Coord;

/// Errors produced by `gw-spatial`.
#[derive(Debug, Error)]
pub enum SpatialError {
    #[error("a path needs at least one coordinate")]
    EmptyPath,

    #[error("path steps from {from} to non-adjacent {to}")]
    Disjoint { from: Coord, to: Coord },

    #[error("leg starts at {leg_start} but the path ends at {path_end}")]
    LegMismatch { path_end: Coord, leg_start: Coord },

    #[error("distance {from} -> {to} was never computed")]
    PairNotComputed { from: Coord, to: Coord },
}

pub type SpatialResult<T> = Result<T, SpatialError>;
