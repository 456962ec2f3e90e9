//! Error types for gw-input.

use thiserror::Error;

use gw_core::{Coord, CoreError};

/// Errors from loading tables or resolving the points of interest.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parse error: {0}")]
    Csv(#[from] csv::Error),

    #[error("grid error: {0}")]
    Grid(#[from] CoreError),

    #[error("no origin cell found")]
    MissingOrigin,

    #[error("origin is ambiguous: {} cells carry the origin label", .0.len())]
    AmbiguousOrigin(Vec<Coord>),

    #[error("no terminal cell found")]
    NoTerminals,
}

/// Alias for `Result<T, InputError>`.
pub type InputResult<T> = Result<T, InputError>;
