//! Grid-model error type.

use thiserror::Error;

use crate::Coord;

/// Errors raised while assembling a [`GridModel`][crate::GridModel].
///
/// A built grid never fails a query; out-of-range probes answer `false` or
/// `None` instead.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("grid has no cells")]
    EmptyGrid,

    #[error("cell {0} recorded as both blocked and open")]
    ConflictingObstacle(Coord),

    #[error("grid bounding box {width}x{height} is too large to index")]
    TooLarge { width: u64, height: u64 },
}

/// Shorthand result type for `gw-core`.
pub type CoreResult<T> = Result<T, CoreError>;
