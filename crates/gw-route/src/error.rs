//! Route-optimizer error type.

use thiserror::Error;

use gw_core::Coord;
use gw_spatial::SpatialError;

/// Why a route could not be produced.
///
/// Three families, kept apart so callers can react differently:
///
/// | Family        | Variants                                            |
/// |---------------|-----------------------------------------------------|
/// | Precondition  | `NoTerminals`, `*OutOfBounds`                       |
/// | Unreachable   | `Unreachable`                                       |
/// | Internal      | `Oracle`, `Inconsistent`                            |
///
/// Preconditions are detected before any search runs.
#[derive(Debug, Error)]
pub enum RouteError {
    #[error("terminal set is empty")]
    NoTerminals,

    #[error("origin {0} lies outside the grid")]
    OriginOutOfBounds(Coord),

    #[error("must-visit point {0} lies outside the grid")]
    MustVisitOutOfBounds(Coord),

    #[error("terminal {0} lies outside the grid")]
    TerminalOutOfBounds(Coord),

    #[error("no route found: must-visit points and a terminal are not all reachable")]
    Unreachable,

    #[error("distance oracle: {0}")]
    Oracle(#[from] SpatialError),

    #[error("route check failed: {0}")]
    Inconsistent(String),
}

impl RouteError {
    /// `true` for malformed input (caller error).
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            Self::NoTerminals
                | Self::OriginOutOfBounds(_)
                | Self::MustVisitOutOfBounds(_)
                | Self::TerminalOutOfBounds(_)
        )
    }

    /// `true` when the grid simply has no qualifying walk.
    pub fn is_unreachable(&self) -> bool {
        matches!(self, Self::Unreachable)
    }
}

pub type RouteResult<T> = Result<T, RouteError>;
