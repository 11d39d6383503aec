//! Grid-subsystem error type.

use thiserror::Error;

use swarm_core::GridPoint;

/// Errors produced by `swarm-grid`.
#[derive(Debug, Error)]
pub enum GridError {
    /// The two cells are not connected by any open route.  Deliberately
    /// distinct from an empty successful search so callers can never mistake
    /// "unreachable" for "already there".
    #[error("no path from {from} to {to}")]
    NoPath { from: GridPoint, to: GridPoint },

    /// A search endpoint is blocked or outside the field.
    #[error("cell {0} is blocked or outside the field")]
    Blocked(GridPoint),
}

pub type GridResult<T> = Result<T, GridError>;
