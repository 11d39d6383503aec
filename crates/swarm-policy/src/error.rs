//! Error types for the decision layer.

use swarm_grid::GridError;
use thiserror::Error;

/// Errors produced while evaluating profits or solving for a strategy.
#[derive(Debug, Error)]
pub enum PolicyError {
    /// A payoff matrix with zero rows or zero columns.
    #[error("payoff matrix is empty ({rows}x{cols})")]
    EmptyPayoff { rows: usize, cols: usize },

    /// Flat payoff data whose length does not match the declared shape.
    #[error("payoff data has {len} entries, expected {rows}x{cols}")]
    PayoffShape { rows: usize, cols: usize, len: usize },

    /// A NaN or infinite payoff entry.
    #[error("payoff entry ({row}, {col}) is not finite")]
    NonFinitePayoff { row: usize, col: usize },

    /// The equilibrium solve did not produce a usable distribution.
    #[error("equilibrium solve failed: {0}")]
    Unsolvable(String),

    /// Pathfinding failed while scoring a candidate destination.
    #[error("pathfinding failed: {0}")]
    Path(#[from] GridError),
}

/// Convenience alias for decision-layer results.
pub type PolicyResult<T> = Result<T, PolicyError>;
