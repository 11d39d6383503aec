//! Validated payoff matrices for two-player zero-sum games.

use crate::{PolicyError, PolicyResult};

/// A dense row-major payoff matrix from the row player's perspective.
///
/// Every constructor validates shape and entries, so a held matrix is
/// always non-empty, rectangular, and finite. The solver relies on this
/// and indexes without further checks.
#[derive(Clone, Debug, PartialEq)]
pub struct PayoffMatrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl PayoffMatrix {
    /// Build from flat row-major data.
    pub fn new(rows: usize, cols: usize, data: Vec<f64>) -> PolicyResult<Self> {
        if rows == 0 || cols == 0 {
            return Err(PolicyError::EmptyPayoff { rows, cols });
        }
        if data.len() != rows * cols {
            return Err(PolicyError::PayoffShape { rows, cols, len: data.len() });
        }
        for (i, v) in data.iter().enumerate() {
            if !v.is_finite() {
                return Err(PolicyError::NonFinitePayoff { row: i / cols, col: i % cols });
            }
        }
        Ok(Self { rows, cols, data })
    }

    /// Build from nested rows, rejecting ragged input.
    pub fn from_rows(rows_in: Vec<Vec<f64>>) -> PolicyResult<Self> {
        let rows = rows_in.len();
        let cols = rows_in.first().map_or(0, Vec::len);
        for row in &rows_in {
            if row.len() != cols {
                return Err(PolicyError::PayoffShape { rows, cols, len: row.len() });
            }
        }
        let data = rows_in.into_iter().flatten().collect();
        Self::new(rows, cols, data)
    }

    /// Build a single-column matrix, one row per entry.
    pub fn column(values: Vec<f64>) -> PolicyResult<Self> {
        let rows = values.len();
        Self::new(rows, 1, values)
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Entry at `(row, col)`.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[row * self.cols + col]
    }

    /// The minimum of each row (the row player's guaranteed payoff).
    pub fn row_mins(&self) -> Vec<f64> {
        (0..self.rows)
            .map(|r| (0..self.cols).map(|c| self.get(r, c)).fold(f64::INFINITY, f64::min))
            .collect()
    }

    /// The maximum of each column (the column player's worst case).
    pub fn col_maxes(&self) -> Vec<f64> {
        (0..self.cols)
            .map(|c| (0..self.rows).map(|r| self.get(r, c)).fold(f64::NEG_INFINITY, f64::max))
            .collect()
    }

    /// Smallest entry in the matrix.
    pub fn min_entry(&self) -> f64 {
        self.data.iter().copied().fold(f64::INFINITY, f64::min)
    }

    /// A copy with `delta` added to every entry.
    ///
    /// Shifting leaves the equilibrium strategies of a zero-sum game
    /// unchanged; the solver uses it to make every entry positive.
    pub fn shifted(&self, delta: f64) -> Self {
        Self {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().map(|v| v + delta).collect(),
        }
    }
}
