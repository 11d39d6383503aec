//! Grid cell coordinate type and distance metrics.
//!
//! `GridPoint` uses signed `i32` cell coordinates so offset arithmetic near
//! the field border cannot wrap; the field decides which cells actually
//! exist.  Two metrics are provided: Euclidean distance (the conflict-radius
//! metric between robots) and Manhattan distance (the admissible A*
//! heuristic on a 4-connected grid).

use std::fmt;

/// A cell coordinate on the shared grid.
///
/// Derives `Ord` (x-major, then y) so heap entries and adjacency lists that
/// tie-break on the point itself stay deterministic.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridPoint {
    pub x: i32,
    pub y: i32,
}

impl GridPoint {
    /// Orthogonal unit steps in fixed expansion order (east, west, south,
    /// north).  Everything that enumerates neighbors iterates this array, so
    /// candidate ordering is identical everywhere.
    pub const ORTHO_STEPS: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

    #[inline]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance in cell units — the robot-to-robot conflict metric.
    ///
    /// Computed in `f64` so integer coordinates up to ±2²⁶ stay exact under
    /// squaring.
    #[inline]
    pub fn distance(self, other: GridPoint) -> f64 {
        let dx = (self.x - other.x) as f64;
        let dy = (self.y - other.y) as f64;
        (dx * dx + dy * dy).sqrt()
    }

    /// Manhattan (taxicab) distance — admissible heuristic for 4-connected
    /// unit-cost search.
    #[inline]
    pub fn manhattan(self, other: GridPoint) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// The cell displaced by `(dx, dy)`.
    #[inline]
    pub fn offset(self, dx: i32, dy: i32) -> GridPoint {
        GridPoint { x: self.x + dx, y: self.y + dy }
    }
}

impl fmt::Display for GridPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
