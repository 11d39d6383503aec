//! Profit evaluation for candidate destination cells.
//!
//! A robot deciding where to move scores each candidate cell by how far
//! that cell sits from its primary destination. The score is
//! `PATH_PROFIT_OFFSET - path_length`, where the path length counts both
//! endpoints, so standing on the primary destination is worth `1.0`, each
//! step away costs one, and unreachable candidates are an error rather
//! than a score.

use swarm_core::GridPoint;
use swarm_grid::{GridField, Pathfinder};

use crate::{PayoffMatrix, PolicyResult};

/// Offset subtracted-from in the profit rule `offset - path_length`.
pub const PATH_PROFIT_OFFSET: f64 = 2.0;

/// Candidate destinations paired with their profits, in input order.
#[derive(Clone, Debug)]
pub struct ProfitTable {
    destinations: Vec<GridPoint>,
    profits: Vec<f64>,
}

impl ProfitTable {
    #[inline]
    pub fn len(&self) -> usize {
        self.destinations.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.destinations.is_empty()
    }

    /// Destination cell at `index`.
    #[inline]
    pub fn destination(&self, index: usize) -> GridPoint {
        self.destinations[index]
    }

    #[inline]
    pub fn destinations(&self) -> &[GridPoint] {
        &self.destinations
    }

    #[inline]
    pub fn profits(&self) -> &[f64] {
        &self.profits
    }

    /// Lower the table into the solver's single-column payoff form, one
    /// row per destination.
    pub fn to_payoff_column(&self) -> PolicyResult<PayoffMatrix> {
        PayoffMatrix::column(self.profits.clone())
    }
}

/// Scores candidate cells against a primary destination.
pub trait ProfitEvaluator: Send + Sync {
    /// Score every cell in `candidates`.
    ///
    /// Fails with a path error if any candidate cannot be connected to
    /// `primary`; an unreachable candidate is never silently scored.
    fn evaluate(
        &self,
        field: &GridField,
        candidates: &[GridPoint],
        primary: GridPoint,
    ) -> PolicyResult<ProfitTable>;
}

/// The baseline rule: every candidate is scored by path length.
#[derive(Clone, Debug)]
pub struct PathCostProfit<P: Pathfinder> {
    pathfinder: P,
}

impl<P: Pathfinder> PathCostProfit<P> {
    pub fn new(pathfinder: P) -> Self {
        Self { pathfinder }
    }
}

impl<P: Pathfinder> ProfitEvaluator for PathCostProfit<P> {
    fn evaluate(
        &self,
        field: &GridField,
        candidates: &[GridPoint],
        primary: GridPoint,
    ) -> PolicyResult<ProfitTable> {
        let mut profits = Vec::with_capacity(candidates.len());
        for &cand in candidates {
            profits.push(path_profit(&self.pathfinder, field, primary, cand)?);
        }
        Ok(ProfitTable { destinations: candidates.to_vec(), profits })
    }
}

/// The baseline rule with one neutral cell pinned to exactly `0.0`.
///
/// The center cell is the robot's current position during a contest:
/// holding still is neither progress nor regress, so it is scored zero
/// without running a search at all. Every other candidate gets the
/// baseline score.
#[derive(Clone, Debug)]
pub struct NeutralCenterProfit<P: Pathfinder> {
    pathfinder: P,
    center: GridPoint,
}

impl<P: Pathfinder> NeutralCenterProfit<P> {
    pub fn new(pathfinder: P, center: GridPoint) -> Self {
        Self { pathfinder, center }
    }
}

impl<P: Pathfinder> ProfitEvaluator for NeutralCenterProfit<P> {
    fn evaluate(
        &self,
        field: &GridField,
        candidates: &[GridPoint],
        primary: GridPoint,
    ) -> PolicyResult<ProfitTable> {
        let mut profits = Vec::with_capacity(candidates.len());
        for &cand in candidates {
            if cand == self.center {
                profits.push(0.0);
                continue;
            }
            profits.push(path_profit(&self.pathfinder, field, primary, cand)?);
        }
        Ok(ProfitTable { destinations: candidates.to_vec(), profits })
    }
}

fn path_profit<P: Pathfinder>(
    pathfinder: &P,
    field: &GridField,
    primary: GridPoint,
    cand: GridPoint,
) -> PolicyResult<f64> {
    let record = pathfinder.search(field, primary, cand)?;
    let len = record.reconstruct(primary, cand).len();
    Ok(PATH_PROFIT_OFFSET - len as f64)
}
