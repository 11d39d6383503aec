//! Dense tableau simplex for the equilibrium linear program.
//!
//! The row player's optimal mixed strategy for a strictly positive payoff
//! matrix `P` solves `minimize sum(x)` subject to `P' x >= bound, x >= 0`.
//! This module works on the dual instead, `maximize bound * sum(y)` subject
//! to `P y <= 1, y >= 0`, because the dual's all-slack basis is feasible
//! from the first pivot. The primal solution is then read off the slack
//! columns of the final objective row.

use crate::{PayoffMatrix, PolicyError, PolicyResult};

/// Tolerance for optimality and pivot-eligibility tests.
pub(crate) const EPS: f64 = 1e-9;

/// Hard cap on pivots. Game matrices in this crate are tiny and converge
/// in a handful of pivots; hitting the cap means the tableau has gone
/// numerically bad, not that the problem is large.
const MAX_PIVOTS: usize = 500;

/// Unnormalized row weights for a strictly positive payoff matrix.
///
/// `bound` must be a positive lower bound on the game value (callers pass
/// the smallest matrix entry, or `1.0` after shifting). Entering columns
/// follow Bland's rule and ratio-test ties resolve to the lowest basis
/// index, so the pivot sequence is deterministic and cannot cycle.
pub(crate) fn row_weights(payoff: &PayoffMatrix, bound: f64) -> PolicyResult<Vec<f64>> {
    let m = payoff.rows();
    let n = payoff.cols();

    // Tableau layout per row: n structural columns, m slack columns, rhs.
    let width = n + m + 1;
    let mut tab: Vec<Vec<f64>> = (0..m)
        .map(|r| {
            let mut row = vec![0.0; width];
            for c in 0..n {
                row[c] = payoff.get(r, c);
            }
            row[n + r] = 1.0;
            row[width - 1] = 1.0;
            row
        })
        .collect();

    // Objective in reduced-cost form for the maximization.
    let mut obj = vec![0.0; width];
    for cost in obj.iter_mut().take(n) {
        *cost = -bound;
    }

    let mut basis: Vec<usize> = (n..n + m).collect();

    for _ in 0..MAX_PIVOTS {
        let Some(enter) = (0..width - 1).find(|&c| obj[c] < -EPS) else {
            // Optimal. The dual of the dual is the original problem, so
            // the slack reduced costs are exactly the row weights.
            return Ok((0..m).map(|r| obj[n + r].max(0.0)).collect());
        };

        let mut leave: Option<usize> = None;
        let mut best = f64::INFINITY;
        for (r, row) in tab.iter().enumerate() {
            let coef = row[enter];
            if coef > EPS {
                let ratio = row[width - 1] / coef;
                let better = ratio < best - EPS
                    || (ratio < best + EPS && leave.is_none_or(|l| basis[r] < basis[l]));
                if better {
                    best = ratio;
                    leave = Some(r);
                }
            }
        }
        let Some(leave) = leave else {
            // A positive matrix keeps the dual bounded; reaching this
            // means the tableau lost that structure to rounding.
            return Err(PolicyError::Unsolvable(format!(
                "unbounded direction in column {enter}"
            )));
        };

        pivot(&mut tab, &mut obj, leave, enter);
        basis[leave] = enter;
    }

    Err(PolicyError::Unsolvable(format!(
        "no convergence after {MAX_PIVOTS} pivots"
    )))
}

fn pivot(tab: &mut [Vec<f64>], obj: &mut [f64], leave: usize, enter: usize) {
    let p = tab[leave][enter];
    for v in tab[leave].iter_mut() {
        *v /= p;
    }
    let pivot_row = tab[leave].clone();
    for (r, row) in tab.iter_mut().enumerate() {
        if r == leave {
            continue;
        }
        let factor = row[enter];
        if factor != 0.0 {
            for (v, pv) in row.iter_mut().zip(&pivot_row) {
                *v -= factor * pv;
            }
        }
    }
    let factor = obj[enter];
    if factor != 0.0 {
        for (v, pv) in obj.iter_mut().zip(&pivot_row) {
            *v -= factor * pv;
        }
    }
}
