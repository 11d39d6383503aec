//! Row-selection strategies for payoff matrices.

use rand::distributions::{Distribution, WeightedIndex};

use swarm_core::RobotRng;

use crate::simplex;
use crate::{PayoffMatrix, PolicyError, PolicyResult};

/// Tolerance when comparing the maximin and minimax values.
const SADDLE_EPS: f64 = 1e-9;

/// Selects a row of a payoff matrix, possibly at random.
pub trait Strategy: Send + Sync {
    /// Select a row index of `payoff` for the row player.
    fn choose(&self, payoff: &PayoffMatrix, rng: &mut RobotRng) -> PolicyResult<usize>;
}

/// Game-theoretically optimal play for two-player zero-sum games.
///
/// If the matrix has a saddle point the pure maximin row is selected
/// outright. Otherwise the optimal mixed strategy is solved by linear
/// programming and a row is sampled from it, so repeated calls with the
/// same matrix spread across the support in equilibrium proportions.
#[derive(Clone, Copy, Debug, Default)]
pub struct NashStrategy;

impl NashStrategy {
    /// The equilibrium probability distribution over rows.
    ///
    /// The result always sums to one. For saddle-point matrices mass is
    /// split equally over every row attaining the maximin value; for
    /// mixed games it is the LP solution.
    pub fn distribution(&self, payoff: &PayoffMatrix) -> PolicyResult<Vec<f64>> {
        let row_mins = payoff.row_mins();
        let maxmin = row_mins.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let minmax = payoff.col_maxes().into_iter().fold(f64::INFINITY, f64::min);

        if (maxmin - minmax).abs() < SADDLE_EPS {
            let saddle_rows: Vec<usize> = row_mins
                .iter()
                .enumerate()
                .filter(|&(_, &min)| (min - maxmin).abs() < SADDLE_EPS)
                .map(|(r, _)| r)
                .collect();
            let share = 1.0 / saddle_rows.len() as f64;
            let mut probs = vec![0.0; payoff.rows()];
            for r in saddle_rows {
                probs[r] = share;
            }
            return Ok(probs);
        }

        self.mixed(payoff)
    }

    fn mixed(&self, payoff: &PayoffMatrix) -> PolicyResult<Vec<f64>> {
        // The LP needs every entry strictly positive. Shift so the
        // smallest entry becomes one; shifting does not move the
        // equilibrium and the normalization below cancels the scale.
        let min_entry = payoff.min_entry();
        let (lp_matrix, bound) = if min_entry <= 0.0 {
            (payoff.shifted(-min_entry + 1.0), 1.0)
        } else {
            (payoff.clone(), min_entry)
        };

        let weights = simplex::row_weights(&lp_matrix, bound)?;
        let total: f64 = weights.iter().sum();
        if total <= simplex::EPS {
            return Err(PolicyError::Unsolvable("all-zero row weights".into()));
        }
        Ok(weights.into_iter().map(|w| w / total).collect())
    }
}

impl Strategy for NashStrategy {
    fn choose(&self, payoff: &PayoffMatrix, rng: &mut RobotRng) -> PolicyResult<usize> {
        let probs = self.distribution(payoff)?;
        let dist = WeightedIndex::new(&probs)
            .map_err(|e| PolicyError::Unsolvable(format!("unsamplable distribution: {e}")))?;
        Ok(dist.sample(rng.inner()))
    }
}
