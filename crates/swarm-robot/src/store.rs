//! Core robot storage: `RobotStore` (SoA data) and `RobotRngs` (per-robot RNG).
//!
//! # Why two structs?
//!
//! The decide phase needs `&mut RobotRngs` (exclusive mutable access to each
//! robot's RNG) and `&RobotStore` (shared read access to the tick-start
//! snapshot) simultaneously.  Rust's borrow checker forbids this if both live
//! inside a single struct.  Keeping RNGs in a separate `RobotRngs` struct
//! resolves the conflict cleanly:
//!
//! ```ignore
//! // swarm-sim decide phase (simplified):
//! let store: &RobotStore = &sim.robots;
//! let moves = sim.rngs.inner
//!     .par_iter_mut()
//!     .enumerate()
//!     .map(|(i, rng)| policy.decide(RobotId(i as u32), &ctx, rng))
//!     .collect::<Vec<_>>();
//! ```

use swarm_core::{Activity, GridPoint, RobotId, RobotRng};

// ── RobotRngs ─────────────────────────────────────────────────────────────────

/// Per-robot deterministic RNG state, separated from [`RobotStore`] to enable
/// simultaneous `&mut RobotRngs` + `&RobotStore` borrows in the decide phase.
///
/// `RobotRngs` is `Send` (the inner `SmallRng` is `Send`) but intentionally
/// not `Sync` — per-robot RNG state must never be shared between threads.
/// Rayon's `par_iter_mut()` handles the exclusive-per-thread access pattern.
pub struct RobotRngs {
    pub inner: Vec<RobotRng>,
}

impl RobotRngs {
    /// Allocate and seed `count` per-robot RNGs from `global_seed`.
    pub(crate) fn new(count: usize, global_seed: u64) -> Self {
        let inner = (0..count as u32)
            .map(|i| RobotRng::new(global_seed, RobotId(i)))
            .collect();
        Self { inner }
    }

    /// Mutable reference to one robot's RNG.
    #[inline]
    pub fn get_mut(&mut self, robot: RobotId) -> &mut RobotRng {
        &mut self.inner[robot.index()]
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

// ── RobotStore ────────────────────────────────────────────────────────────────

/// Structure-of-Arrays storage for all robot state.
///
/// Every `Vec` field has exactly `count` elements; the `RobotId` value is the
/// index into all of them:
///
/// ```ignore
/// let pos = store.positions[robot.index()];  // O(1), cache-friendly
/// ```
///
/// The orchestrator owns the only mutable reference during a run; movement
/// policies see the store read-only through their step context.
pub struct RobotStore {
    /// Number of robots.  Equals the length of every SoA `Vec`.
    pub count: usize,

    /// Current cell of each robot.
    pub positions: Vec<GridPoint>,

    /// Destination cell each robot is trying to reach.
    pub goals: Vec<GridPoint>,

    /// Per-tick activity marker.  Written by the label phase, read by
    /// movement policies, reset to `Passive` at the end of every tick.
    pub activity: Vec<Activity>,
}

impl RobotStore {
    /// `true` if there are no robots.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Iterator over all `RobotId`s in ascending index order.
    pub fn robot_ids(&self) -> impl Iterator<Item = RobotId> + '_ {
        (0..self.count as u32).map(RobotId)
    }

    /// `true` if the robot's current cell equals its goal cell.
    #[inline]
    pub fn at_goal(&self, robot: RobotId) -> bool {
        self.positions[robot.index()] == self.goals[robot.index()]
    }

    /// `true` iff every robot sits on its goal.  Depends only on positions,
    /// never on activity markers.
    pub fn all_on_goals(&self) -> bool {
        self.robot_ids().all(|r| self.at_goal(r))
    }

    /// Euclidean distance between two robots' current cells.
    #[inline]
    pub fn distance_between(&self, a: RobotId, b: RobotId) -> f64 {
        self.positions[a.index()].distance(self.positions[b.index()])
    }

    // ── Package-private constructor used by RobotStoreBuilder ─────────────

    pub(crate) fn new(positions: Vec<GridPoint>, goals: Vec<GridPoint>) -> Self {
        debug_assert_eq!(positions.len(), goals.len());
        let count = positions.len();
        Self {
            count,
            positions,
            goals,
            activity: vec![Activity::Passive; count],
        }
    }
}
