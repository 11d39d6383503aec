//! Builder for constructing a [`Sim`].

use swarm_core::{SimConfig, Tick};
use swarm_grid::GridField;
use swarm_policy::MovePolicy;
use swarm_robot::{RobotRngs, RobotStore};

use crate::{Sim, SimError, SimResult};

/// Builder for [`Sim<M>`].
///
/// # Required inputs
///
/// - [`SimConfig`] — seed, conflict radius, tick limit, …
/// - [`GridField`] — the field geometry
/// - [`RobotStore`] + [`RobotRngs`] — from [`swarm_robot::RobotStoreBuilder`]
/// - `M: MovePolicy` — the movement policy
///
/// # Example
///
/// ```rust,ignore
/// let (robots, rngs) = RobotStoreBuilder::new(config.seed)
///     .robot(GridPoint { x: 0, y: 0 }, GridPoint { x: 8, y: 8 })
///     .build();
/// let policy = EquilibriumPolicy::new(NashStrategy, AStarPathfinder);
/// let mut sim = SimBuilder::new(config, field, robots, rngs, policy).build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder<M: MovePolicy> {
    config: SimConfig,
    field: GridField,
    robots: RobotStore,
    rngs: RobotRngs,
    policy: M,
}

impl<M: MovePolicy> SimBuilder<M> {
    /// Create a builder with all required inputs.
    pub fn new(
        config: SimConfig,
        field: GridField,
        robots: RobotStore,
        rngs: RobotRngs,
        policy: M,
    ) -> Self {
        Self { config, field, robots, rngs, policy }
    }

    /// Validate inputs and return a ready-to-run [`Sim`] at tick zero.
    pub fn build(self) -> SimResult<Sim<M>> {
        if !(self.config.conflict_radius.is_finite() && self.config.conflict_radius > 0.0) {
            return Err(SimError::Config(format!(
                "conflict radius must be positive and finite, got {}",
                self.config.conflict_radius
            )));
        }

        if self.rngs.len() != self.robots.count {
            return Err(SimError::RobotCountMismatch {
                expected: self.robots.count,
                got:      self.rngs.len(),
                what:     "robot rngs",
            });
        }

        // Both endpoints must be open cells; reachability is the policies'
        // problem and surfaces as a path error at run time.
        for robot in self.robots.robot_ids() {
            let pos = self.robots.positions[robot.index()];
            if !self.field.is_open(pos) {
                return Err(SimError::InvalidPlacement { robot, at: pos });
            }
            let goal = self.robots.goals[robot.index()];
            if !self.field.is_open(goal) {
                return Err(SimError::InvalidPlacement { robot, at: goal });
            }
        }

        Ok(Sim {
            config: self.config,
            field: self.field,
            robots: self.robots,
            rngs: self.rngs,
            policy: self.policy,
            tick: Tick::ZERO,
        })
    }
}
