//! Read-only view of the simulation passed to movement policies.

use swarm_core::Tick;
use swarm_grid::GridField;
use swarm_robot::RobotStore;

/// A snapshot of the world at the start of a tick.
///
/// Policies receive the same context for every robot in the tick, so
/// decisions are made against frozen positions and activity markers
/// rather than against cells other robots have already claimed.
pub struct StepContext<'a> {
    /// Current simulation tick.
    pub tick: Tick,

    /// The field geometry (bounds and blocked cells).
    pub field: &'a GridField,

    /// Read-only view of every robot's SoA state arrays.
    pub robots: &'a RobotStore,

    /// Two robots closer than this (strictly) are in conflict.
    pub conflict_radius: f64,
}

impl<'a> StepContext<'a> {
    #[inline]
    pub fn new(
        tick: Tick,
        field: &'a GridField,
        robots: &'a RobotStore,
        conflict_radius: f64,
    ) -> Self {
        Self { tick, field, robots, conflict_radius }
    }
}
