//! Proximity-based conflict graph over the robot population.

use swarm_core::RobotId;
use swarm_robot::RobotStore;

/// Undirected adjacency lists: robots closer than the conflict radius.
///
/// Built fresh at the start of every tick from the tick-start positions.
/// Each list is sorted ascending by construction, so iteration order is
/// deterministic.
#[derive(Clone, Debug)]
pub struct ConflictGraph {
    adjacency: Vec<Vec<RobotId>>,
}

impl ConflictGraph {
    /// O(n²) pairwise scan of robot positions.
    ///
    /// The bound is strict: two robots exactly `radius` apart are not in
    /// conflict. A robot is never its own neighbor.
    pub fn build(robots: &RobotStore, radius: f64) -> Self {
        let mut adjacency = vec![Vec::new(); robots.count];
        for i in 0..robots.count {
            for j in (i + 1)..robots.count {
                let a = RobotId(i as u32);
                let b = RobotId(j as u32);
                if robots.distance_between(a, b) < radius {
                    adjacency[i].push(b);
                    adjacency[j].push(a);
                }
            }
        }
        Self { adjacency }
    }

    /// Number of robots the graph was built over.
    #[inline]
    pub fn robot_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Robots in conflict with `robot`, ascending by id.
    #[inline]
    pub fn neighbors(&self, robot: RobotId) -> &[RobotId] {
        &self.adjacency[robot.index()]
    }

    /// Number of conflicts `robot` participates in.
    #[inline]
    pub fn degree(&self, robot: RobotId) -> usize {
        self.adjacency[robot.index()].len()
    }

    /// Whether `robot` has no conflicts at all this tick.
    #[inline]
    pub fn is_isolated(&self, robot: RobotId) -> bool {
        self.adjacency[robot.index()].is_empty()
    }
}
