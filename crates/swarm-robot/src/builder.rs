//! Fluent builder for constructing `RobotStore` + `RobotRngs` in one step.
//!
//! # Usage
//!
//! ```rust
//! use swarm_core::GridPoint;
//! use swarm_robot::RobotStoreBuilder;
//!
//! let (store, rngs) = RobotStoreBuilder::new(/*seed=*/ 42)
//!     .robot(GridPoint::new(0, 0), GridPoint::new(8, 0))
//!     .robot(GridPoint::new(8, 0), GridPoint::new(0, 0))
//!     .build();
//!
//! assert_eq!(store.count, 2);
//! assert_eq!(rngs.len(), 2);
//! // Every robot starts Passive; the first labeling pass decides the rest.
//! ```

use swarm_core::GridPoint;

use crate::{RobotRngs, RobotStore};

/// Fluent builder for [`RobotStore`] + [`RobotRngs`].
///
/// Robots are appended in spawn order; the `RobotId` of each robot is its
/// position in that order.  RNG seeds depend only on the global seed and the
/// id, so appending robots never disturbs earlier robots' random streams.
pub struct RobotStoreBuilder {
    seed:   u64,
    spawns: Vec<(GridPoint, GridPoint)>,
}

impl RobotStoreBuilder {
    /// Create an empty builder using `seed` as the global RNG seed.
    pub fn new(seed: u64) -> Self {
        Self { seed, spawns: Vec::new() }
    }

    /// Append one robot with its spawn cell and goal cell.
    pub fn robot(mut self, position: GridPoint, goal: GridPoint) -> Self {
        self.spawns.push((position, goal));
        self
    }

    /// Append robots from any `(position, goal)` iterator.
    pub fn robots<I: IntoIterator<Item = (GridPoint, GridPoint)>>(mut self, spawns: I) -> Self {
        self.spawns.extend(spawns);
        self
    }

    /// Construct the store and the matching RNG pool.
    ///
    /// Placement validity (cells open, inside the field) is checked by the
    /// simulation builder, which is the first point where a field exists to
    /// check against.
    pub fn build(self) -> (RobotStore, RobotRngs) {
        let count = self.spawns.len();
        let (positions, goals) = self.spawns.into_iter().unzip();

        let store = RobotStore::new(positions, goals);
        let rngs = RobotRngs::new(count, self.seed);

        (store, rngs)
    }
}
