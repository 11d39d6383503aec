//! `swarm-sim` — tick loop orchestrator for the rust_swarm framework.
//!
//! # Tick phases
//!
//! ```text
//! for each tick until all robots stand on their goals (or the limit):
//!   ① Conflict graph — O(n²) proximity scan; edge iff distance < radius.
//!   ② Labeling       — BFS from min-degree seeds marks robots active or
//!                      passive; markers are written into the store.
//!   ③ Decide         — MovePolicy::decide per robot against the frozen
//!                      tick-start snapshot (parallel with the `parallel`
//!                      feature).  Any error aborts the tick before a
//!                      single robot moves.
//!   ④ Apply          — commit destinations in ascending RobotId order,
//!                      then reset every marker to passive.
//! ```
//!
//! # Cargo features
//!
//! | Feature    | Effect                                          |
//! |------------|-------------------------------------------------|
//! | `parallel` | Runs the decide phase on Rayon's thread pool.   |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use swarm_core::{GridPoint, SimConfig};
//! use swarm_grid::{AStarPathfinder, GridField};
//! use swarm_policy::{EquilibriumPolicy, NashStrategy};
//! use swarm_robot::RobotStoreBuilder;
//! use swarm_sim::{NoopObserver, SimBuilder};
//!
//! let (robots, rngs) = RobotStoreBuilder::new(config.seed)
//!     .robot(GridPoint { x: 0, y: 0 }, GridPoint { x: 8, y: 8 })
//!     .build();
//! let policy = EquilibriumPolicy::new(NashStrategy, AStarPathfinder);
//! let mut sim = SimBuilder::new(config, GridField::new(9, 9), robots, rngs, policy)
//!     .build()?;
//! sim.run(&mut NoopObserver)?;
//! ```

pub mod builder;
pub mod conflict;
pub mod error;
pub mod label;
pub mod observer;
pub mod sim;

#[cfg(test)]
mod tests;

pub use builder::SimBuilder;
pub use conflict::ConflictGraph;
pub use error::{SimError, SimResult};
pub use label::assign_activity;
pub use observer::{NoopObserver, SimObserver};
pub use sim::{Sim, StepReport};
