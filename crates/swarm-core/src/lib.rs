//! `swarm-core` — foundational types for the `rust_swarm` coordination
//! framework.
//!
//! This crate is a dependency of every other `swarm-*` crate.  It
//! intentionally has no `swarm-*` dependencies and minimal external ones
//! (only `rand`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                          |
//! |--------------|---------------------------------------------------|
//! | [`ids`]      | `RobotId`                                         |
//! | [`grid`]     | `GridPoint`, Euclidean + Manhattan distance       |
//! | [`activity`] | `Activity` enum (passive / active)                |
//! | [`time`]     | `Tick`, `SimConfig`                               |
//! | [`rng`]      | `RobotRng` (per-robot deterministic stream)       |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod activity;
pub mod grid;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use activity::Activity;
pub use grid::GridPoint;
pub use ids::RobotId;
pub use rng::RobotRng;
pub use time::{DEFAULT_CONFLICT_RADIUS, SimConfig, Tick};
