//! `swarm-grid` — grid field and pathfinding.
//!
//! # Crate layout
//!
//! | Module       | Contents                                              |
//! |--------------|-------------------------------------------------------|
//! | [`field`]    | `GridField` (bounds + static blocked-cell mask)       |
//! | [`pathfind`] | `Pathfinder` trait, `SearchRecord`, `AStarPathfinder` |
//! | [`error`]    | `GridError`, `GridResult<T>`                          |

pub mod error;
pub mod field;
pub mod pathfind;


pub use error::{GridError, GridResult};
pub use field::GridField;
pub use pathfind::{AStarPathfinder, Pathfinder, SearchRecord};
