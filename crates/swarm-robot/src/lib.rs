//! `swarm-robot` — Structure-of-Arrays robot storage for the `rust_swarm`
//! framework.
//!
//! # Crate layout
//!
//! | Module      | Contents                                               |
//! |-------------|--------------------------------------------------------|
//! | [`store`]   | `RobotStore` (SoA arrays), `RobotRngs` (per-robot RNG) |
//! | [`builder`] | `RobotStoreBuilder` (fluent construction)              |

pub mod builder;
pub mod store;


pub use builder::RobotStoreBuilder;
pub use store::{RobotRngs, RobotStore};
