//! `swarm-policy` — movement policies and the equilibrium solver.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                          |
//! |--------------|-------------------------------------------------------------------|
//! | [`context`]  | `StepContext<'a>` — read-only tick snapshot shared by all robots  |
//! | [`payoff`]   | `PayoffMatrix` — validated dense zero-sum game matrix             |
//! | `simplex`    | Tableau LP solver backing the mixed-strategy case (private)       |
//! | [`strategy`] | `Strategy` trait, `NashStrategy` saddle/mixed solver              |
//! | [`profit`]   | `ProfitEvaluator` trait, path-length profit rules                 |
//! | [`policy`]   | `MovePolicy` trait, `HoldPolicy`, `SeekPolicy`, `EquilibriumPolicy` |
//! | [`error`]    | `PolicyError`, `PolicyResult<T>`                                  |
//!
//! # Design notes
//!
//! The two-phase tick loop in swarm-sim works as follows:
//!
//! 1. **Decide phase** (parallelizable): for every robot, call
//!    [`MovePolicy::decide`] against the same frozen [`StepContext`].
//!    All reads go through `&StepContext`; no mutation.
//!
//! 2. **Apply phase** (sequential): commit the collected destinations to
//!    the robot store in id order, then clear activity markers.
//!
//! This split means `MovePolicy` only needs to be `Send + Sync` — it never
//! holds mutable state that could cause data races. It also means every
//! decision on a tick sees the positions robots *started* the tick with,
//! never a half-applied mixture.

pub mod context;
pub mod error;
pub mod payoff;
pub mod policy;
pub mod profit;
pub mod strategy;

mod simplex;


pub use context::StepContext;
pub use error::{PolicyError, PolicyResult};
pub use payoff::PayoffMatrix;
pub use policy::{EquilibriumPolicy, HoldPolicy, MovePolicy, SeekPolicy};
pub use profit::{NeutralCenterProfit, PATH_PROFIT_OFFSET, PathCostProfit, ProfitEvaluator, ProfitTable};
pub use strategy::{NashStrategy, Strategy};
