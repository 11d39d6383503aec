//! Simulation time model and run configuration.
//!
//! Time is a bare monotonically increasing `Tick` counter — one labeling /
//! advance round per tick.  There is no wall-clock mapping: the coordination
//! core is step-driven and every quantity that matters (conflict radius,
//! tick budget, seeds) lives in `SimConfig`, passed explicitly to the
//! orchestrator.  Nothing in the framework reads global mutable state.

use std::fmt;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Conflict radius used when none is configured: two robots interfere when
/// strictly closer than two cell units, which covers orthogonal and diagonal
/// neighbors but not cells a full two steps apart.
pub const DEFAULT_CONFLICT_RADIUS: f64 = 2.0;

/// Top-level simulation configuration.
///
/// Typically loaded from a TOML/JSON file by the application crate (enable
/// the `serde` feature) and passed to the simulation builder.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Robots strictly closer than this (Euclidean, in cell units) are in
    /// conflict and enter the same proximity-graph component.  Must be
    /// positive and finite; see [`DEFAULT_CONFLICT_RADIUS`].
    pub conflict_radius: f64,

    /// Tick budget for a full run — the simulation stops here even if robots
    /// are still short of their goals.
    pub max_ticks: u64,

    /// Emit an observer snapshot every N ticks.  0 disables snapshots.
    pub snapshot_interval_ticks: u64,
}

impl SimConfig {
    /// The tick at which a run ends (exclusive upper bound).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.max_ticks)
    }
}
