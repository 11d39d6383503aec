//! Per-tick activity classification shared across the coordination crates.
//!
//! The labeling pass in `swarm-sim` decides each tick which robots must
//! reason game-theoretically about nearby conflict (`Active`) and which may
//! follow their plain movement rule (`Passive`).  The labeler's internal
//! "undetermined" state is private to that pass and can never appear here —
//! anything holding an `Activity` is looking at a resolved label.

/// How a robot is expected to move this tick.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Activity {
    /// No nearby conflict owner — follow the plain movement rule (default).
    #[default]
    Passive,
    /// Must resolve local conflicts via the strategy solver this tick.
    Active,
}

impl Activity {
    /// `true` for robots that must run game-theoretic conflict resolution.
    #[inline]
    pub fn is_active(self) -> bool {
        matches!(self, Activity::Active)
    }

    /// Human-readable label for observers and debug output.
    pub fn as_str(self) -> &'static str {
        match self {
            Activity::Passive => "passive",
            Activity::Active  => "active",
        }
    }
}

impl std::fmt::Display for Activity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
