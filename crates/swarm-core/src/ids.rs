//! Strongly typed, zero-cost robot identifier.
//!
//! `RobotId` is `Copy + Ord + Hash` so it can be used as a map key and sorted
//! collection element without ceremony.  The inner integer is `pub` to allow
//! direct indexing into SoA `Vec`s via `id.0 as usize`, but callers should
//! prefer the `.index()` helper for clarity.

use std::fmt;

/// Index of a robot in SoA storage.  Max ~4.3 billion robots.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RobotId(pub u32);

impl RobotId {
    /// Sentinel meaning "no valid ID" — equivalent to `u32::MAX`.
    pub const INVALID: RobotId = RobotId(u32::MAX);

    /// Cast to `usize` for direct use as a `Vec` index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl Default for RobotId {
    /// Returns the `INVALID` sentinel so uninitialized IDs are visibly invalid.
    #[inline(always)]
    fn default() -> Self {
        Self::INVALID
    }
}

impl fmt::Display for RobotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RobotId({})", self.0)
    }
}

impl From<RobotId> for usize {
    #[inline(always)]
    fn from(id: RobotId) -> usize {
        id.0 as usize
    }
}

impl TryFrom<usize> for RobotId {
    type Error = std::num::TryFromIntError;
    fn try_from(n: usize) -> Result<RobotId, Self::Error> {
        u32::try_from(n).map(RobotId)
    }
}
