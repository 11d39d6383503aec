//! Deterministic per-robot RNG wrapper.
//!
//! # Determinism strategy
//!
//! Each robot gets its own independent `SmallRng` seeded by:
//!
//!   seed = global_seed XOR (robot_id * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive robot IDs uniformly across the seed space.
//! This means:
//!
//! - Robots never share RNG state (no contention, no ordering dependency).
//! - Adding or removing robots at the end of the list does not disturb the
//!   seeds of existing robots — runs are reproducible even as populations
//!   grow.
//! - The strategy solver's mixed-strategy draw is the only source of
//!   nondeterminism in the framework, and it flows entirely through these
//!   wrappers; nothing touches thread-local or global RNG state.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::RobotId;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Per-robot deterministic RNG.
///
/// Create one per robot at simulation init; store in a parallel
/// `Vec<RobotRng>` alongside the other SoA arrays.  The type is `!Sync` to
/// prevent accidental sharing across threads — each Rayon worker must hold
/// its own slice.
pub struct RobotRng(SmallRng);

impl RobotRng {
    /// Seed deterministically from the run's global seed and a robot ID.
    pub fn new(global_seed: u64, robot: RobotId) -> Self {
        let seed = global_seed ^ (robot.0 as u64).wrapping_mul(MIXING_CONSTANT);
        RobotRng(SmallRng::seed_from_u64(seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types
    /// (`dist.sample(rng.inner())`, `rng.inner().gen_range(...)`, etc.)
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Sample a uniformly distributed value of any `Standard`-distributed type.
    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }
}
