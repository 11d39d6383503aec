//! The `Sim` struct and its tick loop.

use swarm_core::{Activity, GridPoint, SimConfig, Tick};
use swarm_grid::GridField;
use swarm_policy::{MovePolicy, PolicyResult, StepContext};
use swarm_robot::{RobotRngs, RobotStore};

use crate::{ConflictGraph, SimObserver, SimResult, assign_activity};

/// What one tick did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StepReport {
    /// Robots the conflict graph labeled active this tick.
    pub active: usize,
    /// Robots that changed cell this tick.
    pub moved: usize,
}

/// The main simulation runner.
///
/// `Sim<M>` holds all simulation state and drives the tick loop:
///
/// 1. **Conflict graph**: O(n²) proximity scan over tick-start positions.
/// 2. **Labeling**: BFS over the graph marks each robot active or passive;
///    the markers are written to the store so every decision sees them.
/// 3. **Decide phase** (optionally parallel with the `parallel` feature):
///    call [`MovePolicy::decide`] for every robot against the frozen
///    tick-start snapshot. Any error aborts the tick before a single robot
///    moves.
/// 4. **Apply phase** (sequential, ascending `RobotId` for determinism):
///    commit destinations, then reset every activity marker to passive.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<M: MovePolicy> {
    /// Global configuration (seed, conflict radius, tick limit, …).
    pub config: SimConfig,

    /// The field robots move on.
    pub field: GridField,

    /// Robot state (SoA arrays).  Policies access this through
    /// `StepContext`.
    pub robots: RobotStore,

    /// Per-robot deterministic RNGs, separated for the split-borrow pattern.
    pub rngs: RobotRngs,

    /// The movement policy.  Called once per robot per tick.
    pub policy: M,

    /// Current tick.  Advances only when a tick fully succeeds.
    pub tick: Tick,
}

impl<M: MovePolicy> Sim<M> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run from the current tick until every robot stands on its goal or
    /// `config.end_tick()` is reached, whichever comes first.
    ///
    /// Calls observer hooks at every tick boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        while !self.all_on_goals() && self.tick < self.config.end_tick() {
            self.observed_step(observer)?;
        }
        observer.on_sim_end(self.tick);
        Ok(())
    }

    /// Run exactly `n` ticks from the current position.
    ///
    /// Ignores `end_tick` and does not stop on goal arrival.  Useful for
    /// tests and incremental stepping.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.observed_step(observer)?;
        }
        Ok(())
    }

    /// Whether every robot currently stands on its goal cell.
    ///
    /// Depends only on positions; activity markers play no part.
    pub fn all_on_goals(&self) -> bool {
        self.robots.all_on_goals()
    }

    /// Advance the simulation by one tick.
    ///
    /// Either every phase succeeds and the tick counter advances, or the
    /// first decide-phase error is returned with no position changed at
    /// all.  Positions are never partially updated; activity markers are
    /// recomputed from scratch each tick, so a failed tick leaves nothing
    /// to clean up before retrying or stopping.
    pub fn step(&mut self) -> SimResult<StepReport> {
        let now = self.tick;

        // ── Phase 1: conflict graph ───────────────────────────────────────
        let graph = ConflictGraph::build(&self.robots, self.config.conflict_radius);

        // ── Phase 2: activity labeling ────────────────────────────────────
        //
        // Markers go into the store before the decide phase so every robot
        // sees the same labeling through the snapshot.
        self.robots.activity = assign_activity(&graph);
        let active = self.robots.activity.iter().filter(|a| a.is_active()).count();

        // ── Phase 3: decide phase (produce) ───────────────────────────────
        let moves = self.compute_moves(now)?;

        // ── Phase 4: apply phase (consume) ────────────────────────────────
        //
        // Ascending RobotId order keeps results deterministic even when
        // the decide phase ran in parallel.
        let mut moved = 0;
        for (i, dest) in moves.into_iter().enumerate() {
            if let Some(dest) = dest {
                if self.robots.positions[i] != dest {
                    self.robots.positions[i] = dest;
                    moved += 1;
                }
            }
        }

        // ── Phase 5: reset markers ────────────────────────────────────────
        //
        // Every robot leaves the tick passive; the next labeling starts
        // from a clean slate.
        self.robots.activity.fill(Activity::Passive);

        self.tick = now + 1;
        Ok(StepReport { active, moved })
    }

    // ── Internals ─────────────────────────────────────────────────────────

    fn observed_step<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        let now = self.tick;
        observer.on_tick_start(now);
        let report = self.step()?;
        observer.on_tick_end(now, &report);
        if self.config.snapshot_interval_ticks > 0
            && now.0.is_multiple_of(self.config.snapshot_interval_ticks)
        {
            observer.on_snapshot(now, &self.robots);
        }
        Ok(())
    }

    /// Compute destinations for all robots against the frozen snapshot.
    ///
    /// With the `parallel` Cargo feature the per-robot `decide` calls run
    /// on Rayon's thread pool; per-robot RNG streams make the result
    /// identical to the sequential order.
    fn compute_moves(&mut self, now: Tick) -> SimResult<Vec<Option<GridPoint>>> {
        // Explicit field borrows so the borrow checker sees disjoint access.
        let field = &self.field;
        let robots = &self.robots;
        let radius = self.config.conflict_radius;
        let policy = &self.policy;
        let rngs = &mut self.rngs;

        let ctx = StepContext::new(now, field, robots, radius);

        #[cfg(not(feature = "parallel"))]
        let results: Vec<PolicyResult<Option<GridPoint>>> = robots
            .robot_ids()
            .zip(rngs.inner.iter_mut())
            .map(|(robot, rng)| policy.decide(robot, &ctx, rng))
            .collect();

        #[cfg(feature = "parallel")]
        let results: Vec<PolicyResult<Option<GridPoint>>> = {
            use rayon::prelude::*;

            rngs.inner
                .par_iter_mut()
                .enumerate()
                .map(|(i, rng)| policy.decide(swarm_core::RobotId(i as u32), &ctx, rng))
                .collect()
        };

        // Fail before a single move is applied: a failed decide phase
        // leaves every position exactly as it was.
        let mut moves = Vec::with_capacity(results.len());
        for result in results {
            moves.push(result?);
        }
        Ok(moves)
    }
}
