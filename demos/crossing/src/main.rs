//! crossing — smallest example for the rust_swarm coordination framework.
//!
//! Four robots start in the corners of a 9×9 field and swap to the
//! diagonally opposite corners, funneling past a short wall across the
//! middle row.  Conflicts near the gaps are resolved tick by tick with
//! the equilibrium policy; the run prints per-tick conflict reports and
//! a final position table.

use std::time::Instant;

use anyhow::Result;

use swarm_core::{DEFAULT_CONFLICT_RADIUS, GridPoint, SimConfig, Tick};
use swarm_grid::{AStarPathfinder, GridField};
use swarm_policy::{EquilibriumPolicy, NashStrategy};
use swarm_robot::RobotStoreBuilder;
use swarm_sim::{SimBuilder, SimObserver, StepReport};

// ── Constants ─────────────────────────────────────────────────────────────────

const FIELD_SIZE: i32 = 9;
const SEED:       u64 = 42;
const MAX_TICKS:  u64 = 200;

// ── Observer ──────────────────────────────────────────────────────────────────

#[derive(Default)]
struct ProgressObserver {
    ticks:       u64,
    total_moves: usize,
    peak_active: usize,
}

impl SimObserver for ProgressObserver {
    fn on_tick_end(&mut self, tick: Tick, report: &StepReport) {
        self.ticks += 1;
        self.total_moves += report.moved;
        self.peak_active = self.peak_active.max(report.active);
        if report.active > 0 {
            println!(
                "{tick}: {} robots in conflict resolution, {} moved",
                report.active, report.moved
            );
        }
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== crossing — rust_swarm coordination ===");
    println!("Field: {FIELD_SIZE}×{FIELD_SIZE}  |  Seed: {SEED}  |  Tick budget: {MAX_TICKS}");
    println!();

    // 1. Field: a three-cell wall across the middle row leaves two gaps
    //    the crossing diagonals have to share.
    let mut field = GridField::new(FIELD_SIZE, FIELD_SIZE);
    field.block_all([
        GridPoint { x: 3, y: 4 },
        GridPoint { x: 4, y: 4 },
        GridPoint { x: 5, y: 4 },
    ]);

    // 2. Robots: corner-to-opposite-corner swaps.
    let corner = FIELD_SIZE - 1;
    let spawns = [
        (GridPoint { x: 0, y: 0 }, GridPoint { x: corner, y: corner }),
        (GridPoint { x: corner, y: corner }, GridPoint { x: 0, y: 0 }),
        (GridPoint { x: corner, y: 0 }, GridPoint { x: 0, y: corner }),
        (GridPoint { x: 0, y: corner }, GridPoint { x: corner, y: 0 }),
    ];
    let (robots, rngs) = RobotStoreBuilder::new(SEED).robots(spawns).build();
    println!("Robots: {} (corner swap)", robots.count);

    // 3. Sim config.
    let config = SimConfig {
        seed:                    SEED,
        conflict_radius:         DEFAULT_CONFLICT_RADIUS,
        max_ticks:               MAX_TICKS,
        snapshot_interval_ticks: 0,
    };

    // 4. Build and run.
    let policy = EquilibriumPolicy::new(NashStrategy, AStarPathfinder);
    let mut sim = SimBuilder::new(config, field, robots, rngs, policy).build()?;

    let mut obs = ProgressObserver::default();
    let t0 = Instant::now();
    sim.run(&mut obs)?;
    let elapsed = t0.elapsed();

    // 5. Summary.
    println!();
    if sim.all_on_goals() {
        println!(
            "All robots on goal after {} ticks ({:.3} s)",
            obs.ticks,
            elapsed.as_secs_f64()
        );
    } else {
        println!(
            "Tick budget exhausted after {} ticks ({:.3} s)",
            obs.ticks,
            elapsed.as_secs_f64()
        );
    }
    println!(
        "Moves applied: {}  |  Peak conflict set: {}",
        obs.total_moves, obs.peak_active
    );
    println!();

    // 6. Final position table.
    println!("{:<8} {:<10} {:<10} {:<6}", "Robot", "Position", "Goal", "Done");
    println!("{}", "-".repeat(36));
    for robot in sim.robots.robot_ids() {
        let i = robot.index();
        println!(
            "{:<8} {:<10} {:<10} {:<6}",
            i,
            sim.robots.positions[i].to_string(),
            sim.robots.goals[i].to_string(),
            if sim.robots.at_goal(robot) { "yes" } else { "no" },
        );
    }

    Ok(())
}
