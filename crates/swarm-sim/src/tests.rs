//! Integration tests for swarm-sim.

use swarm_core::{Activity, DEFAULT_CONFLICT_RADIUS, GridPoint, RobotId, SimConfig, Tick};
use swarm_grid::{AStarPathfinder, GridField};
use swarm_policy::{EquilibriumPolicy, NashStrategy, SeekPolicy};
use swarm_robot::{RobotRngs, RobotStore, RobotStoreBuilder};

use crate::{
    ConflictGraph, NoopObserver, Sim, SimBuilder, SimError, SimObserver, StepReport,
    assign_activity,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn p(x: i32, y: i32) -> GridPoint {
    GridPoint { x, y }
}

fn config(max_ticks: u64) -> SimConfig {
    SimConfig {
        seed: 42,
        conflict_radius: DEFAULT_CONFLICT_RADIUS,
        max_ticks,
        snapshot_interval_ticks: 0,
    }
}

/// Robots parked on their own goal cells, one per entry.
fn parked_store(cells: &[(i32, i32)]) -> RobotStore {
    let mut b = RobotStoreBuilder::new(7);
    for &(x, y) in cells {
        b = b.robot(p(x, y), p(x, y));
    }
    let (store, _rngs) = b.build();
    store
}

fn store_of(spawns: &[((i32, i32), (i32, i32))]) -> (RobotStore, RobotRngs) {
    let mut b = RobotStoreBuilder::new(42);
    for &((px, py), (gx, gy)) in spawns {
        b = b.robot(p(px, py), p(gx, gy));
    }
    b.build()
}

/// Two robots swapping ends of the middle row of a 5×5 field.
fn crossing_sim(max_ticks: u64) -> Sim<EquilibriumPolicy<NashStrategy, AStarPathfinder>> {
    let (robots, rngs) = store_of(&[((0, 2), (4, 2)), ((4, 2), (0, 2))]);
    let policy = EquilibriumPolicy::new(NashStrategy, AStarPathfinder);
    SimBuilder::new(config(max_ticks), GridField::new(5, 5), robots, rngs, policy)
        .build()
        .unwrap()
}

// ── ConflictGraph ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod conflict_tests {
    use super::*;

    fn graph_of(cells: &[(i32, i32)]) -> ConflictGraph {
        ConflictGraph::build(&parked_store(cells), DEFAULT_CONFLICT_RADIUS)
    }

    #[test]
    fn adjacent_cells_conflict_symmetrically() {
        let g = graph_of(&[(0, 0), (1, 0)]);
        assert_eq!(g.neighbors(RobotId(0)), &[RobotId(1)]);
        assert_eq!(g.neighbors(RobotId(1)), &[RobotId(0)]);
    }

    #[test]
    fn diagonal_neighbors_conflict() {
        // √2 < 2
        let g = graph_of(&[(0, 0), (1, 1)]);
        assert_eq!(g.degree(RobotId(0)), 1);
    }

    #[test]
    fn exact_radius_is_not_a_conflict() {
        // Distance exactly 2.0 — the bound is strict.
        let g = graph_of(&[(0, 0), (2, 0)]);
        assert!(g.is_isolated(RobotId(0)));
        assert!(g.is_isolated(RobotId(1)));
    }

    #[test]
    fn a_robot_is_never_its_own_neighbor() {
        let g = graph_of(&[(3, 3)]);
        assert_eq!(g.robot_count(), 1);
        assert!(g.is_isolated(RobotId(0)));
    }

    #[test]
    fn neighbor_lists_are_ascending() {
        // 0 ─ 1 ─ 2 in a row; the ends are 2.0 apart, so no 0–2 edge.
        let g = graph_of(&[(0, 0), (1, 0), (2, 0)]);
        assert_eq!(g.neighbors(RobotId(1)), &[RobotId(0), RobotId(2)]);
        assert_eq!(g.neighbors(RobotId(0)), &[RobotId(1)]);
    }

    #[test]
    fn empty_store_builds_empty_graph() {
        let g = graph_of(&[]);
        assert_eq!(g.robot_count(), 0);
    }
}

// ── Activity labeling ─────────────────────────────────────────────────────────

#[cfg(test)]
mod label_tests {
    use super::*;

    fn labels_for(cells: &[(i32, i32)]) -> Vec<Activity> {
        let graph = ConflictGraph::build(&parked_store(cells), DEFAULT_CONFLICT_RADIUS);
        assign_activity(&graph)
    }

    /// Active robots never conflict with each other, and every conflicted
    /// passive robot has an active neighbor to defer to.
    fn assert_labeling_invariants(cells: &[(i32, i32)]) {
        let graph = ConflictGraph::build(&parked_store(cells), DEFAULT_CONFLICT_RADIUS);
        let labels = assign_activity(&graph);
        assert_eq!(labels.len(), cells.len());
        for i in 0..cells.len() {
            let robot = RobotId(i as u32);
            if labels[i] == Activity::Active {
                for &nb in graph.neighbors(robot) {
                    assert_ne!(labels[nb.index()], Activity::Active);
                }
            } else if !graph.is_isolated(robot) {
                assert!(
                    graph
                        .neighbors(robot)
                        .iter()
                        .any(|&nb| labels[nb.index()] == Activity::Active),
                    "conflicted passive robot {robot} has no active neighbor"
                );
            }
        }
    }

    #[test]
    fn empty_graph_labels_nobody() {
        assert!(labels_for(&[]).is_empty());
    }

    #[test]
    fn isolated_robots_stay_passive() {
        let labels = labels_for(&[(0, 0), (10, 10), (20, 0)]);
        assert!(labels.iter().all(|l| *l == Activity::Passive));
    }

    #[test]
    fn adjacent_pair_resolves_one_active() {
        assert_eq!(labels_for(&[(0, 0), (1, 0)]), vec![Activity::Active, Activity::Passive]);
    }

    #[test]
    fn triangle_has_a_single_active() {
        let labels = labels_for(&[(0, 0), (1, 0), (0, 1)]);
        assert_eq!(labels, vec![Activity::Active, Activity::Passive, Activity::Passive]);
    }

    #[test]
    fn line_of_four_activates_both_ends() {
        // Both degree-1 ends are seeded, so each claims its own half.
        let labels = labels_for(&[(0, 0), (1, 0), (2, 0), (3, 0)]);
        assert_eq!(
            labels,
            vec![Activity::Active, Activity::Passive, Activity::Passive, Activity::Active]
        );
    }

    #[test]
    fn disconnected_groups_are_all_labeled() {
        // A pair plus a far-away triangle: the wave must re-seed.
        let labels = labels_for(&[(0, 0), (1, 0), (10, 10), (11, 10), (10, 11)]);
        assert_eq!(
            labels,
            vec![
                Activity::Active,
                Activity::Passive,
                Activity::Active,
                Activity::Passive,
                Activity::Passive,
            ]
        );
    }

    #[test]
    fn labeling_invariants_hold_on_varied_graphs() {
        assert_labeling_invariants(&[(0, 0), (1, 0), (2, 0), (3, 0), (4, 0)]);
        assert_labeling_invariants(&[(0, 0), (1, 0), (0, 1), (5, 5), (6, 5)]);
        // Dense 3×3 block.
        assert_labeling_invariants(&[
            (0, 0), (1, 0), (2, 0),
            (0, 1), (1, 1), (2, 1),
            (0, 2), (1, 2), (2, 2),
        ]);
    }
}

// ── SimBuilder validation ─────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use super::*;

    #[test]
    fn builds_successfully_with_valid_inputs() {
        let (robots, rngs) = store_of(&[((0, 0), (4, 4)), ((4, 0), (0, 4))]);
        let sim = SimBuilder::new(
            config(10),
            GridField::new(5, 5),
            robots,
            rngs,
            SeekPolicy::new(AStarPathfinder),
        )
        .build()
        .unwrap();
        assert_eq!(sim.robots.count, 2);
        assert_eq!(sim.tick, Tick::ZERO);
    }

    #[test]
    fn rng_count_mismatch_errors() {
        let (robots, mut rngs) = store_of(&[((0, 0), (4, 4)), ((4, 0), (0, 4))]);
        rngs.inner.pop();
        let err = SimBuilder::new(
            config(10),
            GridField::new(5, 5),
            robots,
            rngs,
            SeekPolicy::new(AStarPathfinder),
        )
        .build();
        assert!(matches!(
            err,
            Err(SimError::RobotCountMismatch { expected: 2, got: 1, .. })
        ));
    }

    #[test]
    fn blocked_spawn_is_rejected() {
        let mut field = GridField::new(5, 5);
        field.block(p(0, 0));
        let (robots, rngs) = store_of(&[((0, 0), (4, 4))]);
        let err = SimBuilder::new(config(10), field, robots, rngs, SeekPolicy::new(AStarPathfinder))
            .build();
        assert!(matches!(
            err,
            Err(SimError::InvalidPlacement { robot: RobotId(0), at: GridPoint { x: 0, y: 0 } })
        ));
    }

    #[test]
    fn blocked_or_outside_goal_is_rejected() {
        let mut field = GridField::new(5, 5);
        field.block(p(4, 4));
        let (robots, rngs) = store_of(&[((0, 0), (4, 4))]);
        let err = SimBuilder::new(config(10), field, robots, rngs, SeekPolicy::new(AStarPathfinder))
            .build();
        assert!(matches!(err, Err(SimError::InvalidPlacement { .. })));

        let (robots, rngs) = store_of(&[((0, 0), (9, 9))]);
        let err = SimBuilder::new(
            config(10),
            GridField::new(5, 5),
            robots,
            rngs,
            SeekPolicy::new(AStarPathfinder),
        )
        .build();
        assert!(matches!(err, Err(SimError::InvalidPlacement { .. })));
    }

    #[test]
    fn non_positive_radius_is_rejected() {
        let (robots, rngs) = store_of(&[((0, 0), (4, 4))]);
        let mut cfg = config(10);
        cfg.conflict_radius = 0.0;
        let err = SimBuilder::new(
            cfg,
            GridField::new(5, 5),
            robots,
            rngs,
            SeekPolicy::new(AStarPathfinder),
        )
        .build();
        assert!(matches!(err, Err(SimError::Config(_))));
    }
}

// ── Tick loop ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod sim_tests {
    use super::*;

    #[test]
    fn lone_robot_arrives_in_manhattan_ticks() {
        let (robots, rngs) = store_of(&[((0, 0), (3, 0))]);
        let mut sim = SimBuilder::new(
            config(20),
            GridField::new(5, 5),
            robots,
            rngs,
            SeekPolicy::new(AStarPathfinder),
        )
        .build()
        .unwrap();
        sim.run(&mut NoopObserver).unwrap();
        assert!(sim.all_on_goals());
        assert_eq!(sim.tick, Tick(3));
    }

    #[test]
    fn equilibrium_policy_matches_seek_when_unconflicted() {
        let (robots, rngs) = store_of(&[((0, 0), (3, 0))]);
        let policy = EquilibriumPolicy::new(NashStrategy, AStarPathfinder);
        let mut sim = SimBuilder::new(config(20), GridField::new(5, 5), robots, rngs, policy)
            .build()
            .unwrap();
        sim.run(&mut NoopObserver).unwrap();
        assert!(sim.all_on_goals());
        assert_eq!(sim.tick, Tick(3));
    }

    #[test]
    fn step_reports_active_and_moved() {
        // Two adjacent robots heading up parallel columns: one is labeled
        // active and sidesteps nothing (its goal column is free), both move.
        let (robots, rngs) = store_of(&[((0, 0), (0, 3)), ((1, 0), (1, 3))]);
        let policy = EquilibriumPolicy::new(NashStrategy, AStarPathfinder);
        let mut sim = SimBuilder::new(config(20), GridField::new(5, 5), robots, rngs, policy)
            .build()
            .unwrap();
        let report = sim.step().unwrap();
        assert_eq!(report, StepReport { active: 1, moved: 2 });
        assert_eq!(sim.robots.positions, vec![p(0, 1), p(1, 1)]);
    }

    #[test]
    fn every_tick_ends_with_all_markers_passive() {
        let (robots, rngs) = store_of(&[((0, 0), (0, 3)), ((1, 0), (1, 3))]);
        let policy = EquilibriumPolicy::new(NashStrategy, AStarPathfinder);
        let mut sim = SimBuilder::new(config(20), GridField::new(5, 5), robots, rngs, policy)
            .build()
            .unwrap();
        sim.step().unwrap();
        assert!(sim.robots.activity.iter().all(|a| *a == Activity::Passive));
    }

    #[test]
    fn goal_check_ignores_activity_markers() {
        let (robots, rngs) = store_of(&[((2, 2), (2, 2))]);
        let policy = SeekPolicy::new(AStarPathfinder);
        let mut sim = SimBuilder::new(config(20), GridField::new(5, 5), robots, rngs, policy)
            .build()
            .unwrap();
        sim.robots.activity[0] = Activity::Active;
        assert!(sim.all_on_goals());
    }

    #[test]
    fn failed_tick_moves_nothing() {
        // A full wall seals the robot off from its goal: the decide phase
        // fails and the tick must leave state untouched.
        let mut field = GridField::new(5, 5);
        field.block_all((0..5).map(|y| p(2, y)));
        let (robots, rngs) = store_of(&[((1, 2), (3, 2))]);
        let mut sim =
            SimBuilder::new(config(20), field, robots, rngs, SeekPolicy::new(AStarPathfinder))
                .build()
                .unwrap();
        let err = sim.step();
        assert!(matches!(err, Err(SimError::Policy(_))));
        assert_eq!(sim.robots.positions, vec![p(1, 2)]);
        assert_eq!(sim.tick, Tick::ZERO);
    }

    #[test]
    fn perpendicular_robots_never_interfere() {
        let (robots, rngs) = store_of(&[((0, 0), (4, 0)), ((0, 4), (4, 4))]);
        let policy = EquilibriumPolicy::new(NashStrategy, AStarPathfinder);
        let mut sim = SimBuilder::new(config(20), GridField::new(5, 5), robots, rngs, policy)
            .build()
            .unwrap();
        sim.run(&mut NoopObserver).unwrap();
        assert!(sim.all_on_goals());
        assert_eq!(sim.tick, Tick(4));
    }

    #[test]
    fn crossing_robots_run_to_completion_without_error() {
        let mut sim = crossing_sim(100);
        sim.run(&mut NoopObserver).unwrap();
        assert!(sim.tick <= Tick(100));
    }

    #[test]
    fn run_ticks_steps_exactly_n() {
        let (robots, rngs) = store_of(&[((0, 0), (4, 0))]);
        let mut sim = SimBuilder::new(
            config(20),
            GridField::new(5, 5),
            robots,
            rngs,
            SeekPolicy::new(AStarPathfinder),
        )
        .build()
        .unwrap();
        sim.run_ticks(2, &mut NoopObserver).unwrap();
        assert_eq!(sim.robots.positions, vec![p(2, 0)]);
        assert_eq!(sim.tick, Tick(2));
        assert!(!sim.all_on_goals());
    }

    #[test]
    fn identical_runs_follow_identical_paths() {
        let mut a = crossing_sim(100);
        let mut b = crossing_sim(100);
        a.run_ticks(5, &mut NoopObserver).unwrap();
        b.run_ticks(5, &mut NoopObserver).unwrap();
        assert_eq!(a.robots.positions, b.robots.positions);
        assert_eq!(a.tick, b.tick);
    }
}

// ── Observer hooks ────────────────────────────────────────────────────────────

#[cfg(test)]
mod observer_tests {
    use super::*;

    #[derive(Default)]
    struct CountingObserver {
        starts: usize,
        ends: usize,
        snapshots: usize,
        sim_ends: usize,
        last_snapshot: Vec<GridPoint>,
    }

    impl SimObserver for CountingObserver {
        fn on_tick_start(&mut self, _tick: Tick) {
            self.starts += 1;
        }
        fn on_tick_end(&mut self, _tick: Tick, _report: &StepReport) {
            self.ends += 1;
        }
        fn on_snapshot(&mut self, _tick: Tick, robots: &RobotStore) {
            self.snapshots += 1;
            self.last_snapshot = robots.positions.clone();
        }
        fn on_sim_end(&mut self, _final_tick: Tick) {
            self.sim_ends += 1;
        }
    }

    #[test]
    fn hooks_fire_once_per_tick() {
        let (robots, rngs) = store_of(&[((0, 0), (2, 0))]);
        let mut cfg = config(10);
        cfg.snapshot_interval_ticks = 1;
        let mut sim =
            SimBuilder::new(cfg, GridField::new(5, 5), robots, rngs, SeekPolicy::new(AStarPathfinder))
                .build()
                .unwrap();
        let mut obs = CountingObserver::default();
        sim.run(&mut obs).unwrap();
        assert_eq!(obs.starts, 2);
        assert_eq!(obs.ends, 2);
        assert_eq!(obs.snapshots, 2);
        assert_eq!(obs.sim_ends, 1);
        assert_eq!(obs.last_snapshot, vec![p(2, 0)]);
    }

    #[test]
    fn zero_interval_disables_snapshots() {
        let (robots, rngs) = store_of(&[((0, 0), (2, 0))]);
        let mut sim = SimBuilder::new(
            config(10),
            GridField::new(5, 5),
            robots,
            rngs,
            SeekPolicy::new(AStarPathfinder),
        )
        .build()
        .unwrap();
        let mut obs = CountingObserver::default();
        sim.run(&mut obs).unwrap();
        assert_eq!(obs.snapshots, 0);
        assert_eq!(obs.sim_ends, 1);
    }
}
