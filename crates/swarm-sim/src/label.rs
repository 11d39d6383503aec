//! BFS activity labeling over the conflict graph.

use std::collections::VecDeque;

use swarm_core::{Activity, RobotId};

use crate::ConflictGraph;

/// Internal three-state marker. Only the final `Active` assignments
/// survive into the public two-state [`Activity`]; everything else
/// collapses to passive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Label {
    Undetermined,
    Passive,
    Active,
}

/// Assign one activity marker per robot from the conflict graph.
///
/// Isolated robots are passive outright. Everything else is labeled by a
/// breadth-first wave seeded with every unlabeled robot of minimum
/// degree, in ascending id order: an unlabeled robot reached by the wave
/// becomes active and immediately demotes its unlabeled neighbors to
/// passive, while passive robots pass the wave on. Seeding repeats until
/// no robot is left unlabeled, so disconnected groups and groups whose
/// local minimum degree exceeds the first seed degree are always
/// covered.
///
/// Two properties hold on the result: no two active robots are in
/// conflict with each other, and every conflicted passive robot has at
/// least one active neighbor.
pub fn assign_activity(graph: &ConflictGraph) -> Vec<Activity> {
    let n = graph.robot_count();
    let mut labels = vec![Label::Undetermined; n];

    for i in 0..n {
        if graph.is_isolated(RobotId(i as u32)) {
            labels[i] = Label::Passive;
        }
    }

    let mut queue: VecDeque<RobotId> = VecDeque::new();
    loop {
        // Seed the next wave with every minimum-degree unlabeled robot.
        let min_degree = (0..n)
            .filter(|&i| labels[i] == Label::Undetermined)
            .map(|i| graph.degree(RobotId(i as u32)))
            .min();
        let Some(min_degree) = min_degree else { break };
        queue.extend(
            (0..n)
                .filter(|&i| {
                    labels[i] == Label::Undetermined
                        && graph.degree(RobotId(i as u32)) == min_degree
                })
                .map(|i| RobotId(i as u32)),
        );

        while let Some(robot) = queue.pop_front() {
            match labels[robot.index()] {
                Label::Undetermined => {
                    // No active neighbor can exist here: activating a
                    // robot demotes its whole neighborhood first.
                    labels[robot.index()] = Label::Active;
                    for &nb in graph.neighbors(robot) {
                        if labels[nb.index()] == Label::Undetermined {
                            labels[nb.index()] = Label::Passive;
                        }
                        queue.push_back(nb);
                    }
                }
                Label::Passive => {
                    for &nb in graph.neighbors(robot) {
                        if labels[nb.index()] == Label::Undetermined {
                            queue.push_back(nb);
                        }
                    }
                }
                Label::Active => {}
            }
        }
    }

    debug_assert!(
        labels.iter().all(|&l| l != Label::Undetermined),
        "labeling left a robot undetermined"
    );
    labels
        .into_iter()
        .map(|l| match l {
            Label::Active => Activity::Active,
            _ => Activity::Passive,
        })
        .collect()
}
