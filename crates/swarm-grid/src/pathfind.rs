//! Pathfinding trait and default A* implementation.
//!
//! # Pluggability
//!
//! Movement policies call pathfinding via the [`Pathfinder`] trait, so
//! applications can swap in custom implementations (jump-point search,
//! D* Lite for replanning) without touching the framework core.  The default
//! [`AStarPathfinder`] is sufficient for static fields.
//!
//! # Search / reconstruct split
//!
//! `search` runs the expansion and returns a [`SearchRecord`] — the
//! predecessor map — and `SearchRecord::reconstruct` turns it into the cell
//! sequence.  An unreachable goal is a hard [`GridError::NoPath`], never an
//! empty-but-successful record, so path length 0 can't masquerade as
//! "already there".

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use rustc_hash::FxHashMap;
use swarm_core::GridPoint;

use crate::field::GridField;
use crate::{GridError, GridResult};

// ── SearchRecord ──────────────────────────────────────────────────────────────

/// Predecessor map produced by a successful search.
///
/// Valid only for the `(start, goal)` pair the search ran with.
#[derive(Debug, Clone)]
pub struct SearchRecord {
    came_from: FxHashMap<GridPoint, GridPoint>,
}

impl SearchRecord {
    /// Rebuild the path by walking predecessors back from `goal`.
    ///
    /// The result includes both endpoints, so a `start == goal` search
    /// reconstructs to a single-cell path of length 1.
    pub fn reconstruct(&self, start: GridPoint, goal: GridPoint) -> Vec<GridPoint> {
        let mut path = vec![goal];
        let mut cur = goal;
        while cur != start {
            match self.came_from.get(&cur) {
                Some(&prev) => {
                    path.push(prev);
                    cur = prev;
                }
                None => break,
            }
        }
        debug_assert_eq!(
            path.last(),
            Some(&start),
            "reconstruct called with endpoints from a different search",
        );
        path.reverse();
        path
    }
}

// ── Pathfinder trait ──────────────────────────────────────────────────────────

/// Pluggable grid search engine.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync` so they can be shared across Rayon
/// worker threads during the parallel decide phase.
pub trait Pathfinder: Send + Sync {
    /// Search for a route from `start` to `goal`.
    ///
    /// Fails with [`GridError::Blocked`] when either endpoint is impassable
    /// and [`GridError::NoPath`] when the open cells don't connect them.
    fn search(
        &self,
        field: &GridField,
        start: GridPoint,
        goal: GridPoint,
    ) -> GridResult<SearchRecord>;
}

// ── AStarPathfinder ───────────────────────────────────────────────────────────

/// Standard A* over the 4-connected unit-cost grid with the Manhattan
/// heuristic (admissible and consistent, so the first goal pop is optimal).
#[derive(Copy, Clone, Debug, Default)]
pub struct AStarPathfinder;

impl Pathfinder for AStarPathfinder {
    fn search(
        &self,
        field: &GridField,
        start: GridPoint,
        goal: GridPoint,
    ) -> GridResult<SearchRecord> {
        astar(field, start, goal)
    }
}

fn astar(field: &GridField, start: GridPoint, goal: GridPoint) -> GridResult<SearchRecord> {
    if !field.is_open(start) {
        return Err(GridError::Blocked(start));
    }
    if !field.is_open(goal) {
        return Err(GridError::Blocked(goal));
    }

    let mut came_from: FxHashMap<GridPoint, GridPoint> = FxHashMap::default();
    if start == goal {
        return Ok(SearchRecord { came_from });
    }

    // g[v] = best known step count to reach v.  Every cell ever pushed on the
    // heap has an entry here.
    let mut g: FxHashMap<GridPoint, u32> = FxHashMap::default();
    g.insert(start, 0);

    // Min-heap on f = g + heuristic.  Reverse makes BinaryHeap (max) behave
    // as a min-heap; the GridPoint secondary key ensures deterministic
    // tie-breaking.
    let mut heap: BinaryHeap<Reverse<(u32, GridPoint)>> = BinaryHeap::new();
    heap.push(Reverse((start.manhattan(goal), start)));

    while let Some(Reverse((f, cell))) = heap.pop() {
        if cell == goal {
            return Ok(SearchRecord { came_from });
        }

        // Skip stale heap entries.
        let g_cell = g[&cell];
        if f > g_cell + cell.manhattan(goal) {
            continue;
        }

        for next in field.open_neighbors(cell) {
            let new_g = g_cell + 1;
            if new_g < g.get(&next).copied().unwrap_or(u32::MAX) {
                g.insert(next, new_g);
                came_from.insert(next, cell);
                heap.push(Reverse((new_g + next.manhattan(goal), next)));
            }
        }
    }

    Err(GridError::NoPath { from: start, to: goal })
}
