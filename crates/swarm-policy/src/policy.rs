//! The `MovePolicy` trait — the main extension point for user code.

use swarm_core::{Activity, GridPoint, RobotId, RobotRng};
use swarm_grid::Pathfinder;

use crate::profit::{NeutralCenterProfit, ProfitEvaluator, ProfitTable};
use crate::{PayoffMatrix, PolicyResult, StepContext, Strategy};

/// Payoff added to any joint outcome where both robots land on the same
/// cell or swap cells. Far below every reachable path profit, so a
/// colliding row is never part of an equilibrium when a safe row exists.
const COLLISION_PENALTY: f64 = -100.0;

/// Pluggable per-robot movement.
///
/// Implement this trait to define where each robot tries to move on a
/// tick. Decisions read a frozen [`StepContext`] and a mutable per-robot
/// [`RobotRng`] so results are deterministic regardless of the order
/// robots are processed in.
///
/// # Thread safety
///
/// The simulation loop may call `decide` for many robots in parallel via
/// Rayon, so implementations must be `Send + Sync`. Per-robot state
/// belongs in `RobotStore` (read-only through `ctx.robots`), not in the
/// policy itself.
pub trait MovePolicy: Send + Sync + 'static {
    /// Decide the robot's destination cell for this tick.
    ///
    /// `None` holds the current cell. `ctx.robots` is the tick-start
    /// snapshot and contains every robot, **including `robot` itself** —
    /// filter `robot` out when scanning for rivals.
    fn decide(
        &self,
        robot: RobotId,
        ctx:   &StepContext<'_>,
        rng:   &mut RobotRng,
    ) -> PolicyResult<Option<GridPoint>>;
}

/// A [`MovePolicy`] that never moves.
///
/// Useful as a placeholder in tests or for frozen robot populations that
/// only occupy space.
pub struct HoldPolicy;

impl MovePolicy for HoldPolicy {
    fn decide(
        &self,
        _robot: RobotId,
        _ctx:   &StepContext<'_>,
        _rng:   &mut RobotRng,
    ) -> PolicyResult<Option<GridPoint>> {
        Ok(None)
    }
}

/// Plain goal seeking: follow the shortest path one cell per tick.
///
/// Yields (holds) whenever the next path cell is occupied by another
/// robot in the snapshot. No contest is ever played; pair this with
/// [`EquilibriumPolicy`] when robots must negotiate shared cells.
pub struct SeekPolicy<P: Pathfinder> {
    pathfinder: P,
}

impl<P: Pathfinder> SeekPolicy<P> {
    pub fn new(pathfinder: P) -> Self {
        Self { pathfinder }
    }
}

impl<P: Pathfinder + 'static> MovePolicy for SeekPolicy<P> {
    fn decide(
        &self,
        robot: RobotId,
        ctx:   &StepContext<'_>,
        _rng:  &mut RobotRng,
    ) -> PolicyResult<Option<GridPoint>> {
        seek_step(&self.pathfinder, robot, ctx)
    }
}

/// Game-theoretic movement.
///
/// Passive robots seek their goal exactly like [`SeekPolicy`]. Active
/// robots play a one-shot game instead: candidate destinations are the
/// current cell plus its open neighbors, each scored by a
/// [`NeutralCenterProfit`] table, and a row is selected by the wrapped
/// [`Strategy`]. With a rival in conflict range the game is played
/// against the rival's own candidate cells, with collision outcomes
/// pushed below any profit; without one the profit column is played
/// directly, which reduces to picking the best-scoring cell.
pub struct EquilibriumPolicy<S: Strategy, P: Pathfinder> {
    strategy: S,
    pathfinder: P,
}

impl<S: Strategy, P: Pathfinder + Clone> EquilibriumPolicy<S, P> {
    pub fn new(strategy: S, pathfinder: P) -> Self {
        Self { strategy, pathfinder }
    }

    fn contest_step(
        &self,
        robot: RobotId,
        ctx: &StepContext<'_>,
        rng: &mut RobotRng,
    ) -> PolicyResult<Option<GridPoint>> {
        let here = ctx.robots.positions[robot.index()];
        let goal = ctx.robots.goals[robot.index()];

        // Primary destination: the next cell of the goal path, or the
        // current cell when already standing on the goal.
        let record = self.pathfinder.search(ctx.field, here, goal)?;
        let path = record.reconstruct(here, goal);
        let primary = if path.len() > 1 { path[1] } else { here };

        let candidates = candidate_cells(ctx, here);
        let evaluator = NeutralCenterProfit::new(self.pathfinder.clone(), here);
        let table = evaluator.evaluate(ctx.field, &candidates, primary)?;

        let payoff = match nearest_rival(ctx, robot) {
            Some(rival) => contested_payoff(ctx, &table, here, rival)?,
            None => table.to_payoff_column()?,
        };

        let row = self.strategy.choose(&payoff, rng)?;
        let dest = table.destination(row);
        Ok((dest != here).then_some(dest))
    }
}

impl<S, P> MovePolicy for EquilibriumPolicy<S, P>
where
    S: Strategy + 'static,
    P: Pathfinder + Clone + 'static,
{
    fn decide(
        &self,
        robot: RobotId,
        ctx:   &StepContext<'_>,
        rng:   &mut RobotRng,
    ) -> PolicyResult<Option<GridPoint>> {
        match ctx.robots.activity[robot.index()] {
            Activity::Passive => seek_step(&self.pathfinder, robot, ctx),
            Activity::Active => self.contest_step(robot, ctx, rng),
        }
    }
}

/// One step along the shortest path, yielding to occupied cells.
fn seek_step<P: Pathfinder>(
    pathfinder: &P,
    robot: RobotId,
    ctx: &StepContext<'_>,
) -> PolicyResult<Option<GridPoint>> {
    let here = ctx.robots.positions[robot.index()];
    let goal = ctx.robots.goals[robot.index()];
    if here == goal {
        return Ok(None);
    }
    let record = pathfinder.search(ctx.field, here, goal)?;
    let path = record.reconstruct(here, goal);
    // here != goal, so the path has at least two cells.
    let next = path[1];
    let occupied = ctx
        .robots
        .robot_ids()
        .any(|r| r != robot && ctx.robots.positions[r.index()] == next);
    Ok(if occupied { None } else { Some(next) })
}

/// The current cell plus its open orthogonal neighbors, current first.
fn candidate_cells(ctx: &StepContext<'_>, here: GridPoint) -> Vec<GridPoint> {
    let mut cells = vec![here];
    cells.extend(ctx.field.open_neighbors(here));
    cells
}

/// The closest other robot strictly within conflict range, if any.
/// Distance ties resolve to the lowest id.
fn nearest_rival(ctx: &StepContext<'_>, robot: RobotId) -> Option<RobotId> {
    let mut best: Option<(f64, RobotId)> = None;
    for other in ctx.robots.robot_ids() {
        if other == robot {
            continue;
        }
        let d = ctx.robots.distance_between(robot, other);
        if d < ctx.conflict_radius && best.is_none_or(|(bd, _)| d < bd) {
            best = Some((d, other));
        }
    }
    best.map(|(_, r)| r)
}

/// Build the contest matrix against `rival`: one row per own candidate,
/// one column per rival candidate (the rival's cell plus its open
/// neighbors). Collision outcomes keep the row's profit but get
/// [`COLLISION_PENALTY`] added.
fn contested_payoff(
    ctx: &StepContext<'_>,
    table: &ProfitTable,
    here: GridPoint,
    rival: RobotId,
) -> PolicyResult<PayoffMatrix> {
    let rival_here = ctx.robots.positions[rival.index()];
    let rival_cells = candidate_cells(ctx, rival_here);

    let rows = table.len();
    let cols = rival_cells.len();
    let mut data = Vec::with_capacity(rows * cols);
    for (i, &mine) in table.destinations().iter().enumerate() {
        for &theirs in &rival_cells {
            let collides = mine == theirs || (mine == rival_here && theirs == here);
            let penalty = if collides { COLLISION_PENALTY } else { 0.0 };
            data.push(table.profits()[i] + penalty);
        }
    }
    PayoffMatrix::new(rows, cols, data)
}
