//! Simulation observer trait for progress reporting and data collection.

use swarm_core::Tick;
use swarm_robot::RobotStore;

use crate::StepReport;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// tick loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl SimObserver for ProgressPrinter {
///     fn on_tick_end(&mut self, tick: Tick, report: &StepReport) {
///         if tick.0 % self.interval == 0 {
///             println!("tick {tick}: {} active, {} moved", report.active, report.moved);
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called at the end of each successful tick.
    fn on_tick_end(&mut self, _tick: Tick, _report: &StepReport) {}

    /// Called at snapshot intervals (every `config.snapshot_interval_ticks`
    /// ticks, after the tick has been applied).
    ///
    /// Provides read-only access to the robot store so output writers can
    /// record a position snapshot without the sim needing to know about any
    /// specific output format.
    fn on_snapshot(&mut self, _tick: Tick, _robots: &RobotStore) {}

    /// Called once after the final tick completes.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
