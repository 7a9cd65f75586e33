//! Simulation observer trait for progress reporting and data collection.

use bt_core::{Status, Tick};

use crate::AgentSnapshot;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// tick loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example - progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl SimObserver for ProgressPrinter {
///     fn on_tick_end(&mut self, tick: Tick, statuses: &[Status]) {
///         if tick.0 % self.interval == 0 {
///             let done = statuses.iter().filter(|s| s.is_success()).count();
///             println!("tick {tick}: {done} agents done");
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called at the end of each tick with every agent's root status,
    /// indexed by `AgentId`.
    fn on_tick_end(&mut self, _tick: Tick, _statuses: &[Status]) {}

    /// Called at snapshot intervals (every `config.output_interval_ticks` ticks).
    fn on_snapshot(&mut self, _tick: Tick, _agents: &[AgentSnapshot<'_>]) {}

    /// Called once after the final tick completes.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
