//! Simulation time model.
//!
//! # Design
//!
//! Time is represented as a monotonically increasing `Tick` counter.  Each
//! tick stands for a fixed slice of simulated time held in `SimClock`:
//!
//!   elapsed_secs = tick * tick_duration_secs
//!
//! The engine itself never reads a clock.  Every `process` call receives a
//! [`TickContext`] carrying the current tick and the elapsed time for that
//! tick, so time-based strategies (e.g. a timed action) are driven entirely
//! by the caller.

use std::fmt;

use crate::{BtError, BtResult};

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── TickContext ──────────────────────────────────────────────────────────────

/// Per-tick input handed to every node and strategy.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TickContext {
    /// The tick being processed.
    pub tick: Tick,

    /// Simulated seconds covered by this tick.
    pub dt_secs: f32,
}

impl TickContext {
    #[inline]
    pub fn new(tick: Tick, dt_secs: f32) -> Self {
        Self { tick, dt_secs }
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Tracks the current tick and converts it to simulated seconds.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// How many simulated seconds one tick represents.
    pub tick_duration_secs: f32,
    /// The current tick - advanced by `SimClock::advance()` each iteration.
    pub current_tick: Tick,
}

impl SimClock {
    pub fn new(tick_duration_secs: f32) -> Self {
        Self {
            tick_duration_secs,
            current_tick: Tick::ZERO,
        }
    }

    /// Advance the clock by one tick.
    #[inline]
    pub fn advance(&mut self) {
        self.current_tick = Tick(self.current_tick.0 + 1);
    }

    /// Elapsed simulated seconds since tick 0.
    #[inline]
    pub fn elapsed_secs(&self) -> f64 {
        self.current_tick.0 as f64 * self.tick_duration_secs as f64
    }

    /// The context for processing the current tick.
    #[inline]
    pub fn context(&self) -> TickContext {
        TickContext::new(self.current_tick, self.tick_duration_secs)
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:.2}s)", self.current_tick, self.elapsed_secs())
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level driver configuration.
///
/// Typically built in code or loaded from a JSON file by the application
/// crate (with the `serde` feature) and passed to the simulation driver.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Simulated seconds per tick.  Must be finite and > 0.
    pub tick_duration_secs: f32,

    /// Total ticks to simulate.
    pub total_ticks: u64,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Worker thread count for the `parallel` feature.  `None` uses Rayon's
    /// global pool.
    pub num_threads: Option<usize>,

    /// Emit an agent snapshot every N ticks.  0 disables snapshots.
    pub output_interval_ticks: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            tick_duration_secs:    1.0 / 60.0,
            total_ticks:           600,
            seed:                  0,
            num_threads:           None,
            output_interval_ticks: 1,
        }
    }
}

impl SimConfig {
    /// The tick at which the simulation ends (exclusive upper bound).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.total_ticks)
    }

    /// Construct a `SimClock` pre-configured for this run.
    pub fn make_clock(&self) -> SimClock {
        SimClock::new(self.tick_duration_secs)
    }

    /// Reject values the driver cannot run with.
    pub fn validate(&self) -> BtResult<()> {
        if !self.tick_duration_secs.is_finite() || self.tick_duration_secs <= 0.0 {
            return Err(BtError::Config(format!(
                "tick_duration_secs must be finite and positive, got {}",
                self.tick_duration_secs
            )));
        }
        if self.num_threads == Some(0) {
            return Err(BtError::Config("num_threads must be at least 1".into()));
        }
        Ok(())
    }
}
