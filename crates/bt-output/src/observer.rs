//! `SimOutputObserver<O>` - bridges `SimObserver` to an `OutputWriter`.

use bt_core::{SimConfig, Status, Tick};
use bt_sim::{AgentSnapshot, SimObserver};

use crate::row::{AgentStatusRow, TickSummaryRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes per-agent statuses and tick summaries to
/// any [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<O: OutputWriter> {
    writer:             O,
    tick_duration_secs: f32,
    last_error:         Option<OutputError>,
}

impl<O: OutputWriter> SimOutputObserver<O> {
    /// Create an observer backed by `writer`, using `config` to convert
    /// ticks to simulated seconds.
    pub fn new(writer: O, config: &SimConfig) -> Self {
        Self {
            writer,
            tick_duration_secs: config.tick_duration_secs,
            last_error:         None,
        }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> O {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<O: OutputWriter> SimObserver for SimOutputObserver<O> {
    fn on_tick_end(&mut self, tick: Tick, statuses: &[Status]) {
        let count = |want: Status| statuses.iter().filter(|&&s| s == want).count() as u64;
        let row = TickSummaryRow {
            tick:         tick.0,
            elapsed_secs: tick.0 as f64 * self.tick_duration_secs as f64,
            success:      count(Status::Success),
            running:      count(Status::Running),
            failure:      count(Status::Failure),
        };
        let result = self.writer.write_tick_summary(&row);
        self.store_err(result);
    }

    fn on_snapshot(&mut self, tick: Tick, agents: &[AgentSnapshot<'_>]) {
        let rows: Vec<AgentStatusRow> = agents
            .iter()
            .map(|a| AgentStatusRow {
                agent_id: a.agent.0,
                name:     a.name.to_owned(),
                tick:     tick.0,
                status:   a.status,
                position: a.position,
            })
            .collect();

        if !rows.is_empty() {
            let result = self.writer.write_statuses(&rows);
            self.store_err(result);
        }
    }

    fn on_sim_end(&mut self, _final_tick: Tick) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
