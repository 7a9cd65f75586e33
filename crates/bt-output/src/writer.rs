//! The `OutputWriter` trait implemented by backend writers.

use crate::{AgentStatusRow, OutputResult, TickSummaryRow};

/// A sink for status traces.
///
/// Errors surface through [`SimOutputObserver::take_error`] when the writer
/// is driven by a simulation.
///
/// [`SimOutputObserver::take_error`]: crate::SimOutputObserver::take_error
pub trait OutputWriter {
    /// Write a batch of per-agent status rows.
    fn write_statuses(&mut self, rows: &[AgentStatusRow]) -> OutputResult<()>;

    /// Write one tick summary row.
    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent - safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
