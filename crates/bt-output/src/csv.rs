//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `agent_status.csv`
//! - `tick_summaries.csv`
//!
//! Missing values (no status yet, no position) are written as empty fields.

use std::fs::File;
use std::path::Path;

use bt_core::Position;
use csv::Writer;
use tracing::debug;

use crate::{AgentStatusRow, OutputResult, TickSummaryRow};
use crate::writer::OutputWriter;

/// Writes status traces to two CSV files.
pub struct CsvWriter {
    statuses:  Writer<File>,
    summaries: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut statuses = Writer::from_path(dir.join("agent_status.csv"))?;
        statuses.write_record(["agent_id", "name", "tick", "status", "x", "y", "z"])?;

        let mut summaries = Writer::from_path(dir.join("tick_summaries.csv"))?;
        summaries.write_record(["tick", "elapsed_secs", "success", "running", "failure"])?;

        debug!(dir = %dir.display(), "opened CSV status trace");
        Ok(Self {
            statuses,
            summaries,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_statuses(&mut self, rows: &[AgentStatusRow]) -> OutputResult<()> {
        for row in rows {
            let coord = |f: fn(&Position) -> f32| {
                row.position.as_ref().map(|p| f(p).to_string()).unwrap_or_default()
            };
            self.statuses.write_record(&[
                row.agent_id.to_string(),
                row.name.clone(),
                row.tick.to_string(),
                row.status.map(|s| s.as_str()).unwrap_or_default().to_owned(),
                coord(|p| p.x),
                coord(|p| p.y),
                coord(|p| p.z),
            ])?;
        }
        Ok(())
    }

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.tick.to_string(),
            row.elapsed_secs.to_string(),
            row.success.to_string(),
            row.running.to_string(),
            row.failure.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.statuses.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}
