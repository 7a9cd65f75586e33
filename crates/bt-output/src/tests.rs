//! Integration tests for bt-output.

#[cfg(test)]
mod csv_tests {
    use bt_core::{Position, Status};
    use tempfile::TempDir;

    use crate::csv::CsvWriter;
    use crate::row::{AgentStatusRow, TickSummaryRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn status_row(agent_id: u32, tick: u64) -> AgentStatusRow {
        AgentStatusRow {
            agent_id,
            name:     format!("agent-{agent_id}"),
            tick,
            status:   Some(Status::Running),
            position: Some(Position::new(agent_id as f32, 0.5, -1.0)),
        }
    }

    fn read_rows(path: &std::path::Path) -> Vec<csv::StringRecord> {
        let mut rdr = csv::Reader::from_path(path).unwrap();
        rdr.records().map(|r| r.unwrap()).collect()
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("agent_status.csv").exists());
        assert!(dir.path().join("tick_summaries.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("agent_status.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, ["agent_id", "name", "tick", "status", "x", "y", "z"]);

        let mut rdr2 = csv::Reader::from_path(dir.path().join("tick_summaries.csv")).unwrap();
        let headers2: Vec<_> = rdr2.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers2, ["tick", "elapsed_secs", "success", "running", "failure"]);
    }

    #[test]
    fn csv_status_rows_written() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_statuses(&[status_row(0, 5), status_row(1, 5)]).unwrap();
        w.finish().unwrap();

        let rows = read_rows(&dir.path().join("agent_status.csv"));
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[1][0], "1");
        assert_eq!(&rows[1][1], "agent-1");
        assert_eq!(&rows[1][2], "5");
        assert_eq!(&rows[1][3], "running");
        assert_eq!(&rows[1][4], "1");
        assert_eq!(&rows[1][5], "0.5");
        assert_eq!(&rows[1][6], "-1");
    }

    #[test]
    fn csv_missing_values_are_empty() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        let row = AgentStatusRow { status: None, position: None, ..status_row(3, 0) };
        w.write_statuses(&[row]).unwrap();
        w.finish().unwrap();

        let rows = read_rows(&dir.path().join("agent_status.csv"));
        assert_eq!(&rows[0][3], "");
        assert_eq!(&rows[0][4], "");
        assert_eq!(&rows[0][6], "");
    }

    #[test]
    fn csv_tick_summary_written() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        let row = TickSummaryRow { tick: 3, elapsed_secs: 1.5, success: 2, running: 1, failure: 0 };
        w.write_tick_summary(&row).unwrap();
        w.finish().unwrap();

        let rows = read_rows(&dir.path().join("tick_summaries.csv"));
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][0], "3");
        assert_eq!(&rows[0][1], "1.5");
        assert_eq!(&rows[0][2], "2");
        assert_eq!(&rows[0][3], "1");
        assert_eq!(&rows[0][4], "0");
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }

    #[test]
    fn csv_missing_dir_errors() {
        let dir = tmp();
        assert!(CsvWriter::new(&dir.path().join("absent")).is_err());
    }
}

#[cfg(test)]
mod observer_tests {
    use bt_core::{SimConfig, Status, TickContext};
    use bt_sim::SimBuilder;
    use bt_tree::{BehaviourTree, Node, Strategy};
    use tempfile::TempDir;

    use crate::observer::SimOutputObserver;
    use crate::writer::OutputWriter;
    use crate::{AgentStatusRow, CsvWriter, OutputError, OutputResult, TickSummaryRow};

    /// `Running` for `n` calls, then `Success`.
    struct SucceedAfter(u32);

    impl Strategy<()> for SucceedAfter {
        fn process(&mut self, _ctx: &TickContext, _world: &mut ()) -> Status {
            if self.0 == 0 {
                return Status::Success;
            }
            self.0 -= 1;
            Status::Running
        }
    }

    fn tree(n: u32) -> BehaviourTree<()> {
        BehaviourTree::with_children("t", vec![Node::leaf("wait", SucceedAfter(n))])
    }

    fn config(total_ticks: u64, output_interval_ticks: u64) -> SimConfig {
        SimConfig {
            tick_duration_secs: 0.25,
            total_ticks,
            seed: 1,
            num_threads: Some(1),
            output_interval_ticks,
        }
    }

    #[test]
    fn integration_csv() {
        let config = config(6, 2);
        let mut sim = SimBuilder::new(config.clone())
            .agent("a", tree(0), ())
            .agent("b", tree(2), ())
            .agent("c", tree(10), ())
            .build()
            .unwrap();

        let dir = TempDir::new().unwrap();
        let writer = CsvWriter::new(dir.path()).unwrap();
        let mut obs = SimOutputObserver::new(writer, &config);
        sim.run(&mut obs).unwrap();
        assert!(obs.take_error().is_none(), "no write errors expected");

        // output_interval = 2 → snapshots at ticks 0, 2, 4 (3 ticks × 3 agents).
        let mut rdr = csv::Reader::from_path(dir.path().join("agent_status.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 9);
        assert_eq!(&rows[0][1], "a");
        assert_eq!(&rows[0][4], "", "unit world has no position");

        let mut rdr = csv::Reader::from_path(dir.path().join("tick_summaries.csv")).unwrap();
        let summaries: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(summaries.len(), 6);
        // Tick 2: a and b done, c still running.
        assert_eq!(&summaries[2][1], "0.5");
        assert_eq!(&summaries[2][2], "2");
        assert_eq!(&summaries[2][3], "1");
    }

    /// Writer that fails every call, counting attempts.
    #[derive(Default)]
    struct Broken {
        calls: usize,
    }

    impl OutputWriter for Broken {
        fn write_statuses(&mut self, _rows: &[AgentStatusRow]) -> OutputResult<()> {
            self.calls += 1;
            Err(OutputError::Io(std::io::Error::other("statuses")))
        }
        fn write_tick_summary(&mut self, _row: &TickSummaryRow) -> OutputResult<()> {
            self.calls += 1;
            Err(OutputError::Io(std::io::Error::other("summary")))
        }
        fn finish(&mut self) -> OutputResult<()> {
            Ok(())
        }
    }

    #[test]
    fn keeps_first_error_only() {
        let config = config(3, 1);
        let mut sim = SimBuilder::new(config.clone()).agent("a", tree(0), ()).build().unwrap();
        let mut obs = SimOutputObserver::new(Broken::default(), &config);
        sim.run(&mut obs).unwrap();

        let err = obs.take_error().expect("error stored");
        assert_eq!(err.to_string(), "I/O error: summary");
        assert!(obs.take_error().is_none());
        assert_eq!(obs.into_writer().calls, 6);
    }
}
