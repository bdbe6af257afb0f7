//! Tests for the CSV backend and the output observer.

use std::fs;

use lux_behavior::PhaseFractionPull;
use lux_core::{SwarmConfig, Tick};
use lux_sim::{SimBuilder, SimObserver};
use lux_space::BruteForceIndex;

use crate::{AgentSnapshotRow, CsvWriter, OutputWriter, SimOutputObserver, TickSummaryRow};

#[cfg(test)]
mod csv_backend {
    use super::*;

    #[test]
    fn writes_headers_and_rows() {
        let dir = tempfile::tempdir().unwrap();
        let mut writer = CsvWriter::new(dir.path()).unwrap();

        writer
            .write_snapshots(&[AgentSnapshotRow {
                agent_id: 3,
                tick:     7,
                x:        1.5,
                y:        2.5,
                vx:       -0.5,
                vy:       0.25,
                flashing: true,
            }])
            .unwrap();
        writer
            .write_tick_summary(&TickSummaryRow {
                tick:            7,
                flashing_agents: 1,
                sync_order:      0.5,
            })
            .unwrap();
        writer.finish().unwrap();

        let snapshots = fs::read_to_string(dir.path().join("agent_snapshots.csv")).unwrap();
        let mut lines = snapshots.lines();
        assert_eq!(lines.next().unwrap(), "agent_id,tick,x,y,vx,vy,flashing");
        assert_eq!(lines.next().unwrap(), "3,7,1.5,2.5,-0.5,0.25,1");

        let summaries = fs::read_to_string(dir.path().join("tick_summaries.csv")).unwrap();
        let mut lines = summaries.lines();
        assert_eq!(lines.next().unwrap(), "tick,flashing_agents,sync_order");
        assert_eq!(lines.next().unwrap(), "7,1,0.5");
    }

    #[test]
    fn finish_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let mut writer = CsvWriter::new(dir.path()).unwrap();
        writer.finish().unwrap();
        writer.finish().unwrap();
    }
}

#[cfg(test)]
mod observer_bridge {
    use super::*;

    #[test]
    fn run_produces_one_summary_per_tick_and_thinned_snapshots() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = SwarmConfig { agent_count: 4, ..SwarmConfig::default() };
        let mut sim = SimBuilder::new(cfg, PhaseFractionPull::new(), BruteForceIndex)
            .snapshot_interval(5)
            .build()
            .unwrap();

        let writer = CsvWriter::new(dir.path()).unwrap();
        let mut observer = SimOutputObserver::new(writer);
        sim.run(10, &mut observer);
        assert!(observer.take_error().is_none());

        let summaries = fs::read_to_string(dir.path().join("tick_summaries.csv")).unwrap();
        // Header + one row per tick.
        assert_eq!(summaries.lines().count(), 11);

        let snapshots = fs::read_to_string(dir.path().join("agent_snapshots.csv")).unwrap();
        // Header + 4 agents × snapshots at ticks 0 and 5.
        assert_eq!(snapshots.lines().count(), 9);
    }

    #[test]
    fn summary_reflects_flash_state() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = SwarmConfig { agent_count: 2, ..SwarmConfig::default() };
        let mut sim = SimBuilder::new(cfg, PhaseFractionPull::new(), BruteForceIndex)
            .build()
            .unwrap();
        sim.agents.is_flashing[0] = true;
        sim.agents.is_flashing[1] = true;

        let writer = CsvWriter::new(dir.path()).unwrap();
        let mut observer = SimOutputObserver::new(writer);
        observer.on_tick_end(Tick(0), &sim.agents);
        observer.on_sim_end(Tick(0));

        let summaries = fs::read_to_string(dir.path().join("tick_summaries.csv")).unwrap();
        let row = summaries.lines().nth(1).unwrap();
        assert!(row.starts_with("0,2,"), "expected both agents counted, got {row}");
    }
}
