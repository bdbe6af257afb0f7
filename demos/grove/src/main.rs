//! grove — headless firefly grove demo for the rust_lux framework.
//!
//! Spawns a swarm with loosely scattered flash phases, lets the flocking and
//! the phase-fraction coupling run for a few thousand ticks, and prints how
//! the population's synchrony evolves.  Mid-run it grows the swarm the way a
//! front end would on a key press, to show that population changes are safe
//! between ticks.  Snapshots and per-tick summaries land in `output/grove/`.

use std::path::Path;
use std::time::Instant;

use anyhow::Result;

use lux_agent::AgentStore;
use lux_behavior::PhaseFractionPull;
use lux_core::{SwarmConfig, Tick};
use lux_output::{CsvWriter, OutputWriter, SimOutputObserver};
use lux_sim::{SimBuilder, SimObserver};
use lux_space::BruteForceIndex;

// ── Constants ─────────────────────────────────────────────────────────────────

const AGENT_COUNT:        usize = 200;
const SEED:               u64   = 42;
const TOTAL_TICKS:        u64   = 6_000;
const MIDPOINT_NEWCOMERS: usize = 50;
const SNAPSHOT_INTERVAL:  u64   = 30;
const SAMPLE_EVERY:       u64   = 500;

// ── Observer wrapper to trace synchrony ───────────────────────────────────────

struct SyncTrace<W: OutputWriter> {
    inner:   SimOutputObserver<W>,
    samples: Vec<(u64, f32, usize)>,
}

impl<W: OutputWriter> SyncTrace<W> {
    fn new(inner: SimOutputObserver<W>) -> Self {
        Self { inner, samples: Vec::new() }
    }
}

impl<W: OutputWriter> SimObserver for SyncTrace<W> {
    fn on_tick_end(&mut self, tick: Tick, agents: &AgentStore) {
        if tick.0 % SAMPLE_EVERY == 0 {
            self.samples.push((tick.0, agents.sync_order(), agents.flashing_count()));
        }
        self.inner.on_tick_end(tick, agents);
    }

    fn on_snapshot(&mut self, tick: Tick, agents: &AgentStore) {
        self.inner.on_snapshot(tick, agents);
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        self.inner.on_sim_end(final_tick);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== grove — rust_lux firefly swarm ===");
    println!("Agents: {AGENT_COUNT} (+{MIDPOINT_NEWCOMERS} mid-run)  |  Ticks: {TOTAL_TICKS}  |  Seed: {SEED}");
    println!();

    // 1. Configuration: a tighter interval band than the defaults so the
    //    common beat emerges within the run.
    let cfg = SwarmConfig {
        agent_count:  AGENT_COUNT,
        seed:         SEED,
        min_interval: 100,
        max_interval: 140,
        min_flash:    10,
        max_flash:    20,
        perception:   90.0,
        ..SwarmConfig::default()
    };

    // 2. Build the sim: reference coupling, brute-force neighbor queries.
    let mut sim = SimBuilder::new(cfg, PhaseFractionPull::new(), BruteForceIndex)
        .snapshot_interval(SNAPSHOT_INTERVAL)
        .build()?;

    // 3. Output.
    std::fs::create_dir_all("output/grove")?;
    let writer = CsvWriter::new(Path::new("output/grove"))?;
    let mut obs = SyncTrace::new(SimOutputObserver::new(writer));

    // 4. Run; grow the swarm at the midpoint, between ticks.
    let t0 = Instant::now();
    sim.run_ticks(TOTAL_TICKS / 2, &mut obs);
    sim.add_agents(MIDPOINT_NEWCOMERS);
    println!("tick {}: added {MIDPOINT_NEWCOMERS} agents", sim.tick);
    sim.run(TOTAL_TICKS / 2, &mut obs);
    let elapsed = t0.elapsed();

    if let Some(e) = obs.inner.take_error() {
        eprintln!("output error: {e}");
    }

    // 5. Synchrony trace.
    println!();
    println!("{:<10} {:<12} {:<10}", "Tick", "SyncOrder", "Flashing");
    println!("{}", "-".repeat(34));
    for (tick, order, lit) in &obs.samples {
        println!("{:<10} {:<12.3} {:<10}", tick, order, lit);
    }

    // 6. Final agent sample.  The color columns are the renderer's concern;
    //    here they just pass through from the config.
    println!();
    println!("Simulation complete in {:.3} s", elapsed.as_secs_f64());
    println!();
    println!("{:<8} {:<22} {:<12} {:<10}", "Agent", "Position", "PhaseFrac", "Color");
    println!("{}", "-".repeat(54));
    for i in 0..8.min(sim.agents.count) {
        let pos = sim.agents.position[i];
        let fraction = sim.agents.phase_cycle[i] / sim.agents.flash_interval[i];
        let color = if sim.agents.is_flashing[i] {
            &sim.config.flash_color
        } else {
            &sim.config.body_color
        };
        println!(
            "{:<8} {:<22} {:<12.3} {:<10}",
            i,
            format!("({:.1}, {:.1})", pos.x, pos.y),
            fraction,
            color,
        );
    }

    Ok(())
}
