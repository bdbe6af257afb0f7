//! The `Sim` struct and its tick loop.

use glam::Vec2;

use lux_agent::{spawn, AgentRngs, AgentStore};
use lux_behavior::oscillator::{self, IntervalBounds, OscState, SyncSignal};
use lux_behavior::{steering, SyncPolicy, TickContext};
use lux_core::{AgentId, SwarmConfig, Tick};
use lux_motion::{avoid_edge, clamp_force, integrate};
use lux_space::NeighborIndex;

use crate::{SimObserver, SimResult};

// ── Per-agent compute result ──────────────────────────────────────────────────

/// Everything one agent's compute-phase pass produced, committed afterwards
/// in ascending agent order.
struct AgentUpdate {
    steering: Vec2,
    osc:      OscState,
}

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The main simulation runner.
///
/// `Sim<P, N>` owns the population and drives the three-phase tick loop
/// (rebuild → compute → commit).  The sync policy `P` and neighbor index `N`
/// are compile-time parameters, so swapping the coupling variant or the
/// spatial backend costs nothing at runtime.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<P: SyncPolicy, N: NeighborIndex> {
    /// The tunables in force.  Immutable during a tick; batch-updated
    /// between ticks via [`update_config`](Self::update_config).
    pub config: SwarmConfig,

    /// The tick the *next* `step` will process.
    pub tick: Tick,

    /// All per-agent SoA state.
    pub agents: AgentStore,

    /// Per-agent deterministic RNGs (spawn/reset draws only — a tick itself
    /// is RNG-free).
    pub rngs: AgentRngs,

    /// The synchrony coupling applied to dark agents with neighbors.
    pub policy: P,

    /// The perception-query backend.
    pub index: N,

    /// Emit `on_snapshot` every this many ticks (0 disables snapshots).
    pub snapshot_interval_ticks: u64,
}

impl<P: SyncPolicy, N: NeighborIndex> Sim<P, N> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run `total_ticks` ticks, then fire `on_sim_end`.
    pub fn run<O: SimObserver>(&mut self, total_ticks: u64, observer: &mut O) {
        self.run_ticks(total_ticks, observer);
        observer.on_sim_end(self.tick);
    }

    /// Run exactly `n` ticks from the current position.
    ///
    /// Useful for tests and incremental stepping; does not fire `on_sim_end`.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) {
        for _ in 0..n {
            let now = self.tick;
            observer.on_tick_start(now);
            self.process_tick(now);
            observer.on_tick_end(now, &self.agents);
            if self.snapshot_interval_ticks > 0
                && now.0.is_multiple_of(self.snapshot_interval_ticks)
            {
                observer.on_snapshot(now, &self.agents);
            }
            self.tick = now + 1;
        }
    }

    /// Advance one tick without observer callbacks.
    pub fn step(&mut self) {
        let now = self.tick;
        self.process_tick(now);
        self.tick = now + 1;
    }

    // ── Between-ticks mutations ───────────────────────────────────────────

    /// Append `n` freshly randomized agents.
    ///
    /// Existing agents' RNG streams are untouched, so a grown run replays
    /// identically up to the growth point.
    pub fn add_agents(&mut self, n: usize) {
        for _ in 0..n {
            let id = self.agents.push_default();
            self.rngs.grow_to(self.agents.count);
            spawn::randomize(&mut self.agents, id, &self.config, self.rngs.get_mut(id));
        }
    }

    /// Remove the last `n` agents (all of them if `n >= count`).
    pub fn remove_agents(&mut self, n: usize) {
        let remaining = self.agents.count.saturating_sub(n);
        self.agents.truncate(remaining);
        self.rngs.truncate(remaining);
    }

    /// Re-randomize every agent in place, as if freshly spawned.
    pub fn reset(&mut self) {
        for id in 0..self.agents.count as u32 {
            let agent = AgentId(id);
            spawn::randomize(&mut self.agents, agent, &self.config, self.rngs.get_mut(agent));
        }
    }

    /// Apply a batch of parameter tweaks between ticks.
    ///
    /// The tweaked config is re-validated before it replaces the active one;
    /// a degenerate result is rejected and the old config stays in force.
    pub fn update_config<F>(&mut self, tweak: F) -> SimResult<()>
    where
        F: FnOnce(&mut SwarmConfig),
    {
        let mut next = self.config.clone();
        tweak(&mut next);
        next.validate()?;
        self.config = next;
        Ok(())
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn process_tick(&mut self, now: Tick) {
        // ── Phase 1: rebuild the neighbor index ───────────────────────────
        self.index.rebuild(&self.agents.position);

        // ── Phase 2: compute against the committed snapshot ───────────────
        let updates = self.compute_updates(now);

        // ── Phase 3: commit sequentially in ascending AgentId order ───────
        let dt = self.config.dt_secs;
        for (i, update) in updates.into_iter().enumerate() {
            let (position, velocity) = integrate(
                &self.config,
                dt,
                self.agents.position[i],
                self.agents.velocity[i],
                update.steering,
            );
            self.agents.position[i] = position;
            self.agents.velocity[i] = velocity;

            self.agents.phase_cycle[i]         = update.osc.phase_cycle;
            self.agents.flash_interval[i]      = update.osc.flash_interval;
            self.agents.flash_length[i]        = update.osc.flash_length;
            self.agents.flash_episode_start[i] = update.osc.episode_start;
            self.agents.is_flashing[i]         = update.osc.is_flashing;
        }
    }

    /// The compute phase: one [`AgentUpdate`] per agent, all reads against
    /// the same immutable snapshot.  Every agent sees last tick's flash
    /// flags, so processing order cannot leak freshly committed state.
    fn compute_updates(&self, now: Tick) -> Vec<AgentUpdate> {
        let ctx = TickContext::new(
            now,
            &self.config,
            &self.agents.position,
            &self.agents.velocity,
            &self.agents.is_flashing,
        );
        let bounds = IntervalBounds::new(self.config.min_interval, self.config.max_interval);
        let index = &self.index;
        let policy = &self.policy;
        let agents = &self.agents;

        let compute_one = |agent: AgentId| -> AgentUpdate {
            let i = agent.index();

            let mut neighbors = Vec::new();
            index.neighbors_of(agent, ctx.position, ctx.config.perception, &mut neighbors);

            // Steering: the three rules sum and clamp only when someone is
            // within perception; edge avoidance applies regardless whenever
            // wrapping is off.
            let mut force = Vec2::ZERO;
            if !neighbors.is_empty() {
                force += steering::separation(agent, &neighbors, &ctx);
                force += steering::alignment(agent, &neighbors, &ctx);
                force += steering::cohesion(agent, &neighbors, &ctx);
                force = clamp_force(force, ctx.config.max_force);
            }
            if !ctx.config.can_wrap {
                force += avoid_edge(ctx.position[i], ctx.velocity[i], ctx.config);
            }

            // Oscillator: coupling and the doubling check only fire with
            // neighbors present; episode evaluation always runs.
            let signal = if neighbors.is_empty() {
                None
            } else {
                let flashing = neighbors
                    .iter()
                    .filter(|n| ctx.is_flashing[n.index()])
                    .count() as u32;
                Some(SyncSignal { flashing, neighbors: neighbors.len() as u32 })
            };

            let mut osc = OscState {
                phase_cycle:    agents.phase_cycle[i],
                flash_interval: agents.flash_interval[i],
                flash_length:   agents.flash_length[i],
                episode_start:  agents.flash_episode_start[i],
                is_flashing:    agents.is_flashing[i],
            };
            oscillator::advance(&mut osc, signal, policy, &bounds);

            AgentUpdate { steering: force, osc }
        };

        #[cfg(not(feature = "parallel"))]
        {
            agents.agent_ids().map(compute_one).collect()
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            (0..agents.count as u32)
                .into_par_iter()
                .map(|i| compute_one(AgentId(i)))
                .collect()
        }
    }
}
