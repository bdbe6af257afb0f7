//! Fluent builder for constructing a [`Sim`].

use lux_agent::AgentStoreBuilder;
use lux_behavior::SyncPolicy;
use lux_core::{SwarmConfig, Tick};
use lux_space::NeighborIndex;

use crate::{Sim, SimResult};

/// Fluent builder for [`Sim<P, N>`].
///
/// # Required inputs
///
/// - [`SwarmConfig`] — world, kinematics, radii, oscillator bounds, seed,
///   population size.  Validated here; a degenerate config never produces
///   a `Sim`.
/// - `P: SyncPolicy` — the coupling variant (e.g.
///   [`lux_behavior::PhaseFractionPull`]).
/// - `N: NeighborIndex` — the perception backend (e.g.
///   [`lux_space::BruteForceIndex`]).
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(cfg, PhaseFractionPull::new(), BruteForceIndex)
///     .snapshot_interval(10)
///     .build()?;
/// sim.run(10_000, &mut NoopObserver);
/// ```
pub struct SimBuilder<P: SyncPolicy, N: NeighborIndex> {
    config: SwarmConfig,
    policy: P,
    index:  N,
    snapshot_interval_ticks: u64,
}

impl<P: SyncPolicy, N: NeighborIndex> SimBuilder<P, N> {
    /// Create a builder with all required inputs.
    pub fn new(config: SwarmConfig, policy: P, index: N) -> Self {
        Self {
            config,
            policy,
            index,
            snapshot_interval_ticks: 1,
        }
    }

    /// Emit `on_snapshot` every `ticks` ticks (default 1; 0 disables).
    pub fn snapshot_interval(mut self, ticks: u64) -> Self {
        self.snapshot_interval_ticks = ticks;
        self
    }

    /// Validate the config, spawn the randomized population, and return a
    /// ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim<P, N>> {
        self.config.validate()?;

        let (agents, rngs) =
            AgentStoreBuilder::new(self.config.agent_count, self.config.seed).build(&self.config);

        Ok(Sim {
            config: self.config,
            tick:   Tick::ZERO,
            agents,
            rngs,
            policy: self.policy,
            index:  self.index,
            snapshot_interval_ticks: self.snapshot_interval_ticks,
        })
    }
}
