//! Construction of `AgentStore` + `AgentRngs` in one step.
//!
//! # Usage
//!
//! ```rust
//! use lux_agent::AgentStoreBuilder;
//! use lux_core::SwarmConfig;
//!
//! let cfg = SwarmConfig { agent_count: 100, ..SwarmConfig::default() };
//! let (store, rngs) = AgentStoreBuilder::new(cfg.agent_count, cfg.seed).build(&cfg);
//!
//! assert_eq!(store.count, 100);
//! assert_eq!(rngs.len(), 100);
//! ```

use crate::{spawn, AgentRngs, AgentStore};
use lux_core::{AgentId, SwarmConfig};

/// Builder for [`AgentStore`] + [`AgentRngs`].
///
/// All arrays are pre-allocated and every agent is randomized within the
/// config's bounds at build time, so the returned store is ready to tick.
pub struct AgentStoreBuilder {
    count: usize,
    seed:  u64,
}

impl AgentStoreBuilder {
    /// Create a builder for `count` agents using `seed` as the global RNG seed.
    pub fn new(count: usize, seed: u64) -> Self {
        Self { count, seed }
    }

    /// Construct `AgentStore` and `AgentRngs` with randomized initial state.
    ///
    /// `cfg` is assumed validated; the simulation builder in `lux-sim`
    /// enforces that before calling here.
    pub fn build(self, cfg: &SwarmConfig) -> (AgentStore, AgentRngs) {
        let mut store = AgentStore::new(self.count);
        let mut rngs = AgentRngs::new(self.count, self.seed);

        for i in 0..self.count as u32 {
            let agent = AgentId(i);
            spawn::randomize(&mut store, agent, cfg, rngs.get_mut(agent));
        }

        (store, rngs)
    }
}
