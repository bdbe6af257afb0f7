//! Core agent storage: `AgentStore` (SoA data) and `AgentRngs` (per-agent RNG).
//!
//! # Why two structs?
//!
//! Population growth and reset need `&mut AgentRngs` (exclusive access to each
//! agent's RNG) and `&mut AgentStore` simultaneously, while the compute phase
//! needs a plain `&AgentStore` shared across workers.  Keeping the RNGs in a
//! separate struct lets the borrow checker see the two as disjoint.

use glam::Vec2;

use lux_core::{AgentId, AgentRng};

// ── AgentRngs ─────────────────────────────────────────────────────────────────

/// Per-agent deterministic RNG state, separated from [`AgentStore`] so the
/// two can be borrowed independently.
///
/// The global seed is retained so that appended agents are seeded exactly as
/// they would have been at initial construction — growing the swarm never
/// disturbs existing agents' streams.
pub struct AgentRngs {
    global_seed: u64,
    pub inner: Vec<AgentRng>,
}

impl AgentRngs {
    /// Allocate and seed `count` per-agent RNGs from `global_seed`.
    pub(crate) fn new(count: usize, global_seed: u64) -> Self {
        let inner = (0..count as u32)
            .map(|i| AgentRng::new(global_seed, AgentId(i)))
            .collect();
        Self { global_seed, inner }
    }

    /// Mutable reference to one agent's RNG.
    #[inline]
    pub fn get_mut(&mut self, agent: AgentId) -> &mut AgentRng {
        &mut self.inner[agent.index()]
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Append RNGs until `count` agents are covered.  Existing streams are
    /// untouched; new agents get the seed they would have had at init.
    pub fn grow_to(&mut self, count: usize) {
        for i in self.inner.len() as u32..count as u32 {
            self.inner.push(AgentRng::new(self.global_seed, AgentId(i)));
        }
    }

    /// Drop RNG state for agents past `count`.
    pub fn truncate(&mut self, count: usize) {
        self.inner.truncate(count);
    }
}

// ── AgentStore ────────────────────────────────────────────────────────────────

/// Structure-of-Arrays storage for all firefly state.
///
/// Every `Vec` field has exactly `count` elements; the `AgentId` value is the
/// index into all of them:
///
/// ```ignore
/// let pos = store.position[agent.index()];  // O(1), cache-friendly
/// ```
///
/// Invariants maintained by the oscillator and committed by the orchestrator:
/// `is_flashing[i]` is `true` iff `flash_episode_start[i]` is `Some`, and
/// `phase_cycle[i]` only resets to 0 when a flash episode completes.
pub struct AgentStore {
    /// Number of agents.  Equals the length of every SoA `Vec`.
    pub count: usize,

    // ── Kinematic state ───────────────────────────────────────────────────
    /// World-coordinate position.
    pub position: Vec<Vec2>,

    /// Velocity; magnitude is held in `[min_speed, max_speed]` by the
    /// motion integrator.
    pub velocity: Vec<Vec2>,

    // ── Oscillator state ──────────────────────────────────────────────────
    /// Ticks (fractional once the synchrony pull acts) since the last
    /// completed flash episode.
    pub phase_cycle: Vec<f32>,

    /// Ticks before a flash episode may begin.  Adapts at runtime; always
    /// kept strictly positive.
    pub flash_interval: Vec<f32>,

    /// Ticks a flash episode lasts once triggered.
    pub flash_length: Vec<f32>,

    /// Phase value at which the current episode began; `Some` exactly while
    /// the agent is flashing.
    pub flash_episode_start: Vec<Option<f32>>,

    /// Derived output state: `true` during a flash episode.
    pub is_flashing: Vec<bool>,
}

impl AgentStore {
    /// `true` if there are no agents.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Iterator over all `AgentId`s in ascending index order.
    pub fn agent_ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        (0..self.count as u32).map(AgentId)
    }

    /// Number of agents currently flashing.
    pub fn flashing_count(&self) -> usize {
        self.is_flashing.iter().filter(|&&f| f).count()
    }

    /// Kuramoto order parameter over the population's phase fractions.
    ///
    /// `1.0` means every agent sits at the same point of its cycle; values
    /// near `0.0` mean phases are spread uniformly.  Returns 0 for an empty
    /// swarm.
    pub fn sync_order(&self) -> f32 {
        if self.count == 0 {
            return 0.0;
        }
        let (mut sum_cos, mut sum_sin) = (0.0f32, 0.0f32);
        for i in 0..self.count {
            let fraction = self.phase_cycle[i] / self.flash_interval[i];
            let angle = fraction.fract() * std::f32::consts::TAU;
            sum_cos += angle.cos();
            sum_sin += angle.sin();
        }
        (sum_cos * sum_cos + sum_sin * sum_sin).sqrt() / self.count as f32
    }

    /// Append one agent with zeroed/default state.  The caller is expected
    /// to follow up with [`spawn::randomize`][crate::spawn::randomize].
    pub fn push_default(&mut self) -> AgentId {
        let id = AgentId(self.count as u32);
        self.position.push(Vec2::ZERO);
        self.velocity.push(Vec2::ZERO);
        self.phase_cycle.push(0.0);
        self.flash_interval.push(1.0);
        self.flash_length.push(1.0);
        self.flash_episode_start.push(None);
        self.is_flashing.push(false);
        self.count += 1;
        id
    }

    /// Remove all agents past `count` (no-op if already smaller).
    pub fn truncate(&mut self, count: usize) {
        self.position.truncate(count);
        self.velocity.truncate(count);
        self.phase_cycle.truncate(count);
        self.flash_interval.truncate(count);
        self.flash_length.truncate(count);
        self.flash_episode_start.truncate(count);
        self.is_flashing.truncate(count);
        self.count = self.count.min(count);
    }

    // ── Package-private constructor used by AgentStoreBuilder ─────────────

    pub(crate) fn new(count: usize) -> Self {
        Self {
            count,
            position:            vec![Vec2::ZERO; count],
            velocity:            vec![Vec2::ZERO; count],
            phase_cycle:         vec![0.0; count],
            flash_interval:      vec![1.0; count],
            flash_length:        vec![1.0; count],
            flash_episode_start: vec![None; count],
            is_flashing:         vec![false; count],
        }
    }
}
