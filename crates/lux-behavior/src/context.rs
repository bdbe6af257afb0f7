//! Read-only simulation state passed to every per-agent computation.

use glam::Vec2;

use lux_core::{SwarmConfig, Tick};

/// A read-only snapshot of one tick's population state.
///
/// `TickContext` is built once per tick by the orchestrator and shared
/// (immutably) across all per-agent computations during the compute phase.
/// The flash flags are last tick's committed values, so every agent observes
/// the same consistent world regardless of processing order.
///
/// # Lifetimes
///
/// All borrows live for the duration of one tick's compute phase.  The
/// orchestrator never allows mutable access to these arrays while a
/// `TickContext` is live.
pub struct TickContext<'a> {
    /// Current simulation tick.
    pub tick: Tick,

    /// The tunables in force for this tick (immutable until the next
    /// between-ticks batch update).
    pub config: &'a SwarmConfig,

    /// Position of every agent, indexed by `AgentId`.
    pub position: &'a [Vec2],

    /// Velocity of every agent, indexed by `AgentId`.
    pub velocity: &'a [Vec2],

    /// Last tick's flash flag for every agent, indexed by `AgentId`.
    pub is_flashing: &'a [bool],
}

impl<'a> TickContext<'a> {
    /// Build a new context for a single tick.
    #[inline]
    pub fn new(
        tick:        Tick,
        config:      &'a SwarmConfig,
        position:    &'a [Vec2],
        velocity:    &'a [Vec2],
        is_flashing: &'a [bool],
    ) -> Self {
        Self { tick, config, position, velocity, is_flashing }
    }
}
