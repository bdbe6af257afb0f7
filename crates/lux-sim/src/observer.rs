//! Simulation observer trait for progress reporting and data collection.

use lux_agent::AgentStore;
use lux_core::Tick;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// tick loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  Hooks receive `&AgentStore` so output
/// writers can derive whatever per-tick statistics they need without the sim
/// knowing about any specific format.
///
/// # Example — flash counter
///
/// ```rust,ignore
/// struct FlashPrinter { interval: u64 }
///
/// impl SimObserver for FlashPrinter {
///     fn on_tick_end(&mut self, tick: Tick, agents: &AgentStore) {
///         if tick.0 % self.interval == 0 {
///             println!("{tick}: {} flashing", agents.flashing_count());
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called at the end of each tick with the freshly committed state.
    fn on_tick_end(&mut self, _tick: Tick, _agents: &AgentStore) {}

    /// Called at snapshot intervals (every `snapshot_interval_ticks`).
    fn on_snapshot(&mut self, _tick: Tick, _agents: &AgentStore) {}

    /// Called once after the final tick of [`Sim::run`][crate::Sim::run].
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
