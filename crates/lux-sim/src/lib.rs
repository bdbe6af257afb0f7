//! `lux-sim` — tick loop orchestrator for the rust_lux framework.
//!
//! # Two-phase tick loop
//!
//! ```text
//! for each tick:
//!   ① Rebuild  — refresh the neighbor index from current positions.
//!   ② Compute  — for every agent, against an immutable snapshot of last
//!                tick's state: neighbor query → steering rules → force sum
//!                → oscillator transition (parallel with the `parallel`
//!                feature).
//!   ③ Commit   — in ascending AgentId order: integrate the steering force
//!                into position/velocity and write the new oscillator state.
//! ```
//!
//! Because every agent computes against the same committed snapshot, results
//! are identical whether the compute phase runs sequentially or fans out
//! across workers — there is nothing to race on.
//!
//! Population management (`add_agents`, `remove_agents`, `reset`) and batch
//! config tweaks (`update_config`) are `&mut self` operations on [`Sim`], so
//! the borrow checker itself guarantees they never interleave with a tick.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                           |
//! |------------|--------------------------------------------------|
//! | `parallel` | Runs the compute phase on Rayon's thread pool.   |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use lux_behavior::PhaseFractionPull;
//! use lux_core::SwarmConfig;
//! use lux_sim::{NoopObserver, SimBuilder};
//! use lux_space::BruteForceIndex;
//!
//! let cfg = SwarmConfig::default();
//! let mut sim = SimBuilder::new(cfg, PhaseFractionPull::new(), BruteForceIndex).build()?;
//! sim.run(10_000, &mut NoopObserver);
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::Sim;
