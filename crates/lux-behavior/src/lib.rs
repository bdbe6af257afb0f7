//! `lux-behavior` — the two algorithms that make the swarm a swarm.
//!
//! # Crate layout
//!
//! | Module         | Contents                                               |
//! |----------------|--------------------------------------------------------|
//! | [`context`]    | `TickContext<'a>` — read-only tick snapshot            |
//! | [`steering`]   | Separation, alignment, cohesion force rules            |
//! | [`oscillator`] | `OscState`, `advance` — the flash state machine        |
//! | [`sync`]       | `SyncPolicy` trait + the coupling-policy variants      |
//! | [`error`]      | `BehaviorError`, `BehaviorResult<T>`                   |
//!
//! # Design notes
//!
//! Everything here is a pure function of the previous tick's snapshot: the
//! orchestrator in `lux-sim` builds a [`TickContext`] once per tick, fans the
//! per-agent computations out over it, and commits results afterwards.  No
//! module in this crate mutates shared state.
//!
//! The synchrony coupling went through several design iterations in the
//! wild; the variants survive as interchangeable [`sync::SyncPolicy`]
//! implementations rather than edits to the oscillator core.

pub mod context;
pub mod error;
pub mod oscillator;
pub mod steering;
pub mod sync;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use context::TickContext;
pub use error::{BehaviorError, BehaviorResult};
pub use oscillator::{advance, IntervalBounds, OscState, SyncSignal};
pub use sync::{IntervalNudge, NoSync, PhaseFractionPull, SyncPolicy};
