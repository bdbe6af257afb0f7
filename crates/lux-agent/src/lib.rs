//! `lux-agent` — Structure-of-Arrays firefly storage for the `rust_lux`
//! framework.
//!
//! # Crate layout
//!
//! | Module      | Contents                                               |
//! |-------------|--------------------------------------------------------|
//! | [`store`]   | `AgentStore` (SoA arrays), `AgentRngs` (per-agent RNG) |
//! | [`spawn`]   | Randomized initial state within configured bounds      |
//! | [`builder`] | `AgentStoreBuilder` (construction in one step)         |
//!
//! Every `Vec` in the store has exactly `count` elements; an `AgentId` is the
//! index into all of them.  There is no per-agent heap object and no
//! persistent topology — neighbor lists are computed fresh each tick by
//! `lux-space`.

pub mod builder;
pub mod spawn;
pub mod store;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use builder::AgentStoreBuilder;
pub use store::{AgentRngs, AgentStore};
