//! `lux-core` — foundational types for the `rust_lux` firefly swarm framework.
//!
//! This crate is a dependency of every other `lux-*` crate.  It intentionally
//! has no `lux-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                |
//! |------------|-----------------------------------------|
//! | [`ids`]    | `AgentId`                               |
//! | [`time`]   | `Tick`                                  |
//! | [`rng`]    | `AgentRng` (per-agent, seed-mixed)      |
//! | [`config`] | `SwarmConfig` + validation              |
//! | [`error`]  | `LuxError`, `LuxResult`                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod config;
pub mod error;
pub mod ids;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::SwarmConfig;
pub use error::{LuxError, LuxResult};
pub use ids::AgentId;
pub use rng::AgentRng;
pub use time::Tick;
