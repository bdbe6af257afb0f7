//! `lux-space` — the neighbor-query contract and its implementations.
//!
//! # Crate layout
//!
//! | Module    | Contents                                             |
//! |-----------|------------------------------------------------------|
//! | [`index`] | `NeighborIndex` trait, `BruteForceIndex`, `RTreeIndex` |
//!
//! The perception query is the only thing steering and the oscillator know
//! about space, so it sits behind a trait: the brute-force scan is the
//! reference implementation (O(N) per agent, an accepted ceiling at swarm
//! scale), and the R-tree swaps in for large populations without any change
//! to the rules that consume the neighbor set.

pub mod index;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use index::{BruteForceIndex, NeighborIndex, RTreeIndex};
