//! `lux-motion` — the "vehicle" motion collaborator.
//!
//! # Crate layout
//!
//! | Module      | Contents                                              |
//! |-------------|-------------------------------------------------------|
//! | [`vehicle`] | `clamp_force`, `clamp_speed`, `avoid_edge`, `integrate` |
//!
//! The steering rules and oscillator never touch positions or velocities
//! directly; they produce forces and flags, and this crate turns them into
//! kinematic state.  All functions are pure — the orchestrator's commit
//! phase owns the writes.

pub mod vehicle;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use vehicle::{avoid_edge, clamp_force, clamp_speed, integrate};
