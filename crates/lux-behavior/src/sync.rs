//! Synchrony coupling policies.
//!
//! The coupling term went through several iterations before settling on the
//! phase-fraction pull; the older forms stay available as alternate policies
//! so experiments can switch between them without touching the oscillator.

use crate::oscillator::{IntervalBounds, OscState, SyncSignal};
use crate::{BehaviorError, BehaviorResult};

/// A pluggable synchrony coupling.
///
/// Called once per tick for a dark agent with at least one neighbor, before
/// the interval-doubling check.  Implementations may advance `phase_cycle`
/// and/or adjust `flash_interval` (respecting `bounds`), but must not touch
/// the episode fields — episode bookkeeping belongs to the oscillator core.
pub trait SyncPolicy: Send + Sync + 'static {
    fn couple(&self, state: &mut OscState, signal: SyncSignal, bounds: &IntervalBounds);
}

// ── PhaseFractionPull ─────────────────────────────────────────────────────────

/// The reference coupling: advance the phase by
/// `strength * flashing_neighbors * phase_fraction`.
///
/// The pull is proportional both to how many neighbors are flashing and to
/// how close this agent already is to its own threshold, so agents near
/// their flash get nudged hardest — convergence accelerates without
/// snapping the population together in one step.
pub struct PhaseFractionPull {
    strength: f32,
}

impl PhaseFractionPull {
    /// The reference behavior: unit coupling strength.
    pub fn new() -> Self {
        Self { strength: 1.0 }
    }

    /// Override the coupling strength.  Rejects non-finite or non-positive
    /// values — a zero strength is spelled [`NoSync`], not a degenerate pull.
    pub fn with_strength(strength: f32) -> BehaviorResult<Self> {
        if !strength.is_finite() || strength <= 0.0 {
            return Err(BehaviorError::Config(format!(
                "coupling strength must be finite and positive, got {strength}"
            )));
        }
        Ok(Self { strength })
    }
}

impl Default for PhaseFractionPull {
    fn default() -> Self {
        Self::new()
    }
}

impl SyncPolicy for PhaseFractionPull {
    fn couple(&self, state: &mut OscState, signal: SyncSignal, _bounds: &IntervalBounds) {
        let fraction = state.phase_cycle / state.flash_interval;
        state.phase_cycle += self.strength * signal.flashing as f32 * fraction;
    }
}

// ── IntervalNudge ─────────────────────────────────────────────────────────────

/// An earlier coupling iteration: instead of pulling the phase continuously,
/// nudge the *interval* by an amount proportional to the fraction of
/// flashing neighbors.
///
/// Early in the cycle the interval stretches (and the phase jumps forward by
/// the same amount); late in the cycle the interval shrinks.  Interval
/// adjustments clamp to the configured bounds.
pub struct IntervalNudge;

impl SyncPolicy for IntervalNudge {
    fn couple(&self, state: &mut OscState, signal: SyncSignal, bounds: &IntervalBounds) {
        let sync_fraction = signal.flashing as f32 / signal.neighbors as f32;
        let diff = (state.phase_cycle - state.flash_interval).abs() * sync_fraction;

        if state.phase_cycle < state.flash_interval / 2.0 {
            state.flash_interval = (state.flash_interval + diff).clamp(bounds.min, bounds.max);
            state.phase_cycle += diff;
        } else {
            state.flash_interval = (state.flash_interval - diff).clamp(bounds.min, bounds.max);
        }
    }
}

// ── NoSync ────────────────────────────────────────────────────────────────────

/// No coupling at all: every agent flashes on its own fixed rhythm.
///
/// Useful as an experimental control and for measuring how much synchrony
/// the active policy actually buys.
pub struct NoSync;

impl SyncPolicy for NoSync {
    fn couple(&self, _state: &mut OscState, _signal: SyncSignal, _bounds: &IntervalBounds) {}
}
