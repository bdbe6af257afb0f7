//! The flash oscillator state machine.
//!
//! # States
//!
//! `DARK` (`is_flashing == false`) and `FLASHING`.  The phase counter climbs
//! toward `flash_interval`; crossing it opens a flash episode that lasts
//! `flash_length` ticks of phase, after which the phase resets to zero and
//! the climb restarts.  Flashing neighbors pull a dark agent's phase forward
//! through the configured [`SyncPolicy`] — that coupling, iterated over the
//! whole swarm, is what produces emergent synchrony.

use crate::sync::SyncPolicy;

// ── State ─────────────────────────────────────────────────────────────────────

/// One agent's oscillator state, copied out of the store for the compute
/// phase and committed back afterwards.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct OscState {
    /// Ticks (fractional once coupling acts) since the last completed
    /// episode.  Only resets to 0 when an episode completes.
    pub phase_cycle: f32,

    /// Ticks before an episode may begin.  Strictly positive.
    pub flash_interval: f32,

    /// Ticks an episode lasts once triggered.
    pub flash_length: f32,

    /// Phase at which the current episode began; `Some` exactly while
    /// flashing.
    pub episode_start: Option<f32>,

    /// `true` during a flash episode.
    pub is_flashing: bool,
}

impl OscState {
    /// A dark oscillator at phase zero.
    pub fn new(flash_interval: f32, flash_length: f32) -> Self {
        Self {
            phase_cycle: 0.0,
            flash_interval,
            flash_length,
            episode_start: None,
            is_flashing: false,
        }
    }

    /// Fraction of the way to the next flash threshold.  May exceed 1 during
    /// an episode.
    #[inline]
    pub fn phase_fraction(&self) -> f32 {
        self.phase_cycle / self.flash_interval
    }
}

/// Clamp range for `flash_interval`, taken from the population config.
#[derive(Copy, Clone, Debug)]
pub struct IntervalBounds {
    pub min: f32,
    pub max: f32,
}

impl IntervalBounds {
    pub fn new(min: u32, max: u32) -> Self {
        Self { min: min as f32, max: max as f32 }
    }
}

/// What this agent saw of its neighborhood this tick.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SyncSignal {
    /// Neighbors whose flash flag was set in the snapshot.  Unweighted
    /// tally — more flashing neighbors pull harder.
    pub flashing: u32,
    /// Total neighbors within perception (> 0 whenever a signal exists).
    pub neighbors: u32,
}

// ── Transition ────────────────────────────────────────────────────────────────

/// Advance one oscillator by one tick.
///
/// `signal` is `Some` iff the perception query found at least one neighbor;
/// without neighbors the coupling and the interval-doubling check are
/// skipped entirely, but episode evaluation and the phase increment still
/// run — isolated agents flash on their own fixed rhythm.
///
/// Transition order per tick:
/// 1. While dark with neighbors: apply the [`SyncPolicy`] coupling.
/// 2. With neighbors: if `flash_interval < 2 * flash_length`, double the
///    interval.  Keeps an episode from outlasting the inter-flash gap as
///    parameters drift; doubling can compound, which self-limits once the
///    interval clears the threshold.
/// 3. If `phase_cycle >= flash_interval`, evaluate the episode: record the
///    episode start (idempotent on repeated entry), flash while the phase is
///    within `flash_length` of it, and otherwise complete the episode —
///    reset the phase to 0, clear the start, go dark.
/// 4. Increment `phase_cycle` by 1, flashing or not.
pub fn advance<P: SyncPolicy + ?Sized>(
    state:  &mut OscState,
    signal: Option<SyncSignal>,
    policy: &P,
    bounds: &IntervalBounds,
) {
    if let Some(signal) = signal {
        if !state.is_flashing {
            policy.couple(state, signal, bounds);
            // A policy may lower the interval; hold the configured floor so
            // the phase fraction stays well-defined.
            if state.flash_interval < bounds.min {
                state.flash_interval = bounds.min;
            }
        }

        if state.flash_interval < 2.0 * state.flash_length {
            state.flash_interval *= 2.0;
        }
    }

    if state.phase_cycle >= state.flash_interval {
        let start = *state.episode_start.get_or_insert(state.phase_cycle);
        if state.phase_cycle < start + state.flash_length {
            state.is_flashing = true;
        } else {
            state.phase_cycle = 0.0;
            state.episode_start = None;
            state.is_flashing = false;
        }
    }

    state.phase_cycle += 1.0;
}
