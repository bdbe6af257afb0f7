//! Randomized initial state for one firefly.
//!
//! Draws come from the agent's own RNG stream, so re-randomizing agent `k`
//! (or appending agents) never perturbs any other agent's future draws.

use glam::Vec2;

use lux_core::{AgentId, AgentRng, SwarmConfig};

use crate::AgentStore;

/// Randomize `agent`'s kinematic and oscillator state within the configured
/// bounds.
///
/// - Position: uniform over the world rectangle.
/// - Velocity: each axis uniform in `[-max_speed, max_speed]`; the motion
///   integrator pulls the magnitude into `[min_speed, max_speed]` on the
///   first tick.
/// - `flash_interval` / `flash_length`: whole-tick draws from the configured
///   ranges.
/// - `phase_cycle`: set so the first flash lands after a uniform delay in
///   `[min_interval, flash_interval]` ticks, which desynchronizes the initial
///   population while keeping a degenerate config (`min_interval ==
///   max_interval`) fully deterministic.
///
/// The config is assumed validated (`min <= max` for every range).
pub fn randomize(
    store: &mut AgentStore,
    agent: AgentId,
    cfg:   &SwarmConfig,
    rng:   &mut AgentRng,
) {
    let i = agent.index();

    store.position[i] = Vec2::new(
        rng.gen_range(0.0..cfg.world_width),
        rng.gen_range(0.0..cfg.world_height),
    );
    store.velocity[i] = Vec2::new(
        rng.gen_range(-1.0f32..1.0) * cfg.max_speed,
        rng.gen_range(-1.0f32..1.0) * cfg.max_speed,
    );

    let interval = rng.gen_range(cfg.min_interval..=cfg.max_interval) as f32;
    store.flash_interval[i] = interval;
    store.flash_length[i] = rng.gen_range(cfg.min_flash..=cfg.max_flash) as f32;

    let first_flash_delay = rng.gen_range(cfg.min_interval as f32..=interval);
    store.phase_cycle[i] = interval - first_flash_delay;

    store.flash_episode_start[i] = None;
    store.is_flashing[i] = false;
}
