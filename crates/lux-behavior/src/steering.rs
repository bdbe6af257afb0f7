//! The three flocking force rules.
//!
//! Each rule consumes the neighbor set (callers guarantee it is non-empty)
//! and the agent's own kinematic state, and returns one steering force.  The
//! asymmetric damping divisors are load-bearing: separation dominates at
//! short range, alignment at medium range, and cohesion pulls weakly enough
//! that the flock never collapses onto its centroid.  Do not "tidy" them
//! into a common scale.

use glam::Vec2;

use lux_core::AgentId;
use lux_motion::clamp_force;

use crate::TickContext;

/// Damping divisor applied to the alignment force after clamping.
pub const ALIGNMENT_DIVISOR: f32 = 8.0;

/// Damping divisor applied to the cohesion force after clamping.
pub const COHESION_DIVISOR: f32 = 100.0;

/// Push away from every neighbor strictly inside the crowding radius.
///
/// Each crowding neighbor contributes the raw displacement vector with no
/// distance-based falloff; the accumulated sum is clamped to `max_force`.
/// Returns zero when no neighbor crowds.
pub fn separation(agent: AgentId, neighbors: &[AgentId], ctx: &TickContext<'_>) -> Vec2 {
    let own_pos = ctx.position[agent.index()];
    let crowding_sq = ctx.config.crowding * ctx.config.crowding;

    let mut steering = Vec2::ZERO;
    for &other in neighbors {
        let offset = ctx.position[other.index()] - own_pos;
        if offset.length_squared() < crowding_sq {
            steering -= offset;
        }
    }
    clamp_force(steering, ctx.config.max_force)
}

/// Steer toward the neighbors' average heading, damped by
/// [`ALIGNMENT_DIVISOR`].
///
/// # Preconditions
/// `neighbors` must be non-empty (the orchestrator only invokes the rules
/// when the perception query found someone).
pub fn alignment(agent: AgentId, neighbors: &[AgentId], ctx: &TickContext<'_>) -> Vec2 {
    let mut steering = Vec2::ZERO;
    for &other in neighbors {
        steering += ctx.velocity[other.index()];
    }
    steering /= neighbors.len() as f32;
    steering -= ctx.velocity[agent.index()];
    clamp_force(steering, ctx.config.max_force) / ALIGNMENT_DIVISOR
}

/// Steer toward the neighbors' centroid, damped by [`COHESION_DIVISOR`].
///
/// # Preconditions
/// `neighbors` must be non-empty.
pub fn cohesion(agent: AgentId, neighbors: &[AgentId], ctx: &TickContext<'_>) -> Vec2 {
    let mut steering = Vec2::ZERO;
    for &other in neighbors {
        steering += ctx.position[other.index()];
    }
    steering /= neighbors.len() as f32;
    steering -= ctx.position[agent.index()];
    clamp_force(steering, ctx.config.max_force) / COHESION_DIVISOR
}
