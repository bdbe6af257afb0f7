//! Motion primitives: force/speed clamping, boundary repulsion, integration.

use glam::Vec2;

use lux_core::SwarmConfig;

/// Clamp `force` to at most `max_force` magnitude.
///
/// The zero vector passes through unchanged.
#[inline]
pub fn clamp_force(force: Vec2, max_force: f32) -> Vec2 {
    force.clamp_length_max(max_force)
}

/// Rescale a velocity into the `[min_speed, max_speed]` magnitude band.
///
/// A zero (or denormal) velocity passes through unchanged — there is no
/// heading to rescale along, and spawn never produces one in practice.
#[inline]
pub fn clamp_speed(velocity: Vec2, min_speed: f32, max_speed: f32) -> Vec2 {
    let speed = velocity.length();
    if speed <= f32::EPSILON {
        return velocity;
    }
    velocity * (speed.clamp(min_speed, max_speed) / speed)
}

/// Boundary repulsion, used only when wrapping is disabled.
///
/// Inside the margin (`edge_distance_pct` of the shorter world dimension)
/// the desired velocity points back into the interior at full speed,
/// axis-wise; the returned steering is `desired - velocity`, force-clamped.
/// Outside the margin the result is the zero vector.
pub fn avoid_edge(position: Vec2, velocity: Vec2, cfg: &SwarmConfig) -> Vec2 {
    let margin = cfg.edge_margin();
    let mut desired = Vec2::ZERO;

    if position.x < margin {
        desired.x = cfg.max_speed;
    } else if position.x > cfg.world_width - margin {
        desired.x = -cfg.max_speed;
    }
    if position.y < margin {
        desired.y = cfg.max_speed;
    } else if position.y > cfg.world_height - margin {
        desired.y = -cfg.max_speed;
    }

    if desired == Vec2::ZERO {
        return Vec2::ZERO;
    }
    clamp_force(desired - velocity, cfg.max_force)
}

/// Advance one agent's kinematics by `dt` seconds under `steering`.
///
/// Velocity accumulates the force, is speed-clamped, and carries the
/// position forward.  With `can_wrap` the position wraps torus-style;
/// otherwise it is left unclamped — containment is `avoid_edge`'s job.
pub fn integrate(
    cfg:      &SwarmConfig,
    dt:       f32,
    position: Vec2,
    velocity: Vec2,
    steering: Vec2,
) -> (Vec2, Vec2) {
    let velocity = clamp_speed(velocity + steering * dt, cfg.min_speed, cfg.max_speed);
    let mut position = position + velocity * dt;

    if cfg.can_wrap {
        position.x = position.x.rem_euclid(cfg.world_width);
        position.y = position.y.rem_euclid(cfg.world_height);
    }

    (position, velocity)
}
