//! Unit tests for the motion primitives.

use glam::Vec2;

use lux_core::SwarmConfig;

use crate::{avoid_edge, clamp_force, clamp_speed, integrate};

fn cfg() -> SwarmConfig {
    SwarmConfig::default()
}

#[cfg(test)]
mod clamping {
    use super::*;

    #[test]
    fn long_force_scaled_to_max() {
        let clamped = clamp_force(Vec2::new(30.0, 40.0), 5.0);
        assert!((clamped.length() - 5.0).abs() < 1e-5);
        // Direction preserved.
        assert!((clamped.normalize() - Vec2::new(0.6, 0.8)).length() < 1e-5);
    }

    #[test]
    fn short_force_unchanged() {
        let f = Vec2::new(1.0, 2.0);
        assert_eq!(clamp_force(f, 5.0), f);
    }

    #[test]
    fn zero_force_passes_through() {
        assert_eq!(clamp_force(Vec2::ZERO, 5.0), Vec2::ZERO);
    }

    #[test]
    fn slow_velocity_raised_to_min_speed() {
        let v = clamp_speed(Vec2::new(1.0, 0.0), 10.0, 100.0);
        assert!((v.length() - 10.0).abs() < 1e-4);
        assert!(v.x > 0.0);
    }

    #[test]
    fn fast_velocity_lowered_to_max_speed() {
        let v = clamp_speed(Vec2::new(0.0, 500.0), 10.0, 100.0);
        assert!((v.length() - 100.0).abs() < 1e-3);
    }

    #[test]
    fn in_band_velocity_unchanged() {
        let v = Vec2::new(30.0, 40.0); // length 50
        assert_eq!(clamp_speed(v, 10.0, 100.0), v);
    }

    #[test]
    fn zero_velocity_passes_through() {
        assert_eq!(clamp_speed(Vec2::ZERO, 10.0, 100.0), Vec2::ZERO);
    }
}

#[cfg(test)]
mod edges {
    use super::*;

    #[test]
    fn interior_agent_gets_zero() {
        let cfg = cfg();
        let center = Vec2::new(cfg.world_width / 2.0, cfg.world_height / 2.0);
        assert_eq!(avoid_edge(center, Vec2::new(5.0, 0.0), &cfg), Vec2::ZERO);
    }

    #[test]
    fn left_margin_pushes_right() {
        let cfg = cfg();
        let pos = Vec2::new(1.0, cfg.world_height / 2.0);
        let steer = avoid_edge(pos, Vec2::ZERO, &cfg);
        assert!(steer.x > 0.0, "expected push into the interior, got {steer}");
        assert_eq!(steer.y, 0.0);
    }

    #[test]
    fn corner_pushes_diagonally() {
        let cfg = cfg();
        let pos = Vec2::new(1.0, cfg.world_height - 1.0); // bottom-left in screen coords
        let steer = avoid_edge(pos, Vec2::ZERO, &cfg);
        assert!(steer.x > 0.0 && steer.y < 0.0, "got {steer}");
    }

    #[test]
    fn steering_is_force_clamped() {
        let cfg = cfg();
        // Worst case: deep in a corner, moving away at full speed.
        let pos = Vec2::ZERO;
        let vel = Vec2::new(-cfg.max_speed, -cfg.max_speed);
        let steer = avoid_edge(pos, vel, &cfg);
        assert!(steer.length() <= cfg.max_force + 1e-4);
    }
}

#[cfg(test)]
mod integration {
    use super::*;

    #[test]
    fn position_advances_by_velocity() {
        let cfg = SwarmConfig { min_speed: 0.0, can_wrap: false, ..cfg() };
        let (pos, vel) = integrate(&cfg, 1.0, Vec2::ZERO, Vec2::new(10.0, 0.0), Vec2::ZERO);
        assert_eq!(vel, Vec2::new(10.0, 0.0));
        assert_eq!(pos, Vec2::new(10.0, 0.0));
    }

    #[test]
    fn force_scales_with_dt() {
        let cfg = SwarmConfig { min_speed: 0.0, ..cfg() };
        let (_, vel) = integrate(&cfg, 0.5, Vec2::ZERO, Vec2::new(10.0, 0.0), Vec2::new(4.0, 0.0));
        assert_eq!(vel, Vec2::new(12.0, 0.0));
    }

    #[test]
    fn speed_clamped_during_integration() {
        let cfg = cfg();
        let (_, vel) = integrate(
            &cfg,
            1.0,
            Vec2::ZERO,
            Vec2::new(cfg.max_speed, 0.0),
            Vec2::new(cfg.max_force, 0.0),
        );
        assert!((vel.length() - cfg.max_speed).abs() < 1e-3);
    }

    #[test]
    fn wrapping_wraps_both_axes() {
        let cfg = SwarmConfig { can_wrap: true, min_speed: 0.0, ..cfg() };
        let pos = Vec2::new(cfg.world_width - 1.0, cfg.world_height - 1.0);
        let (wrapped, _) = integrate(&cfg, 1.0, pos, Vec2::new(2.0, 2.0), Vec2::ZERO);
        assert!((wrapped.x - 1.0).abs() < 1e-4);
        assert!((wrapped.y - 1.0).abs() < 1e-4);
    }

    #[test]
    fn no_wrap_leaves_position_unclamped() {
        let cfg = SwarmConfig { can_wrap: false, min_speed: 0.0, ..cfg() };
        let pos = Vec2::new(cfg.world_width - 1.0, 10.0);
        let (moved, _) = integrate(&cfg, 1.0, pos, Vec2::new(5.0, 0.0), Vec2::ZERO);
        assert!(moved.x > cfg.world_width, "edge avoidance, not integrate, owns containment");
    }
}
