//! Unit tests for lux-core primitives.

#[cfg(test)]
mod ids {
    use crate::AgentId;

    #[test]
    fn index_roundtrip() {
        let id = AgentId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(AgentId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(AgentId(0) < AgentId(1));
    }

    #[test]
    fn invalid_sentinel_is_max() {
        assert_eq!(AgentId::INVALID.0, u32::MAX);
        assert_eq!(AgentId::default(), AgentId::INVALID);
    }

    #[test]
    fn display() {
        assert_eq!(AgentId(7).to_string(), "AgentId(7)");
    }
}

#[cfg(test)]
mod time {
    use crate::Tick;

    #[test]
    fn tick_arithmetic() {
        let t = Tick(10);
        assert_eq!(t + 5, Tick(15));
        assert_eq!(t.offset(3), Tick(13));
        assert_eq!(Tick(15) - Tick(10), 5u64);
        assert_eq!(Tick(15).since(Tick(10)), 5u64);
    }

    #[test]
    fn display() {
        assert_eq!(Tick(200).to_string(), "T200");
    }
}

#[cfg(test)]
mod rng {
    use crate::{AgentId, AgentRng};

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = AgentRng::new(12345, AgentId(0));
        let mut r2 = AgentRng::new(12345, AgentId(0));
        for _ in 0..100 {
            let a: f32 = r1.random();
            let b: f32 = r2.random();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn different_agents_differ() {
        let mut r0 = AgentRng::new(1, AgentId(0));
        let mut r1 = AgentRng::new(1, AgentId(1));
        let a: u64 = r0.random();
        let b: u64 = r1.random();
        assert_ne!(a, b, "seeds for adjacent agents should diverge");
    }

    #[test]
    fn gen_range_in_bounds() {
        let mut rng = AgentRng::new(0, AgentId(0));
        for _ in 0..1000 {
            let v = rng.gen_range(0.0f32..1.0);
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn gen_bool_extremes() {
        let mut rng = AgentRng::new(0, AgentId(0));
        assert!(!rng.gen_bool(0.0));
        assert!(rng.gen_bool(1.0));
    }
}

#[cfg(test)]
mod config {
    use crate::SwarmConfig;

    #[test]
    fn default_is_valid() {
        SwarmConfig::default().validate().unwrap();
    }

    #[test]
    fn edge_margin_uses_shorter_dimension() {
        let cfg = SwarmConfig {
            world_width: 1000.0,
            world_height: 400.0,
            edge_distance_pct: 0.1,
            ..SwarmConfig::default()
        };
        assert!((cfg.edge_margin() - 40.0).abs() < 1e-6);
    }

    #[test]
    fn zero_interval_rejected() {
        let cfg = SwarmConfig { min_interval: 0, ..SwarmConfig::default() };
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("min_interval"), "got: {err}");
    }

    #[test]
    fn inverted_interval_bounds_rejected() {
        let cfg = SwarmConfig {
            min_interval: 100,
            max_interval: 50,
            ..SwarmConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn inverted_speed_bounds_rejected() {
        let cfg = SwarmConfig {
            min_speed: 50.0,
            max_speed: 10.0,
            ..SwarmConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn nan_rejected_at_validation_not_runtime() {
        let cfg = SwarmConfig { perception: f32::NAN, ..SwarmConfig::default() };
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("finite"), "got: {err}");
    }

    #[test]
    fn edge_pct_out_of_range_rejected() {
        let cfg = SwarmConfig { edge_distance_pct: 1.5, ..SwarmConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn zero_flash_rejected() {
        let cfg = SwarmConfig { min_flash: 0, ..SwarmConfig::default() };
        assert!(cfg.validate().is_err());
    }
}
