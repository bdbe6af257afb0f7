//! Swarm configuration surface.
//!
//! # Design
//!
//! All tunables the steering rules, oscillator, and motion integrator read
//! live in one value type that is passed explicitly and is immutable for the
//! duration of a tick.  Runtime tweaks (keyboard-driven in a front end, or
//! scripted in a headless run) are applied as a batch between ticks through
//! `Sim::update_config`, which re-validates before committing.
//!
//! Loading is an application concern: front ends parse whatever file format
//! they like and fill this struct; the framework only sees validated values.

use crate::{LuxError, LuxResult};

/// Shared per-population tunables.
///
/// Every field is read-only during a tick.  Construct with struct-update
/// syntax over [`SwarmConfig::default`] and call [`validate`](Self::validate)
/// before handing the value to a builder — builders refuse degenerate
/// configurations so arithmetic faults (division by a zero interval, NaN
/// phase fractions) cannot arise mid-run.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SwarmConfig {
    // ── World geometry ────────────────────────────────────────────────────
    /// World width in world units.
    pub world_width: f32,
    /// World height in world units.
    pub world_height: f32,

    // ── Kinematics ────────────────────────────────────────────────────────
    /// Lower speed bound enforced at integration time.
    pub min_speed: f32,
    /// Upper speed bound enforced at integration time.
    pub max_speed: f32,
    /// Magnitude ceiling applied to every steering force.
    pub max_force: f32,

    // ── Flocking radii ────────────────────────────────────────────────────
    /// Distance within which other agents count as neighbors.
    pub perception: f32,
    /// Distance within which neighbors trigger separation.
    pub crowding: f32,

    // ── Boundary behavior ─────────────────────────────────────────────────
    /// Fraction of the shorter world dimension used as the edge-avoidance
    /// margin.  Only meaningful when `can_wrap` is false.
    pub edge_distance_pct: f32,
    /// Wrap positions torus-style instead of steering away from edges.
    pub can_wrap: bool,

    // ── Oscillator bounds ─────────────────────────────────────────────────
    /// Smallest flash interval assigned at spawn; also the clamp floor for
    /// runtime interval adjustments.
    pub min_interval: u32,
    /// Largest flash interval assigned at spawn; clamp ceiling for policies
    /// that lower/raise intervals.
    pub max_interval: u32,
    /// Smallest flash-episode length assigned at spawn.
    pub min_flash: u32,
    /// Largest flash-episode length assigned at spawn.
    pub max_flash: u32,

    // ── Run parameters ────────────────────────────────────────────────────
    /// Integration step in seconds (forces and velocities scale by this;
    /// the oscillator counts whole ticks and ignores it).
    pub dt_secs: f32,
    /// Master RNG seed.  The same seed always produces identical runs.
    pub seed: u64,
    /// Initial population size.
    pub agent_count: usize,

    // ── Cosmetic pass-through (no algorithmic effect) ─────────────────────
    /// Body color while dark.  Forwarded untouched to renderers/output.
    pub body_color: String,
    /// Body color while flashing.
    pub flash_color: String,
    /// Front-end debug overlay flag.  Forwarded untouched.
    pub debug: bool,
}

impl Default for SwarmConfig {
    /// The values the original swarm shipped with: a 1200×800 world, gentle
    /// flocking, and flash intervals a few seconds apart at 60 ticks/second.
    fn default() -> Self {
        Self {
            world_width:       1200.0,
            world_height:      800.0,
            min_speed:         15.0,
            max_speed:         80.0,
            max_force:         6.0,
            perception:        60.0,
            crowding:          15.0,
            edge_distance_pct: 0.05,
            can_wrap:          false,
            min_interval:      50,
            max_interval:      250,
            min_flash:         5,
            max_flash:         25,
            dt_secs:           1.0 / 60.0,
            seed:              42,
            agent_count:       120,
            body_color:        "gray25".to_owned(),
            flash_color:       "yellow".to_owned(),
            debug:             false,
        }
    }
}

impl SwarmConfig {
    /// Edge-avoidance margin in world units.
    #[inline]
    pub fn edge_margin(&self) -> f32 {
        self.edge_distance_pct * self.world_width.min(self.world_height)
    }

    /// Reject degenerate configurations with a descriptive error.
    ///
    /// Called by every builder before constructing simulation state, and by
    /// `Sim::update_config` before committing a batch tweak.  Catching bad
    /// values here is what keeps the tick loop free of arithmetic guards.
    pub fn validate(&self) -> LuxResult<()> {
        fn fail(msg: String) -> LuxResult<()> {
            Err(LuxError::Config(msg))
        }

        let finite = [
            ("world_width", self.world_width),
            ("world_height", self.world_height),
            ("min_speed", self.min_speed),
            ("max_speed", self.max_speed),
            ("max_force", self.max_force),
            ("perception", self.perception),
            ("crowding", self.crowding),
            ("edge_distance_pct", self.edge_distance_pct),
            ("dt_secs", self.dt_secs),
        ];
        for (name, value) in finite {
            if !value.is_finite() {
                return fail(format!("{name} must be finite, got {value}"));
            }
        }

        if self.world_width <= 0.0 || self.world_height <= 0.0 {
            return fail(format!(
                "world dimensions must be positive, got {}×{}",
                self.world_width, self.world_height
            ));
        }
        if self.min_speed < 0.0 {
            return fail(format!("min_speed must be >= 0, got {}", self.min_speed));
        }
        if self.max_speed < self.min_speed {
            return fail(format!(
                "max_speed {} is below min_speed {}",
                self.max_speed, self.min_speed
            ));
        }
        if self.max_force <= 0.0 {
            return fail(format!("max_force must be positive, got {}", self.max_force));
        }
        if self.perception <= 0.0 {
            return fail(format!("perception must be positive, got {}", self.perception));
        }
        if self.crowding <= 0.0 {
            return fail(format!("crowding must be positive, got {}", self.crowding));
        }
        if !(0.0..=1.0).contains(&self.edge_distance_pct) {
            return fail(format!(
                "edge_distance_pct must be in [0, 1], got {}",
                self.edge_distance_pct
            ));
        }
        if self.min_interval == 0 {
            return fail("min_interval must be at least 1 tick".to_owned());
        }
        if self.max_interval < self.min_interval {
            return fail(format!(
                "max_interval {} is below min_interval {}",
                self.max_interval, self.min_interval
            ));
        }
        if self.min_flash == 0 {
            return fail("min_flash must be at least 1 tick".to_owned());
        }
        if self.max_flash < self.min_flash {
            return fail(format!(
                "max_flash {} is below min_flash {}",
                self.max_flash, self.min_flash
            ));
        }
        if self.dt_secs <= 0.0 {
            return fail(format!("dt_secs must be positive, got {}", self.dt_secs));
        }

        Ok(())
    }
}
