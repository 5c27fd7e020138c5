//! Neon Run - A top-down arcade survival game
//!
//! Core modules:
//! - `sim`: Simulation (movement, spawning, collisions, scoring, particles)
//! - `input`: Key names decoded into logical actions
//! - `snapshot`: Read-only frame state for the presentation layer
//! - `persistence`: High score storage backends
//! - `driver`: Wall-clock game loop around `sim::tick`

pub mod driver;
pub mod highscores;
pub mod input;
pub mod persistence;
pub mod settings;
pub mod sim;
pub mod snapshot;

pub use highscores::HighScore;
pub use settings::{QualityPreset, Settings};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Largest step fed to the simulation (stalls are clamped to this)
    pub const MAX_STEP: f32 = 0.05;
    /// Target frame cadence of the driver in milliseconds
    pub const FRAME_MS: u64 = 16;

    /// Arena dimensions
    pub const ARENA_WIDTH: f32 = 920.0;
    pub const ARENA_HEIGHT: f32 = 620.0;

    /// Player defaults
    pub const PLAYER_RADIUS: f32 = 11.0;
    pub const PLAYER_SPEED: f32 = 230.0;
    pub const PLAYER_HEALTH: u8 = 5;

    /// Dash tuning
    pub const DASH_SPEED: f32 = 520.0;
    pub const DASH_DURATION: f32 = 0.16;
    pub const DASH_COOLDOWN: f32 = 1.0;

    /// Enemy spawning: interval = max(MIN, BASE - elapsed * RAMP)
    pub const ENEMY_INTERVAL_BASE: f32 = 1.2;
    pub const ENEMY_INTERVAL_RAMP: f32 = 0.014;
    pub const ENEMY_INTERVAL_MIN: f32 = 0.22;
    /// Distance outside the arena edge where enemies appear
    pub const ENEMY_SPAWN_MARGIN: f32 = 20.0;
    pub const ENEMY_SPEED_MIN: f32 = 70.0;
    pub const ENEMY_SPEED_MAX: f32 = 135.0;
    /// Speed gained per second of session time
    pub const ENEMY_SPEED_RAMP: f32 = 2.1;
    pub const ENEMY_RADIUS_MIN: f32 = 9.0;
    pub const ENEMY_RADIUS_MAX: f32 = 15.0;

    /// Orb spawning
    pub const ORB_INITIAL_COUNT: usize = 7;
    pub const ORB_CAP: usize = 16;
    pub const ORB_INTERVAL: f32 = 1.2;
    pub const ORB_RADIUS: f32 = 7.0;
    pub const ORB_MARGIN: f32 = 35.0;
    pub const ORB_REWARDS: [u32; 4] = [10, 12, 15, 18];
    /// Bobbing animation speed (radians/sec)
    pub const ORB_PHASE_RATE: f32 = 4.0;
    pub const ORB_PHASE_MAX: f32 = 6.28;

    /// Multiplier rules
    pub const MULTIPLIER_MIN: f32 = 1.0;
    pub const MULTIPLIER_MAX: f32 = 4.0;
    pub const MULTIPLIER_STEP: f32 = 0.18;
    pub const MULTIPLIER_GRACE: f32 = 1.5;
    pub const MULTIPLIER_DECAY: f32 = 0.5;

    /// Score for an enemy destroyed by a dash (times multiplier)
    pub const DASH_KILL_SCORE: f32 = 30.0;
    /// Passive score rate: BASE + elapsed * RAMP points per second
    pub const PASSIVE_BASE: f32 = 6.0;
    pub const PASSIVE_RAMP: f32 = 0.6;

    /// Screen effects on damage (seconds)
    pub const FLASH_DURATION: f32 = 0.18;
    pub const SHAKE_DURATION: f32 = 0.22;

    /// Particle tuning
    pub const PARTICLE_DAMPING: f32 = 0.94;
    pub const PARTICLE_SPEED_MIN: f32 = 40.0;
    pub const PARTICLE_SPEED_MAX: f32 = 180.0;
    pub const PARTICLE_LIFE_MIN: f32 = 0.25;
    pub const PARTICLE_LIFE_MAX: f32 = 0.8;
}

/// Center of the arena
#[inline]
pub fn arena_center() -> Vec2 {
    Vec2::new(consts::ARENA_WIDTH * 0.5, consts::ARENA_HEIGHT * 0.5)
}

/// Unit vector pointing along `theta` (radians)
#[inline]
pub fn unit_from_angle(theta: f32) -> Vec2 {
    Vec2::new(theta.cos(), theta.sin())
}

/// True when two circles touch or overlap
#[inline]
pub fn circles_touch(a: Vec2, ra: f32, b: Vec2, rb: f32) -> bool {
    a.distance(b) <= ra + rb
}

/// Clamp a raw frame time into a usable simulation step. Negative and
/// non-finite values become 0; long stalls become [`consts::MAX_STEP`].
#[inline]
pub fn clamp_step(raw: f32) -> f32 {
    if raw.is_finite() {
        raw.clamp(0.0, consts::MAX_STEP)
    } else {
        0.0
    }
}

/// Clamp a circle's center so the whole circle stays inside the arena
#[inline]
pub fn clamp_to_arena(pos: Vec2, radius: f32) -> Vec2 {
    Vec2::new(
        pos.x.clamp(radius, consts::ARENA_WIDTH - radius),
        pos.y.clamp(radius, consts::ARENA_HEIGHT - radius),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    #[test]
    fn test_unit_from_angle() {
        let v = unit_from_angle(PI / 2.0);
        assert!(v.x.abs() < 1e-6);
        assert!((v.y - 1.0).abs() < 1e-6);
        assert!((unit_from_angle(1.234).length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_circles_touch_inclusive() {
        let a = Vec2::new(0.0, 0.0);
        assert!(circles_touch(a, 5.0, Vec2::new(10.0, 0.0), 5.0));
        assert!(!circles_touch(a, 5.0, Vec2::new(10.5, 0.0), 5.0));
    }

    #[test]
    fn test_clamp_step() {
        assert_eq!(clamp_step(0.016), 0.016);
        assert_eq!(clamp_step(0.3), consts::MAX_STEP);
        assert_eq!(clamp_step(5.0e6), consts::MAX_STEP);
        assert_eq!(clamp_step(-1.0), 0.0);
        assert_eq!(clamp_step(f32::NAN), 0.0);
        assert_eq!(clamp_step(f32::INFINITY), 0.0);
    }

    #[test]
    fn test_clamp_to_arena() {
        let p = clamp_to_arena(Vec2::new(-50.0, 9999.0), 11.0);
        assert_eq!(p, Vec2::new(11.0, consts::ARENA_HEIGHT - 11.0));
        let inside = Vec2::new(100.0, 100.0);
        assert_eq!(clamp_to_arena(inside, 11.0), inside);
    }
}
