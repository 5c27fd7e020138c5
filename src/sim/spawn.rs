//! Enemy and orb spawners
//!
//! Enemies arrive from outside the arena edges at a rate that ramps up with
//! session time. Orbs appear inside the arena on a fixed cadence up to a cap.

use glam::Vec2;

use super::rng::RandomSource;
use super::state::{Enemy, GameState, Orb};
use crate::consts::*;

/// Seconds between enemy spawns after `elapsed` seconds of play
pub fn enemy_spawn_interval(elapsed: f32) -> f32 {
    (ENEMY_INTERVAL_BASE - elapsed * ENEMY_INTERVAL_RAMP).max(ENEMY_INTERVAL_MIN)
}

/// A fresh enemy just outside a random arena edge
pub fn random_enemy(rng: &mut dyn RandomSource, elapsed: f32) -> Enemy {
    let pos = match rng.index(4) {
        // Top
        0 => Vec2::new(rng.range(0.0, ARENA_WIDTH), -ENEMY_SPAWN_MARGIN),
        // Right
        1 => Vec2::new(ARENA_WIDTH + ENEMY_SPAWN_MARGIN, rng.range(0.0, ARENA_HEIGHT)),
        // Bottom
        2 => Vec2::new(rng.range(0.0, ARENA_WIDTH), ARENA_HEIGHT + ENEMY_SPAWN_MARGIN),
        // Left
        _ => Vec2::new(-ENEMY_SPAWN_MARGIN, rng.range(0.0, ARENA_HEIGHT)),
    };
    let speed = rng.range(ENEMY_SPEED_MIN, ENEMY_SPEED_MAX) + elapsed * ENEMY_SPEED_RAMP;
    let radius = rng.range(ENEMY_RADIUS_MIN, ENEMY_RADIUS_MAX);
    Enemy { pos, radius, speed }
}

/// A fresh orb somewhere inside the arena margin
pub fn random_orb(rng: &mut dyn RandomSource) -> Orb {
    let x = rng.range(ORB_MARGIN, ARENA_WIDTH - ORB_MARGIN);
    let y = rng.range(ORB_MARGIN, ARENA_HEIGHT - ORB_MARGIN);
    let reward = ORB_REWARDS[rng.index(ORB_REWARDS.len())];
    let phase = rng.range(0.0, ORB_PHASE_MAX);
    Orb {
        pos: Vec2::new(x, y),
        radius: ORB_RADIUS,
        reward,
        phase,
    }
}

/// Run both spawners for one step. Timers must already include `dt`.
///
/// A long step can release several enemies at once; at most one orb spawns
/// per step.
pub fn run_spawners(state: &mut GameState) {
    let interval = enemy_spawn_interval(state.elapsed);
    while state.enemy_timer >= interval {
        state.enemy_timer -= interval;
        let enemy = random_enemy(state.rng.as_mut(), state.elapsed);
        state.enemies.push(enemy);
    }

    // The timer keeps running while the pool is full
    if state.orb_timer >= ORB_INTERVAL && state.orbs.len() < ORB_CAP {
        state.orb_timer = 0.0;
        let orb = random_orb(state.rng.as_mut());
        state.orbs.push(orb);
    }
}
