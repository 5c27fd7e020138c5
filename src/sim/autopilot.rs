//! Idle/demo mode steering
//!
//! A deliberately simple pilot: drift toward the nearest orb, push away from
//! enemies that get close, and dash when something is about to connect.

use glam::Vec2;

use super::state::GameState;

/// Enemies closer than this start repelling the pilot
const DANGER_RADIUS: f32 = 120.0;
/// Gap (edge to edge) at which the pilot dashes
const DASH_TRIGGER_GAP: f32 = 18.0;
/// Weight of the orb-seeking pull relative to enemy repulsion
const SEEK_WEIGHT: f32 = 0.6;

/// Steering decision for one tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Steering {
    /// Unit vector or zero
    pub direction: Vec2,
    pub dash: bool,
}

/// Decide where the demo pilot goes next
pub fn steer(state: &GameState) -> Steering {
    let pos = state.player.pos;

    let seek = state
        .orbs
        .iter()
        .min_by(|a, b| {
            a.pos
                .distance_squared(pos)
                .partial_cmp(&b.pos.distance_squared(pos))
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .map(|orb| (orb.pos - pos).normalize_or_zero())
        .unwrap_or(Vec2::ZERO);

    let mut flee = Vec2::ZERO;
    let mut closest_gap = f32::MAX;
    let mut threat = Vec2::ZERO;
    for enemy in &state.enemies {
        let away = pos - enemy.pos;
        let dist = away.length();
        let gap = dist - state.player.radius - enemy.radius;
        if gap < closest_gap {
            closest_gap = gap;
            threat = enemy.pos;
        }
        if dist < DANGER_RADIUS {
            // Closer enemies push harder
            flee += away.normalize_or_zero() * (1.0 - dist / DANGER_RADIUS);
        }
    }

    let mut direction = (seek * SEEK_WEIGHT + flee).normalize_or_zero();
    let dash = closest_gap < DASH_TRIGGER_GAP && state.player.dash_cooldown <= 0.0;
    if dash {
        // Dashing through the threat destroys it
        direction = (threat - pos).normalize_or_zero();
    }

    Steering { direction, dash }
}
