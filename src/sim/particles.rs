//! Cosmetic particle bursts
//!
//! Particles never feed back into gameplay; they only show up in snapshots.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rng::RandomSource;
use crate::consts::*;
use crate::unit_from_angle;

/// Color tag for a particle burst
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParticleColor {
    /// Dash trail and orb pickups
    Cyan,
    /// Enemy destroyed by a dash
    Amber,
    /// Damage taken
    Red,
}

/// A particle for visual effects
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Seconds left before removal
    pub life: f32,
    pub color: ParticleColor,
}

/// Live particle pool
#[derive(Debug, Clone)]
pub struct ParticleSystem {
    particles: Vec<Particle>,
    /// New particles are dropped once this many are alive
    cap: usize,
}

impl Default for ParticleSystem {
    fn default() -> Self {
        Self::with_cap(usize::MAX)
    }
}

impl ParticleSystem {
    pub fn with_cap(cap: usize) -> Self {
        Self {
            particles: Vec::new(),
            cap,
        }
    }

    pub fn cap(&self) -> usize {
        self.cap
    }

    pub fn set_cap(&mut self, cap: usize) {
        self.cap = cap;
    }

    /// Spawn `count` particles at `pos` flying in random directions
    pub fn emit(
        &mut self,
        rng: &mut dyn RandomSource,
        pos: Vec2,
        count: usize,
        color: ParticleColor,
        speed_scale: f32,
    ) {
        for _ in 0..count {
            if self.particles.len() >= self.cap {
                break;
            }
            let angle = rng.range(0.0, std::f32::consts::TAU);
            let speed = rng.range(PARTICLE_SPEED_MIN, PARTICLE_SPEED_MAX) * speed_scale;
            let life = rng.range(PARTICLE_LIFE_MIN, PARTICLE_LIFE_MAX);
            self.particles.push(Particle {
                pos,
                vel: unit_from_angle(angle) * speed,
                life,
                color,
            });
        }
    }

    /// Integrate, apply drag and expire particles
    pub fn update(&mut self, dt: f32) {
        for p in self.particles.iter_mut() {
            p.pos += p.vel * dt;
            p.life -= dt;
            // Per-step drag, not scaled by dt
            p.vel *= PARTICLE_DAMPING;
        }
        self.particles.retain(|p| p.life > 0.0);
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }
}
