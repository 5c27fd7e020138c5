//! Game state and core simulation types
//!
//! One [`GameState`] owns everything a session mutates: player, entity pools,
//! particles, score and timers. It is created once per process and reset in
//! place on restart.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::particles::{ParticleColor, ParticleSystem};
use super::rng::{self, RandomSource};
use super::scoring::Scoring;
use super::spawn;
use crate::consts::*;
use crate::{arena_center, clamp_to_arena};

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Running,
    /// Frozen until the next pause toggle
    Paused,
    /// Health ran out; waiting for restart
    GameOver,
}

/// The player-controlled entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Base movement speed (units/sec)
    pub speed: f32,
    pub health: u8,
    /// Seconds until dash can trigger again
    pub dash_cooldown: f32,
    /// Seconds of dash left; movement input is ignored while positive
    pub dash_time: f32,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            pos: arena_center(),
            vel: Vec2::ZERO,
            radius: PLAYER_RADIUS,
            speed: PLAYER_SPEED,
            health: PLAYER_HEALTH,
            dash_cooldown: 0.0,
            dash_time: 0.0,
        }
    }
}

impl Player {
    pub fn is_dashing(&self) -> bool {
        self.dash_time > 0.0
    }

    /// Start a dash along `dir`. Returns false (and changes nothing) when on
    /// cooldown or without a direction.
    pub fn start_dash(&mut self, dir: Vec2) -> bool {
        if self.dash_cooldown > 0.0 || dir == Vec2::ZERO {
            return false;
        }
        self.vel = dir.normalize_or_zero() * DASH_SPEED;
        self.dash_time = DASH_DURATION;
        self.dash_cooldown = DASH_COOLDOWN;
        true
    }

    /// Integrate one step. An active dash keeps its velocity; otherwise the
    /// velocity follows `dir`.
    pub fn integrate(&mut self, dir: Vec2, dt: f32) {
        if self.dash_time > 0.0 {
            self.dash_time -= dt;
        } else {
            self.vel = dir * self.speed;
        }
        self.pos = clamp_to_arena(self.pos + self.vel * dt, self.radius);
    }

    /// Lose one health point. Returns true once health is gone.
    pub fn take_hit(&mut self) -> bool {
        self.health = self.health.saturating_sub(1);
        self.health == 0
    }
}

/// A homing enemy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub pos: Vec2,
    pub radius: f32,
    pub speed: f32,
}

impl Enemy {
    /// Step straight toward `target`
    pub fn home_toward(&mut self, target: Vec2, dt: f32) {
        let to_target = target - self.pos;
        if to_target.length_squared() > 0.0 {
            self.pos += to_target.normalize() * self.speed * dt;
        }
    }
}

/// A collectible orb
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Orb {
    pub pos: Vec2,
    pub radius: f32,
    pub reward: u32,
    /// Bobbing animation phase (radians)
    pub phase: f32,
}

/// Notable things that happened during a tick, drained by the driver
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    DashStarted { pos: Vec2 },
    OrbCollected { reward: u32, gain: u64 },
    EnemyDestroyed { gain: u64 },
    PlayerHit { health: u8 },
    GameOver { score: u64, new_high_score: bool },
    Paused,
    Resumed,
    Restarted,
}

/// Complete session state
#[derive(Debug)]
pub struct GameState {
    pub phase: GamePhase,
    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub orbs: Vec<Orb>,
    pub particles: ParticleSystem,
    pub scoring: Scoring,
    /// Best score seen by this process; survives restarts
    pub high_score: u64,
    /// Seconds of running time this session
    pub elapsed: f32,
    pub enemy_timer: f32,
    pub orb_timer: f32,
    /// Remaining red-flash time
    pub flash: f32,
    /// Remaining screen-shake time
    pub shake: f32,
    /// Events since the last drain. Nothing trims this list; whoever drives
    /// `tick` must call [`GameState::drain_events`] every step.
    pub events: Vec<GameEvent>,
    pub rng: Box<dyn RandomSource>,
}

impl GameState {
    /// Create a new session seeded from `seed`
    pub fn new(seed: u64, high_score: u64) -> Self {
        Self::with_rng(rng::seeded(seed), high_score)
    }

    /// Create a new session drawing from an injected random source
    pub fn with_rng(rng: Box<dyn RandomSource>, high_score: u64) -> Self {
        let mut state = Self {
            phase: GamePhase::Running,
            player: Player::default(),
            enemies: Vec::new(),
            orbs: Vec::new(),
            particles: ParticleSystem::default(),
            scoring: Scoring::default(),
            high_score,
            elapsed: 0.0,
            enemy_timer: 0.0,
            orb_timer: 0.0,
            flash: 0.0,
            shake: 0.0,
            events: Vec::new(),
            rng,
        };
        state.seed_orbs();
        state
    }

    /// Reinitialize everything except the high score, the random source and
    /// the particle cap
    pub fn reset(&mut self) {
        self.phase = GamePhase::Running;
        self.player = Player::default();
        self.enemies.clear();
        self.orbs.clear();
        self.particles.clear();
        self.scoring = Scoring::default();
        self.elapsed = 0.0;
        self.enemy_timer = 0.0;
        self.orb_timer = 0.0;
        self.flash = 0.0;
        self.shake = 0.0;
        self.seed_orbs();
    }

    fn seed_orbs(&mut self) {
        for _ in 0..ORB_INITIAL_COUNT {
            let orb = spawn::random_orb(self.rng.as_mut());
            self.orbs.push(orb);
        }
    }

    pub fn score(&self) -> u64 {
        self.scoring.score
    }

    /// Request a dash along `dir`. Silently ignored unless running, off
    /// cooldown and moving.
    pub fn try_dash(&mut self, dir: Vec2) -> bool {
        if self.phase != GamePhase::Running {
            return false;
        }
        let origin = self.player.pos;
        if !self.player.start_dash(dir) {
            return false;
        }
        self.particles
            .emit(self.rng.as_mut(), origin, 24, ParticleColor::Cyan, 2.4);
        self.events.push(GameEvent::DashStarted { pos: origin });
        true
    }

    /// Flip between running and paused. No effect after game over.
    pub fn toggle_pause(&mut self) {
        match self.phase {
            GamePhase::Running => {
                self.phase = GamePhase::Paused;
                self.events.push(GameEvent::Paused);
            }
            GamePhase::Paused => {
                self.phase = GamePhase::Running;
                self.events.push(GameEvent::Resumed);
            }
            GamePhase::GameOver => {}
        }
    }

    /// Start over. Accepted only after game over.
    pub fn restart(&mut self) -> bool {
        if self.phase != GamePhase::GameOver {
            return false;
        }
        self.reset();
        self.events.push(GameEvent::Restarted);
        true
    }

    /// Freeze the session and fold the score into the high score
    pub fn end_game(&mut self) {
        self.phase = GamePhase::GameOver;
        let score = self.scoring.score;
        let new_high_score = score > self.high_score;
        if new_high_score {
            self.high_score = score;
        }
        self.events.push(GameEvent::GameOver {
            score,
            new_high_score,
        });
    }

    /// Take the events accumulated since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
