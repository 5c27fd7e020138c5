//! Presentation gateway
//!
//! After every step the driver copies the visible state into a
//! [`FrameSnapshot`] and hands it to a [`PresentationGateway`]. The renderer
//! never touches [`GameState`] directly.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::Settings;
use crate::sim::{GamePhase, GameState, ParticleColor};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerView {
    pub pos: Vec2,
    pub radius: f32,
    pub dashing: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnemyView {
    pub pos: Vec2,
    pub radius: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrbView {
    pub pos: Vec2,
    pub radius: f32,
    /// Bobbing phase in radians
    pub phase: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticleView {
    pub pos: Vec2,
    /// Seconds left; renderers size particles by it
    pub life: f32,
    pub color: ParticleColor,
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub phase: GamePhase,
    pub player: PlayerView,
    pub enemies: Vec<EnemyView>,
    pub orbs: Vec<OrbView>,
    pub particles: Vec<ParticleView>,
    pub score: u64,
    pub high_score: u64,
    pub multiplier: f32,
    pub health: u8,
    pub dash_cooldown: f32,
    /// Remaining red-flash seconds (0 when disabled)
    pub flash: f32,
    /// Remaining shake seconds (0 when disabled)
    pub shake: f32,
}

impl FrameSnapshot {
    pub fn capture(state: &GameState, settings: &Settings) -> Self {
        Self {
            phase: state.phase,
            player: PlayerView {
                pos: state.player.pos,
                radius: state.player.radius,
                dashing: state.player.is_dashing(),
            },
            enemies: state
                .enemies
                .iter()
                .map(|e| EnemyView {
                    pos: e.pos,
                    radius: e.radius,
                })
                .collect(),
            orbs: state
                .orbs
                .iter()
                .map(|o| OrbView {
                    pos: o.pos,
                    radius: o.radius,
                    phase: o.phase,
                })
                .collect(),
            particles: state
                .particles
                .iter()
                .map(|p| ParticleView {
                    pos: p.pos,
                    life: p.life,
                    color: p.color,
                })
                .collect(),
            score: state.score(),
            high_score: state.high_score,
            multiplier: state.scoring.multiplier,
            health: state.player.health,
            dash_cooldown: state.player.dash_cooldown,
            flash: if settings.effective_damage_flash() {
                state.flash
            } else {
                0.0
            },
            shake: if settings.effective_screen_shake() {
                state.shake
            } else {
                0.0
            },
        }
    }

    /// HUD dash indicator text
    pub fn dash_label(&self) -> String {
        if self.dash_cooldown <= 0.0 {
            "READY".to_string()
        } else {
            format!("{:.1}s", self.dash_cooldown)
        }
    }
}

/// Consumer of per-frame snapshots (renderer, HUD, recorder)
pub trait PresentationGateway {
    fn present(&mut self, snapshot: &FrameSnapshot);
}

/// Headless presenter: writes a HUD line through `log` every `every` frames
/// and whenever the phase changes
#[derive(Debug)]
pub struct LogPresenter {
    every: u64,
    frames: u64,
    last_phase: Option<GamePhase>,
}

impl LogPresenter {
    pub fn new(every: u64) -> Self {
        Self {
            every: every.max(1),
            frames: 0,
            last_phase: None,
        }
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl PresentationGateway for LogPresenter {
    fn present(&mut self, snapshot: &FrameSnapshot) {
        let phase_changed = self.last_phase != Some(snapshot.phase);
        if phase_changed || self.frames.is_multiple_of(self.every) {
            log::info!(
                "[{:?}] score {} high {} x{:.2} hp {} dash {} enemies {} orbs {}",
                snapshot.phase,
                snapshot.score,
                snapshot.high_score,
                snapshot.multiplier,
                snapshot.health,
                snapshot.dash_label(),
                snapshot.enemies.len(),
                snapshot.orbs.len(),
            );
        }
        self.last_phase = Some(snapshot.phase);
        self.frames += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Enemy;

    #[test]
    fn test_capture_mirrors_state() {
        let mut state = GameState::new(12, 300);
        state.enemies.push(Enemy {
            pos: Vec2::new(5.0, 6.0),
            radius: 12.0,
            speed: 100.0,
        });
        state.try_dash(Vec2::X);
        state.flash = 0.1;
        state.shake = 0.2;

        let snap = FrameSnapshot::capture(&state, &Settings::default());
        assert_eq!(snap.phase, GamePhase::Running);
        assert!(snap.player.dashing);
        assert_eq!(snap.enemies.len(), 1);
        assert_eq!(snap.enemies[0].radius, 12.0);
        assert_eq!(snap.orbs.len(), state.orbs.len());
        assert_eq!(snap.particles.len(), 24);
        assert_eq!(snap.high_score, 300);
        assert_eq!(snap.health, 5);
        assert_eq!(snap.dash_cooldown, 1.0);
        assert_eq!(snap.flash, 0.1);
        assert_eq!(snap.shake, 0.2);
        assert_eq!(snap.dash_label(), "1.0s");
    }

    #[test]
    fn test_reduced_motion_hides_effects() {
        let mut state = GameState::new(12, 0);
        state.flash = 0.1;
        state.shake = 0.2;
        let settings = Settings {
            reduced_motion: true,
            ..Settings::default()
        };

        let snap = FrameSnapshot::capture(&state, &settings);
        assert_eq!(snap.flash, 0.0);
        assert_eq!(snap.shake, 0.0);
        assert_eq!(snap.dash_label(), "READY");
    }

    #[test]
    fn test_log_presenter_counts_frames() {
        let state = GameState::new(1, 0);
        let snap = FrameSnapshot::capture(&state, &Settings::default());
        let mut presenter = LogPresenter::new(0);
        presenter.present(&snap);
        presenter.present(&snap);
        assert_eq!(presenter.frames(), 2);
    }
}
