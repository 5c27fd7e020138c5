//! Game loop driver
//!
//! Owns one [`Session`] and pumps it: measure elapsed wall-clock time, clamp
//! it to [`crate::consts::MAX_STEP`], tick, snapshot, present, wait for the next frame.
//! Everything runs on the calling thread.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use crate::consts::FRAME_MS;
use crate::highscores::HighScore;
use crate::input::{InputEvent, InputState};
use crate::persistence::HighScoreStore;
use crate::settings::Settings;
use crate::sim::{GameEvent, GamePhase, GameState, tick};
use crate::snapshot::{FrameSnapshot, PresentationGateway};

/// Source of frame timing
pub trait Clock {
    /// Seconds since the previous call
    fn lap(&mut self) -> f32;

    /// Yield to the host until the next frame is due
    fn wait_for_next_frame(&mut self) {}
}

/// Real time, paced at roughly [`FRAME_MS`]
#[derive(Debug)]
pub struct WallClock {
    last: Instant,
    next_frame: Instant,
}

impl Default for WallClock {
    fn default() -> Self {
        let now = Instant::now();
        Self {
            last: now,
            next_frame: now,
        }
    }
}

impl Clock for WallClock {
    fn lap(&mut self) -> f32 {
        let now = Instant::now();
        let dt = now.duration_since(self.last).as_secs_f32();
        self.last = now;
        dt
    }

    fn wait_for_next_frame(&mut self) {
        self.next_frame += Duration::from_millis(FRAME_MS);
        let now = Instant::now();
        if self.next_frame > now {
            std::thread::sleep(self.next_frame - now);
        } else {
            // Fell behind; the next lap simply reports the longer gap
            self.next_frame = now;
        }
    }
}

/// Fixed-step clock for tests and fast-forward runs
#[derive(Debug, Clone, Copy)]
pub struct ManualClock {
    pub step: f32,
}

impl Clock for ManualClock {
    fn lap(&mut self) -> f32 {
        self.step
    }
}

/// One game session plus its input and high score plumbing
#[derive(Debug)]
pub struct Session<S: HighScoreStore> {
    pub state: GameState,
    pub input: InputState,
    pub settings: Settings,
    high_score: HighScore<S>,
}

impl<S: HighScoreStore> Session<S> {
    pub fn new(settings: Settings, store: S) -> Self {
        let high_score = HighScore::load(store);
        let seed = settings.seed.unwrap_or_else(clock_seed);
        let mut state = GameState::new(seed, high_score.best());
        state.particles.set_cap(settings.max_particles());
        log::info!("Session started (seed {}, high score {})", seed, high_score.best());
        Self {
            state,
            input: InputState::new(),
            settings,
            high_score,
        }
    }

    /// Wrap an existing state (custom random source, prepared scenario)
    pub fn with_state(settings: Settings, store: S, mut state: GameState) -> Self {
        let high_score = HighScore::load(store);
        state.high_score = state.high_score.max(high_score.best());
        Self {
            state,
            input: InputState::new(),
            settings,
            high_score,
        }
    }

    pub fn high_score(&self) -> &HighScore<S> {
        &self.high_score
    }

    pub fn handle(&mut self, event: InputEvent) {
        self.input.handle(event);
    }

    /// Advance by a measured frame time and return the frame to draw.
    /// `tick` clamps the step, so stalls and clock glitches are safe here.
    pub fn step(&mut self, raw_dt: f32) -> FrameSnapshot {
        let input = self.input.take_tick_input();
        tick(&mut self.state, &input, raw_dt);

        for event in self.state.drain_events() {
            self.on_event(&event);
        }
        FrameSnapshot::capture(&self.state, &self.settings)
    }

    fn on_event(&mut self, event: &GameEvent) {
        match event {
            GameEvent::GameOver { score, .. } => {
                self.high_score.submit(*score);
            }
            GameEvent::Paused => log::debug!("Paused"),
            GameEvent::Resumed => log::debug!("Resumed"),
            GameEvent::Restarted => {
                log::info!("Restarted (high score {})", self.high_score.best())
            }
            GameEvent::PlayerHit { health } => log::debug!("Hit, {} health left", health),
            _ => {}
        }
    }
}

/// When to stop the loop
#[derive(Debug, Clone, Copy, Default)]
pub struct RunLimit {
    /// Stop after this many frames (None = forever)
    pub max_frames: Option<u64>,
    pub stop_on_game_over: bool,
}

/// Drive a session until the limit is hit. Returns the number of frames run.
pub fn run<S, C, P>(
    session: &mut Session<S>,
    clock: &mut C,
    presenter: &mut P,
    limit: RunLimit,
) -> u64
where
    S: HighScoreStore,
    C: Clock,
    P: PresentationGateway,
{
    let mut frames = 0;
    loop {
        if limit.max_frames.is_some_and(|max| frames >= max) {
            break;
        }
        let snapshot = session.step(clock.lap());
        presenter.present(&snapshot);
        frames += 1;

        if limit.stop_on_game_over && snapshot.phase == GamePhase::GameOver {
            break;
        }
        clock.wait_for_next_frame();
    }
    frames
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::MAX_STEP;
    use crate::input::Action;
    use crate::persistence::MemoryStore;
    use crate::sim::Enemy;

    #[derive(Default)]
    struct Recorder {
        frames: Vec<FrameSnapshot>,
    }

    impl PresentationGateway for Recorder {
        fn present(&mut self, snapshot: &FrameSnapshot) {
            self.frames.push(snapshot.clone());
        }
    }

    fn seeded_settings() -> Settings {
        Settings {
            seed: Some(77),
            ..Settings::default()
        }
    }

    #[test]
    fn test_clock_glitch_does_not_advance() {
        let mut session = Session::new(seeded_settings(), MemoryStore::new());
        session.step(f32::INFINITY);
        session.step(f32::NAN);
        session.step(-3.0);
        assert_eq!(session.state.elapsed, 0.0);
        assert_eq!(session.state.enemy_timer, 0.0);
    }

    #[test]
    fn test_stall_is_clamped() {
        let mut session = Session::new(seeded_settings(), MemoryStore::new());
        session.state.orbs.clear();
        session.handle(InputEvent::Pressed(Action::MoveRight));
        let start = session.state.player.pos;

        session.step(2.0);
        assert!((session.state.elapsed - MAX_STEP).abs() < 1e-6);
        let moved = session.state.player.pos.x - start.x;
        assert!((moved - 230.0 * MAX_STEP).abs() < 1e-3);
    }

    #[test]
    fn test_game_over_persists_new_high_score() {
        let mut session = Session::new(seeded_settings(), MemoryStore::with_value(10));
        assert_eq!(session.state.high_score, 10);

        session.state.orbs.clear();
        session.state.scoring.score = 250;
        session.state.player.health = 1;
        let p = session.state.player.pos;
        session.state.enemies.push(Enemy {
            pos: p,
            radius: 10.0,
            speed: 100.0,
        });

        let snap = session.step(0.016);
        assert_eq!(snap.phase, GamePhase::GameOver);
        assert_eq!(snap.high_score, 250);
        assert_eq!(session.high_score().best(), 250);
        assert_eq!(session.high_score().store().stored(), Some(250));

        // Restart keeps the high score
        session.handle(InputEvent::Pressed(Action::Restart));
        let snap = session.step(0.016);
        assert_eq!(snap.phase, GamePhase::Running);
        assert_eq!(snap.high_score, 250);
        assert_eq!(snap.health, 5);
    }

    #[test]
    fn test_lower_score_not_persisted() {
        let mut session = Session::new(seeded_settings(), MemoryStore::with_value(1000));
        session.state.orbs.clear();
        session.state.scoring.score = 40;
        session.state.player.health = 1;
        let p = session.state.player.pos;
        session.state.enemies.push(Enemy {
            pos: p,
            radius: 10.0,
            speed: 100.0,
        });

        session.step(0.016);
        assert_eq!(session.state.phase, GamePhase::GameOver);
        assert_eq!(session.high_score().store().stored(), Some(1000));
        assert_eq!(session.state.high_score, 1000);
    }

    #[test]
    fn test_run_stops_at_frame_limit() {
        let mut session = Session::new(seeded_settings(), MemoryStore::new());
        let mut recorder = Recorder::default();
        let frames = run(
            &mut session,
            &mut ManualClock { step: 1.0 / 60.0 },
            &mut recorder,
            RunLimit {
                max_frames: Some(90),
                stop_on_game_over: true,
            },
        );
        assert_eq!(frames, 90);
        assert_eq!(recorder.frames.len(), 90);
        assert!((session.state.elapsed - 1.5).abs() < 1e-3);
    }

    #[test]
    fn test_run_until_game_over() {
        let mut session = Session::new(seeded_settings(), MemoryStore::new());
        let mut recorder = Recorder::default();
        // Standing still in the middle: enemies eventually wear the player down
        let frames = run(
            &mut session,
            &mut ManualClock { step: MAX_STEP },
            &mut recorder,
            RunLimit {
                max_frames: Some(100_000),
                stop_on_game_over: true,
            },
        );
        assert!(frames < 100_000);
        let last = recorder.frames.last().unwrap();
        assert_eq!(last.phase, GamePhase::GameOver);
        assert_eq!(last.health, 0);
        assert_eq!(session.high_score().best(), last.score);
    }

    #[test]
    fn test_pause_via_input() {
        let mut session = Session::new(seeded_settings(), MemoryStore::new());
        session.handle(InputEvent::Pressed(Action::Pause));
        let snap = session.step(0.016);
        assert_eq!(snap.phase, GamePhase::Paused);
        let elapsed = session.state.elapsed;
        session.step(0.016);
        assert_eq!(session.state.elapsed, elapsed);

        session.handle(InputEvent::Released(Action::Pause));
        session.handle(InputEvent::Pressed(Action::Pause));
        let snap = session.step(0.016);
        assert_eq!(snap.phase, GamePhase::Running);
    }

    #[test]
    fn test_particles_disabled_by_settings() {
        let settings = Settings {
            particles: false,
            ..seeded_settings()
        };
        let mut session = Session::new(settings, MemoryStore::new());
        session.handle(InputEvent::Pressed(Action::MoveUp));
        session.handle(InputEvent::Pressed(Action::Dash));
        let snap = session.step(0.016);
        assert!(snap.player.dashing);
        assert!(snap.particles.is_empty());
    }
}
