//! Simulation step
//!
//! Advances the session by one variable `dt`, clamped here to
//! `[0, MAX_STEP]` so a stalled or broken clock can never flood the
//! spawners. Step order matters for scoring and fairness:
//!
//! 1. pause toggle / restart
//! 2. timers and multiplier decay
//! 3. dash request
//! 4. spawners
//! 5. player movement
//! 6. orb pickups
//! 7. enemy homing and contacts (may end the session)
//! 8. particles and passive score

use glam::Vec2;

use super::autopilot;
use super::collision::{resolve_enemy_contacts, resolve_orb_pickups};
use super::spawn::run_spawners;
use super::state::{GamePhase, GameState};
use crate::clamp_step;
use crate::consts::*;

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Unit movement direction from held keys (zero when idle)
    pub direction: Vec2,
    /// Dash request
    pub dash: bool,
    /// Pause toggle
    pub pause: bool,
    /// Restart request (only honored after game over)
    pub restart: bool,
    /// Idle/demo mode - the autopilot plays the game
    pub idle_mode: bool,
}

/// Advance the game state by one step.
///
/// Events pile up in `state.events` until the caller takes them with
/// [`GameState::drain_events`].
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    let dt = clamp_step(dt);

    if input.pause {
        state.toggle_pause();
    }
    if input.restart {
        state.restart();
    }

    // Don't tick if paused or game over
    match state.phase {
        GamePhase::Paused | GamePhase::GameOver => return,
        GamePhase::Running => {}
    }

    let mut input = input.clone();
    if input.idle_mode {
        let steering = autopilot::steer(state);
        input.direction = steering.direction;
        input.dash |= steering.dash;
    }
    let direction = input.direction.normalize_or_zero();

    state.elapsed += dt;
    state.enemy_timer += dt;
    state.orb_timer += dt;
    state.flash = (state.flash - dt).max(0.0);
    state.shake = (state.shake - dt).max(0.0);
    state.player.dash_cooldown = (state.player.dash_cooldown - dt).max(0.0);
    state.scoring.decay(dt);

    if input.dash {
        state.try_dash(direction);
    }

    run_spawners(state);

    state.player.integrate(direction, dt);

    for orb in &mut state.orbs {
        orb.phase += dt * ORB_PHASE_RATE;
    }
    resolve_orb_pickups(state);

    let contacts = resolve_enemy_contacts(state, dt);
    if contacts.fatal {
        state.end_game();
        log::info!(
            "Game over: score {} (high score {})",
            state.score(),
            state.high_score
        );
        return;
    }

    state.particles.update(dt);

    let elapsed = state.elapsed;
    state.scoring.passive(dt, elapsed);
}
