//! Contact resolution between the player and the entity pools
//!
//! Both passes compact their pool with `retain_mut`, so removing the element
//! under inspection never skips or revisits a neighbour.

use super::particles::ParticleColor;
use super::state::{GameEvent, GameState};
use crate::circles_touch;
use crate::consts::*;

/// Outcome of the enemy pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ContactSummary {
    /// Enemies destroyed by a dash
    pub kills: u32,
    /// Non-dash contacts that cost health
    pub hits: u32,
    /// Health reached zero during this pass
    pub fatal: bool,
}

/// Collect every orb the player touches
pub fn resolve_orb_pickups(state: &mut GameState) -> u32 {
    let GameState {
        player,
        orbs,
        scoring,
        particles,
        events,
        rng,
        ..
    } = state;

    let mut collected = 0;
    orbs.retain(|orb| {
        if !circles_touch(player.pos, player.radius, orb.pos, orb.radius) {
            return true;
        }
        let gain = scoring.collect(orb.reward);
        particles.emit(rng.as_mut(), orb.pos, 11, ParticleColor::Cyan, 1.2);
        events.push(GameEvent::OrbCollected {
            reward: orb.reward,
            gain,
        });
        collected += 1;
        false
    });
    collected
}

/// Move every enemy toward `player.pos` and resolve contacts.
///
/// Once health hits zero the remaining enemies are left untouched for this
/// step; the caller is expected to end the session.
pub fn resolve_enemy_contacts(state: &mut GameState, dt: f32) -> ContactSummary {
    let GameState {
        player,
        enemies,
        scoring,
        particles,
        events,
        rng,
        flash,
        shake,
        ..
    } = state;

    let target = player.pos;
    let dashing = player.is_dashing();
    let mut summary = ContactSummary::default();

    enemies.retain_mut(|enemy| {
        if summary.fatal {
            return true;
        }
        // Contact is tested against the pre-move distance
        let touching = circles_touch(target, player.radius, enemy.pos, enemy.radius);
        enemy.home_toward(target, dt);
        if !touching {
            return true;
        }

        if dashing {
            let gain = scoring.dash_kill();
            particles.emit(rng.as_mut(), enemy.pos, 18, ParticleColor::Amber, 1.8);
            events.push(GameEvent::EnemyDestroyed { gain });
            summary.kills += 1;
        } else {
            summary.fatal = player.take_hit();
            *flash = FLASH_DURATION;
            *shake = SHAKE_DURATION;
            particles.emit(rng.as_mut(), player.pos, 20, ParticleColor::Red, 1.8);
            events.push(GameEvent::PlayerHit {
                health: player.health,
            });
            summary.hits += 1;
        }
        false
    });
    summary
}
