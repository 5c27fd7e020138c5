//! Simulation module
//!
//! All gameplay logic lives here. This module must stay free of platform
//! concerns:
//! - Variable `dt`, clamped by the driver
//! - Every random draw goes through `RandomSource`
//! - No rendering, input decoding or storage

pub mod autopilot;
pub mod collision;
pub mod particles;
pub mod rng;
pub mod scoring;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{ContactSummary, resolve_enemy_contacts, resolve_orb_pickups};
pub use particles::{Particle, ParticleColor, ParticleSystem};
pub use rng::{RandomSource, ScriptedRng};
pub use scoring::Scoring;
pub use state::{Enemy, GameEvent, GamePhase, GameState, Orb, Player};
pub use tick::{TickInput, tick};
