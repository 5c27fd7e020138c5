//! Game settings and preferences
//!
//! Loaded from an optional JSON file, then overlaid with environment
//! variables. Nothing here changes gameplay outcomes; settings only shape
//! presentation, the particle budget and where the high score lives.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Quality preset levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum QualityPreset {
    Low,
    #[default]
    Medium,
    High,
}

impl QualityPreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            QualityPreset::Low => "Low",
            QualityPreset::Medium => "Medium",
            QualityPreset::High => "High",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "low" => Some(QualityPreset::Low),
            "medium" | "med" => Some(QualityPreset::Medium),
            "high" => Some(QualityPreset::High),
            _ => None,
        }
    }

    /// Maximum live particles for this preset
    pub fn max_particles(&self) -> usize {
        match self {
            QualityPreset::Low => 150,
            QualityPreset::Medium => 600,
            QualityPreset::High => 2000,
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Graphics quality preset
    pub quality: QualityPreset,

    // === Visual Effects ===
    /// Screen shake when hit
    pub screen_shake: bool,
    /// Red flash when hit
    pub damage_flash: bool,
    /// Particle effects (dash trail, pickups, hits)
    pub particles: bool,

    // === Accessibility ===
    /// Reduced motion (no shake, no flashes)
    pub reduced_motion: bool,

    // === Storage ===
    /// Where the high score record lives
    pub save_path: PathBuf,

    /// Fixed RNG seed for reproducible runs (random when absent)
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            quality: QualityPreset::Medium,
            screen_shake: true,
            damage_flash: true,
            particles: true,
            reduced_motion: false,
            save_path: PathBuf::from("save.json"),
            seed: None,
        }
    }
}

impl Settings {
    /// Environment variable overriding `save_path`
    pub const ENV_SAVE: &'static str = "NEON_RUN_SAVE";
    /// Environment variable overriding `seed`
    pub const ENV_SEED: &'static str = "NEON_RUN_SEED";
    /// Environment variable overriding `quality`
    pub const ENV_QUALITY: &'static str = "NEON_RUN_QUALITY";

    /// Create settings from a quality preset
    pub fn from_preset(preset: QualityPreset) -> Self {
        Self {
            quality: preset,
            ..Self::default()
        }
    }

    /// Effective screen shake (respects reduced_motion)
    pub fn effective_screen_shake(&self) -> bool {
        self.screen_shake && !self.reduced_motion
    }

    /// Effective damage flash (respects reduced_motion)
    pub fn effective_damage_flash(&self) -> bool {
        self.damage_flash && !self.reduced_motion
    }

    /// Effective particle count cap
    pub fn max_particles(&self) -> usize {
        if !self.particles {
            0
        } else {
            self.quality.max_particles()
        }
    }

    /// Load settings from a JSON file; defaults when missing or malformed
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Invalid settings file {}: {}, using defaults", path.display(), e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    /// Overlay environment variables, ignoring invalid values
    pub fn apply_env(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(path) = lookup(Self::ENV_SAVE) {
            if path.is_empty() {
                log::warn!("{} is empty, keeping {}", Self::ENV_SAVE, self.save_path.display());
            } else {
                self.save_path = PathBuf::from(path);
            }
        }

        if let Some(seed) = lookup(Self::ENV_SEED) {
            match seed.parse::<u64>() {
                Ok(parsed) => self.seed = Some(parsed),
                Err(_) => log::warn!("Invalid {} '{}', using a random seed", Self::ENV_SEED, seed),
            }
        }

        if let Some(quality) = lookup(Self::ENV_QUALITY) {
            match QualityPreset::parse(&quality) {
                Some(preset) => self.quality = preset,
                None => log::warn!(
                    "Invalid {} '{}', keeping {}",
                    Self::ENV_QUALITY,
                    quality,
                    self.quality.as_str()
                ),
            }
        }
    }
}
