//! Score and multiplier rules

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Session score with a time-decayed multiplier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scoring {
    pub score: u64,
    /// Always within `[MULTIPLIER_MIN, MULTIPLIER_MAX]`
    pub multiplier: f32,
    /// While above zero the multiplier holds its value
    pub grace: f32,
}

impl Default for Scoring {
    fn default() -> Self {
        Self {
            score: 0,
            multiplier: MULTIPLIER_MIN,
            grace: 0.0,
        }
    }
}

impl Scoring {
    /// Count the grace timer down, then decay the multiplier once it runs out
    pub fn decay(&mut self, dt: f32) {
        self.grace = (self.grace - dt).max(0.0);
        if self.grace <= 0.0 {
            self.multiplier = (self.multiplier - dt * MULTIPLIER_DECAY).max(MULTIPLIER_MIN);
        }
    }

    /// Orb pickup. Returns the points awarded.
    pub fn collect(&mut self, reward: u32) -> u64 {
        let gain = (reward as f32 * self.multiplier).floor() as u64;
        self.score += gain;
        self.multiplier = (self.multiplier + MULTIPLIER_STEP).min(MULTIPLIER_MAX);
        self.grace = MULTIPLIER_GRACE;
        gain
    }

    /// Enemy destroyed during a dash. Returns the points awarded.
    pub fn dash_kill(&mut self) -> u64 {
        let gain = (DASH_KILL_SCORE * self.multiplier).floor() as u64;
        self.score += gain;
        gain
    }

    /// Time-based trickle, accelerating with session time
    pub fn passive(&mut self, dt: f32, elapsed: f32) -> u64 {
        let gain = (dt * (PASSIVE_BASE + elapsed * PASSIVE_RAMP)).floor().max(0.0) as u64;
        self.score += gain;
        gain
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collect_at_double_multiplier() {
        let mut s = Scoring {
            score: 100,
            multiplier: 2.0,
            grace: 0.0,
        };
        assert_eq!(s.collect(10), 20);
        assert_eq!(s.score, 120);
        assert!((s.multiplier - 2.18).abs() < 1e-5);
        assert_eq!(s.grace, MULTIPLIER_GRACE);
    }

    #[test]
    fn test_collect_floors_gain() {
        let mut s = Scoring {
            multiplier: 1.18,
            ..Default::default()
        };
        // 15 * 1.18 = 17.7
        assert_eq!(s.collect(15), 17);
    }

    #[test]
    fn test_multiplier_caps() {
        let mut s = Scoring::default();
        for _ in 0..40 {
            s.collect(10);
        }
        assert_eq!(s.multiplier, MULTIPLIER_MAX);
    }

    #[test]
    fn test_grace_holds_then_decays() {
        let mut s = Scoring {
            multiplier: 3.0,
            ..Default::default()
        };
        s.collect(10);
        let held = s.multiplier;

        s.decay(1.0);
        assert_eq!(s.multiplier, held);
        assert!((s.grace - 0.5).abs() < 1e-6);

        // Grace expires mid-step, decay applies the full step
        s.decay(0.6);
        assert_eq!(s.grace, 0.0);
        assert!((s.multiplier - (held - 0.3)).abs() < 1e-5);

        s.decay(10.0);
        assert_eq!(s.multiplier, MULTIPLIER_MIN);
    }

    #[test]
    fn test_dash_kill_and_passive() {
        let mut s = Scoring {
            multiplier: 1.5,
            ..Default::default()
        };
        assert_eq!(s.dash_kill(), 45);

        // 0.05 * (6 + 100 * 0.6) = 3.3
        assert_eq!(s.passive(0.05, 100.0), 3);
        // 1/60 * 6 rounds down to nothing
        assert_eq!(s.passive(1.0 / 60.0, 0.0), 0);
        assert_eq!(s.score, 48);
    }
}
