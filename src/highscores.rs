//! High score tracking
//!
//! Wraps a [`HighScoreStore`] and turns every storage failure into a logged
//! warning. The in-memory value stays authoritative for the running process;
//! only durability is lost when the backend misbehaves.

use crate::persistence::HighScoreStore;

/// Process-wide best score backed by a store
#[derive(Debug)]
pub struct HighScore<S: HighScoreStore> {
    best: u64,
    store: S,
}

impl<S: HighScoreStore> HighScore<S> {
    /// Load the stored value, falling back to 0 on any failure
    pub fn load(store: S) -> Self {
        let best = load_high_score(&store);
        Self { best, store }
    }

    pub fn best(&self) -> u64 {
        self.best
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Record a finished session. Returns true when it set a new best (the
    /// value is persisted then, best-effort).
    pub fn submit(&mut self, score: u64) -> bool {
        if score <= self.best {
            return false;
        }
        self.best = score;
        save_high_score(&mut self.store, score);
        log::info!("New high score: {}", score);
        true
    }
}

/// Read a high score, never failing: missing or corrupt data reads as 0
pub fn load_high_score<S: HighScoreStore>(store: &S) -> u64 {
    match store.load() {
        Ok(value) => {
            log::info!("Loaded high score {}", value);
            value
        }
        Err(e) => {
            log::warn!("Could not read high score, starting from 0: {}", e);
            0
        }
    }
}

/// Persist a high score; failures are logged and otherwise ignored
pub fn save_high_score<S: HighScoreStore>(store: &mut S, value: u64) {
    if let Err(e) = store.save(value) {
        log::warn!("Could not save high score {}: {}", value, e);
    }
}
