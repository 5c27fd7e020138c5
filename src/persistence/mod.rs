//! High score storage backends
//!
//! The stored record is a single JSON object, `{"high_score": <n>}`. Nothing
//! outside this process reads it, so the format can change freely.
//!
//! Backends report failures through [`PersistenceError`]; the
//! [`HighScore`](crate::HighScore) tracker is the layer that swallows them.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Malformed save data: {0}")]
    Format(#[from] serde_json::Error),
}

/// On-disk record
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveRecord {
    #[serde(default)]
    pub high_score: u64,
}

/// Durable storage for one high score value
pub trait HighScoreStore {
    /// Read the stored value. A missing record is `Ok(0)`.
    fn load(&self) -> Result<u64, PersistenceError>;

    fn save(&mut self, value: u64) -> Result<(), PersistenceError>;
}

/// JSON file backend
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HighScoreStore for FileStore {
    fn load(&self) -> Result<u64, PersistenceError> {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(0),
            Err(e) => return Err(e.into()),
        };
        let record: SaveRecord = serde_json::from_str(&json)?;
        Ok(record.high_score)
    }

    fn save(&mut self, value: u64) -> Result<(), PersistenceError> {
        let json = serde_json::to_string(&SaveRecord { high_score: value })?;
        // Write-then-rename so a crash never leaves a truncated record
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

/// In-process backend, mostly for tests and headless runs
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    value: Option<u64>,
    /// Simulate a broken disk: every save fails
    pub fail_writes: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(value: u64) -> Self {
        Self {
            value: Some(value),
            fail_writes: false,
        }
    }

    pub fn stored(&self) -> Option<u64> {
        self.value
    }
}

impl HighScoreStore for MemoryStore {
    fn load(&self) -> Result<u64, PersistenceError> {
        Ok(self.value.unwrap_or(0))
    }

    fn save(&mut self, value: u64) -> Result<(), PersistenceError> {
        if self.fail_writes {
            return Err(io::Error::new(io::ErrorKind::PermissionDenied, "read-only store").into());
        }
        self.value = Some(value);
        Ok(())
    }
}
