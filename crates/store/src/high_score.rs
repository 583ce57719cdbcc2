//! High score persistence
//!
//! Stored as `{"high_score": n}`. A missing or unreadable file counts as a
//! high score of zero so a broken file never blocks a game from starting.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::error::StoreError;

const LOCAL_HIGH_SCORE_PATH: &str = "highscore.json";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
struct HighScoreFile {
    high_score: u32,
}

/// Best score on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighScoreStore {
    path: PathBuf,
}

impl HighScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<data_dir>/stackfall/highscore.json`
    pub fn default_path() -> PathBuf {
        match dirs::data_dir() {
            Some(dir) => dir.join("stackfall").join(LOCAL_HIGH_SCORE_PATH),
            None => PathBuf::from(LOCAL_HIGH_SCORE_PATH),
        }
    }

    pub fn at_default_path() -> Self {
        Self::new(Self::default_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Stored high score, 0 if there is none
    pub fn load(&self) -> u32 {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) => {
                debug!("no high score at {}: {}", self.path.display(), err);
                return 0;
            }
        };

        match serde_json::from_str::<HighScoreFile>(&text) {
            Ok(file) => file.high_score,
            Err(err) => {
                warn!("ignoring corrupt high score file {}: {}", self.path.display(), err);
                0
            }
        }
    }

    /// Overwrite the stored high score
    pub fn save(&self, score: u32) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let text = serde_json::to_string_pretty(&HighScoreFile { high_score: score })?;
        fs::write(&self.path, text)?;
        Ok(())
    }

    /// Save `score` if it beats the stored one; returns whether it did
    pub fn record(&self, score: u32) -> Result<bool, StoreError> {
        if score <= self.load() {
            return Ok(false);
        }
        self.save(score)?;
        debug!("new high score {}", score);
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_file_format() {
        let dir = tempdir().expect("temp dir");
        let store = HighScoreStore::new(dir.path().join("hs.json"));

        store.save(1200).expect("save");

        let text = fs::read_to_string(store.path()).expect("read");
        let value: serde_json::Value = serde_json::from_str(&text).expect("json");
        assert_eq!(value["high_score"], 1200);
    }
}
