//! Best-score persistence.
//!
//! Reads never fail: a missing, unreadable or corrupt record is a high score of
//! zero. Writes return an error for the caller to log and drop.

use crate::core::constants::HIGH_SCORE_FILE;
use crate::utils::persistence::{data_path, load_json_or_default, save_json};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::cell::Cell;
use std::io;
use std::path::PathBuf;

/// Where the best score lives between sessions.
pub trait HighScoreStore {
    /// Stored best score, or 0 if there is none.
    fn load(&self) -> u32;

    fn save(&self, score: u32) -> io::Result<()>;
}

/// On-disk form of the best score.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HighScoreRecord {
    pub high_score: u32,
    /// Unix seconds when the score was set.
    #[serde(default)]
    pub achieved_at: Option<i64>,
}

/// JSON file store, `~/.flapper/highscore.json` by default.
#[derive(Debug, Clone)]
pub struct JsonHighScoreStore {
    path: PathBuf,
}

impl JsonHighScoreStore {
    pub fn new() -> io::Result<Self> {
        Ok(Self::at(data_path(HIGH_SCORE_FILE)?))
    }

    pub fn at(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl HighScoreStore for JsonHighScoreStore {
    fn load(&self) -> u32 {
        load_json_or_default::<HighScoreRecord>(&self.path).high_score
    }

    fn save(&self, score: u32) -> io::Result<()> {
        let record = HighScoreRecord {
            high_score: score,
            achieved_at: Some(Utc::now().timestamp()),
        };
        save_json(&self.path, &record)
    }
}

/// In-process store. Used when there is no home directory, and in tests.
#[derive(Debug, Default)]
pub struct MemoryHighScoreStore {
    score: Cell<u32>,
}

impl MemoryHighScoreStore {
    pub fn new(score: u32) -> Self {
        Self {
            score: Cell::new(score),
        }
    }
}

impl HighScoreStore for MemoryHighScoreStore {
    fn load(&self) -> u32 {
        self.score.get()
    }

    fn save(&self, score: u32) -> io::Result<()> {
        self.score.set(score);
        Ok(())
    }
}

/// Persist a new best score. Failures are logged and dropped; they never
/// reach the player or stop a run.
pub fn persist_high_score(store: &dyn HighScoreStore, score: u32) {
    match store.save(score) {
        Ok(()) => log::info!("new high score {} saved", score),
        Err(e) => log::warn!("could not save high score {}: {}", score, e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn temp_store(name: &str) -> JsonHighScoreStore {
        let path = std::env::temp_dir()
            .join(format!("flapper-highscore-{}", std::process::id()))
            .join(name);
        fs::remove_file(&path).ok();
        JsonHighScoreStore::at(path)
    }

    #[test]
    fn test_missing_file_reads_zero() {
        let store = temp_store("missing.json");
        assert_eq!(store.load(), 0);
    }

    #[test]
    fn test_corrupt_file_reads_zero() {
        let store = temp_store("corrupt.json");
        fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        fs::write(store.path(), "high score: lots").unwrap();
        assert_eq!(store.load(), 0);
        fs::remove_file(store.path()).ok();
    }

    #[test]
    fn test_save_then_load() {
        let store = temp_store("saved.json");
        store.save(17).unwrap();
        assert_eq!(store.load(), 17);

        let json = fs::read_to_string(store.path()).unwrap();
        let record: HighScoreRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record.high_score, 17);
        assert!(record.achieved_at.is_some());
        fs::remove_file(store.path()).ok();
    }

    #[test]
    fn test_record_without_timestamp_loads() {
        let store = temp_store("bare.json");
        fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        fs::write(store.path(), r#"{"high_score": 42}"#).unwrap();
        assert_eq!(store.load(), 42);
        fs::remove_file(store.path()).ok();
    }

    #[test]
    fn test_memory_store() {
        let store = MemoryHighScoreStore::new(3);
        assert_eq!(store.load(), 3);
        persist_high_score(&store, 8);
        assert_eq!(store.load(), 8);
    }

    #[test]
    fn test_failed_write_is_dropped() {
        // Parent "directory" is a regular file, so the write must fail
        let blocker = std::env::temp_dir().join(format!("flapper-blocker-{}", std::process::id()));
        fs::write(&blocker, "x").unwrap();
        let store = JsonHighScoreStore::at(blocker.join("highscore.json"));
        assert!(store.save(5).is_err());
        persist_high_score(&store, 5);
        assert_eq!(store.load(), 0);
        fs::remove_file(blocker).ok();
    }
}
