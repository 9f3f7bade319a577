//! High score leaderboard
//!
//! Persisted as a single JSON file, tracks the top 10 match results. The
//! store never surfaces errors to the player: missing or corrupt data loads
//! as an empty list, and a failed save leaves the previously persisted list
//! in place (the write goes to a temp file first, then renames over the
//! target, so there are no observable partial writes).

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Maximum number of high scores to keep
pub const MAX_HIGH_SCORES: usize = 10;

/// A single finished-match result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEntry {
    /// Final match score
    pub score: u32,
    /// When the match ended, ISO-8601
    pub date: String,
}

impl ScoreEntry {
    /// Entry stamped with the current time
    pub fn now(score: u32) -> Self {
        Self {
            score,
            date: Utc::now().to_rfc3339(),
        }
    }

    /// Short date for the leaderboard table; falls back to the raw string
    /// if the stored date does not parse.
    pub fn date_label(&self) -> String {
        DateTime::parse_from_rfc3339(&self.date)
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|_| self.date.clone())
    }
}

/// High score leaderboard
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HighScores {
    pub entries: Vec<ScoreEntry>,
}

impl HighScores {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn top_score(&self) -> Option<u32> {
        self.entries.first().map(|e| e.score)
    }

    /// Load the persisted list; absent or unreadable data is "no data".
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str::<Vec<ScoreEntry>>(&json) {
                Ok(entries) => {
                    log::info!("loaded {} high scores", entries.len());
                    Self { entries }
                }
                Err(err) => {
                    log::warn!("high score file unreadable, starting fresh: {err}");
                    Self::new()
                }
            },
            Err(_) => Self::new(),
        }
    }

    /// Append an entry, re-sort descending by score (stable on ties),
    /// truncate to the top 10 and persist.
    ///
    /// If the save fails the attempt is discarded and the previous list is
    /// returned unchanged.
    pub fn record(self, entry: ScoreEntry, path: &Path) -> Self {
        let mut updated = self.clone();
        updated.entries.push(entry);
        // sort_by is stable: equal scores keep insertion order
        updated.entries.sort_by(|a, b| b.score.cmp(&a.score));
        updated.entries.truncate(MAX_HIGH_SCORES);

        match updated.save(path) {
            Ok(()) => {
                log::info!("high scores saved ({} entries)", updated.entries.len());
                updated
            }
            Err(err) => {
                log::warn!("failed to save high scores, keeping previous list: {err}");
                self
            }
        }
    }

    /// Erase the persisted list. Idempotent.
    pub fn clear(path: &Path) -> Self {
        if let Err(err) = fs::remove_file(path) {
            if err.kind() != std::io::ErrorKind::NotFound {
                log::warn!("failed to clear high scores: {err}");
            }
        }
        Self::new()
    }

    fn save(&self, path: &Path) -> std::io::Result<()> {
        let json = serde_json::to_string(&self.entries)?;
        let tmp = path.with_extension("tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, path)
    }
}
