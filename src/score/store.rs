use anyhow::{Context, Result};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Owner shown when no high score has been recorded yet
pub const DEFAULT_OWNER: &str = "—";

/// Structured record file
const RECORD_FILE: &str = "high_score.json";
/// Legacy format: a bare integer score plus a separate owner-name file
const LEGACY_SCORE_FILE: &str = "high_score.txt";
const LEGACY_NAME_FILE: &str = "high_score_name.txt";

/// The persisted best score and who achieved it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScore {
    pub score: u32,
    pub name: String,
}

impl Default for HighScore {
    fn default() -> Self {
        Self {
            score: 0,
            name: DEFAULT_OWNER.to_string(),
        }
    }
}

/// Persistence seam for the high-score record.
///
/// Loading never fails: unreadable or missing data degrades to the default
/// record. Saving reports failure so callers can decide how loudly to care.
pub trait ScoreStore {
    fn load(&self) -> HighScore;
    fn save(&mut self, record: &HighScore) -> Result<()>;
}

/// File-backed store keeping its records in a single directory.
///
/// Reads prefer the structured JSON record and fall back to the legacy
/// two-file format. Writes are structured-first; when that fails the legacy
/// pair is written as a best effort.
pub struct FileScoreStore {
    dir: PathBuf,
}

impl FileScoreStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn record_path(&self) -> PathBuf {
        self.dir.join(RECORD_FILE)
    }

    fn legacy_score_path(&self) -> PathBuf {
        self.dir.join(LEGACY_SCORE_FILE)
    }

    fn legacy_name_path(&self) -> PathBuf {
        self.dir.join(LEGACY_NAME_FILE)
    }

    fn load_record(&self) -> Option<HighScore> {
        let raw = fs::read_to_string(self.record_path()).ok()?;
        match serde_json::from_str(&raw) {
            Ok(record) => Some(record),
            Err(err) => {
                debug!("ignoring unreadable high-score record: {}", err);
                None
            }
        }
    }

    fn load_legacy(&self) -> Option<HighScore> {
        let raw = fs::read_to_string(self.legacy_score_path()).ok()?;
        let score = raw.trim().parse().ok()?;
        let name = fs::read_to_string(self.legacy_name_path())
            .ok()
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| DEFAULT_OWNER.to_string());
        Some(HighScore { score, name })
    }

    fn save_record(&self, record: &HighScore) -> Result<()> {
        let json =
            serde_json::to_string_pretty(record).context("Failed to serialize high score")?;
        fs::write(self.record_path(), json)
            .with_context(|| format!("Failed to write {:?}", self.record_path()))
    }

    fn save_legacy(&self, record: &HighScore) -> Result<()> {
        fs::write(self.legacy_score_path(), record.score.to_string())
            .with_context(|| format!("Failed to write {:?}", self.legacy_score_path()))?;
        fs::write(self.legacy_name_path(), &record.name)
            .with_context(|| format!("Failed to write {:?}", self.legacy_name_path()))?;
        Ok(())
    }
}

impl ScoreStore for FileScoreStore {
    fn load(&self) -> HighScore {
        self.load_record()
            .or_else(|| self.load_legacy())
            .unwrap_or_default()
    }

    fn save(&mut self, record: &HighScore) -> Result<()> {
        match self.save_record(record) {
            Ok(()) => Ok(()),
            Err(err) => {
                warn!(
                    "structured high-score write failed, falling back to legacy files: {:#}",
                    err
                );
                self.save_legacy(record)
            }
        }
    }
}

/// In-memory store for tests and headless use
#[derive(Debug, Default)]
pub struct MemoryScoreStore {
    pub record: HighScore,
    pub saves: u32,
}

impl MemoryScoreStore {
    pub fn with_record(record: HighScore) -> Self {
        Self { record, saves: 0 }
    }
}

impl ScoreStore for MemoryScoreStore {
    fn load(&self) -> HighScore {
        self.record.clone()
    }

    fn save(&mut self, record: &HighScore) -> Result<()> {
        self.record = record.clone();
        self.saves += 1;
        Ok(())
    }
}
