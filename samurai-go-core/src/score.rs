//! High Score Store
//!
//! The high score lives in a one-line text file: `<integer>`, optionally
//! followed by `,<ignored fields>`. Loading happens once at startup and any
//! failure is fatal to the caller. Saving writes the bare integer.

use std::fs;
use std::num::ParseIntError;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::GameConfig;
use crate::game::state::SessionEnd;

/// Score file failures. Every variant names the file.
#[derive(Debug, thiserror::Error)]
pub enum ScoreError {
    /// File missing or unreadable/unwritable
    #[error("score file {path}: {source}")]
    Io {
        /// File that failed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// First field of a line is not a non-negative integer
    #[error("score file {path}, line {line}: invalid score: {source}")]
    Parse {
        /// File that failed
        path: PathBuf,
        /// 1-based line number
        line: usize,
        /// Underlying parse error
        #[source]
        source: ParseIntError,
    },
}

/// Persisted high score.
#[derive(Clone, Debug)]
pub struct ScoreStore {
    path: PathBuf,
    missing_is_zero: bool,
}

impl ScoreStore {
    /// Store backed by `path`. A missing file is an error.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            missing_is_zero: false,
        }
    }

    /// Store described by the game config.
    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config.score_path.clone()).missing_is_zero(config.missing_score_is_zero)
    }

    /// Load a missing file as 0 instead of failing.
    pub fn missing_is_zero(mut self, enabled: bool) -> Self {
        self.missing_is_zero = enabled;
        self
    }

    /// Backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the high score.
    ///
    /// Each line is split on `,` and only the first field is parsed; the last
    /// line wins and an empty file yields 0.
    pub fn load(&self) -> Result<u32, ScoreError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if self.missing_is_zero && e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No score file at {}, starting from 0", self.path.display());
                return Ok(0);
            }
            Err(source) => {
                return Err(ScoreError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        let mut high_score = 0;
        for (index, line) in content.lines().enumerate() {
            let first = line.split(',').next().unwrap_or_default();
            high_score = first.parse::<u32>().map_err(|source| ScoreError::Parse {
                path: self.path.clone(),
                line: index + 1,
                source,
            })?;
        }

        info!("HighScore : {}", high_score);
        Ok(high_score)
    }

    /// Overwrite the file with `score`.
    pub fn save(&self, score: u32) -> Result<(), ScoreError> {
        fs::write(&self.path, score.to_string()).map_err(|source| ScoreError::Io {
            path: self.path.clone(),
            source,
        })?;
        info!("Saved high score {} to {}", score, self.path.display());
        Ok(())
    }

    /// Apply the outcome of a finished session.
    ///
    /// Returns whether the file was written.
    pub fn commit(&self, outcome: SessionEnd) -> Result<bool, ScoreError> {
        match outcome {
            SessionEnd::SaveAndExit { score } => {
                self.save(score)?;
                Ok(true)
            }
            SessionEnd::Exit => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn store_with(content: &str) -> (tempfile::TempDir, ScoreStore) {
        let dir = tempdir().unwrap();
        let path = dir.path().join("score.txt");
        fs::write(&path, content).unwrap();
        (dir, ScoreStore::new(path))
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempdir().unwrap();
        let store = ScoreStore::new(dir.path().join("score.txt"));

        store.save(42).unwrap();

        assert_eq!(store.load().unwrap(), 42);
        assert_eq!(fs::read_to_string(store.path()).unwrap(), "42");
    }

    #[test]
    fn test_load_ignores_extra_fields() {
        let (_dir, store) = store_with("10,ignored");
        assert_eq!(store.load().unwrap(), 10);
    }

    #[test]
    fn test_load_tolerates_trailing_newline() {
        let (_dir, store) = store_with("300\n");
        assert_eq!(store.load().unwrap(), 300);
    }

    #[test]
    fn test_load_last_line_wins() {
        let (_dir, store) = store_with("100\n250,x\n");
        assert_eq!(store.load().unwrap(), 250);
    }

    #[test]
    fn test_load_empty_file_is_zero() {
        let (_dir, store) = store_with("");
        assert_eq!(store.load().unwrap(), 0);
    }

    #[test]
    fn test_load_rejects_garbage() {
        let (_dir, store) = store_with("abc,10");
        let err = store.load().unwrap_err();
        assert!(matches!(err, ScoreError::Parse { line: 1, .. }));
    }

    #[test]
    fn test_load_rejects_negative() {
        let (_dir, store) = store_with("-5");
        assert!(matches!(store.load(), Err(ScoreError::Parse { .. })));
    }

    #[test]
    fn test_load_missing_file_fails() {
        let dir = tempdir().unwrap();
        let store = ScoreStore::new(dir.path().join("nonexistent.txt"));

        let err = store.load().unwrap_err();
        assert!(matches!(err, ScoreError::Io { .. }));
        assert!(err.to_string().contains("nonexistent.txt"));
    }

    #[test]
    fn test_load_missing_file_relaxed() {
        let dir = tempdir().unwrap();
        let store = ScoreStore::new(dir.path().join("nonexistent.txt")).missing_is_zero(true);
        assert_eq!(store.load().unwrap(), 0);
    }

    #[test]
    fn test_commit_save_and_exit_persists() {
        let (_dir, store) = store_with("100");

        let written = store.commit(SessionEnd::SaveAndExit { score: 150 }).unwrap();

        assert!(written);
        assert_eq!(store.load().unwrap(), 150);
    }

    #[test]
    fn test_commit_exit_leaves_file_alone() {
        let (_dir, store) = store_with("100,kept");

        let written = store.commit(SessionEnd::Exit).unwrap();

        assert!(!written);
        assert_eq!(fs::read_to_string(store.path()).unwrap(), "100,kept");
    }

    #[test]
    fn test_save_into_missing_directory_fails() {
        let dir = tempdir().unwrap();
        let store = ScoreStore::new(dir.path().join("no/such/dir/score.txt"));
        assert!(matches!(store.save(1), Err(ScoreError::Io { .. })));
    }
}
