//! Storage layer for Quizr - line-oriented flat-file logs.
//!
//! Every operation opens its file, does its work and closes it again; no
//! state is cached between calls and no file locking is attempted.

mod leaderboard;
mod lines;
mod questions;
mod stats;

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::Result;

pub use leaderboard::{LeaderboardIter, LeaderboardStore};
pub use questions::{QuestionIter, QuestionStore};
pub use stats::StatsStore;

/// File name of the question log inside a data directory
pub const QUESTIONS_FILE: &str = "questions.txt";
/// File name of the leaderboard log inside a data directory
pub const LEADERBOARD_FILE: &str = "leaderboard.txt";
/// File name of the statistics log inside a data directory
pub const STATS_FILE: &str = "question_stats.txt";

/// The three store handles, created once at startup and passed to whoever needs them.
#[derive(Debug, Clone)]
pub struct QuizFiles {
    base_path: PathBuf,
    pub questions: QuestionStore,
    pub leaderboard: LeaderboardStore,
    pub stats: StatsStore,
}

impl QuizFiles {
    /// Open (creating if needed) a data directory.
    pub fn open(base_path: impl AsRef<Path>) -> Result<Self> {
        let base_path = base_path.as_ref().to_path_buf();
        fs::create_dir_all(&base_path)?;
        debug!("Using data directory {}", base_path.display());
        Ok(Self {
            questions: QuestionStore::new(base_path.join(QUESTIONS_FILE)),
            leaderboard: LeaderboardStore::new(base_path.join(LEADERBOARD_FILE)),
            stats: StatsStore::new(base_path.join(STATS_FILE)),
            base_path,
        })
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_open_creates_directory() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("a").join("b");
        let files = QuizFiles::open(&nested).unwrap();
        assert!(nested.is_dir());
        assert_eq!(files.base_path(), nested.as_path());
        assert_eq!(files.questions.path(), nested.join(QUESTIONS_FILE).as_path());
        assert_eq!(files.leaderboard.path(), nested.join(LEADERBOARD_FILE).as_path());
        assert_eq!(files.stats.path(), nested.join(STATS_FILE).as_path());
    }

    #[test]
    fn test_stores_are_independent() {
        let temp_dir = TempDir::new().unwrap();
        let files = QuizFiles::open(temp_dir.path()).unwrap();
        files.stats.record("q", true).unwrap();
        assert!(files.questions.load().unwrap().is_empty());
        assert!(files.leaderboard.load().unwrap().is_empty());
    }

    #[test]
    fn test_persistence_across_handles() {
        let temp_dir = TempDir::new().unwrap();
        {
            let files = QuizFiles::open(temp_dir.path()).unwrap();
            files
                .questions
                .append(&crate::domain::Question::true_false("Sky is blue.", true).unwrap())
                .unwrap();
        }
        {
            let files = QuizFiles::open(temp_dir.path()).unwrap();
            assert_eq!(files.questions.load().unwrap().len(), 1);
        }
    }
}
