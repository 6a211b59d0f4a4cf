//! Append-only leaderboard log, one fixed-width line per attempt.

use std::fs::{File, OpenOptions};
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};

use log::debug;

use super::lines::{LineCursor, parse_number};
use crate::domain::LeaderboardEntry;
use crate::error::{QuizError, Result};

/// Handle to the leaderboard log
#[derive(Debug, Clone)]
pub struct LeaderboardStore {
    path: PathBuf,
}

impl LeaderboardStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one entry. Repeated attempts are never merged.
    pub fn append(&self, entry: &LeaderboardEntry) -> Result<()> {
        if entry.name.is_empty() || entry.name.chars().any(char::is_whitespace) {
            return Err(QuizError::InvalidEntry(format!(
                "name '{}' must be a single token",
                entry.name
            )));
        }
        let mut file = OpenOptions::new().create(true).append(true).open(&self.path)?;
        file.write_all(encode(entry).as_bytes())?;
        debug!("Appended leaderboard entry for {} ({})", entry.name, entry.id);
        Ok(())
    }

    /// Read the leaderboard from the start, lazily. A missing log reads as empty.
    pub fn read_all(&self) -> Result<LeaderboardIter> {
        let cursor = match File::open(&self.path) {
            Ok(file) => Some(LineCursor::new(BufReader::new(file))),
            Err(e) if e.kind() == io::ErrorKind::NotFound => None,
            Err(e) => return Err(e.into()),
        };
        Ok(LeaderboardIter { cursor })
    }

    pub fn load(&self) -> Result<Vec<LeaderboardEntry>> {
        self.read_all()?.collect()
    }
}

/// Lazy sequence of leaderboard entries in log order
pub struct LeaderboardIter {
    cursor: Option<LineCursor<BufReader<File>>>,
}

impl Iterator for LeaderboardIter {
    type Item = Result<LeaderboardEntry>;

    fn next(&mut self) -> Option<Self::Item> {
        let cursor = self.cursor.as_mut()?;
        let result = match cursor.next_record_start() {
            Ok(Some(line)) => decode(&line, cursor.line_no()),
            Ok(None) => {
                self.cursor = None;
                return None;
            }
            Err(e) => Err(e),
        };
        if result.is_err() {
            self.cursor = None;
        }
        Some(result)
    }
}

/// One padded line; columns are always separated by at least one space
pub fn encode(entry: &LeaderboardEntry) -> String {
    format!("{:>20} {:>9} {:>9}\n", entry.name, entry.id, entry.score)
}

fn decode(line: &str, line_no: usize) -> Result<LeaderboardEntry> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    let [name, id, score] = fields.as_slice() else {
        return Err(QuizError::parse(
            line_no,
            format!("expected name, id and score, found {} fields", fields.len()),
        ));
    };
    Ok(LeaderboardEntry {
        name: (*name).to_string(),
        id: parse_number(id, line_no, "id")?,
        score: parse_number(score, line_no, "score")?,
    })
}
