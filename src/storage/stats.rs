//! Question statistics log.
//!
//! Two lines per stat: the exact question text, then `<attempts> <correct>`.
//! Updates rewrite the whole file one record at a time, so counters that
//! grow a digit never overwrite the following record.

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};

use log::debug;

use super::lines::{LineCursor, parse_number};
use crate::domain::QuestionStat;
use crate::error::{QuizError, Result};

/// Handle to the statistics log
#[derive(Debug, Clone)]
pub struct StatsStore {
    path: PathBuf,
}

impl StatsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Count one answer to the question with this exact text.
    ///
    /// Returns the stat as written.
    pub fn record(&self, text: &str, was_correct: bool) -> Result<QuestionStat> {
        if text.trim().is_empty() || text.contains(['\n', '\r']) {
            return Err(QuizError::InvalidQuestion(format!(
                "cannot key statistics by '{}'",
                text.escape_debug()
            )));
        }

        let mut stats = self.read_all()?;
        let updated = match stats.iter().position(|s| s.text == text) {
            Some(index) => {
                stats[index].record(was_correct);
                stats[index].clone()
            }
            None => {
                let stat = QuestionStat::first(text, was_correct);
                stats.push(stat.clone());
                stat
            }
        };

        self.rewrite(&stats)?;
        debug!(
            "Recorded answer for '{}': {}/{}",
            updated.text, updated.correct, updated.attempts
        );
        Ok(updated)
    }

    /// Every stat in file order. A missing log reads as empty.
    pub fn read_all(&self) -> Result<Vec<QuestionStat>> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut cursor = LineCursor::new(BufReader::new(file));
        let mut stats = Vec::new();
        while let Some(text) = cursor.next_record_start()? {
            let counters = cursor.expect_line("attempts and correct counts")?;
            stats.push(decode_counters(text, &counters, cursor.line_no())?);
        }
        Ok(stats)
    }

    /// The stat for one question, if it has ever been answered
    pub fn get(&self, text: &str) -> Result<Option<QuestionStat>> {
        Ok(self.read_all()?.into_iter().find(|s| s.text == text))
    }

    fn rewrite(&self, stats: &[QuestionStat]) -> Result<()> {
        let mut buf = String::new();
        for stat in stats {
            buf.push_str(&format!("{}\n{} {}\n", stat.text, stat.attempts, stat.correct));
        }
        let mut file = File::create(&self.path)?;
        file.write_all(buf.as_bytes())?;
        Ok(())
    }
}

fn decode_counters(text: String, counters: &str, line_no: usize) -> Result<QuestionStat> {
    let fields: Vec<&str> = counters.split_whitespace().collect();
    let [attempts, correct] = fields.as_slice() else {
        return Err(QuizError::parse(
            line_no,
            format!("expected '<attempts> <correct>', found '{}'", counters),
        ));
    };
    let attempts = parse_number(attempts, line_no, "attempts")?;
    let correct = parse_number(correct, line_no, "correct count")?;
    if attempts == 0 || correct > attempts {
        return Err(QuizError::parse(
            line_no,
            format!("inconsistent counters {} {}", attempts, correct),
        ));
    }
    Ok(QuestionStat {
        text,
        attempts,
        correct,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn create_test_store() -> (StatsStore, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let store = StatsStore::new(temp_dir.path().join("question_stats.txt"));
        (store, temp_dir)
    }

    #[test]
    fn test_first_record_creates_stat() {
        let (store, _temp) = create_test_store();
        let stat = store.record("2+2?", true).unwrap();
        assert_eq!(stat, QuestionStat::first("2+2?", true));
        assert_eq!(fs::read_to_string(store.path()).unwrap(), "2+2?\n1 1\n");
    }

    #[test]
    fn test_accumulates_by_exact_text() {
        let (store, _temp) = create_test_store();
        store.record("q", true).unwrap();
        store.record("q", true).unwrap();
        store.record("q", false).unwrap();

        let stat = store.get("q").unwrap().unwrap();
        assert_eq!(stat.attempts, 3);
        assert_eq!(stat.correct, 2);
    }

    #[test]
    fn test_distinct_texts_kept_apart() {
        let (store, _temp) = create_test_store();
        store.record("q", true).unwrap();
        store.record("Q", false).unwrap();
        store.record("q ", false).unwrap();

        let all = store.read_all().unwrap();
        assert_eq!(all.len(), 3);
        assert_eq!(store.get("q").unwrap().unwrap().correct, 1);
    }

    #[test]
    fn test_growing_counters_do_not_corrupt_neighbours() {
        let (store, _temp) = create_test_store();
        for _ in 0..9 {
            store.record("first", true).unwrap();
        }
        store.record("second", false).unwrap();
        // 9 -> 10 widens the counter line
        store.record("first", true).unwrap();

        let all = store.read_all().unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].attempts, 10);
        assert_eq!(all[0].correct, 10);
        assert_eq!(all[1], QuestionStat::first("second", false));
    }

    #[test]
    fn test_record_at_counter_limit() {
        let (store, _temp) = create_test_store();
        fs::write(store.path(), "q\n4294967295 0\n").unwrap();

        let stat = store.record("q", true).unwrap();
        assert_eq!(stat.attempts, u32::MAX);
        assert_eq!(stat.correct, 1);
        assert_eq!(store.read_all().unwrap(), vec![stat]);
    }

    #[test]
    fn test_get_unknown() {
        let (store, _temp) = create_test_store();
        assert!(store.get("never asked").unwrap().is_none());
    }

    #[test]
    fn test_invalid_key_rejected() {
        let (store, _temp) = create_test_store();
        assert!(store.record("", true).is_err());
        assert!(store.record("a\nb", true).is_err());
    }

    #[test]
    fn test_malformed_counters_fail() {
        let (store, _temp) = create_test_store();
        fs::write(store.path(), "q\n1\n").unwrap();
        assert!(matches!(store.read_all(), Err(QuizError::Parse { line: 2, .. })));

        fs::write(store.path(), "q\n1 2\n").unwrap();
        assert!(store.read_all().is_err());

        fs::write(store.path(), "q\n").unwrap();
        assert!(store.read_all().is_err());
    }
}
