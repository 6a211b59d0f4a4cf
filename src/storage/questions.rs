//! Append-only question log.
//!
//! Each record starts with a tag line. Multiple-choice records carry their
//! option count on the tag line:
//!
//! ```text
//! MCQ 3
//! Capital of France?
//! Paris
//! Lyon
//! Nice
//! 1
//! TF
//! Earth is flat.
//! 2
//! ```
//!
//! A bare `MCQ` tag is the legacy fixed-width shape with exactly four
//! option lines.

use std::fs::{File, OpenOptions};
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};

use log::debug;

use super::lines::{LineCursor, parse_number};
use crate::domain::{MAX_OPTIONS, MultipleChoice, Question, TrueFalse};
use crate::error::{QuizError, Result};

const MCQ_TAG: &str = "MCQ";
const TF_TAG: &str = "TF";
const LEGACY_MCQ_OPTIONS: usize = 4;

/// Handle to the question log
#[derive(Debug, Clone)]
pub struct QuestionStore {
    path: PathBuf,
}

impl QuestionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one question to the end of the log.
    ///
    /// The file is opened, written with a single call and closed again; on
    /// error the caller must treat the question as not stored.
    pub fn append(&self, question: &Question) -> Result<()> {
        let record = encode(question);
        let mut file = OpenOptions::new().create(true).append(true).open(&self.path)?;
        file.write_all(record.as_bytes())?;
        debug!("Appended {} question to {}", question.kind(), self.path.display());
        Ok(())
    }

    /// Read the log from the start, lazily.
    ///
    /// A missing log reads as empty. Call again to restart.
    pub fn read_all(&self) -> Result<QuestionIter> {
        let cursor = match File::open(&self.path) {
            Ok(file) => Some(LineCursor::new(BufReader::new(file))),
            Err(e) if e.kind() == io::ErrorKind::NotFound => None,
            Err(e) => return Err(e.into()),
        };
        Ok(QuestionIter { cursor })
    }

    /// Read every question into memory
    pub fn load(&self) -> Result<Vec<Question>> {
        self.read_all()?.collect()
    }
}

/// Lazy sequence of questions in log order.
///
/// Stops after the first error so a corrupt record is never followed by
/// lines misread as new records.
pub struct QuestionIter {
    cursor: Option<LineCursor<BufReader<File>>>,
}

impl Iterator for QuestionIter {
    type Item = Result<Question>;

    fn next(&mut self) -> Option<Self::Item> {
        let cursor = self.cursor.as_mut()?;
        match read_question(cursor) {
            Ok(Some(question)) => Some(Ok(question)),
            Ok(None) => {
                self.cursor = None;
                None
            }
            Err(e) => {
                self.cursor = None;
                Some(Err(e))
            }
        }
    }
}

/// Serialize one question as it appears in the log
pub fn encode(question: &Question) -> String {
    match question {
        Question::MultipleChoice(q) => {
            let mut record = format!("{} {}\n{}\n", MCQ_TAG, q.options().len(), q.text());
            for option in q.options() {
                record.push_str(option);
                record.push('\n');
            }
            record.push_str(&format!("{}\n", q.correct()));
            record
        }
        Question::TrueFalse(q) => format!("{}\n{}\n{}\n", TF_TAG, q.text(), q.code()),
    }
}

fn read_question<R: io::BufRead>(cursor: &mut LineCursor<R>) -> Result<Option<Question>> {
    let Some(tag_line) = cursor.next_record_start()? else {
        return Ok(None);
    };
    let tag_line_no = cursor.line_no();
    let mut parts = tag_line.split_whitespace();
    let tag = parts.next().unwrap_or_default();
    let count = parts.next();
    if parts.next().is_some() {
        return Err(QuizError::parse(tag_line_no, format!("malformed tag line '{}'", tag_line)));
    }

    match (tag, count) {
        (MCQ_TAG, count) => {
            let count = match count {
                Some(n) => parse_number(n, tag_line_no, "option count")? as usize,
                None => LEGACY_MCQ_OPTIONS,
            };
            if count == 0 || count > MAX_OPTIONS {
                return Err(QuizError::parse(
                    tag_line_no,
                    format!("option count {} is outside 1..={}", count, MAX_OPTIONS),
                ));
            }
            read_multiple_choice(cursor, count).map(Some)
        }
        (TF_TAG, None) => read_true_false(cursor).map(Some),
        _ => Err(QuizError::parse(
            tag_line_no,
            format!("unknown record tag '{}'", tag_line),
        )),
    }
}

fn read_multiple_choice<R: io::BufRead>(cursor: &mut LineCursor<R>, count: usize) -> Result<Question> {
    let text = cursor.expect_line("question text")?;
    let mut options = Vec::with_capacity(count);
    for i in 0..count {
        options.push(cursor.expect_line(&format!("option {}", i + 1))?);
    }
    let correct = cursor.expect_number("correct option number")?;
    let line_no = cursor.line_no();
    MultipleChoice::new(text, options, correct)
        .map(Question::MultipleChoice)
        .map_err(|e| QuizError::parse(line_no, e.to_string()))
}

fn read_true_false<R: io::BufRead>(cursor: &mut LineCursor<R>) -> Result<Question> {
    let text = cursor.expect_line("question text")?;
    let code = cursor.expect_number("true/false answer")?;
    let line_no = cursor.line_no();
    TrueFalse::from_code(text, code)
        .map(Question::TrueFalse)
        .map_err(|e| QuizError::parse(line_no, e.to_string()))
}
