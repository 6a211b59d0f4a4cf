//! Seams between the quiz runner and its collaborators.

use std::time::{Duration, Instant};

use crate::domain::Question;
use crate::error::Result;

use super::quiz_runner::QuestionResult;

/// What an answerer gave back for one question
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    /// A 1-based choice; may still be out of range for the question
    Choice(u32),
    /// Input that is not a number
    Invalid(String),
    /// Input ended before an answer was given
    NoAnswer,
}

/// Supplies answers to presented questions (a person at a terminal, or a test script)
pub trait AnswerSource {
    /// Present question `number` (1-based) and return the answer.
    ///
    /// `time_limit` is informational; the runner enforces it.
    fn ask(&mut self, number: usize, question: &Question, time_limit: Option<Duration>) -> Answer;

    /// Called once the answer has been scored
    fn feedback(&mut self, _result: &QuestionResult) {}
}

/// Receives per-question correctness after each question is scored
pub trait ResultSink {
    fn record(&mut self, text: &str, was_correct: bool) -> Result<()>;
}

/// Wall-clock source for per-question time limits
pub trait Clock {
    fn now(&self) -> Instant;
}

/// The system monotonic clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}
