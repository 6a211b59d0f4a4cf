//! Per-question answer statistics.

use serde::{Deserialize, Serialize};

/// Attempt and correct-answer counters for one question, keyed by its exact text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionStat {
    pub text: String,
    /// Always at least 1
    pub attempts: u32,
    /// Never exceeds `attempts`
    pub correct: u32,
}

impl QuestionStat {
    /// The stat created by the first answer to a question
    pub fn first(text: impl Into<String>, was_correct: bool) -> Self {
        Self {
            text: text.into(),
            attempts: 1,
            correct: u32::from(was_correct),
        }
    }

    /// Count one more answer. Counters stop at `u32::MAX`.
    pub fn record(&mut self, was_correct: bool) {
        self.attempts = self.attempts.saturating_add(1);
        if was_correct {
            self.correct = self.correct.saturating_add(1);
        }
    }

    /// Fraction of attempts answered correctly, in [0, 1]
    pub fn accuracy(&self) -> f64 {
        if self.attempts == 0 {
            return 0.0;
        }
        f64::from(self.correct) / f64::from(self.attempts)
    }
}
