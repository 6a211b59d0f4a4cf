//! Quiz runner module - asks stored questions and tallies a score.
//!
//! - QuizRunner folds answers into a QuizOutcome
//! - AnswerSource / ResultSink / Clock are the collaborator seams
//! - ConsoleAnswers and ScriptedAnswers are the stock answer sources

mod answers;
mod quiz_runner;
mod traits;

pub use answers::{ConsoleAnswers, ScriptedAnswers, parse_answer};
pub use quiz_runner::{POINTS_PER_QUESTION, QuestionResult, QuizOutcome, QuizRunner, Verdict, score_quiz};
pub use traits::{Answer, AnswerSource, Clock, ResultSink, SystemClock};

use crate::error::Result;
use crate::storage::StatsStore;

impl ResultSink for StatsStore {
    fn record(&mut self, text: &str, was_correct: bool) -> Result<()> {
        StatsStore::record(self, text, was_correct).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Question;
    use tempfile::TempDir;

    #[test]
    fn test_stats_store_as_sink() {
        let temp_dir = TempDir::new().unwrap();
        let mut stats = StatsStore::new(temp_dir.path().join("question_stats.txt"));
        let questions = vec![
            Question::true_false("Sky is blue.", true).unwrap(),
            Question::true_false("Sky is blue.", true).unwrap(),
        ];
        let mut answers = ScriptedAnswers::choices([1, 2]);

        QuizRunner::new()
            .run(questions.into_iter().map(Ok), &mut answers, Some(&mut stats))
            .unwrap();

        let stat = stats.get("Sky is blue.").unwrap().unwrap();
        assert_eq!(stat.attempts, 2);
        assert_eq!(stat.correct, 1);
    }
}
