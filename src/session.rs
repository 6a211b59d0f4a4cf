//! A complete quiz attempt: read the question log, run the quiz, record the score.

use std::time::Duration;

use log::info;

use crate::domain::{LeaderboardEntry, Participant};
use crate::error::Result;
use crate::runner::{AnswerSource, QuizOutcome, QuizRunner, ResultSink};
use crate::storage::QuizFiles;

/// How an attempt is run
#[derive(Debug, Clone, Default)]
pub struct SessionOptions {
    /// Per-question time limit, if timed
    pub time_limit: Option<Duration>,
    /// Stop after this many questions
    pub max_questions: Option<usize>,
    /// Update per-question statistics
    pub record_stats: bool,
}

/// Run one attempt for `participant` and append the result to the leaderboard.
///
/// The participant's name is checked before any question is asked, so an
/// attempt that could not be recorded is never started. If the question log
/// turns out to be corrupt partway through, the error is returned and no
/// leaderboard entry is written, but statistics already recorded for the
/// questions answered before it are kept.
pub fn take_quiz(
    files: &QuizFiles,
    participant: &Participant,
    options: &SessionOptions,
    answers: &mut dyn AnswerSource,
) -> Result<QuizOutcome> {
    let mut entry = LeaderboardEntry::new(&participant.name, participant.id, 0)?;

    let mut runner = QuizRunner::new();
    if let Some(limit) = options.time_limit {
        runner = runner.with_time_limit(limit);
    }
    if let Some(max) = options.max_questions {
        runner = runner.with_max_questions(max);
    }

    let mut stats = files.stats.clone();
    let sink: Option<&mut dyn ResultSink> = if options.record_stats { Some(&mut stats) } else { None };
    let outcome = runner.run(files.questions.read_all()?, answers, sink)?;

    entry.score = outcome.score;
    files.leaderboard.append(&entry)?;
    info!(
        "Recorded score {} for {} ({})",
        entry.score, entry.name, entry.id
    );
    Ok(outcome)
}
