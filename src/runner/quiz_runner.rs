//! Quiz runner - presents questions in order and folds the answers into a score.

use std::time::Duration;

use log::{debug, info, warn};

use super::traits::{Answer, AnswerSource, Clock, ResultSink, SystemClock};
use crate::domain::Question;
use crate::error::Result;

/// Points awarded for a correct answer; everything else earns zero
pub const POINTS_PER_QUESTION: u32 = 10;

/// How a single answer was judged
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    /// A number that is not the correct choice
    Wrong,
    /// Input that is not a number
    Invalid,
    /// Input ended without an answer
    Unanswered,
    /// Answered after the per-question time limit
    TimedOut,
}

impl Verdict {
    pub fn is_correct(self) -> bool {
        self == Verdict::Correct
    }

    pub fn points(self) -> u32 {
        if self.is_correct() { POINTS_PER_QUESTION } else { 0 }
    }
}

/// Outcome of one question
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionResult {
    pub number: usize,
    pub text: String,
    pub answer: Answer,
    pub verdict: Verdict,
}

/// Outcome of a whole quiz
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuizOutcome {
    pub score: u32,
    pub results: Vec<QuestionResult>,
}

impl QuizOutcome {
    /// Number of questions presented
    pub fn asked(&self) -> usize {
        self.results.len()
    }

    /// Number of questions answered correctly
    pub fn correct(&self) -> usize {
        self.results.iter().filter(|r| r.verdict.is_correct()).count()
    }

    /// Best possible score for the questions presented
    pub fn max_score(&self) -> u32 {
        POINTS_PER_QUESTION * self.asked() as u32
    }
}

/// Score a fixed answer list against questions, without presenting anything.
///
/// Missing answers count as unanswered. Each answer is judged exactly as
/// [`QuizRunner::run`] judges an answer given in time.
pub fn score_quiz(questions: &[Question], answers: &[u32]) -> u32 {
    questions
        .iter()
        .enumerate()
        .map(|(i, q)| {
            let answer = answers.get(i).map_or(Answer::NoAnswer, |&choice| Answer::Choice(choice));
            judge(q, &answer).points()
        })
        .sum()
}

fn judge(question: &Question, answer: &Answer) -> Verdict {
    match answer {
        Answer::Choice(choice) if question.is_correct(*choice) => Verdict::Correct,
        Answer::Choice(_) => Verdict::Wrong,
        Answer::Invalid(_) => Verdict::Invalid,
        Answer::NoAnswer => Verdict::Unanswered,
    }
}

/// Runs a quiz over a sequence of questions.
///
/// Questions are asked strictly in order; there is no shuffling, skipping
/// or partial credit.
#[derive(Debug, Clone, Default)]
pub struct QuizRunner<C: Clock = SystemClock> {
    time_limit: Option<Duration>,
    max_questions: Option<usize>,
    clock: C,
}

impl QuizRunner<SystemClock> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C: Clock> QuizRunner<C> {
    /// Require each answer within `limit` of its question being presented
    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = Some(limit);
        self
    }

    /// Stop after this many questions
    pub fn with_max_questions(mut self, max: usize) -> Self {
        self.max_questions = Some(max);
        self
    }

    /// Use a different clock for time limits
    pub fn with_clock<D: Clock>(self, clock: D) -> QuizRunner<D> {
        QuizRunner {
            time_limit: self.time_limit,
            max_questions: self.max_questions,
            clock,
        }
    }

    pub fn time_limit(&self) -> Option<Duration> {
        self.time_limit
    }

    /// Ask every question and return the tallied outcome.
    ///
    /// A read error from `questions` aborts the quiz with that error. Sink
    /// failures are logged and otherwise ignored.
    pub fn run<I>(
        &self,
        questions: I,
        answers: &mut dyn AnswerSource,
        mut sink: Option<&mut dyn ResultSink>,
    ) -> Result<QuizOutcome>
    where
        I: IntoIterator<Item = Result<Question>>,
    {
        info!(
            "Starting quiz (time limit: {:?}, max questions: {:?})",
            self.time_limit, self.max_questions
        );
        let mut outcome = QuizOutcome::default();
        let limit = self.max_questions.unwrap_or(usize::MAX);

        for question in questions.into_iter().take(limit) {
            let question = question?;
            let number = outcome.results.len() + 1;

            let result = self.ask_one(number, &question, answers);
            debug!("Question {} judged {:?}", number, result.verdict);
            answers.feedback(&result);

            if let Some(sink) = sink.as_mut() {
                if let Err(e) = sink.record(question.text(), result.verdict.is_correct()) {
                    warn!("Failed to record result for question {}: {}", number, e);
                }
            }

            outcome.score += result.verdict.points();
            outcome.results.push(result);
        }

        info!(
            "Quiz finished: {} of {} correct, score {}",
            outcome.correct(),
            outcome.asked(),
            outcome.score
        );
        Ok(outcome)
    }

    fn ask_one(&self, number: usize, question: &Question, answers: &mut dyn AnswerSource) -> QuestionResult {
        let started = self.clock.now();
        let answer = answers.ask(number, question, self.time_limit);
        let elapsed = self.clock.now().saturating_duration_since(started);

        let late = self.time_limit.is_some_and(|limit| elapsed > limit);
        let verdict = if late { Verdict::TimedOut } else { judge(question, &answer) };

        QuestionResult {
            number,
            text: question.text().to_string(),
            answer,
            verdict,
        }
    }
}
