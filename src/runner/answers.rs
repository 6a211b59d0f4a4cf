//! Answer sources: an interactive console and a scripted replay.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};
use std::time::Duration;

use log::warn;

use super::quiz_runner::{QuestionResult, Verdict};
use super::traits::{Answer, AnswerSource};
use crate::domain::Question;

/// Interprets one line of user input
pub fn parse_answer(input: &str) -> Answer {
    let trimmed = input.trim();
    match trimmed.parse::<u32>() {
        Ok(choice) => Answer::Choice(choice),
        Err(_) => Answer::Invalid(trimmed.to_string()),
    }
}

/// Asks questions over a line-based reader/writer pair such as stdin/stdout
pub struct ConsoleAnswers<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsoleAnswers<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the reader and writer
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    fn present(&mut self, number: usize, question: &Question, time_limit: Option<Duration>) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "Q{}. {}", number, question.text())?;
        for (i, choice) in question.choices().iter().enumerate() {
            writeln!(self.output, "{}. {}", i + 1, choice)?;
        }
        if let Some(limit) = time_limit {
            writeln!(self.output, "You have {} seconds to answer.", limit.as_secs())?;
        }
        write!(self.output, "Your answer: ")?;
        self.output.flush()
    }
}

impl<R: BufRead, W: Write> AnswerSource for ConsoleAnswers<R, W> {
    fn ask(&mut self, number: usize, question: &Question, time_limit: Option<Duration>) -> Answer {
        if let Err(e) = self.present(number, question, time_limit) {
            warn!("Failed to present question {}: {}", number, e);
        }

        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => Answer::NoAnswer,
            Ok(_) => parse_answer(&line),
            Err(e) => {
                warn!("Failed to read answer: {}", e);
                Answer::NoAnswer
            }
        }
    }

    fn feedback(&mut self, result: &QuestionResult) {
        let message = match result.verdict {
            Verdict::Correct => "Correct!",
            Verdict::TimedOut => "Time Up!",
            _ => "Wrong or Time Up!",
        };
        if let Err(e) = writeln!(self.output, "{}", message) {
            warn!("Failed to write feedback: {}", e);
        }
    }
}

/// Replays a fixed list of answers; runs out as `NoAnswer`
#[derive(Debug, Clone, Default)]
pub struct ScriptedAnswers {
    answers: VecDeque<Answer>,
    asked: Vec<String>,
}

impl ScriptedAnswers {
    pub fn new(answers: impl IntoIterator<Item = Answer>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            asked: Vec::new(),
        }
    }

    /// Script made of numeric choices
    pub fn choices(choices: impl IntoIterator<Item = u32>) -> Self {
        Self::new(choices.into_iter().map(Answer::Choice))
    }

    /// Texts of the questions presented so far
    pub fn asked(&self) -> &[String] {
        &self.asked
    }
}

impl AnswerSource for ScriptedAnswers {
    fn ask(&mut self, _number: usize, question: &Question, _time_limit: Option<Duration>) -> Answer {
        self.asked.push(question.text().to_string());
        self.answers.pop_front().unwrap_or(Answer::NoAnswer)
    }
}
