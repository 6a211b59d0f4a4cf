//! Interactive menu loop.
//!
//! Every failure is reported to the operator and the loop carries on; only
//! Exit or end of input leaves it.

use colored::*;
use eyre::{Result, bail, eyre};
use log::info;
use std::io::{BufRead, Write};

use quizr::domain::{MAX_OPTIONS, Participant, Question, describe};
use quizr::runner::ConsoleAnswers;
use quizr::session::{SessionOptions, take_quiz};
use quizr::storage::QuizFiles;

use crate::display;

const MENU_ITEMS: [&str; 5] = [
    "1. Add a Question",
    "2. Start the Quiz",
    "3. View Leaderboard",
    "4. View Question Statistics",
    "5. Exit",
];

/// Menu driven over a line reader and a writer
pub struct Menu<'a, R, W> {
    input: R,
    output: W,
    files: &'a QuizFiles,
    options: SessionOptions,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub fn new(input: R, output: W, files: &'a QuizFiles, options: SessionOptions) -> Self {
        Self {
            input,
            output,
            files,
            options,
        }
    }

    /// Show the menu until Exit or end of input
    pub fn run(&mut self) -> Result<()> {
        writeln!(self.output, "{}", display::boxed("Welcome to the Quiz Management System!").cyan())?;

        loop {
            writeln!(self.output)?;
            for item in MENU_ITEMS {
                writeln!(self.output, "{}", item)?;
            }
            let Some(choice) = self.prompt("\nEnter your choice: ")? else {
                break;
            };

            let result = match choice.trim() {
                "1" => self.add_question(),
                "2" => self.start_quiz(),
                "3" => self.show_leaderboard(),
                "4" => self.show_stats(),
                "5" => {
                    writeln!(self.output, "Exiting the system...")?;
                    break;
                }
                other => Err(eyre!("Invalid choice '{}', please try again!", other)),
            };

            if let Err(e) = result {
                info!("Menu action failed: {:#}", e);
                writeln!(self.output, "{} {:#}", "Error:".red(), e)?;
            }
        }
        Ok(())
    }

    /// Print a prompt and read one line; None at end of input
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }

    fn require(&mut self, label: &str) -> Result<String> {
        self.prompt(label)?.ok_or_else(|| eyre!("Input ended"))
    }

    fn require_number(&mut self, label: &str) -> Result<u32> {
        let value = self.require(label)?;
        value
            .trim()
            .parse()
            .map_err(|_| eyre!("'{}' is not a number", value.trim()))
    }

    fn add_question(&mut self) -> Result<()> {
        let name = self.require("Enter your name: ")?;
        let id = self.require_number("Enter your ID: ")?;
        let subject = self.require("Enter your subject (blank if none): ")?;
        let author = Participant::author(name.trim(), id, Some(subject.as_str()));
        writeln!(self.output, "{}", describe(&author))?;

        let question = match self.require_number("Enter 1 for MCQ, 2 for True/False: ")? {
            1 => {
                let text = self.require("Enter the question: ")?;
                let count = self.require_number(&format!("How many options (1-{})? ", MAX_OPTIONS))?;
                if count == 0 || count as usize > MAX_OPTIONS {
                    bail!("Option count must be between 1 and {}", MAX_OPTIONS);
                }
                let mut options = Vec::with_capacity(count as usize);
                for i in 1..=count {
                    options.push(self.require(&format!("Option {}: ", i))?);
                }
                let correct = self.require_number(&format!("Enter the number of the correct option (1-{}): ", count))?;
                Question::multiple_choice(text, options, correct)?
            }
            2 => {
                let text = self.require("Enter the True/False question: ")?;
                let answer = self.require_number("Enter 1 for True, 2 for False: ")?;
                match answer {
                    1 => Question::true_false(text, true)?,
                    2 => Question::true_false(text, false)?,
                    other => bail!("Answer must be 1 or 2, got {}", other),
                }
            }
            other => bail!("Unknown question type {}", other),
        };

        self.files.questions.append(&question)?;
        info!("Question added by {} ({})", author.name, author.id);
        writeln!(self.output, "{}", "Question added successfully!".green())?;
        Ok(())
    }

    fn start_quiz(&mut self) -> Result<()> {
        let name = self.require("Enter your name: ")?;
        let id = self.require_number("Enter your student ID: ")?;
        let participant = Participant::student(name.trim(), id);
        writeln!(self.output, "{}", describe(&participant))?;

        let outcome = {
            let mut answers = ConsoleAnswers::new(&mut self.input, &mut self.output);
            take_quiz(self.files, &participant, &self.options, &mut answers)?
        };

        writeln!(
            self.output,
            "{} Your score: {} ({} of {} correct)",
            "Quiz completed!".green(),
            outcome.score,
            outcome.correct(),
            outcome.asked()
        )?;
        Ok(())
    }

    fn show_leaderboard(&mut self) -> Result<()> {
        let entries = self.files.leaderboard.load()?;
        display::print_leaderboard(&mut self.output, &entries)?;
        Ok(())
    }

    fn show_stats(&mut self) -> Result<()> {
        let stats = self.files.stats.read_all()?;
        if stats.is_empty() {
            bail!("No question statistics recorded yet");
        }
        display::print_stats(&mut self.output, &stats)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn run_menu(files: &QuizFiles, script: &str) -> String {
        let mut output = Vec::new();
        {
            let mut menu = Menu::new(
                Cursor::new(script.to_string()),
                &mut output,
                files,
                SessionOptions {
                    record_stats: true,
                    ..Default::default()
                },
            );
            menu.run().unwrap();
        }
        String::from_utf8(output).unwrap()
    }

    fn open_files() -> (QuizFiles, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let files = QuizFiles::open(temp_dir.path()).unwrap();
        (files, temp_dir)
    }

    #[test]
    fn test_exit() {
        let (files, _temp) = open_files();
        let out = run_menu(&files, "5\n");
        assert!(out.contains("Exiting the system..."));
    }

    #[test]
    fn test_end_of_input_leaves_menu() {
        let (files, _temp) = open_files();
        let out = run_menu(&files, "");
        assert!(out.contains("Enter your choice: "));
    }

    #[test]
    fn test_add_questions_then_take_quiz() {
        let (files, _temp) = open_files();
        let script = "1\nBo\n3\nMath\n1\n2+2?\n4\n1\n2\n4\n5\n3\n\
                      1\nCy\n1\n\n2\nEarth is flat.\n2\n\
                      2\nAnn\n7\n3\n2\n\
                      5\n";
        let out = run_menu(&files, script);

        assert!(out.contains("Question added successfully!"));
        assert!(out.contains("Role: Teacher (Math)"));
        assert!(out.contains("Role: Admin"));
        assert!(out.contains("Role: Student"));
        assert!(out.contains("Your score: 20"));
        assert_eq!(files.questions.load().unwrap().len(), 2);
        assert_eq!(files.leaderboard.load().unwrap()[0].score, 20);
        assert_eq!(files.stats.read_all().unwrap().len(), 2);
    }

    #[test]
    fn test_invalid_choice_continues() {
        let (files, _temp) = open_files();
        let out = run_menu(&files, "9\n5\n");
        assert!(out.contains("Invalid choice '9'"));
        assert!(out.contains("Exiting the system..."));
    }

    #[test]
    fn test_bad_question_is_reported_not_stored() {
        let (files, _temp) = open_files();
        let out = run_menu(&files, "1\nBo\n3\n\n1\nq\n2\na\nb\n7\n5\n");
        assert!(out.contains("Invalid question"));
        assert!(files.questions.load().unwrap().is_empty());
    }

    #[test]
    fn test_empty_stats_reported() {
        let (files, _temp) = open_files();
        let out = run_menu(&files, "4\n3\n5\n");
        assert!(out.contains("No question statistics recorded yet"));
        assert!(out.contains("------ Leaderboard ------"));
    }
}
