//! Table rendering for the listing commands and the menu.

use colored::*;
use std::io::{self, Write};

use quizr::domain::{LeaderboardEntry, Question, QuestionStat};

/// Frame a line of text in a box
pub fn boxed(text: &str) -> String {
    let border = "-".repeat(text.chars().count() + 4);
    format!("{}\n| {} |\n{}", border, text, border)
}

pub fn print_questions(out: &mut impl Write, questions: &[Question]) -> io::Result<()> {
    if questions.is_empty() {
        return writeln!(out, "No questions stored yet.");
    }
    for (i, question) in questions.iter().enumerate() {
        writeln!(out, "{} [{}] {}", format!("{:>3}.", i + 1).bold(), question.kind(), question.text())?;
        for (n, choice) in question.choices().iter().enumerate() {
            let marker = if question.is_correct(n as u32 + 1) { "*" } else { " " };
            writeln!(out, "      {}{}. {}", marker, n + 1, choice)?;
        }
    }
    Ok(())
}

pub fn print_leaderboard(out: &mut impl Write, entries: &[LeaderboardEntry]) -> io::Result<()> {
    writeln!(out, "{}", "------ Leaderboard ------".cyan())?;
    writeln!(out, "{}", format!("{:>20}{:>10}{:>10}", "Name", "ID", "Score").bold())?;
    writeln!(out, "{}", "-".repeat(40))?;
    for entry in entries {
        writeln!(out, "{:>20}{:>10}{:>10}", entry.name, entry.id, entry.score)?;
    }
    Ok(())
}

pub fn print_stats(out: &mut impl Write, stats: &[QuestionStat]) -> io::Result<()> {
    writeln!(out, "{}", "------ Question Statistics ------".cyan())?;
    writeln!(
        out,
        "{}",
        format!("{:>30}{:>15}{:>15}{:>12}", "Question", "Attempts", "Correct", "Accuracy").bold()
    )?;
    writeln!(out, "{}", "-".repeat(72))?;
    for stat in stats {
        writeln!(
            out,
            "{:>30}{:>15}{:>15}{:>11.0}%",
            stat.text,
            stat.attempts,
            stat.correct,
            stat.accuracy() * 100.0
        )?;
    }
    Ok(())
}
