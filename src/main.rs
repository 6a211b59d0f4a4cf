use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::info;
use std::fs;
use std::io;
use std::path::PathBuf;

mod cli;
mod config;
mod display;
mod menu;

use cli::Cli;
use cli::commands::{AddCommands, Commands};
use config::Config;
use menu::Menu;
use quizr::domain::{Participant, Question, describe};
use quizr::runner::ConsoleAnswers;
use quizr::session::{SessionOptions, take_quiz};
use quizr::storage::QuizFiles;

fn setup_logging(level: Option<&str>) -> Result<()> {
    // Create log directory
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("quizr")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let log_file = log_dir.join("quizr.log");

    // Setup env_logger with file output
    let target = Box::new(
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .context("Failed to open log file")?,
    );

    // RUST_LOG wins over the configured level
    let env = env_logger::Env::default().default_filter_or(level.unwrap_or("info"));
    env_logger::Builder::from_env(env)
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized, writing to: {}", log_file.display());
    Ok(())
}

fn session_options(config: &Config, timed: bool, record_stats: bool) -> SessionOptions {
    SessionOptions {
        time_limit: (timed || config.quiz.timed).then(|| config.quiz.time_limit()),
        max_questions: Some(config.quiz.max_questions),
        record_stats: record_stats && config.quiz.record_stats,
    }
}

fn run_application(cli: &Cli, config: &Config) -> Result<()> {
    info!("Starting application");

    if cli.is_verbose() {
        println!("{}", "Verbose mode enabled".yellow());
    }

    let data_dir = cli.data_dir.as_ref().unwrap_or(&config.storage.data_dir);
    let files = QuizFiles::open(data_dir)
        .context(format!("Failed to open data directory {}", data_dir.display()))?;
    if cli.is_verbose() {
        println!("Data directory: {}", files.base_path().display());
    }

    match &cli.command {
        None => run_menu(&files, config),
        Some(Commands::Add {
            author,
            author_id,
            subject,
            question,
        }) => {
            let author = Participant::author(author.as_str(), *author_id, subject.as_deref());
            handle_add_command(&author, question, &files)
        }
        Some(Commands::Take {
            name,
            id,
            timed,
            no_stats,
        }) => handle_take_command(name, *id, *timed, *no_stats, &files, config),
        Some(Commands::Questions { json }) => handle_questions_command(*json, &files),
        Some(Commands::Leaderboard { json }) => handle_leaderboard_command(*json, &files),
        Some(Commands::Stats { json }) => handle_stats_command(*json, &files),
    }
}

fn run_menu(files: &QuizFiles, config: &Config) -> Result<()> {
    info!("Launching interactive menu");
    let stdin = io::stdin();
    let mut menu = Menu::new(
        stdin.lock(),
        io::stdout(),
        files,
        session_options(config, false, true),
    );
    menu.run()
}

fn handle_add_command(author: &Participant, command: &AddCommands, files: &QuizFiles) -> Result<()> {
    info!("Adding question for {} ({}): {:?}", author.name, author.id, command);
    println!("{}", describe(author));
    let question = match command {
        AddCommands::Mcq { text, options, correct } => {
            Question::multiple_choice(text.as_str(), options.iter().cloned(), *correct)
        }
        AddCommands::Tf { text, answer } => Question::true_false(text.as_str(), *answer),
    }
    .context("Question rejected")?;

    files.questions.append(&question).context("Failed to store question")?;
    println!("{} {}", "Question added:".green(), question.text());
    Ok(())
}

fn handle_take_command(
    name: &str,
    id: u32,
    timed: bool,
    no_stats: bool,
    files: &QuizFiles,
    config: &Config,
) -> Result<()> {
    info!("Taking quiz as {} ({})", name, id);
    let participant = Participant::student(name, id);
    println!("{}", describe(&participant));

    let options = session_options(config, timed, !no_stats);
    let stdin = io::stdin();
    let mut answers = ConsoleAnswers::new(stdin.lock(), io::stdout());
    let outcome = take_quiz(files, &participant, &options, &mut answers).context("Quiz failed")?;

    println!(
        "{} Your score: {} ({} of {} correct)",
        "Quiz completed!".green(),
        outcome.score,
        outcome.correct(),
        outcome.asked()
    );
    Ok(())
}

fn handle_questions_command(json: bool, files: &QuizFiles) -> Result<()> {
    info!("Listing questions");
    let questions = files.questions.load().context("Failed to read questions")?;
    if json {
        println!("{}", serde_json::to_string_pretty(&questions)?);
    } else {
        display::print_questions(&mut io::stdout(), &questions)?;
    }
    Ok(())
}

fn handle_leaderboard_command(json: bool, files: &QuizFiles) -> Result<()> {
    info!("Showing leaderboard");
    let entries = files.leaderboard.load().context("Failed to read leaderboard")?;
    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else {
        display::print_leaderboard(&mut io::stdout(), &entries)?;
    }
    Ok(())
}

fn handle_stats_command(json: bool, files: &QuizFiles) -> Result<()> {
    info!("Showing question statistics");
    let stats = files.stats.read_all().context("Failed to read question statistics")?;
    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        display::print_stats(&mut io::stdout(), &stats)?;
    }
    Ok(())
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    setup_logging(config.log_level.as_deref()).context("Failed to setup logging")?;

    info!("Starting with config from: {:?}", cli.config);

    // Run the main application logic
    run_application(&cli, &config).context("Application failed")?;

    Ok(())
}
