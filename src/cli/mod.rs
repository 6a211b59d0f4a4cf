//! CLI module for quizr - command-line interface and subcommands.
//!
//! Provides the main entry point with subcommands for adding questions,
//! taking the quiz and listing records; no subcommand opens the menu.

pub mod commands;

pub use commands::Cli;
