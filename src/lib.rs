//! Quizr - a console quiz manager backed by flat files
//!
//! Questions, leaderboard entries and per-question statistics live in
//! line-oriented text logs. The runner reads questions back in order, asks
//! an answer source for each, and folds the answers into a score.

pub mod domain;
pub mod error;
pub mod runner;
pub mod session;
pub mod storage;

pub use error::{QuizError, Result};
