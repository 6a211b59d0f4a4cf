//! Domain types for Quizr
//!
//! - Question: multiple-choice or true/false question records
//! - LeaderboardEntry: one completed quiz attempt
//! - QuestionStat: per-question attempt counters
//! - Participant: who is taking or authoring a quiz

pub mod leaderboard;
pub mod participant;
pub mod question;
pub mod stat;

pub use leaderboard::LeaderboardEntry;
pub use participant::{Participant, Role, describe};
pub use question::{MAX_OPTIONS, MultipleChoice, Question, TRUE_FALSE_LABELS, TrueFalse};
pub use stat::QuestionStat;
