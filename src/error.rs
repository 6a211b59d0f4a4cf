//! Error types for Quizr
//!
//! Centralized error handling using thiserror.

use thiserror::Error;

/// All error types that can occur in Quizr
#[derive(Debug, Error)]
pub enum QuizError {
    /// A log file could not be opened, read or written
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A persisted record is malformed or truncated
    #[error("Parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    /// A question violates the record invariants and cannot be stored
    #[error("Invalid question: {0}")]
    InvalidQuestion(String),

    /// A leaderboard entry cannot be stored without losing fidelity
    #[error("Invalid entry: {0}")]
    InvalidEntry(String),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl QuizError {
    /// Build a parse error for the given 1-based line.
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }
}

/// Result type alias for Quizr operations
pub type Result<T> = std::result::Result<T, QuizError>;
