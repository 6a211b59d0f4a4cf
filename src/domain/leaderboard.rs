//! Leaderboard entries, one per completed quiz attempt.

use serde::{Deserialize, Serialize};

use crate::error::{QuizError, Result};

/// A single quiz result as recorded on the leaderboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    /// Participant name, a single whitespace-free token
    pub name: String,
    /// Participant identifier
    pub id: u32,
    /// Points earned on the attempt
    pub score: u32,
}

impl LeaderboardEntry {
    /// Create an entry, rejecting names that would not survive a round trip
    /// through the whitespace-delimited leaderboard log.
    pub fn new(name: impl Into<String>, id: u32, score: u32) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(QuizError::InvalidEntry("name is empty".to_string()));
        }
        if name.chars().any(char::is_whitespace) {
            return Err(QuizError::InvalidEntry(format!(
                "name '{}' contains whitespace",
                name
            )));
        }
        Ok(Self { name, id, score })
    }
}
