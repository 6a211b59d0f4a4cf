//! Quiz participants.
//!
//! Roles carry no behavior of their own; they are plain records and the
//! presentation lives in free functions.

use serde::{Deserialize, Serialize};

/// Role a participant plays in the system
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Adds questions
    Admin,
    /// Takes quizzes
    Student,
    /// Adds questions for a subject
    Teacher { subject: String },
}

/// Someone interacting with the quiz
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub name: String,
    pub id: u32,
    pub role: Role,
}

impl Participant {
    pub fn student(name: impl Into<String>, id: u32) -> Self {
        Self {
            name: name.into(),
            id,
            role: Role::Student,
        }
    }

    /// Someone adding questions: a teacher when a subject is given, otherwise an admin
    pub fn author(name: impl Into<String>, id: u32, subject: Option<&str>) -> Self {
        let role = match subject.map(str::trim) {
            Some(subject) if !subject.is_empty() => Role::Teacher {
                subject: subject.to_string(),
            },
            _ => Role::Admin,
        };
        Self {
            name: name.into(),
            id,
            role,
        }
    }
}

/// Human-readable summary of a participant
pub fn describe(participant: &Participant) -> String {
    let role = match &participant.role {
        Role::Admin => "Admin".to_string(),
        Role::Student => "Student".to_string(),
        Role::Teacher { subject } => format!("Teacher ({})", subject),
    };
    format!(
        "Name: {}\nID: {}\nRole: {}",
        participant.name, participant.id, role
    )
}
