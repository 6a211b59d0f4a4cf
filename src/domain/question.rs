//! Question records: a closed set of shapes, matched on rather than dispatched.

use serde::{Deserialize, Serialize};

use crate::error::{QuizError, Result};

/// Most options a multiple-choice question may carry
pub const MAX_OPTIONS: usize = 4;

/// Labels presented for a true/false question, in wire order (1, 2)
pub const TRUE_FALSE_LABELS: [&str; 2] = ["True", "False"];

/// A multiple-choice question with 1..=4 options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "MultipleChoiceFields")]
pub struct MultipleChoice {
    text: String,
    options: Vec<String>,
    /// 1-based index into `options`
    correct: u32,
}

impl MultipleChoice {
    /// Create a multiple-choice question, validating option count and index
    pub fn new(text: impl Into<String>, options: Vec<String>, correct: u32) -> Result<Self> {
        let text = text.into();
        check_line("question text", &text)?;

        if options.is_empty() || options.len() > MAX_OPTIONS {
            return Err(QuizError::InvalidQuestion(format!(
                "expected 1 to {} options, got {}",
                MAX_OPTIONS,
                options.len()
            )));
        }
        if options.iter().any(|o| o.contains(['\n', '\r'])) {
            return Err(QuizError::InvalidQuestion("option contains a line break".to_string()));
        }
        if correct == 0 || correct as usize > options.len() {
            return Err(QuizError::InvalidQuestion(format!(
                "correct option {} is outside 1..={}",
                correct,
                options.len()
            )));
        }

        Ok(Self { text, options, correct })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// The correct option, 1-based
    pub fn correct(&self) -> u32 {
        self.correct
    }
}

/// A true/false question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TrueFalseFields")]
pub struct TrueFalse {
    text: String,
    answer: bool,
}

impl TrueFalse {
    /// Create a true/false question whose correct answer is `answer`
    pub fn new(text: impl Into<String>, answer: bool) -> Result<Self> {
        let text = text.into();
        check_line("question text", &text)?;
        Ok(Self { text, answer })
    }

    /// Create from the wire code: 1 = True, 2 = False
    pub fn from_code(text: impl Into<String>, code: u32) -> Result<Self> {
        match code {
            1 => Self::new(text, true),
            2 => Self::new(text, false),
            other => Err(QuizError::InvalidQuestion(format!(
                "true/false answer must be 1 or 2, got {}",
                other
            ))),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn answer(&self) -> bool {
        self.answer
    }

    /// The wire code of the correct answer: 1 = True, 2 = False
    pub fn code(&self) -> u32 {
        if self.answer { 1 } else { 2 }
    }
}

/// A stored question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Question {
    MultipleChoice(MultipleChoice),
    TrueFalse(TrueFalse),
}

impl Question {
    /// Shorthand for a validated multiple-choice question
    pub fn multiple_choice<S: Into<String>>(
        text: impl Into<String>,
        options: impl IntoIterator<Item = S>,
        correct: u32,
    ) -> Result<Self> {
        let options = options.into_iter().map(Into::into).collect();
        MultipleChoice::new(text, options, correct).map(Self::MultipleChoice)
    }

    /// Shorthand for a validated true/false question
    pub fn true_false(text: impl Into<String>, answer: bool) -> Result<Self> {
        TrueFalse::new(text, answer).map(Self::TrueFalse)
    }

    pub fn text(&self) -> &str {
        match self {
            Self::MultipleChoice(q) => q.text(),
            Self::TrueFalse(q) => q.text(),
        }
    }

    /// The labels presented to the answerer, numbered from 1
    pub fn choices(&self) -> Vec<&str> {
        match self {
            Self::MultipleChoice(q) => q.options().iter().map(String::as_str).collect(),
            Self::TrueFalse(_) => TRUE_FALSE_LABELS.to_vec(),
        }
    }

    /// The correct choice, 1-based
    pub fn correct_choice(&self) -> u32 {
        match self {
            Self::MultipleChoice(q) => q.correct(),
            Self::TrueFalse(q) => q.code(),
        }
    }

    pub fn is_correct(&self, answer: u32) -> bool {
        answer == self.correct_choice()
    }

    /// Short tag used in listings
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MultipleChoice(_) => "MCQ",
            Self::TrueFalse(_) => "TF",
        }
    }
}

// Deserialized fields pass through the validating constructors.
#[derive(Deserialize)]
struct MultipleChoiceFields {
    text: String,
    options: Vec<String>,
    correct: u32,
}

impl TryFrom<MultipleChoiceFields> for MultipleChoice {
    type Error = QuizError;

    fn try_from(fields: MultipleChoiceFields) -> Result<Self> {
        Self::new(fields.text, fields.options, fields.correct)
    }
}

#[derive(Deserialize)]
struct TrueFalseFields {
    text: String,
    answer: bool,
}

impl TryFrom<TrueFalseFields> for TrueFalse {
    type Error = QuizError;

    fn try_from(fields: TrueFalseFields) -> Result<Self> {
        Self::new(fields.text, fields.answer)
    }
}

/// Reject empty fields and anything that would split a log line
fn check_line(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(QuizError::InvalidQuestion(format!("{} is empty", field)));
    }
    if value.contains(['\n', '\r']) {
        return Err(QuizError::InvalidQuestion(format!("{} contains a line break", field)));
    }
    Ok(())
}
