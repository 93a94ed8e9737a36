//! Three-tier grading outcome

use serde::{Deserialize, Serialize};

/// Outcome of grading one answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnswerStatus {
    /// Answer is right
    Correct,
    /// Answer is on the right track
    Partial,
    /// Answer is wrong or missing
    Incorrect,
}

/// Status plus feedback shown to the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grade {
    /// Three-tier status
    pub status: AnswerStatus,
    /// Feedback text
    pub feedback: String,
}

impl Grade {
    /// Create grade
    #[must_use]
    pub fn new(status: AnswerStatus, feedback: impl Into<String>) -> Self {
        Self {
            status,
            feedback: feedback.into(),
        }
    }

    /// Correct grade
    #[must_use]
    pub fn correct(feedback: impl Into<String>) -> Self {
        Self::new(AnswerStatus::Correct, feedback)
    }

    /// Partial grade
    #[must_use]
    pub fn partial(feedback: impl Into<String>) -> Self {
        Self::new(AnswerStatus::Partial, feedback)
    }

    /// Incorrect grade
    #[must_use]
    pub fn incorrect(feedback: impl Into<String>) -> Self {
        Self::new(AnswerStatus::Incorrect, feedback)
    }
}
