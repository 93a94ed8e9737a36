//! Answer validation
//!
//! [`AnswerValidator`] is the seam to the remote grading model. The
//! [`ExpectedAnswerValidator`] grades locally against the step's expected
//! answer and is used offline and in tests.

use crate::error::AssessError;
use crate::grade::Grade;
use assay_scenario::{PipelineConfig, Step};
use async_trait::async_trait;
use regex::Regex;

/// Feedback attached to answers for sentinel steps
pub const SENTINEL_FEEDBACK: &str =
    "This step is missing from the generated scenario and cannot be graded.";

/// Grades one answer to one step
#[async_trait]
pub trait AnswerValidator: Send + Sync {
    /// Grade `answer` against `step`
    async fn grade(&self, answer: &str, step: &Step) -> Result<Grade, AssessError>;
}

/// Local grading against `expected_answer` and `accepted_pattern`
#[derive(Debug, Clone)]
pub struct ExpectedAnswerValidator {
    sentinel_expected_answer: String,
}

impl ExpectedAnswerValidator {
    /// Create validator recognizing the sentinel steps of `config`
    #[must_use]
    pub fn new(config: &PipelineConfig) -> Self {
        Self {
            sentinel_expected_answer: config.sentinel_expected_answer.clone(),
        }
    }

    /// Grade synchronously
    #[must_use]
    pub fn grade_now(&self, answer: &str, step: &Step) -> Grade {
        if step.is_sentinel(&self.sentinel_expected_answer) {
            return Grade::incorrect(SENTINEL_FEEDBACK);
        }

        let given = normalize_answer(answer);
        let expected = normalize_answer(&step.expected_answer);

        if given.is_empty() {
            return Grade::incorrect("No answer given.");
        }
        if given == expected {
            return Grade::correct("Matches the expected answer.");
        }
        if let Some(pattern) = step.accepted_pattern.as_deref() {
            match Regex::new(pattern) {
                Ok(re) if re.is_match(answer.trim()) => {
                    return Grade::correct("Matches an accepted form of the answer.");
                }
                Ok(_) => {}
                Err(e) => {
                    tracing::warn!(step = %step.id, error = %e, "ignoring invalid accepted pattern");
                }
            }
        }
        if !expected.is_empty() && (given.contains(&expected) || expected.contains(&given)) {
            return Grade::partial(format!(
                "Close, but not exact. Expected `{}`.",
                step.expected_answer.trim()
            ));
        }

        Grade::incorrect(format!("Expected `{}`.", step.expected_answer.trim()))
    }
}

impl Default for ExpectedAnswerValidator {
    fn default() -> Self {
        Self::new(&PipelineConfig::default())
    }
}

#[async_trait]
impl AnswerValidator for ExpectedAnswerValidator {
    async fn grade(&self, answer: &str, step: &Step) -> Result<Grade, AssessError> {
        Ok(self.grade_now(answer, step))
    }
}

/// Trim, collapse inner whitespace, lowercase
fn normalize_answer(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}
