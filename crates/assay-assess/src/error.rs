//! Error types for assessments

/// Errors raised while running or storing an assessment
#[derive(Debug, thiserror::Error)]
pub enum AssessError {
    /// Answer addressed a step the scenario does not have
    #[error("step {index} out of range (scenario has {len} steps)")]
    StepOutOfRange { index: usize, len: usize },

    /// Step already has a graded answer
    #[error("step {0} already answered")]
    AlreadyAnswered(usize),

    /// Finish requested before every step was answered
    #[error("assessment incomplete: {answered} of {total} steps answered")]
    Incomplete { answered: usize, total: usize },

    /// Answer validator failed
    #[error("validator error: {0}")]
    Validator(String),

    /// Assessment store failed
    #[error("store error: {0}")]
    Store(String),
}

impl AssessError {
    /// Check if retrying the same call may succeed
    #[inline]
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Validator(_) | Self::Store(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        let err = AssessError::StepOutOfRange { index: 4, len: 3 };
        assert_eq!(err.to_string(), "step 4 out of range (scenario has 3 steps)");

        let err = AssessError::Incomplete { answered: 1, total: 3 };
        assert_eq!(err.to_string(), "assessment incomplete: 1 of 3 steps answered");
    }

    #[test]
    fn retryable() {
        assert!(AssessError::Validator("timeout".into()).is_retryable());
        assert!(!AssessError::AlreadyAnswered(0).is_retryable());
    }
}
