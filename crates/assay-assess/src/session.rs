//! Assessment session
//!
//! Holds one assembled scenario for the lifetime of an assessment and
//! collects a graded answer per step.

use crate::error::AssessError;
use crate::grade::Grade;
use crate::record::AssessmentRecord;
use crate::score::Tally;
use crate::validator::AnswerValidator;
use assay_scenario::{Assembly, Scenario, ScenarioDigest};
use chrono::Utc;
use std::sync::Arc;
use ulid::Ulid;

/// An in-progress assessment
#[derive(Debug, Clone)]
pub struct AssessmentSession {
    scenario: Arc<Scenario>,
    digest: ScenarioDigest,
    grades: Vec<Option<Grade>>,
}

impl AssessmentSession {
    /// Start a session over an assembled scenario
    #[must_use]
    pub fn new(scenario: Arc<Scenario>) -> Self {
        let digest = ScenarioDigest::of(&scenario);
        let grades = vec![None; scenario.steps.len()];
        Self {
            scenario,
            digest,
            grades,
        }
    }

    /// Start a session from assembler output
    #[must_use]
    pub fn from_assembly(assembly: Assembly) -> Self {
        let grades = vec![None; assembly.scenario.steps.len()];
        Self {
            scenario: Arc::new(assembly.scenario),
            digest: assembly.report.digest,
            grades,
        }
    }

    /// The scenario being answered
    #[inline]
    #[must_use]
    pub fn scenario(&self) -> &Arc<Scenario> {
        &self.scenario
    }

    /// Grade recorded for a step, if answered
    #[must_use]
    pub fn grade(&self, index: usize) -> Option<&Grade> {
        self.grades.get(index).and_then(Option::as_ref)
    }

    /// Number of answered steps
    #[must_use]
    pub fn answered(&self) -> usize {
        self.grades.iter().filter(|g| g.is_some()).count()
    }

    /// Check if every step has a grade
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.answered() == self.grades.len()
    }

    /// Grade an answer to the step at `index`
    ///
    /// # Errors
    /// - `AssessError::StepOutOfRange` if the scenario has no such step
    /// - `AssessError::AlreadyAnswered` if the step already has a grade
    /// - any error from the validator, in which case the step stays open
    pub async fn answer<V>(
        &mut self,
        index: usize,
        answer: &str,
        validator: &V,
    ) -> Result<&Grade, AssessError>
    where
        V: AnswerValidator + ?Sized,
    {
        let len = self.grades.len();
        let step = self
            .scenario
            .steps
            .get(index)
            .ok_or(AssessError::StepOutOfRange { index, len })?;
        if self.grades[index].is_some() {
            return Err(AssessError::AlreadyAnswered(index));
        }

        let grade = validator.grade(answer, step).await?;
        tracing::debug!(step = %step.id, status = ?grade.status, "answer graded");

        Ok(self.grades[index].insert(grade))
    }

    /// Close the session into a record
    ///
    /// # Errors
    /// `AssessError::Incomplete` unless every step was answered.
    pub fn finish(
        self,
        user_id: impl Into<String>,
        summary: impl Into<String>,
    ) -> Result<AssessmentRecord, AssessError> {
        let total = self.grades.len();
        let answered = self.answered();
        let grades: Vec<Grade> = self.grades.into_iter().flatten().collect();
        if grades.len() != total {
            return Err(AssessError::Incomplete { answered, total });
        }

        let score = Tally::of(&grades).score();
        let user_id = user_id.into();
        tracing::info!(user = %user_id, score, steps = total, "assessment finished");

        Ok(AssessmentRecord {
            id: Ulid::new(),
            user_id,
            scenario_digest: self.digest,
            steps: self.scenario.steps.clone(),
            grades,
            score,
            summary: summary.into(),
            completed_at: Utc::now(),
        })
    }
}
