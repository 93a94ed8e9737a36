//! Finished assessment record

use crate::grade::Grade;
use crate::score::Tally;
use assay_scenario::{ScenarioDigest, Step};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ulid::Ulid;

/// One completed assessment as persisted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentRecord {
    /// Record id (ULID for sortability)
    pub id: Ulid,
    /// Owner of the assessment
    pub user_id: String,
    /// Digest of the scenario that was answered
    pub scenario_digest: ScenarioDigest,
    /// Steps in the order they were presented
    pub steps: Vec<Step>,
    /// One grade per step
    pub grades: Vec<Grade>,
    /// Aggregate score, 0-100
    pub score: u8,
    /// Free-text summary
    pub summary: String,
    /// Completion time
    pub completed_at: DateTime<Utc>,
}

impl AssessmentRecord {
    /// Status counts of this record
    #[must_use]
    pub fn tally(&self) -> Tally {
        Tally::of(&self.grades)
    }
}
