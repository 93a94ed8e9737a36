//! Assessment persistence
//!
//! Append-only storage of finished assessments keyed by user. Persistent
//! backends plug in through [`AssessmentStore`].

use crate::error::AssessError;
use crate::record::AssessmentRecord;
use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use ulid::Ulid;

/// Append-only assessment store
#[async_trait]
pub trait AssessmentStore: Send + Sync {
    /// Persist a finished assessment
    async fn append(&self, record: AssessmentRecord) -> Result<Ulid, AssessError>;

    /// All assessments for a user, oldest first
    async fn list_for_user(&self, user_id: &str) -> Result<Vec<AssessmentRecord>, AssessError>;

    /// One assessment by id
    async fn get(&self, id: Ulid) -> Result<Option<AssessmentRecord>, AssessError>;
}

/// Store kept in process memory
#[derive(Debug, Default)]
pub struct InMemoryAssessmentStore {
    /// Records per user in insertion order
    by_user: DashMap<String, Vec<AssessmentRecord>>,
    /// Record id → owning user
    owners: DashMap<Ulid, String>,
}

impl InMemoryAssessmentStore {
    /// Create empty store
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records
    #[must_use]
    pub fn len(&self) -> usize {
        self.owners.len()
    }

    /// Check if nothing is stored
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.owners.is_empty()
    }
}

#[async_trait]
impl AssessmentStore for InMemoryAssessmentStore {
    async fn append(&self, record: AssessmentRecord) -> Result<Ulid, AssessError> {
        let id = record.id;
        let user_id = record.user_id.clone();
        // Owner entry is published only after the record is readable
        let Entry::Vacant(owner) = self.owners.entry(id) else {
            return Err(AssessError::Store(format!("record {id} already exists")));
        };

        tracing::debug!(%id, user = %user_id, score = record.score, "assessment stored");
        self.by_user.entry(user_id.clone()).or_default().push(record);
        owner.insert(user_id);
        Ok(id)
    }

    async fn list_for_user(&self, user_id: &str) -> Result<Vec<AssessmentRecord>, AssessError> {
        Ok(self
            .by_user
            .get(user_id)
            .map(|records| records.value().clone())
            .unwrap_or_default())
    }

    async fn get(&self, id: Ulid) -> Result<Option<AssessmentRecord>, AssessError> {
        let Some(user) = self.owners.get(&id).map(|user| user.value().clone()) else {
            return Ok(None);
        };
        Ok(self
            .by_user
            .get(&user)
            .and_then(|records| records.iter().find(|r| r.id == id).cloned()))
    }
}
