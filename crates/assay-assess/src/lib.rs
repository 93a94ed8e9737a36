//! assay Assess
//!
//! Runs an assessment over a normalized scenario:
//! - Grades each answer into a three-tier [`AnswerStatus`]
//! - Computes the aggregate score
//! - Persists the finished [`AssessmentRecord`] per user
//!
//! # Example
//!
//! ```rust,ignore
//! use assay_assess::prelude::*;
//! use assay_scenario::ScenarioAssembler;
//!
//! # async fn example(raw: assay_scenario::Scenario) -> Result<(), Box<dyn std::error::Error>> {
//! let assembly = ScenarioAssembler::default().assemble(raw)?;
//! let mut session = AssessmentSession::from_assembly(assembly);
//! let validator = ExpectedAnswerValidator::default();
//!
//! session.answer(0, "localhost", &validator).await?;
//! let record = session.finish("user-1", "done")?;
//!
//! let store = InMemoryAssessmentStore::new();
//! store.append(record).await?;
//! # Ok(())
//! # }
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

// Core modules
pub mod error;
pub mod grade;
pub mod record;
pub mod score;
pub mod session;
pub mod store;
pub mod validator;

// Re-exports for convenience
pub use error::AssessError;
pub use grade::{AnswerStatus, Grade};
pub use record::AssessmentRecord;
pub use score::{score, Tally};
pub use session::AssessmentSession;
pub use store::{AssessmentStore, InMemoryAssessmentStore};
pub use validator::{AnswerValidator, ExpectedAnswerValidator, SENTINEL_FEEDBACK};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for running assessments
    pub use crate::{
        AnswerStatus, AnswerValidator, AssessError, AssessmentRecord, AssessmentSession,
        AssessmentStore, ExpectedAnswerValidator, Grade, InMemoryAssessmentStore,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
