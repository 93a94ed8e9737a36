//! assay Scenario
//!
//! Normalization of generated fill-in-the-blank scenarios.
//!
//! A generator returns a scenario whose template holds `___BLANK_<n>___`
//! markers, a prose context, and one question step per blank. Nothing
//! guarantees the markers are numbered in reading order or that the steps
//! line up with them. This crate repairs that.
//!
//! # Core Operations
//!
//! - **Ingress**: Parse generator output into a typed [`Scenario`]
//! - **Assemble**: Renumber markers by position, reorder steps, sync references
//! - **Verify**: Check a scenario already satisfies the canonical invariant
//!
//! # Architecture
//!
//! ```text
//! generator text → ingress → Scenario → scan → resolve → rewrite template
//!                                                   ↓
//!                        Assembly ← rewrite context ← remap steps
//! ```
//!
//! # Example
//!
//! ```rust
//! use assay_scenario::{normalize, Scenario, Step};
//!
//! let raw = Scenario::new(
//!     "See Blank 1 and Blank 2.",
//!     "A ___BLANK_2___ B ___BLANK_1___ C",
//!     vec![
//!         Step::new("step_1", "At Blank 1: first", "x"),
//!         Step::new("step_2", "At Blank 2: second", "y"),
//!     ],
//! );
//!
//! let fixed = normalize(raw).unwrap();
//! assert_eq!(fixed.template, "A ___BLANK_1___ B ___BLANK_2___ C");
//! assert_eq!(fixed.steps[0].instruction, "At Blank 1: second");
//! assert_eq!(fixed.context, "See Blank 2 and Blank 1.");
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

// Core modules
pub mod config;
pub mod digest;
pub mod error;
pub mod ingress;
pub mod model;
pub mod pipeline;
pub mod verify;

// Re-exports for convenience
pub use config::PipelineConfig;
pub use digest::{DigestError, ScenarioDigest};
pub use error::{
    ConfigError, IngressError, InvariantViolation, PipelineError, ScenarioError, ScenarioResult,
};
pub use ingress::parse_oracle_output;
pub use model::{marker, CanonicalMapping, Occurrence, ResolvedOccurrence, Scenario, Step};
pub use pipeline::{normalize, Assembly, AssemblyStage, NormalizationReport, ScenarioAssembler};
pub use verify::verify_canonical;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with scenarios
    pub use crate::config::PipelineConfig;
    pub use crate::error::{IngressError, PipelineError, ScenarioError};
    pub use crate::ingress::parse_oracle_output;
    pub use crate::model::{Scenario, Step};
    pub use crate::pipeline::{normalize, Assembly, ScenarioAssembler};
    pub use crate::verify::verify_canonical;
}
