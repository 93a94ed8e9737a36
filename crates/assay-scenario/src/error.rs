//! Error types for scenario normalization
//!
//! Provides error handling for:
//! - Pipeline operations (marker parsing, stage ordering)
//! - Ingress of generator output (upstream generation failures)
//! - Post-assembly invariant checks
//! - Configuration loading

use crate::pipeline::AssemblyStage;

/// Errors raised while normalizing a scenario
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// A matched marker carries an index that is not a positive `u32`
    #[error("malformed marker '{raw}' at offset {offset}")]
    MalformedMarker {
        /// Marker text as matched
        raw: String,
        /// Byte offset of the marker in the template
        offset: usize,
    },

    /// Assembler attempted a transition outside its stage table
    #[error("illegal stage transition: {from:?} -> {to:?}")]
    StageOrder {
        /// Stage the assembler was in
        from: AssemblyStage,
        /// Stage it tried to enter
        to: AssemblyStage,
    },
}

impl PipelineError {
    /// Create malformed marker error
    pub fn malformed_marker(raw: impl Into<String>, offset: usize) -> Self {
        Self::MalformedMarker {
            raw: raw.into(),
            offset,
        }
    }
}

/// Errors turning generator output into a [`crate::Scenario`]
#[derive(Debug, thiserror::Error)]
pub enum IngressError {
    /// Generator returned nothing
    #[error("generator output is empty")]
    Empty,

    /// Generator output is not a structurally valid scenario
    #[error("upstream generation failure: {0}")]
    UpstreamGeneration(String),
}

/// Violations of the canonical scenario invariant
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvariantViolation {
    /// Marker at `position` does not carry `expected`
    #[error("marker {position} reads {found}, expected {expected}")]
    MarkerOutOfOrder {
        /// Zero-based marker position
        position: usize,
        /// Index the position requires
        expected: u32,
        /// Index the marker carries
        found: u32,
    },

    /// Marker index could not be read
    #[error("unreadable marker '{0}'")]
    UnreadableMarker(String),

    /// Step list length differs from blank count
    #[error("step count mismatch: {blanks} blanks, {steps} steps")]
    StepCountMismatch {
        /// Markers in the template
        blanks: usize,
        /// Steps in the scenario
        steps: usize,
    },

    /// Step identifier does not encode its position
    #[error("step at position {position} has id '{found}', expected '{expected}'")]
    StepOutOfOrder {
        /// Zero-based step position
        position: usize,
        /// Id the position requires
        expected: String,
        /// Id the step carries
        found: String,
    },
}

/// Errors loading [`crate::PipelineConfig`]
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML could not be parsed into a config
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Combined scenario error
#[derive(Debug, thiserror::Error)]
pub enum ScenarioError {
    /// Normalization failed
    #[error("pipeline error: {0}")]
    Pipeline(#[from] PipelineError),

    /// Generator output rejected
    #[error("ingress error: {0}")]
    Ingress(#[from] IngressError),

    /// Canonical invariant does not hold
    #[error("invariant violated: {0}")]
    Invariant(#[from] InvariantViolation),

    /// Config could not be loaded
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}

/// Result type alias for scenario operations
pub type ScenarioResult<T> = Result<T, ScenarioError>;
