//! Pipeline configuration

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Default prefix for step identifiers
pub const DEFAULT_STEP_ID_PREFIX: &str = "step_";

/// Default instruction of a sentinel step
pub const DEFAULT_SENTINEL_INSTRUCTION: &str =
    "[MISSING STEP] The generated scenario did not include a question for this blank.";

/// Default expected answer of a sentinel step
pub const DEFAULT_SENTINEL_EXPECTED_ANSWER: &str = "__MISSING_STEP__";

/// Normalization settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PipelineConfig {
    /// Prefix of rewritten step identifiers
    pub step_id_prefix: String,
    /// Instruction text of sentinel steps
    pub sentinel_instruction: String,
    /// Expected answer of sentinel steps
    pub sentinel_expected_answer: String,
    /// Output simulation of sentinel steps
    pub sentinel_output_simulation: String,
}

impl PipelineConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse configuration from TOML, missing keys keep their defaults
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    /// With step id prefix
    #[inline]
    #[must_use]
    pub fn with_step_id_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.step_id_prefix = prefix.into();
        self
    }

    /// With sentinel instruction
    #[inline]
    #[must_use]
    pub fn with_sentinel_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.sentinel_instruction = instruction.into();
        self
    }

    /// With sentinel expected answer
    #[inline]
    #[must_use]
    pub fn with_sentinel_expected_answer(mut self, answer: impl Into<String>) -> Self {
        self.sentinel_expected_answer = answer.into();
        self
    }

    /// Identifier for the step at a canonical index
    #[inline]
    #[must_use]
    pub fn step_id(&self, canonical_index: u32) -> String {
        format!("{}{}", self.step_id_prefix, canonical_index)
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            step_id_prefix: DEFAULT_STEP_ID_PREFIX.to_string(),
            sentinel_instruction: DEFAULT_SENTINEL_INSTRUCTION.to_string(),
            sentinel_expected_answer: DEFAULT_SENTINEL_EXPECTED_ANSWER.to_string(),
            sentinel_output_simulation: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_id_uses_prefix() {
        let config = PipelineConfig::new();
        assert_eq!(config.step_id(3), "step_3");

        let config = config.with_step_id_prefix("q");
        assert_eq!(config.step_id(3), "q3");
    }

    #[test]
    fn toml_partial_override() {
        let config = PipelineConfig::from_toml_str(r#"sentinel_instruction = "gone""#).unwrap();
        assert_eq!(config.sentinel_instruction, "gone");
        assert_eq!(config.step_id_prefix, DEFAULT_STEP_ID_PREFIX);
    }

    #[test]
    fn toml_rejects_unknown_keys() {
        assert!(PipelineConfig::from_toml_str("retries = 3").is_err());
    }
}
