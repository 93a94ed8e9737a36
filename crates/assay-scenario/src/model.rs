//! Scenario data model
//!
//! Defines the values flowing through the normalization pipeline:
//! - [`Scenario`] and [`Step`], the wire shape exchanged with the generator
//! - [`Occurrence`] and [`ResolvedOccurrence`], parsed blank markers
//! - [`CanonicalMapping`], the declared → canonical index table

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// Marker prefix preceding the declared index
pub const MARKER_PREFIX: &str = "___BLANK_";

/// Marker suffix following the declared index
pub const MARKER_SUFFIX: &str = "___";

/// Render the marker text for a blank index
#[inline]
#[must_use]
pub fn marker(index: u32) -> String {
    format!("{MARKER_PREFIX}{index}{MARKER_SUFFIX}")
}

/// One question step attached to a blank
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    /// Step identifier, `step_<n>` after normalization
    #[serde(default, deserialize_with = "string_or_number")]
    pub id: String,
    /// Question shown to the user
    #[serde(default)]
    pub instruction: String,
    /// Reference answer used for grading
    #[serde(default)]
    pub expected_answer: String,
    /// Simulated output shown once the blank is answered
    #[serde(default)]
    pub output_simulation: String,
    /// Optional fallback pattern an answer may match instead of the expected answer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accepted_pattern: Option<String>,
}

impl Step {
    /// Create a step with empty output simulation and no fallback pattern
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        instruction: impl Into<String>,
        expected_answer: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            instruction: instruction.into(),
            expected_answer: expected_answer.into(),
            output_simulation: String::new(),
            accepted_pattern: None,
        }
    }

    /// With output simulation text
    #[inline]
    #[must_use]
    pub fn with_output_simulation(mut self, output: impl Into<String>) -> Self {
        self.output_simulation = output.into();
        self
    }

    /// With fallback matching pattern
    #[inline]
    #[must_use]
    pub fn with_accepted_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.accepted_pattern = Some(pattern.into());
        self
    }

    /// Check whether this step is a sentinel substituted for a missing one
    #[inline]
    #[must_use]
    pub fn is_sentinel(&self, sentinel_expected_answer: &str) -> bool {
        self.expected_answer == sentinel_expected_answer
    }
}

/// Template, context and ordered steps presented in one assessment
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scenario {
    /// Descriptive prose, may reference blanks as "Blank N"
    #[serde(default)]
    pub context: String,
    /// Code or config template holding the blank markers
    #[serde(default, rename = "codeTemplate")]
    pub template: String,
    /// Question steps, `steps[i]` belongs to blank `i + 1`
    #[serde(default)]
    pub steps: Vec<Step>,
}

impl Scenario {
    /// Create scenario from its parts
    #[must_use]
    pub fn new(context: impl Into<String>, template: impl Into<String>, steps: Vec<Step>) -> Self {
        Self {
            context: context.into(),
            template: template.into(),
            steps,
        }
    }
}

/// A marker found in a template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Occurrence {
    /// Index written inside the marker
    pub declared_index: u32,
    /// Byte offset of the marker start
    pub offset: usize,
    /// Marker text as it appears in the template
    pub raw: String,
}

impl Occurrence {
    /// Byte offset one past the marker end
    #[inline]
    #[must_use]
    pub fn end(&self) -> usize {
        self.offset + self.raw.len()
    }
}

/// An occurrence annotated with its canonical index
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedOccurrence {
    /// The scanned occurrence
    pub occurrence: Occurrence,
    /// 1-based position in physical order
    pub canonical_index: u32,
}

/// Declared index → canonical index table
///
/// When two markers share a declared index the later one wins.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CanonicalMapping {
    entries: BTreeMap<u32, u32>,
    total_blanks: u32,
}

impl CanonicalMapping {
    /// Create empty mapping
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a canonical index for a declared index
    ///
    /// Returns the canonical index previously held by `declared`, if any.
    pub fn insert(&mut self, declared: u32, canonical: u32) -> Option<u32> {
        self.total_blanks = self.total_blanks.max(canonical);
        self.entries.insert(declared, canonical)
    }

    /// Look up the canonical index for a declared index
    #[inline]
    #[must_use]
    pub fn get(&self, declared: u32) -> Option<u32> {
        self.entries.get(&declared).copied()
    }

    /// Number of markers the mapping was built from
    #[inline]
    #[must_use]
    pub fn total_blanks(&self) -> u32 {
        self.total_blanks
    }

    /// Check if no markers were found
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total_blanks == 0
    }

    /// True when renumbering changes nothing
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.entries.len() == self.total_blanks as usize
            && self.entries.iter().all(|(declared, canonical)| declared == canonical)
    }

    /// Iterate `(declared, canonical)` pairs in declared order
    pub fn iter(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.entries.iter().map(|(d, c)| (*d, *c))
    }
}

/// Generators sometimes emit numeric ids
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Id::deserialize(deserializer)? {
        Id::Text(s) => s,
        Id::Number(n) => n.to_string(),
    })
}
