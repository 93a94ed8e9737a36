//! Blank marker scanning

use crate::error::PipelineError;
use crate::model::Occurrence;
use once_cell::sync::Lazy;
use regex::Regex;

static MARKER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"___BLANK_([0-9]+)___").expect("marker pattern is valid"));

/// Scan a template for `___BLANK_<n>___` markers
///
/// Occurrences come back in ascending offset order.
///
/// # Errors
/// `PipelineError::MalformedMarker` when a marker's digits overflow `u32` or
/// spell zero.
pub fn scan(template: &str) -> Result<Vec<Occurrence>, PipelineError> {
    MARKER_RE
        .captures_iter(template)
        .map(|caps| {
            let whole = caps.get(0).ok_or_else(|| PipelineError::malformed_marker("", 0))?;
            let declared_index = caps
                .get(1)
                .and_then(|digits| digits.as_str().parse::<u32>().ok())
                .filter(|index| *index > 0)
                .ok_or_else(|| PipelineError::malformed_marker(whole.as_str(), whole.start()))?;

            Ok(Occurrence {
                declared_index,
                offset: whole.start(),
                raw: whole.as_str().to_string(),
            })
        })
        .collect()
}
