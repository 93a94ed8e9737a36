//! "Blank N" cross-reference rewriting

use crate::model::CanonicalMapping;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static REFERENCE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(blank)(\s+)([0-9]+)\b").expect("reference pattern is valid"));

/// Text after reference rewriting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewrittenText {
    /// The rewritten text
    pub text: String,
    /// Referenced numbers left untouched, in order of appearance
    pub unmapped: Vec<u32>,
}

/// Rewrite each "Blank N" reference whose number `lookup` maps
///
/// Matching is case-insensitive and keeps the original spelling of the word
/// and the whitespace after it. Each reference is visited once, so a
/// rewritten number is never rewritten again.
pub fn rewrite_references<F>(text: &str, lookup: F) -> RewrittenText
where
    F: Fn(u32) -> Option<u32>,
{
    let mut unmapped = Vec::new();
    let rewritten = REFERENCE_RE.replace_all(text, |caps: &Captures<'_>| {
        let target = caps[3].parse::<u32>().ok();
        match target.and_then(&lookup) {
            Some(canonical) => format!("{}{}{}", &caps[1], &caps[2], canonical),
            None => {
                if let Some(number) = target {
                    unmapped.push(number);
                }
                caps[0].to_string()
            }
        }
    });

    RewrittenText {
        text: rewritten.into_owned(),
        unmapped,
    }
}

/// Rewrite context references through the canonical mapping
///
/// References to numbers absent from the mapping stay as written.
#[must_use]
pub fn rewrite_context(context: &str, mapping: &CanonicalMapping) -> RewrittenText {
    let rewritten = rewrite_references(context, |n| mapping.get(n));
    for number in &rewritten.unmapped {
        tracing::debug!(reference = number, "context reference has no matching blank");
    }
    rewritten
}
