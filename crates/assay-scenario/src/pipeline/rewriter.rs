//! Template rewriting

use crate::model::{marker, ResolvedOccurrence};

/// Replace every marker with its canonical marker
///
/// Text between markers is copied byte for byte. Occurrences must be in
/// ascending offset order and must not overlap.
#[must_use]
pub fn rewrite_template(template: &str, occurrences: &[ResolvedOccurrence]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut cursor = 0;

    for resolved in occurrences {
        let occ = &resolved.occurrence;
        out.push_str(&template[cursor..occ.offset]);
        out.push_str(&marker(resolved.canonical_index));
        cursor = occ.end();
    }
    out.push_str(&template[cursor..]);

    out
}
