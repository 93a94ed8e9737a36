//! Canonical order resolution

use crate::model::{CanonicalMapping, Occurrence, ResolvedOccurrence};

/// Result of resolving scanned occurrences
#[derive(Debug, Clone, Default)]
pub struct Resolution {
    /// Declared → canonical table
    pub mapping: CanonicalMapping,
    /// Occurrences in physical order with canonical indices
    pub occurrences: Vec<ResolvedOccurrence>,
    /// Declared indices claimed by more than one marker
    pub collisions: Vec<u32>,
}

/// Assign canonical indices by physical position
///
/// Expects occurrences in ascending offset order, as produced by
/// [`super::scan`]. A declared index seen twice keeps the canonical index of
/// its last occurrence.
#[must_use]
pub fn resolve(occurrences: Vec<Occurrence>) -> Resolution {
    let mut resolution = Resolution::default();

    for (position, occurrence) in (1u32..).zip(occurrences) {
        if resolution
            .mapping
            .insert(occurrence.declared_index, position)
            .is_some()
            && !resolution.collisions.contains(&occurrence.declared_index)
        {
            tracing::warn!(
                declared_index = occurrence.declared_index,
                offset = occurrence.offset,
                "declared index claimed by more than one marker"
            );
            resolution.collisions.push(occurrence.declared_index);
        }
        resolution.occurrences.push(ResolvedOccurrence {
            occurrence,
            canonical_index: position,
        });
    }

    resolution
}
