//! Canonical invariant checks
//!
//! Verifies that a scenario is already in assembled form without touching
//! it: markers read `1..=N` left to right, there are exactly `N` steps, and
//! `steps[i]` carries the identifier of blank `i + 1`.

use crate::config::PipelineConfig;
use crate::error::{InvariantViolation, PipelineError};
use crate::model::Scenario;
use crate::pipeline::scan;

/// Check the canonical scenario invariant
///
/// # Errors
/// The first [`InvariantViolation`] found, checking markers before steps.
pub fn verify_canonical(
    scenario: &Scenario,
    config: &PipelineConfig,
) -> Result<(), InvariantViolation> {
    let occurrences = scan(&scenario.template).map_err(|e| match e {
        PipelineError::MalformedMarker { raw, .. } => InvariantViolation::UnreadableMarker(raw),
        other => InvariantViolation::UnreadableMarker(other.to_string()),
    })?;

    for (position, (expected, occ)) in (1u32..).zip(&occurrences).enumerate() {
        if occ.declared_index != expected {
            return Err(InvariantViolation::MarkerOutOfOrder {
                position,
                expected,
                found: occ.declared_index,
            });
        }
    }

    if occurrences.is_empty() {
        return Ok(());
    }

    if scenario.steps.len() != occurrences.len() {
        return Err(InvariantViolation::StepCountMismatch {
            blanks: occurrences.len(),
            steps: scenario.steps.len(),
        });
    }

    for (position, (index, step)) in (1u32..).zip(&scenario.steps).enumerate() {
        let expected = config.step_id(index);
        if step.id != expected {
            return Err(InvariantViolation::StepOutOfOrder {
                position,
                expected,
                found: step.id.clone(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Step;

    fn config() -> PipelineConfig {
        PipelineConfig::default()
    }

    #[test]
    fn accepts_canonical() {
        let scenario = Scenario::new(
            "",
            "___BLANK_1___ ___BLANK_2___",
            vec![Step::new("step_1", "a", "1"), Step::new("step_2", "b", "2")],
        );
        assert_eq!(verify_canonical(&scenario, &config()), Ok(()));
    }

    #[test]
    fn accepts_marker_free() {
        let scenario = Scenario::new("", "text", vec![Step::new("anything", "a", "1")]);
        assert_eq!(verify_canonical(&scenario, &config()), Ok(()));
    }

    #[test]
    fn rejects_scrambled_markers() {
        let scenario = Scenario::new("", "___BLANK_2___ ___BLANK_1___", Vec::new());
        assert_eq!(
            verify_canonical(&scenario, &config()),
            Err(InvariantViolation::MarkerOutOfOrder {
                position: 0,
                expected: 1,
                found: 2
            })
        );
    }

    #[test]
    fn rejects_missing_steps() {
        let scenario = Scenario::new(
            "",
            "___BLANK_1___ ___BLANK_2___",
            vec![Step::new("step_1", "a", "1")],
        );
        assert_eq!(
            verify_canonical(&scenario, &config()),
            Err(InvariantViolation::StepCountMismatch { blanks: 2, steps: 1 })
        );
    }

    #[test]
    fn rejects_misnumbered_step() {
        let scenario = Scenario::new(
            "",
            "___BLANK_1___",
            vec![Step::new("step_9", "a", "1")],
        );
        assert!(matches!(
            verify_canonical(&scenario, &config()),
            Err(InvariantViolation::StepOutOfOrder { position: 0, .. })
        ));
    }

    #[test]
    fn reports_unreadable_marker() {
        let scenario = Scenario::new("", "___BLANK_0___", Vec::new());
        assert_eq!(
            verify_canonical(&scenario, &config()),
            Err(InvariantViolation::UnreadableMarker("___BLANK_0___".to_string()))
        );
    }
}
