//! Step remapping
//!
//! Moves each step to the slot of its blank's canonical index. By convention
//! the step at list position `k` belongs to declared index `k + 1`.

use super::xref::rewrite_references;
use crate::config::PipelineConfig;
use crate::model::{CanonicalMapping, Step};

/// Steps after remapping
#[derive(Debug, Clone, Default)]
pub struct RemappedSteps {
    /// Steps in canonical order
    pub steps: Vec<Step>,
    /// Canonical indices filled with sentinel steps
    pub sentinels: Vec<u32>,
    /// Original steps no marker claimed
    pub dropped: usize,
}

/// Reorder and relabel steps to match the canonical mapping
///
/// A canonical index whose declared index has no original step gets a
/// sentinel step built from `config`. Slots no mapping entry reaches, which
/// only happens when markers share a declared index, are left out.
#[must_use]
pub fn remap_steps(
    steps: &[Step],
    mapping: &CanonicalMapping,
    config: &PipelineConfig,
) -> RemappedSteps {
    let mut slots: Vec<Option<Step>> = vec![None; mapping.total_blanks() as usize];
    let mut placed = vec![false; steps.len()];
    let mut sentinels = Vec::new();

    for (declared, canonical) in mapping.iter() {
        let source = (declared as usize).checked_sub(1);
        let step = match source.and_then(|k| steps.get(k).map(|s| (k, s))) {
            Some((k, original)) => {
                placed[k] = true;
                relabel(original, canonical, mapping, config)
            }
            None => {
                tracing::warn!(
                    declared_index = declared,
                    canonical_index = canonical,
                    "no step for blank, inserting sentinel"
                );
                sentinels.push(canonical);
                sentinel(canonical, config)
            }
        };
        slots[canonical as usize - 1] = Some(step);
    }

    let holes = slots.iter().filter(|s| s.is_none()).count();
    if holes > 0 {
        tracing::warn!(holes, "dropping unfilled step slots");
    }

    let dropped = placed.iter().filter(|p| !**p).count();
    if dropped > 0 {
        tracing::warn!(dropped, "steps without a matching blank were discarded");
    }

    sentinels.sort_unstable();
    RemappedSteps {
        steps: slots.into_iter().flatten().collect(),
        sentinels,
        dropped,
    }
}

fn relabel(
    original: &Step,
    canonical: u32,
    mapping: &CanonicalMapping,
    config: &PipelineConfig,
) -> Step {
    Step {
        id: config.step_id(canonical),
        instruction: rewrite_references(&original.instruction, |n| mapping.get(n)).text,
        ..original.clone()
    }
}

/// Placeholder for a blank the generator gave no step for
#[must_use]
pub fn sentinel(canonical: u32, config: &PipelineConfig) -> Step {
    Step {
        id: config.step_id(canonical),
        instruction: config.sentinel_instruction.clone(),
        expected_answer: config.sentinel_expected_answer.clone(),
        output_simulation: config.sentinel_output_simulation.clone(),
        accepted_pattern: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::{resolve, scan};

    fn mapping_for(template: &str) -> CanonicalMapping {
        resolve(scan(template).unwrap()).mapping
    }

    fn step(n: u32, instruction: &str) -> Step {
        Step::new(format!("step_{n}"), instruction, format!("answer {n}"))
    }

    #[test]
    fn remap_permutes_and_relabels() {
        let steps = vec![step(1, "At Blank 1: first"), step(2, "At Blank 2: second")];
        let mapping = mapping_for("A ___BLANK_2___ B ___BLANK_1___ C");

        let out = remap_steps(&steps, &mapping, &PipelineConfig::default());

        assert_eq!(out.steps.len(), 2);
        assert_eq!(out.steps[0].id, "step_1");
        assert_eq!(out.steps[0].instruction, "At Blank 1: second");
        assert_eq!(out.steps[0].expected_answer, "answer 2");
        assert_eq!(out.steps[1].id, "step_2");
        assert_eq!(out.steps[1].instruction, "At Blank 2: first");
        assert!(out.sentinels.is_empty());
        assert_eq!(out.dropped, 0);
    }

    #[test]
    fn remap_fills_missing_with_sentinel() {
        let steps = vec![step(1, "one"), step(2, "two")];
        let mapping = mapping_for("___BLANK_1___ ___BLANK_3___ ___BLANK_2___");
        let config = PipelineConfig::default();

        let out = remap_steps(&steps, &mapping, &config);

        assert_eq!(out.steps.len(), 3);
        assert_eq!(out.steps[0].instruction, "one");
        assert_eq!(out.steps[1].instruction, config.sentinel_instruction);
        assert!(out.steps[1].is_sentinel(&config.sentinel_expected_answer));
        assert_eq!(out.steps[1].id, "step_2");
        assert_eq!(out.steps[2].instruction, "two");
        assert_eq!(out.sentinels, vec![2]);
    }

    #[test]
    fn remap_discards_surplus_steps() {
        let steps = vec![step(1, "one"), step(2, "two"), step(3, "three")];
        let mapping = mapping_for("___BLANK_1___");

        let out = remap_steps(&steps, &mapping, &PipelineConfig::default());

        assert_eq!(out.steps.len(), 1);
        assert_eq!(out.dropped, 2);
    }

    #[test]
    fn remap_collision_drops_hole() {
        let steps = vec![step(1, "one"), step(2, "two")];
        let mapping = mapping_for("___BLANK_1___ ___BLANK_1___");

        let out = remap_steps(&steps, &mapping, &PipelineConfig::default());

        // 1 -> 2 wins, slot 1 stays empty and is removed
        assert_eq!(out.steps.len(), 1);
        assert_eq!(out.steps[0].id, "step_2");
        assert_eq!(out.steps[0].instruction, "one");
        assert_eq!(out.dropped, 1);
    }

    #[test]
    fn remap_keeps_optional_fields() {
        let steps = vec![step(1, "x")
            .with_accepted_pattern("^a+$")
            .with_output_simulation("ok")];
        let mapping = mapping_for("___BLANK_1___");

        let out = remap_steps(&steps, &mapping, &PipelineConfig::default());

        assert_eq!(out.steps[0].accepted_pattern.as_deref(), Some("^a+$"));
        assert_eq!(out.steps[0].output_simulation, "ok");
    }
}
