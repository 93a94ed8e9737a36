//! Testing utilities for assay workspace
//!
//! Shared scenario fixtures, builders and proptest strategies.

#![allow(missing_docs)]

use assay_scenario::{marker, Scenario, Step};
use proptest::prelude::*;

pub fn step(n: u32, instruction: &str) -> Step {
    Step::new(format!("step_{n}"), instruction, format!("answer {n}"))
}

/// Template with one marker per declared index, in the given physical order
pub fn template_with_markers(declared: &[u32]) -> String {
    declared
        .iter()
        .enumerate()
        .map(|(i, d)| format!("line {i}: {}\n", marker(*d)))
        .collect()
}

/// Scenario with `n` blanks numbered in reading order and matching steps
pub fn canonical_scenario(n: u32) -> Scenario {
    let declared: Vec<u32> = (1..=n).collect();
    let steps = (1..=n).map(|i| step(i, &format!("Fill Blank {i}"))).collect();
    let context = (1..=n).map(|i| format!("Blank {i} matters. ")).collect::<String>();
    Scenario::new(context, template_with_markers(&declared), steps)
}

/// The two-blank swapped scenario used throughout the docs
pub fn swapped_scenario() -> Scenario {
    Scenario::new(
        "See Blank 1 and Blank 2.",
        "A ___BLANK_2___ B ___BLANK_1___ C",
        vec![step(1, "At Blank 1: first"), step(2, "At Blank 2: second")],
    )
}

/// Generator output as the oracle would send it
pub fn oracle_json(scenario: &Scenario) -> String {
    let body = serde_json::to_string_pretty(scenario).unwrap();
    format!("```json\n{body}\n```")
}

/// Text that cannot contain a marker or a "Blank N" reference
pub fn filler() -> impl Strategy<Value = String> {
    "[a-z \n\t=;{}()]{0,12}"
}

/// A permutation of `1..=n` for `n` in `1..=max`
pub fn declared_permutation(max: u32) -> impl Strategy<Value = Vec<u32>> {
    (1..=max)
        .prop_flat_map(|n| Just((1..=n).collect::<Vec<u32>>()).prop_shuffle())
}

/// Template built from a permutation of declared indices with random filler
pub fn scrambled_template(max: u32) -> impl Strategy<Value = (Vec<u32>, String)> {
    declared_permutation(max).prop_flat_map(|declared| {
        let n = declared.len();
        proptest::collection::vec(filler(), n + 1).prop_map(move |gaps| {
            let mut template = String::new();
            for (gap, d) in gaps.iter().zip(&declared) {
                template.push_str(gap);
                template.push_str(&marker(*d));
            }
            template.push_str(&gaps[n]);
            (declared.clone(), template)
        })
    })
}
