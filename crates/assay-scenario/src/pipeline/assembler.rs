//! Scenario assembly
//!
//! Runs scan → resolve → template rewrite → step remap → context rewrite over
//! one scenario and reports what had to be repaired.

use super::remap::remap_steps;
use super::resolver::resolve;
use super::rewriter::rewrite_template;
use super::scanner::scan;
use super::stage::{validate_transition, AssemblyStage};
use super::xref::rewrite_context;
use crate::config::PipelineConfig;
use crate::digest::ScenarioDigest;
use crate::error::PipelineError;
use crate::model::{CanonicalMapping, Scenario};
use serde::Serialize;

/// What assembly changed or recovered from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizationReport {
    /// Markers found in the template
    pub total_blanks: u32,
    /// Whether any marker or step changed position
    pub renumbered: bool,
    /// Canonical indices filled with sentinel steps
    pub sentinel_steps: Vec<u32>,
    /// Original steps no marker claimed
    pub dropped_steps: usize,
    /// Declared indices used by more than one marker
    pub collisions: Vec<u32>,
    /// Context references with no matching blank
    pub unmapped_references: Vec<u32>,
    /// Stages traversed, `Received` first
    pub stages: Vec<AssemblyStage>,
    /// Digest of the assembled scenario
    pub digest: ScenarioDigest,
}

impl NormalizationReport {
    /// True when the generator output needed no structural repair
    #[inline]
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.sentinel_steps.is_empty() && self.dropped_steps == 0 && self.collisions.is_empty()
    }
}

/// Output of [`ScenarioAssembler::assemble`]
#[derive(Debug, Clone)]
pub struct Assembly {
    /// The consistent scenario
    pub scenario: Scenario,
    /// Declared → canonical table used
    pub mapping: CanonicalMapping,
    /// Repair report
    pub report: NormalizationReport,
}

struct StageTrace {
    current: AssemblyStage,
    visited: Vec<AssemblyStage>,
}

impl StageTrace {
    fn new() -> Self {
        Self {
            current: AssemblyStage::Received,
            visited: vec![AssemblyStage::Received],
        }
    }

    fn advance(&mut self, to: AssemblyStage) -> Result<(), PipelineError> {
        validate_transition(self.current, to)?;
        tracing::debug!(from = ?self.current, to = ?to, "assembly stage");
        self.current = to;
        self.visited.push(to);
        Ok(())
    }
}

/// Normalizes generated scenarios
///
/// Stateless apart from its configuration; one assembler can serve any
/// number of independent scenarios.
#[derive(Debug, Clone, Default)]
pub struct ScenarioAssembler {
    config: PipelineConfig,
}

impl ScenarioAssembler {
    /// Create assembler with given configuration
    #[inline]
    #[must_use]
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    /// Configuration in use
    #[inline]
    #[must_use]
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Make a raw scenario internally consistent
    ///
    /// # Workflow
    /// 1. Scan the template for markers
    /// 2. Number them by physical position
    /// 3. Rewrite the template with canonical markers
    /// 4. Move steps to their canonical slots, filling gaps with sentinels
    /// 5. Rewrite "Blank N" references in the context
    ///
    /// A template without markers is returned unchanged.
    ///
    /// # Errors
    /// `PipelineError::MalformedMarker` if a marker index cannot be read.
    pub fn assemble(&self, scenario: Scenario) -> Result<Assembly, PipelineError> {
        let mut trace = StageTrace::new();

        let occurrences = scan(&scenario.template)?;
        trace.advance(AssemblyStage::Scanned)?;

        let resolution = resolve(occurrences);
        trace.advance(AssemblyStage::Resolved)?;

        if resolution.mapping.is_empty() {
            trace.advance(AssemblyStage::Assembled)?;
            tracing::debug!("template has no blanks, scenario left unchanged");
            let report = NormalizationReport {
                total_blanks: 0,
                renumbered: false,
                sentinel_steps: Vec::new(),
                dropped_steps: 0,
                collisions: Vec::new(),
                unmapped_references: Vec::new(),
                stages: trace.visited,
                digest: ScenarioDigest::of(&scenario),
            };
            return Ok(Assembly {
                scenario,
                mapping: resolution.mapping,
                report,
            });
        }

        let template = rewrite_template(&scenario.template, &resolution.occurrences);
        trace.advance(AssemblyStage::TemplateRewritten)?;

        let remapped = remap_steps(&scenario.steps, &resolution.mapping, &self.config);
        trace.advance(AssemblyStage::StepsRemapped)?;

        let context = rewrite_context(&scenario.context, &resolution.mapping);
        trace.advance(AssemblyStage::ContextRewritten)?;

        let assembled = Scenario {
            context: context.text,
            template,
            steps: remapped.steps,
        };
        trace.advance(AssemblyStage::Assembled)?;

        let report = NormalizationReport {
            total_blanks: resolution.mapping.total_blanks(),
            renumbered: !resolution.mapping.is_identity(),
            sentinel_steps: remapped.sentinels,
            dropped_steps: remapped.dropped,
            collisions: resolution.collisions,
            unmapped_references: context.unmapped,
            stages: trace.visited,
            digest: ScenarioDigest::of(&assembled),
        };

        tracing::info!(
            blanks = report.total_blanks,
            renumbered = report.renumbered,
            sentinels = report.sentinel_steps.len(),
            digest = %report.digest.short(),
            "scenario assembled"
        );

        Ok(Assembly {
            scenario: assembled,
            mapping: resolution.mapping,
            report,
        })
    }
}

/// Assemble with the default configuration, discarding the report
///
/// # Errors
/// See [`ScenarioAssembler::assemble`].
pub fn normalize(scenario: Scenario) -> Result<Scenario, PipelineError> {
    ScenarioAssembler::default()
        .assemble(scenario)
        .map(|assembly| assembly.scenario)
}
