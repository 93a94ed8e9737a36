use crate::error::PipelineError;
use serde::Serialize;

/// Assembler progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AssemblyStage {
    /// Raw scenario accepted
    Received,
    /// Markers located
    Scanned,
    /// Canonical mapping built
    Resolved,
    /// Markers renumbered in the template
    TemplateRewritten,
    /// Steps reordered and relabelled
    StepsRemapped,
    /// Prose references rewritten
    ContextRewritten,
    /// Canonical scenario produced
    Assembled,
}

/// Validates a stage transition.
///
/// The only branch is `Resolved -> Assembled`, taken when the template holds
/// no markers.
pub fn validate_transition(from: AssemblyStage, to: AssemblyStage) -> Result<(), PipelineError> {
    if allowed_transitions(from).contains(&to) {
        Ok(())
    } else {
        Err(PipelineError::StageOrder { from, to })
    }
}

/// Stages reachable from `from` in one step
pub fn allowed_transitions(from: AssemblyStage) -> Vec<AssemblyStage> {
    use AssemblyStage::*;
    match from {
        Received => vec![Scanned],
        Scanned => vec![Resolved],
        Resolved => vec![TemplateRewritten, Assembled],
        TemplateRewritten => vec![StepsRemapped],
        StepsRemapped => vec![ContextRewritten],
        ContextRewritten => vec![Assembled],
        Assembled => vec![],
    }
}
