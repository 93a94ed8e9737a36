//! Scenario normalization pipeline
//!
//! Each stage is a pure function over immutable input:
//! - [`scan`]: find `___BLANK_<n>___` markers and their offsets
//! - [`resolve`]: number markers by physical position
//! - [`rewrite_template`]: emit canonical markers, copying other text verbatim
//! - [`remap_steps`]: move steps to their canonical slots
//! - [`rewrite_context`]: update "Blank N" references in prose
//!
//! [`ScenarioAssembler`] runs them in order.

mod assembler;
mod remap;
mod resolver;
mod rewriter;
mod scanner;
mod stage;
mod xref;

pub use assembler::{normalize, Assembly, NormalizationReport, ScenarioAssembler};
pub use remap::{remap_steps, sentinel, RemappedSteps};
pub use resolver::{resolve, Resolution};
pub use rewriter::rewrite_template;
pub use scanner::scan;
pub use stage::{allowed_transitions, validate_transition, AssemblyStage};
pub use xref::{rewrite_context, rewrite_references, RewrittenText};
