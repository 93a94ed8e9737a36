//! Subcommand implementations

use anyhow::{bail, Context, Result};
use assay_scenario::{parse_oracle_output, verify_canonical, PipelineConfig, ScenarioAssembler};
use std::io::Read;
use std::path::Path;

/// Read a file, or stdin when no path is given
fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            Ok(buf)
        }
    }
}

pub(crate) fn load_config(path: Option<&Path>) -> Result<PipelineConfig> {
    let Some(path) = path else {
        return Ok(PipelineConfig::default());
    };
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    PipelineConfig::from_toml_str(&source)
        .with_context(|| format!("invalid config {}", path.display()))
}

pub(crate) fn normalize(
    input: Option<&Path>,
    config: PipelineConfig,
    compact: bool,
    report: bool,
) -> Result<()> {
    let raw = read_input(input)?;
    let scenario = parse_oracle_output(&raw)?;
    let assembly = ScenarioAssembler::new(config).assemble(scenario)?;

    if report {
        eprintln!("{}", serde_json::to_string_pretty(&assembly.report)?);
    }

    let out = if compact {
        serde_json::to_string(&assembly.scenario)?
    } else {
        serde_json::to_string_pretty(&assembly.scenario)?
    };
    println!("{out}");
    Ok(())
}

pub(crate) fn verify(input: Option<&Path>, config: &PipelineConfig) -> Result<()> {
    let raw = read_input(input)?;
    let scenario = parse_oracle_output(&raw)?;

    if let Err(violation) = verify_canonical(&scenario, config) {
        bail!("scenario is not canonical: {violation}");
    }
    println!("ok: {} steps", scenario.steps.len());
    Ok(())
}

pub(crate) fn score(correct: usize, partial: usize, total: usize) -> Result<()> {
    let Some(credited) = correct.checked_add(partial) else {
        bail!("correct + partial overflows");
    };
    if credited > total {
        bail!("correct + partial ({credited}) exceeds total ({total})");
    }
    println!("{}", assay_assess::score(correct, partial, total));
    Ok(())
}
