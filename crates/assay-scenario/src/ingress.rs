//! Generator output ingress
//!
//! Uses serde_json to turn the generator's raw reply into a typed
//! [`Scenario`]. Anything that does not deserialize is an upstream
//! generation failure; the pipeline only ever sees well-typed scenarios.

use crate::error::IngressError;
use crate::model::Scenario;

/// Parse generator output into a scenario
///
/// Leading and trailing whitespace and a surrounding Markdown code fence
/// (optionally tagged `json`) are tolerated.
///
/// # Errors
/// - `IngressError::Empty` for blank output
/// - `IngressError::UpstreamGeneration` if the JSON is invalid or lacks the
///   scenario shape
pub fn parse_oracle_output(raw: &str) -> Result<Scenario, IngressError> {
    let body = strip_code_fence(raw.trim());
    if body.is_empty() {
        return Err(IngressError::Empty);
    }

    serde_json::from_str(body).map_err(|e| {
        tracing::warn!(error = %e, "generator output is not a scenario");
        IngressError::UpstreamGeneration(format!("JSON parse error: {e}"))
    })
}

fn strip_code_fence(text: &str) -> &str {
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    // Drop the info string (e.g. "json") on the opening fence line
    let rest = rest.split_once('\n').map_or("", |(_, body)| body);
    rest.trim_end()
        .strip_suffix("```")
        .unwrap_or(rest)
        .trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCENARIO: &str = r#"{"context": "c", "codeTemplate": "___BLANK_1___", "steps": []}"#;

    #[test]
    fn parses_plain_json() {
        let scenario = parse_oracle_output(SCENARIO).unwrap();
        assert_eq!(scenario.template, "___BLANK_1___");
    }

    #[test]
    fn parses_fenced_json() {
        let fenced = format!("```json\n{SCENARIO}\n```\n");
        let scenario = parse_oracle_output(&fenced).unwrap();
        assert_eq!(scenario.context, "c");

        let bare_fence = format!("```\n{SCENARIO}\n```");
        assert!(parse_oracle_output(&bare_fence).is_ok());
    }

    #[test]
    fn empty_output() {
        assert!(matches!(parse_oracle_output("  \n"), Err(IngressError::Empty)));
        assert!(matches!(parse_oracle_output("```json\n```"), Err(IngressError::Empty)));
    }

    #[test]
    fn invalid_json_is_upstream_failure() {
        let result = parse_oracle_output(r#"{"context": "c", "steps": ["#);
        assert!(matches!(result, Err(IngressError::UpstreamGeneration(_))));
    }

    #[test]
    fn wrong_shape_is_upstream_failure() {
        let result = parse_oracle_output(r#"{"steps": "not a list"}"#);
        assert!(matches!(result, Err(IngressError::UpstreamGeneration(_))));

        let result = parse_oracle_output("[1, 2, 3]");
        assert!(matches!(result, Err(IngressError::UpstreamGeneration(_))));
    }
}
