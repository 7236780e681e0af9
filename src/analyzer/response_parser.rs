use crate::analyzer::prompts::{
    ALE_ALERT_LABEL, RESPONSE_LABELS, RISK_FLAGS_LABEL, RISK_LEVEL_LABEL, SUBROGATION_LABEL,
    SUMMARY_LABEL,
};
use crate::models::{AnalysisResult, ParseAnomaly, RiskLevel};

const NO_SUBROGATION_VALUES: &[&str] = &["none", "none identified", "n/a"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedTriage {
    pub result: AnalysisResult,
    pub anomalies: Vec<ParseAnomaly>,
}

/// Parses the model's labelled reply. Unlabelled lines are ignored, and a
/// label seen more than once keeps its last value.
pub fn parse_triage_response(response: &str) -> ParsedTriage {
    let mut result = AnalysisResult::default();
    let mut anomalies = Vec::new();
    let mut seen = [false; RESPONSE_LABELS.len()];

    for line in response.lines() {
        let line = line.trim();

        for (index, label) in RESPONSE_LABELS.iter().enumerate() {
            let Some(value) = strip_label(line, label) else {
                continue;
            };
            seen[index] = true;

            match *label {
                RISK_LEVEL_LABEL => match RiskLevel::from_model_value(value) {
                    Some(level) => result.risk_level = level,
                    None => {
                        result.risk_level = RiskLevel::Medium;
                        anomalies.push(ParseAnomaly::UnrecognizedRiskLevel(value.to_string()));
                    }
                },
                RISK_FLAGS_LABEL => result.risk_flags = parse_risk_flags(value),
                SUBROGATION_LABEL => result.subrogation_potential = parse_subrogation(value),
                ALE_ALERT_LABEL => result.ale_alert = value.to_lowercase() == "yes",
                SUMMARY_LABEL => result.summary = value.to_string(),
                _ => {}
            }
            break;
        }
    }

    for (index, label) in RESPONSE_LABELS.iter().enumerate() {
        if !seen[index] {
            anomalies.push(ParseAnomaly::MissingLabel(label.to_string()));
        }
    }

    ParsedTriage { result, anomalies }
}

/// Returns the trimmed remainder when `line` starts with `LABEL:`.
fn strip_label<'a>(line: &'a str, label: &str) -> Option<&'a str> {
    line.strip_prefix(label)?.strip_prefix(':').map(str::trim)
}

fn parse_risk_flags(value: &str) -> Vec<String> {
    if value.eq_ignore_ascii_case("none") {
        return Vec::new();
    }

    value
        .split(',')
        .map(str::trim)
        .filter(|flag| !flag.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_subrogation(value: &str) -> Option<String> {
    let lower = value.to_lowercase();
    if NO_SUBROGATION_VALUES.contains(&lower.as_str()) {
        None
    } else {
        Some(value.to_string())
    }
}
