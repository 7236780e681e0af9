use serde::{Deserialize, Serialize};
use std::fmt;

pub const NO_API_KEY_FLAG: &str = "AI analysis unavailable - API key not configured";
pub const NO_API_KEY_SUMMARY: &str = "AI analysis requires a valid GOOGLE_API_KEY.";
pub const FAILURE_SUMMARY: &str = "Unable to complete AI analysis.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Unknown,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
            RiskLevel::Unknown => "Unknown",
        }
    }

    /// Exact, case-sensitive match against the three levels the model may report.
    pub fn from_model_value(value: &str) -> Option<Self> {
        match value {
            "Low" => Some(RiskLevel::Low),
            "Medium" => Some(RiskLevel::Medium),
            "High" => Some(RiskLevel::High),
            _ => None,
        }
    }

    pub fn as_marker(&self) -> &'static str {
        match self {
            RiskLevel::Low => "[LOW]",
            RiskLevel::Medium => "[MED]",
            RiskLevel::High => "[HIGH]",
            RiskLevel::Unknown => "[--]",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub risk_level: RiskLevel,
    pub risk_flags: Vec<String>,
    pub subrogation_potential: Option<String>,
    pub ale_alert: bool,
    pub summary: String,
}

impl Default for AnalysisResult {
    fn default() -> Self {
        Self {
            risk_level: RiskLevel::Medium,
            risk_flags: Vec::new(),
            subrogation_potential: None,
            ale_alert: false,
            summary: String::new(),
        }
    }
}

impl AnalysisResult {
    pub fn unavailable() -> Self {
        Self {
            risk_level: RiskLevel::Unknown,
            risk_flags: vec![NO_API_KEY_FLAG.to_string()],
            subrogation_potential: None,
            ale_alert: false,
            summary: NO_API_KEY_SUMMARY.to_string(),
        }
    }

    pub fn failed<S: fmt::Display>(error: S) -> Self {
        Self {
            risk_level: RiskLevel::Unknown,
            risk_flags: vec![format!("AI analysis error: {}", error)],
            subrogation_potential: None,
            ale_alert: false,
            summary: FAILURE_SUMMARY.to_string(),
        }
    }

    pub fn has_subrogation_potential(&self) -> bool {
        self.subrogation_potential.is_some()
    }

    pub fn is_unknown(&self) -> bool {
        self.risk_level == RiskLevel::Unknown
    }
}

/// A deviation from the five-line reply schema. Recorded alongside the parsed
/// result; never changes the parsed values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParseAnomaly {
    UnrecognizedRiskLevel(String),
    MissingLabel(String),
}

impl fmt::Display for ParseAnomaly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseAnomaly::UnrecognizedRiskLevel(value) => {
                write!(f, "unrecognized RISK_LEVEL value '{}', defaulted to Medium", value)
            }
            ParseAnomaly::MissingLabel(label) => write!(f, "{} line missing from reply", label),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DegradedReason {
    ConfigurationMissing,
    TransportFailure(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnalysisOutcome {
    Analyzed {
        result: AnalysisResult,
        anomalies: Vec<ParseAnomaly>,
    },
    Degraded {
        result: AnalysisResult,
        reason: DegradedReason,
    },
}

impl AnalysisOutcome {
    pub fn configuration_missing() -> Self {
        AnalysisOutcome::Degraded {
            result: AnalysisResult::unavailable(),
            reason: DegradedReason::ConfigurationMissing,
        }
    }

    pub fn transport_failure<S: fmt::Display>(error: S) -> Self {
        let message = error.to_string();
        AnalysisOutcome::Degraded {
            result: AnalysisResult::failed(&message),
            reason: DegradedReason::TransportFailure(message),
        }
    }

    pub fn result(&self) -> &AnalysisResult {
        match self {
            AnalysisOutcome::Analyzed { result, .. } | AnalysisOutcome::Degraded { result, .. } => {
                result
            }
        }
    }

    pub fn into_result(self) -> AnalysisResult {
        match self {
            AnalysisOutcome::Analyzed { result, .. } | AnalysisOutcome::Degraded { result, .. } => {
                result
            }
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, AnalysisOutcome::Degraded { .. })
    }

    pub fn anomalies(&self) -> &[ParseAnomaly] {
        match self {
            AnalysisOutcome::Analyzed { anomalies, .. } => anomalies,
            AnalysisOutcome::Degraded { .. } => &[],
        }
    }
}
