use crate::models::analysis::AnalysisOutcome;
use crate::models::claim::{ClaimForm, LossType};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CoverageCheck {
    WithinPeriod,
    PrecedesInception,
    ExceedsExpiration,
}

impl CoverageCheck {
    pub fn is_covered(&self) -> bool {
        matches!(self, CoverageCheck::WithinPeriod)
    }

    pub fn message(&self) -> &'static str {
        match self {
            CoverageCheck::WithinPeriod => "Date of Loss within policy period.",
            CoverageCheck::PrecedesInception => {
                "Potential Coverage Gap: Date of Loss precedes policy inception."
            }
            CoverageCheck::ExceedsExpiration => {
                "Potential Coverage Gap: Date of Loss exceeds policy expiration."
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdjusterAssignment {
    pub name: String,
    pub licensed_state: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClaimReceipt {
    pub claim_number: String,
    pub policy_number: String,
    pub loss_date: NaiveDate,
    pub loss_type: LossType,
    pub email: String,
    pub phone: String,
    pub coverage: CoverageCheck,
    pub adjuster: Option<AdjusterAssignment>,
    pub analysis: AnalysisOutcome,
}

impl ClaimReceipt {
    pub fn new(
        claim_number: String,
        form: &ClaimForm,
        loss_type: LossType,
        coverage: CoverageCheck,
        adjuster: Option<AdjusterAssignment>,
        analysis: AnalysisOutcome,
    ) -> Self {
        Self {
            claim_number,
            policy_number: form.policy_number.clone(),
            loss_date: form.loss_date,
            loss_type,
            email: form.email.clone(),
            phone: form.phone.clone(),
            coverage,
            adjuster,
            analysis,
        }
    }

    pub fn requires_emergency_housing(&self) -> bool {
        self.analysis.result().ale_alert
    }
}
