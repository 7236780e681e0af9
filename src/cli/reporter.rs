use crate::error::FnolError;
use crate::models::{AnalysisOutcome, ClaimReceipt, DegradedReason};

const RULE: &str = "------------------------------------------------------------";

const NEXT_STEPS: &[&str] = &[
    "Adjuster Contact: You will be contacted by your assigned adjuster within 24-48 hours.",
    "Prevent Further Damage: Take reasonable steps to prevent additional damage to your property. This may include covering openings, shutting off water, or securing the premises.",
    "Document Everything: Continue to photograph any additional damage discovered and keep all damaged items until your adjuster has inspected them.",
    "Save All Receipts: Keep receipts for any emergency repairs, temporary housing, meals, or other loss-related expenses.",
    "Prepare for Inspection: Gather any relevant documents such as receipts for damaged items, repair estimates, or police reports if applicable.",
];

const CONTACTS: &[&str] = &[
    "Claims Hotline: 1-800-555-CLAIM (24/7)",
    "Emergency Services: 1-800-555-HELP",
    "Email: claims@insurtech-carrier.com",
];

pub struct ReceiptFormatter {
    verbose: bool,
}

impl ReceiptFormatter {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    pub fn format_json(&self, receipt: &ClaimReceipt) -> Result<String, FnolError> {
        Ok(serde_json::to_string_pretty(receipt)?)
    }

    pub fn format_receipt(&self, receipt: &ClaimReceipt) -> String {
        let mut output = String::new();
        let result = receipt.analysis.result();

        if result.ale_alert {
            output.push_str(&self.format_section(
                "IMMEDIATE ACTION REQUIRED",
                "Emergency Housing Protocol Activated\n\
                 Our Temporary Housing Specialist has been automatically alerted and will contact you\n\
                 within 4 hours to arrange emergency accommodations.\n\
                 Do not worry about housing arrangements - we are taking care of this for you.",
            ));
            output.push_str("\n\n");
        }

        output.push_str("CLAIM SUCCESSFULLY SUBMITTED\n\n");

        output.push_str(&self.format_section(
            "Claim Details",
            &format!(
                "Claim Number: {}\nPolicy Number: {}\nDate of Loss: {}\nType of Loss: {}\nCoverage: {}",
                receipt.claim_number,
                receipt.policy_number,
                receipt.loss_date.format("%B %d, %Y"),
                receipt.loss_type,
                receipt.coverage.message()
            ),
        ));
        output.push_str("\n\n");

        let mut adjuster = String::new();
        if let Some(ref assignment) = receipt.adjuster {
            adjuster.push_str(&format!(
                "Assigned Adjuster: {}\nLicensed in: {}\n",
                assignment.name, assignment.licensed_state
            ));
        }
        adjuster.push_str(&format!(
            "Contact Email: {}\nContact Phone: {}",
            receipt.email, receipt.phone
        ));
        output.push_str(&self.format_section("Your Adjuster", &adjuster));
        output.push_str("\n\n");

        output.push_str(&self.format_section("AI Triage Summary", &self.format_triage(&receipt.analysis)));
        output.push_str("\n\n");

        let steps = NEXT_STEPS
            .iter()
            .enumerate()
            .map(|(i, step)| format!("{}. {}", i + 1, step))
            .collect::<Vec<_>>()
            .join("\n");
        output.push_str(&self.format_section("What Happens Next", &steps));
        output.push_str("\n\n");

        let contacts = CONTACTS
            .iter()
            .map(|line| format!("- {}", line))
            .collect::<Vec<_>>()
            .join("\n");
        output.push_str(&self.format_section("Need Immediate Assistance?", &contacts));

        output
    }

    fn format_triage(&self, outcome: &AnalysisOutcome) -> String {
        let result = outcome.result();
        let mut lines = vec![
            format!(
                "Risk Assessment: {} {}",
                result.risk_level.as_marker(),
                result.risk_level
            ),
            format!(
                "Subrogation Potential: {}",
                if result.has_subrogation_potential() { "Yes" } else { "No" }
            ),
            format!("ALE Alert: {}", if result.ale_alert { "Yes" } else { "No" }),
        ];

        if !result.summary.is_empty() {
            lines.push(String::new());
            lines.push(format!("Analysis: {}", result.summary));
        }

        if !result.risk_flags.is_empty() {
            lines.push(String::new());
            lines.push("Risk Flags Identified:".to_string());
            lines.extend(result.risk_flags.iter().map(|flag| format!("  - {}", flag)));
        }

        if let Some(ref details) = result.subrogation_potential {
            lines.push(String::new());
            lines.push(format!("Subrogation Details: {}", details));
        }

        match outcome {
            AnalysisOutcome::Degraded { reason, .. } => {
                lines.push(String::new());
                lines.push(match reason {
                    DegradedReason::ConfigurationMissing => {
                        "Note: automated triage is not configured; a claims specialist will review this claim manually.".to_string()
                    }
                    DegradedReason::TransportFailure(_) => {
                        "Note: automated triage is temporarily unavailable; a claims specialist will review this claim manually.".to_string()
                    }
                });
            }
            AnalysisOutcome::Analyzed { anomalies, .. } if self.verbose && !anomalies.is_empty() => {
                lines.push(String::new());
                lines.push("Parse Anomalies:".to_string());
                lines.extend(anomalies.iter().map(|a| format!("  - {}", a)));
            }
            AnalysisOutcome::Analyzed { .. } => {}
        }

        lines.join("\n")
    }

    fn format_section(&self, title: &str, content: &str) -> String {
        format!("{}\n{}\n{}\n{}", RULE, title.to_uppercase(), RULE, content)
    }

    pub fn format_validation_errors(&self, errors: &[String]) -> String {
        let mut output = String::from("Please correct the following errors:\n");
        for error in errors {
            output.push_str(&format!("  - {}\n", error));
        }
        output
    }
}
