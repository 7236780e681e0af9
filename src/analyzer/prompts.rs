use crate::models::LossType;

pub const RISK_LEVEL_LABEL: &str = "RISK_LEVEL";
pub const RISK_FLAGS_LABEL: &str = "RISK_FLAGS";
pub const SUBROGATION_LABEL: &str = "SUBROGATION_POTENTIAL";
pub const ALE_ALERT_LABEL: &str = "ALE_ALERT";
pub const SUMMARY_LABEL: &str = "SUMMARY";

pub const RESPONSE_LABELS: [&str; 5] = [
    RISK_LEVEL_LABEL,
    RISK_FLAGS_LABEL,
    SUBROGATION_LABEL,
    ALE_ALERT_LABEL,
    SUMMARY_LABEL,
];

pub struct PromptTemplate;

impl PromptTemplate {
    /// The triage prompt. The wording is fixed; the parser only depends on the
    /// five labels at the start of the schema lines.
    pub fn build_claim_triage_prompt(loss_type: &LossType, description: &str) -> String {
        format!(
            r#"You are an insurance claims AI analyst for an FNOL (First Notice of Loss) system.
Analyze the following claim and provide a structured assessment.

**Loss Type:** {}
**Description:** {}

Please analyze and respond in the following exact format:

RISK_LEVEL: [Low/Medium/High]
RISK_FLAGS: [List any red flags found, or "None" if none. Red flags include: vague timelines, property vacancy, conflicting damage descriptions, excessive claim amounts, recent policy changes, multiple prior claims. Only mark as High Risk if MULTIPLE triggers exist.]
SUBROGATION_POTENTIAL: [Identify any potential 3rd party liability such as: neighbor's tree, appliance manufacturer, contractor error, landlord negligence, auto accident with other driver, etc. Write "None identified" if none found.]
ALE_ALERT: [Yes/No - Set to Yes ONLY if description indicates: unlivable conditions, major fire damage, structural collapse, displacement required, or total loss]
SUMMARY: [2-3 sentence professional summary of the claim analysis]
"#,
            loss_type.as_str(),
            description
        )
    }
}
