// Intake module - everything about a claim that does not involve the model

pub mod adjuster;
pub mod claim_number;
pub mod policy;
pub mod validation;

pub use adjuster::AdjusterDirectory;
pub use claim_number::generate_claim_number;
pub use policy::PolicyPeriod;
pub use validation::validate_form;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntakeConfig {
    pub policy_period: PolicyPeriod,
    pub adjusters: AdjusterDirectory,
}
