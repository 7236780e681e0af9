pub mod analysis;
pub mod claim;
pub mod report;

pub use analysis::{AnalysisOutcome, AnalysisResult, DegradedReason, ParseAnomaly, RiskLevel};
pub use claim::{ClaimForm, ClaimImage, ClaimInput, LossType};
pub use report::{AdjusterAssignment, ClaimReceipt, CoverageCheck};
