pub mod analyzer;
pub mod cli;
pub mod error;
pub mod intake;
pub mod models;

pub use error::FnolError;

// Re-export commonly used types
pub use models::{
    AnalysisOutcome, AnalysisResult, ClaimForm, ClaimImage, ClaimInput, ClaimReceipt, LossType,
    ParseAnomaly, RiskLevel,
};

pub use analyzer::{ClaimAnalyzer, LlmConfig};

pub use cli::CliHandler;
