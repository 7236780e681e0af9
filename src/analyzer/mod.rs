// Analyzer module - builds the triage prompt, calls the model and parses the reply

pub mod images;
pub mod llm_client;
pub mod orchestrator;
pub mod prompts;
pub mod response_parser;

pub use images::{prepare_images, ImagePart, MAX_IMAGES};
pub use llm_client::{create_llm_client, GeminiClient, LlmConfig, LlmProvider, TriageRequest};
pub use orchestrator::ClaimAnalyzer;
pub use prompts::PromptTemplate;
pub use response_parser::{parse_triage_response, ParsedTriage};
