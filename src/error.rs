use thiserror::Error;

#[derive(Error, Debug)]
pub enum FnolError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Model API key not configured")]
    ConfigurationMissing,

    #[error("LLM client error: {0}")]
    LlmClientError(String),

    #[error("Invalid LLM response: {0}")]
    InvalidResponse(String),

    #[error("Image could not be decoded: {0}")]
    ImageDecode(String),

    #[error("Invalid command line arguments: {0}")]
    InvalidArguments(String),

    #[error("Claim form incomplete: {}", .0.join("; "))]
    ValidationFailed(Vec<String>),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("JSON serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}
