use crate::analyzer::images::ImagePart;
use crate::error::FnolError;
use futures::future::BoxFuture;
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 60;
pub const MIN_TIMEOUT_SECONDS: u64 = 10;
pub const MAX_TIMEOUT_SECONDS: u64 = 300;

const API_KEY_VAR: &str = "GOOGLE_API_KEY";
const MODEL_VAR: &str = "FNOL_MODEL";
const API_BASE_VAR: &str = "FNOL_API_BASE";
const TIMEOUT_VAR: &str = "FNOL_TIMEOUT";

#[derive(Debug, Clone, PartialEq)]
pub struct LlmConfig {
    pub model_name: String,
    pub api_key: Option<String>,
    pub base_url: String,
    pub timeout_seconds: u64,
    pub max_output_tokens: Option<u32>,
    pub temperature: Option<f32>,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            model_name: DEFAULT_MODEL.to_string(),
            api_key: None,
            base_url: DEFAULT_API_BASE.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            max_output_tokens: Some(1024),
            temperature: Some(0.3),
        }
    }
}

impl LlmConfig {
    /// Reads configuration from the process environment, after loading a
    /// `.env` file from the working directory when one exists.
    pub fn from_env() -> Result<Self, FnolError> {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!(path = %path.display(), "loaded .env");
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, FnolError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        config.api_key = lookup(API_KEY_VAR).filter(|key| !key.trim().is_empty());

        if let Some(model) = lookup(MODEL_VAR).filter(|m| !m.trim().is_empty()) {
            config.model_name = model.trim().to_string();
        }

        if let Some(base) = lookup(API_BASE_VAR).filter(|b| !b.trim().is_empty()) {
            config.base_url = base.trim().to_string();
        }

        if let Some(raw) = lookup(TIMEOUT_VAR) {
            let timeout = raw.trim().parse::<u64>().map_err(|_| {
                FnolError::ConfigError(format!("{} must be a number, got '{}'", TIMEOUT_VAR, raw))
            })?;
            config = config.with_timeout(timeout)?;
        }

        Ok(config)
    }

    pub fn with_api_key<S: Into<String>>(mut self, api_key: S) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_model<S: Into<String>>(mut self, model_name: S) -> Self {
        self.model_name = model_name.into();
        self
    }

    pub fn with_base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout_seconds: u64) -> Result<Self, FnolError> {
        if !(MIN_TIMEOUT_SECONDS..=MAX_TIMEOUT_SECONDS).contains(&timeout_seconds) {
            return Err(FnolError::ConfigError(format!(
                "Timeout must be between {} and {} seconds",
                MIN_TIMEOUT_SECONDS, MAX_TIMEOUT_SECONDS
            )));
        }
        self.timeout_seconds = timeout_seconds;
        Ok(self)
    }

    pub fn has_credentials(&self) -> bool {
        self.api_key
            .as_deref()
            .map(|key| !key.trim().is_empty())
            .unwrap_or(false)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

/// One outbound generation call: the text prompt plus inline images.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriageRequest {
    pub prompt: String,
    pub images: Vec<ImagePart>,
}

pub trait LlmProvider: Send + Sync {
    fn generate<'a>(&'a self, request: &'a TriageRequest)
        -> BoxFuture<'a, Result<String, FnolError>>;
    fn model_name(&self) -> &str;
}

#[derive(Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    #[serde(rename = "generationConfig", skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Serialize)]
struct Content<'a> {
    role: &'static str,
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
#[serde(untagged)]
enum Part<'a> {
    Text { text: &'a str },
    InlineData { inline_data: InlineData<'a> },
}

#[derive(Serialize)]
struct InlineData<'a> {
    mime_type: &'a str,
    data: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_output_tokens: Option<u32>,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<CandidateContent>,
    finish_reason: Option<String>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

pub struct GeminiClient {
    config: LlmConfig,
    api_key: String,
    http: reqwest::Client,
}

impl GeminiClient {
    pub fn new(config: LlmConfig) -> Result<Self, FnolError> {
        let api_key = config
            .api_key
            .clone()
            .filter(|key| !key.trim().is_empty())
            .ok_or(FnolError::ConfigurationMissing)?;

        let http = reqwest::Client::builder().timeout(config.timeout()).build()?;

        Ok(Self {
            config,
            api_key,
            http,
        })
    }

    fn endpoint(&self) -> String {
        let model = self
            .config
            .model_name
            .strip_prefix("gemini/")
            .unwrap_or(&self.config.model_name);

        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            model
        )
    }

    fn build_body<'a>(&self, request: &'a TriageRequest) -> GenerateContentRequest<'a> {
        let mut parts = Vec::with_capacity(request.images.len() + 1);
        parts.push(Part::Text {
            text: &request.prompt,
        });
        parts.extend(request.images.iter().map(|image| Part::InlineData {
            inline_data: InlineData {
                mime_type: &image.mime_type,
                data: &image.data,
            },
        }));

        let generation_config =
            if self.config.temperature.is_some() || self.config.max_output_tokens.is_some() {
                Some(GenerationConfig {
                    temperature: self.config.temperature,
                    max_output_tokens: self.config.max_output_tokens,
                })
            } else {
                None
            };

        GenerateContentRequest {
            contents: vec![Content {
                role: "user",
                parts,
            }],
            generation_config,
        }
    }

    async fn send_generate_request(&self, request: &TriageRequest) -> Result<String, FnolError> {
        let body = self.build_body(request);

        let response = self
            .http
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let payload = response.text().await?;

        if !status.is_success() {
            return Err(FnolError::LlmClientError(format!(
                "Request failed with status {}: {}",
                status.as_u16(),
                payload.chars().take(500).collect::<String>()
            )));
        }

        let parsed: GenerateContentResponse = serde_json::from_str(&payload)?;
        extract_text(parsed)
    }
}

fn extract_text(response: GenerateContentResponse) -> Result<String, FnolError> {
    let candidate = response
        .candidates
        .into_iter()
        .next()
        .ok_or_else(|| FnolError::InvalidResponse("no candidates returned".to_string()))?;

    let text: String = candidate
        .content
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|part| part.text)
                .collect()
        })
        .unwrap_or_default();

    if text.is_empty() {
        return Err(FnolError::InvalidResponse(format!(
            "candidate contained no text (finish reason: {})",
            candidate.finish_reason.as_deref().unwrap_or("unspecified")
        )));
    }

    Ok(text)
}

impl LlmProvider for GeminiClient {
    fn generate<'a>(
        &'a self,
        request: &'a TriageRequest,
    ) -> BoxFuture<'a, Result<String, FnolError>> {
        Box::pin(self.send_generate_request(request))
    }

    fn model_name(&self) -> &str {
        &self.config.model_name
    }
}

pub fn create_llm_client(config: &LlmConfig) -> Result<Box<dyn LlmProvider>, FnolError> {
    let model_name = config.model_name.trim();
    if !is_gemini_model(model_name) {
        return Err(FnolError::LlmClientError(format!(
            "Unsupported model '{}'. Use a Gemini (gemini-*) model",
            model_name
        )));
    }

    Ok(Box::new(GeminiClient::new(config.clone())?))
}

fn is_gemini_model(model: &str) -> bool {
    let candidate = model.strip_prefix("gemini/").unwrap_or(model);
    candidate.starts_with("gemini-")
}
