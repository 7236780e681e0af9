use crate::analyzer::images::prepare_images;
use crate::analyzer::llm_client::{create_llm_client, LlmConfig, LlmProvider, TriageRequest};
use crate::analyzer::prompts::PromptTemplate;
use crate::analyzer::response_parser::parse_triage_response;
use crate::models::{AnalysisOutcome, AnalysisResult, ClaimImage, ClaimInput, LossType};
use futures::FutureExt;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

enum ProviderState {
    Ready(Arc<dyn LlmProvider>),
    Unconfigured,
    Unavailable(String),
}

/// Runs model triage for a single claim. Every failure is folded into the
/// returned outcome; callers never see an error.
pub struct ClaimAnalyzer {
    provider: ProviderState,
}

impl ClaimAnalyzer {
    pub fn new(config: LlmConfig) -> Self {
        let provider = if !config.has_credentials() {
            ProviderState::Unconfigured
        } else {
            match create_llm_client(&config) {
                Ok(client) => ProviderState::Ready(client.into()),
                Err(e) => {
                    tracing::warn!(error = %e, model = %config.model_name, "model client unavailable");
                    ProviderState::Unavailable(e.to_string())
                }
            }
        };

        Self { provider }
    }

    pub fn with_provider(provider: Arc<dyn LlmProvider>) -> Self {
        Self {
            provider: ProviderState::Ready(provider),
        }
    }

    pub fn unconfigured() -> Self {
        Self {
            provider: ProviderState::Unconfigured,
        }
    }

    pub fn is_configured(&self) -> bool {
        !matches!(self.provider, ProviderState::Unconfigured)
    }

    pub fn model_info(&self) -> String {
        match &self.provider {
            ProviderState::Ready(provider) => format!("Model: {}", provider.model_name()),
            ProviderState::Unconfigured => "Model: not configured".to_string(),
            ProviderState::Unavailable(reason) => format!("Model: unavailable ({})", reason),
        }
    }

    /// Plain-result form of [`ClaimAnalyzer::analyze_claim`].
    pub async fn analyze(
        &self,
        description: &str,
        loss_type: LossType,
        images: &[ClaimImage],
    ) -> AnalysisResult {
        let input = ClaimInput::new(description, loss_type).with_images(images.to_vec());
        self.analyze_claim(&input).await.into_result()
    }

    pub async fn analyze_claim(&self, input: &ClaimInput) -> AnalysisOutcome {
        let provider = match &self.provider {
            ProviderState::Ready(provider) => provider,
            ProviderState::Unconfigured => {
                tracing::info!("no model credential configured, skipping triage");
                return AnalysisOutcome::configuration_missing();
            }
            ProviderState::Unavailable(reason) => {
                return AnalysisOutcome::transport_failure(reason);
            }
        };

        let request = Self::build_request(input);
        tracing::info!(
            loss_type = %input.loss_type,
            images = request.images.len(),
            model = provider.model_name(),
            "requesting claim triage"
        );
        tracing::debug!(prompt = %request.prompt, "triage prompt");

        let reply = AssertUnwindSafe(provider.generate(&request))
            .catch_unwind()
            .await;

        let text = match reply {
            Ok(Ok(text)) => text,
            Ok(Err(e)) => {
                tracing::error!(error = %e, "claim triage failed");
                return AnalysisOutcome::transport_failure(e);
            }
            Err(_) => {
                tracing::error!("model provider panicked during claim triage");
                return AnalysisOutcome::transport_failure("model provider panicked");
            }
        };
        tracing::debug!(reply = %text, "triage reply");

        let parsed = parse_triage_response(&text);
        for anomaly in &parsed.anomalies {
            tracing::warn!(%anomaly, "triage reply deviated from schema");
        }

        AnalysisOutcome::Analyzed {
            result: parsed.result,
            anomalies: parsed.anomalies,
        }
    }

    pub fn build_request(input: &ClaimInput) -> TriageRequest {
        TriageRequest {
            prompt: PromptTemplate::build_claim_triage_prompt(&input.loss_type, &input.description),
            images: prepare_images(&input.images),
        }
    }
}
