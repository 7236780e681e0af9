pub mod args;
pub mod logging;
pub mod reporter;

pub use args::Cli;
pub use logging::init_tracing;
pub use reporter::ReceiptFormatter;

use crate::analyzer::{ClaimAnalyzer, LlmConfig};
use crate::error::FnolError;
use crate::intake::{generate_claim_number, validate_form, IntakeConfig};
use crate::models::{ClaimForm, ClaimImage, ClaimReceipt};
use std::path::Path;

pub struct CliHandler {
    cli: Cli,
    intake: IntakeConfig,
    analyzer: Option<ClaimAnalyzer>,
}

impl CliHandler {
    pub fn new(cli: Cli) -> Self {
        Self {
            cli,
            intake: IntakeConfig::default(),
            analyzer: None,
        }
    }

    pub fn with_intake_config(mut self, intake: IntakeConfig) -> Self {
        self.intake = intake;
        self
    }

    /// Uses the given analyzer instead of building one from the environment.
    pub fn with_analyzer(mut self, analyzer: ClaimAnalyzer) -> Self {
        self.analyzer = Some(analyzer);
        self
    }

    pub async fn run(self) -> Result<i32, FnolError> {
        let formatter = ReceiptFormatter::new(self.cli.is_verbose());
        let as_json = self.cli.json;

        let receipt = match self.submit().await {
            Ok(receipt) => receipt,
            Err(FnolError::ValidationFailed(errors)) => {
                eprint!("{}", formatter.format_validation_errors(&errors));
                return Err(FnolError::ValidationFailed(errors));
            }
            Err(e) => return Err(e),
        };

        if as_json {
            println!("{}", formatter.format_json(&receipt)?);
        } else {
            println!("{}", formatter.format_receipt(&receipt));
        }

        Ok(0)
    }

    /// Runs intake and triage for the claim described by the arguments.
    pub async fn submit(self) -> Result<ClaimReceipt, FnolError> {
        let form = self.build_form()?;
        validate_form(&form).map_err(FnolError::ValidationFailed)?;

        let input = form.to_claim_input().ok_or_else(|| {
            FnolError::ValidationFailed(vec!["Type of Loss is required".to_string()])
        })?;

        let coverage = self.intake.policy_period.check(form.loss_date);
        if !coverage.is_covered() {
            tracing::warn!(loss_date = %form.loss_date, "{}", coverage.message());
        }

        let adjuster = self.intake.adjusters.lookup(&form.state);
        match adjuster {
            Some(ref assignment) => {
                tracing::info!(adjuster = %assignment.name, state = %assignment.licensed_state, "adjuster assigned")
            }
            None => tracing::warn!(state = %form.state, "no adjuster licensed for state"),
        }

        let claim_number = generate_claim_number();
        tracing::info!(claim_number = %claim_number, "claim registered");

        let analyzer = match self.analyzer {
            Some(analyzer) => analyzer,
            None => ClaimAnalyzer::new(Self::llm_config(&self.cli)?),
        };
        tracing::debug!("{}", analyzer.model_info());

        let outcome = analyzer.analyze_claim(&input).await;
        tracing::info!(
            loss_type = %input.loss_type,
            risk = %outcome.result().risk_level,
            degraded = outcome.is_degraded(),
            "claim triage complete"
        );

        Ok(ClaimReceipt::new(
            claim_number,
            &form,
            input.loss_type,
            coverage,
            adjuster,
            outcome,
        ))
    }

    fn llm_config(cli: &Cli) -> Result<LlmConfig, FnolError> {
        let mut config = LlmConfig::from_env()?;
        if let Some(ref model) = cli.model {
            config = config.with_model(model.clone());
        }
        if let Some(timeout) = cli.timeout {
            config = config.with_timeout(timeout)?;
        }
        Ok(config)
    }

    fn build_form(&self) -> Result<ClaimForm, FnolError> {
        let images = self
            .cli
            .images
            .iter()
            .map(|path| read_image(path))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ClaimForm {
            policy_number: self.cli.policy_number.clone().unwrap_or_default(),
            state: self.cli.state.clone().unwrap_or_default(),
            loss_date: self.cli.get_loss_date(),
            loss_type: self.cli.get_loss_type()?,
            description: self.cli.description.clone().unwrap_or_default(),
            email: self.cli.email.clone().unwrap_or_default(),
            phone: self.cli.phone.clone().unwrap_or_default(),
            images,
        })
    }
}

fn read_image(path: &Path) -> Result<ClaimImage, FnolError> {
    let bytes = std::fs::read(path)
        .map_err(|e| std::io::Error::new(e.kind(), format!("{}: {}", path.display(), e)))?;

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    Ok(ClaimImage::new(name, bytes))
}
