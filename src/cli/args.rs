use crate::analyzer::llm_client::{MAX_TIMEOUT_SECONDS, MIN_TIMEOUT_SECONDS};
use crate::error::FnolError;
use crate::models::LossType;
use chrono::NaiveDate;
use clap::error::ErrorKind;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "fnol")]
#[command(about = "First Notice of Loss intake with AI claim triage")]
#[command(long_about = None)]
#[command(version)]
pub struct Cli {
    /// Policy number as shown on the declarations page
    #[arg(short = 'p', long)]
    pub policy_number: Option<String>,

    /// Two-letter code of the state where the loss occurred
    #[arg(short = 's', long)]
    pub state: Option<String>,

    /// Date of loss (YYYY-MM-DD); defaults to today
    #[arg(long, value_parser = parse_loss_date)]
    pub loss_date: Option<NaiveDate>,

    /// Type of loss (fire, water, hail, wind, theft)
    #[arg(short = 'l', long)]
    pub loss_type: Option<String>,

    /// Free-text description of what happened
    #[arg(long)]
    pub description: Option<String>,

    /// Contact email address
    #[arg(long)]
    pub email: Option<String>,

    /// Contact phone number
    #[arg(long)]
    pub phone: Option<String>,

    /// Photo of the damage; repeatable, only the first three are analyzed
    #[arg(short = 'i', long = "image")]
    pub images: Vec<PathBuf>,

    /// Gemini model to use for triage (overrides FNOL_MODEL)
    #[arg(short = 'm', long)]
    pub model: Option<String>,

    /// HTTP timeout for the model call in seconds (10-300)
    #[arg(short = 't', long, value_parser = validate_timeout)]
    pub timeout: Option<u64>,

    /// Print the receipt as JSON instead of text
    #[arg(long)]
    pub json: bool,

    /// Enable verbose output to stderr
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Enable debug output including model prompts and replies
    #[arg(short = 'd', long)]
    pub debug: bool,
}

impl Cli {
    pub fn parse_args() -> Result<Self, FnolError> {
        Self::try_parse().map_err(|e| match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            _ => FnolError::InvalidArguments(e.to_string()),
        })
    }

    /// `None` when no loss type was given; an error when one was given but
    /// is not a supported type.
    pub fn get_loss_type(&self) -> Result<Option<LossType>, FnolError> {
        match self.loss_type.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(value) => LossType::from_str(value).map(Some),
        }
    }

    pub fn get_loss_date(&self) -> NaiveDate {
        self.loss_date
            .unwrap_or_else(|| chrono::Local::now().date_naive())
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose || self.debug
    }

    pub fn is_debug(&self) -> bool {
        self.debug
    }
}

fn parse_loss_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| format!("Invalid date '{}', expected YYYY-MM-DD", s))
}

fn validate_timeout(s: &str) -> Result<u64, String> {
    let timeout: u64 = s.parse().map_err(|_| "Timeout must be a number")?;

    if (MIN_TIMEOUT_SECONDS..=MAX_TIMEOUT_SECONDS).contains(&timeout) {
        Ok(timeout)
    } else {
        Err(format!(
            "Timeout must be between {} and {} seconds",
            MIN_TIMEOUT_SECONDS, MAX_TIMEOUT_SECONDS
        ))
    }
}
