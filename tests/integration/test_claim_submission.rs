use clap::Parser;
use fnol::analyzer::ClaimAnalyzer;
use fnol::cli::{Cli, CliHandler};
use fnol::error::FnolError;
use fnol::models::{AdjusterAssignment, CoverageCheck, LossType, RiskLevel};
use std::sync::Arc;

use crate::common::{png_bytes, RecordingProvider, WELL_FORMED_REPLY};

fn base_args() -> Vec<String> {
    [
        "fnol",
        "--policy-number", "POL-2026-001234",
        "--state", "FL",
        "--loss-date", "2026-08-20",
        "--loss-type", "wind",
        "--description", "Hurricane tore shingles off and a neighbor's tree hit the roof",
        "--email", "owner@example.com",
        "--phone", "(555) 123-4567",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

#[tokio::test]
async fn submission_builds_full_receipt() {
    let dir = tempfile::tempdir().unwrap();
    let photo = dir.path().join("roof.png");
    std::fs::write(&photo, png_bytes()).unwrap();

    let mut args = base_args();
    args.push("--image".to_string());
    args.push(photo.display().to_string());

    let provider = Arc::new(RecordingProvider::replying(WELL_FORMED_REPLY));
    let receipt = CliHandler::new(Cli::try_parse_from(args).unwrap())
        .with_analyzer(ClaimAnalyzer::with_provider(provider.clone()))
        .submit()
        .await
        .expect("submission succeeds");

    assert!(receipt.claim_number.starts_with("CLM-"));
    assert_eq!(receipt.loss_type, LossType::Wind);
    assert_eq!(receipt.coverage, CoverageCheck::WithinPeriod);
    assert_eq!(
        receipt.adjuster,
        Some(AdjusterAssignment {
            name: "Carlos Rodriguez".to_string(),
            licensed_state: "FL".to_string(),
        })
    );
    assert_eq!(receipt.analysis.result().risk_level, RiskLevel::High);
    assert!(receipt.requires_emergency_housing());

    let requests = provider.recorded();
    assert_eq!(requests[0].images.len(), 1);
    assert_eq!(requests[0].images[0].name, "roof.png");
}

#[tokio::test]
async fn out_of_period_loss_still_submits() {
    let mut args = base_args();
    let date_index = args.iter().position(|a| a == "2026-08-20").unwrap();
    args[date_index] = "2025-12-31".to_string();
    let state_index = args.iter().position(|a| a == "FL").unwrap();
    args[state_index] = "NV".to_string();

    let receipt = CliHandler::new(Cli::try_parse_from(args).unwrap())
        .with_analyzer(ClaimAnalyzer::unconfigured())
        .submit()
        .await
        .unwrap();

    assert_eq!(receipt.coverage, CoverageCheck::PrecedesInception);
    assert!(receipt.adjuster.is_none());
    assert!(receipt.analysis.is_degraded());
    assert_eq!(receipt.analysis.result().risk_level, RiskLevel::Unknown);
}

#[tokio::test]
async fn incomplete_form_is_rejected_before_analysis() {
    let provider = Arc::new(RecordingProvider::replying(WELL_FORMED_REPLY));
    let cli = Cli::try_parse_from(["fnol", "--loss-type", "fire"]).unwrap();

    let err = CliHandler::new(cli)
        .with_analyzer(ClaimAnalyzer::with_provider(provider.clone()))
        .submit()
        .await
        .unwrap_err();

    match err {
        FnolError::ValidationFailed(errors) => {
            assert_eq!(errors.len(), 5);
            assert!(errors.contains(&"Policy Number is required".to_string()));
            assert!(!errors.contains(&"Type of Loss is required".to_string()));
        }
        other => panic!("unexpected error: {:?}", other),
    }
    assert!(provider.recorded().is_empty());
}

#[tokio::test]
async fn unreadable_image_path_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let mut args = base_args();
    args.push("--image".to_string());
    args.push(dir.path().join("missing.jpg").display().to_string());

    let err = CliHandler::new(Cli::try_parse_from(args).unwrap())
        .with_analyzer(ClaimAnalyzer::unconfigured())
        .submit()
        .await
        .unwrap_err();

    match err {
        FnolError::IoError(e) => assert!(e.to_string().contains("missing.jpg")),
        other => panic!("unexpected error: {:?}", other),
    }
}
