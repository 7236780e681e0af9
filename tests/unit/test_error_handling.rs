use fnol::analyzer::{create_llm_client, GeminiClient, LlmConfig};
use fnol::error::FnolError;
use fnol::models::LossType;

#[test]
fn client_creation_fails_without_key() {
    assert!(matches!(
        GeminiClient::new(LlmConfig::default()),
        Err(FnolError::ConfigurationMissing)
    ));
}

#[test]
fn client_creation_fails_for_unsupported_model() {
    let config = LlmConfig::default().with_api_key("test").with_model("claude-3");
    assert!(create_llm_client(&config).is_err());
}

#[test]
fn invalid_loss_type_is_an_argument_error() {
    let err = LossType::from_str("earthquake").unwrap_err();
    assert!(matches!(err, FnolError::InvalidArguments(_)));
    assert!(err.to_string().contains("earthquake"));
}

#[test]
fn validation_error_lists_every_field() {
    let err = FnolError::ValidationFailed(vec![
        "State is required".to_string(),
        "Phone Number is required".to_string(),
    ]);
    assert_eq!(
        err.to_string(),
        "Claim form incomplete: State is required; Phone Number is required"
    );
}
