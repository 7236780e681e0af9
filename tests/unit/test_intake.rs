use chrono::{Datelike, NaiveDate};
use fnol::intake::{generate_claim_number, validate_form, AdjusterDirectory, PolicyPeriod};
use fnol::models::{ClaimForm, CoverageCheck, LossType};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn policy_period_checks_loss_date() {
    let period = PolicyPeriod::default();

    assert_eq!(period.check(date(2026, 1, 1)), CoverageCheck::WithinPeriod);
    assert_eq!(period.check(date(2025, 11, 30)), CoverageCheck::PrecedesInception);
    assert_eq!(period.check(date(2027, 2, 1)), CoverageCheck::ExceedsExpiration);
    assert!(period
        .check(date(2025, 11, 30))
        .message()
        .contains("precedes policy inception"));
}

#[test]
fn adjuster_lookup_covers_four_states() {
    let directory = AdjusterDirectory::default();

    for (state, name) in [
        ("GA", "Sarah Mitchell"),
        ("FL", "Carlos Rodriguez"),
        ("TX", "Jennifer Thompson"),
        ("AL", "Michael Chen"),
    ] {
        let assignment = directory.lookup(state).expect("adjuster for state");
        assert_eq!(assignment.name, name);
        assert_eq!(assignment.licensed_state, state);
    }

    assert!(directory.lookup("NY").is_none());
}

#[test]
fn claim_numbers_follow_format() {
    let year = chrono::Local::now().year();
    let claim_number = generate_claim_number();
    let prefix = format!("CLM-{}-", year);

    assert!(claim_number.starts_with(&prefix));
    let suffix = &claim_number[prefix.len()..];
    assert_eq!(suffix.len(), 4);
    assert!(suffix
        .chars()
        .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
}

#[test]
fn form_validation_reports_missing_fields() {
    let form = ClaimForm {
        policy_number: "POL-9".to_string(),
        state: String::new(),
        loss_date: date(2026, 5, 5),
        loss_type: Some(LossType::Theft),
        description: "Bicycle stolen from garage".to_string(),
        email: String::new(),
        phone: "555-0101".to_string(),
        images: Vec::new(),
    };

    let errors = validate_form(&form).unwrap_err();
    assert_eq!(errors, vec!["State is required", "Email Address is required"]);
}
