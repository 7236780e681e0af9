use crate::models::ClaimForm;

/// Checks that every required field is filled in, reporting all gaps at once.
pub fn validate_form(form: &ClaimForm) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if form.policy_number.trim().is_empty() {
        errors.push("Policy Number is required".to_string());
    }
    if form.state.trim().is_empty() {
        errors.push("State is required".to_string());
    }
    if form.loss_type.is_none() {
        errors.push("Type of Loss is required".to_string());
    }
    if form.description.trim().is_empty() {
        errors.push("Description of Loss is required".to_string());
    }
    if form.email.trim().is_empty() {
        errors.push("Email Address is required".to_string());
    }
    if form.phone.trim().is_empty() {
        errors.push("Phone Number is required".to_string());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
