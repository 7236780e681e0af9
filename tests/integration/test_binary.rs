use std::process::Command;

fn fnol() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_fnol"));
    command
        .env_remove("GOOGLE_API_KEY")
        .env_remove("FNOL_MODEL")
        .env_remove("FNOL_API_BASE")
        .env_remove("FNOL_TIMEOUT")
        .env_remove("RUST_LOG");
    command
}

#[test]
fn missing_fields_exit_with_code_2() {
    let dir = tempfile::tempdir().unwrap();
    let output = fnol()
        .current_dir(dir.path())
        .args(["--state", "GA"])
        .output()
        .expect("run fnol");

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Policy Number is required"));
    assert!(!stderr.contains("State is required"));
}

#[test]
fn receipt_printed_without_api_key() {
    let dir = tempfile::tempdir().unwrap();
    let output = fnol()
        .current_dir(dir.path())
        .args([
            "--policy-number", "POL-2026-000777",
            "--state", "GA",
            "--loss-date", "2026-04-02",
            "--loss-type", "Fire",
            "--description", "Electrical fire in the garage",
            "--email", "owner@example.com",
            "--phone", "555-0199",
        ])
        .output()
        .expect("run fnol");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("CLAIM SUCCESSFULLY SUBMITTED"));
    assert!(stdout.contains("Assigned Adjuster: Sarah Mitchell"));
    assert!(stdout.contains("AI analysis unavailable - API key not configured"));
    assert!(stdout.contains("Risk Assessment: [--] Unknown"));
}

#[test]
fn invalid_loss_type_exits_with_code_2() {
    let dir = tempfile::tempdir().unwrap();
    let output = fnol()
        .current_dir(dir.path())
        .args(["--loss-type", "meteor"])
        .output()
        .expect("run fnol");

    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn unreadable_image_exits_with_code_1() {
    let dir = tempfile::tempdir().unwrap();
    let output = fnol()
        .current_dir(dir.path())
        .args([
            "--policy-number", "POL-2026-000778",
            "--state", "TX",
            "--loss-type", "hail",
            "--description", "Hail broke two skylights",
            "--email", "owner@example.com",
            "--phone", "555-0101",
            "--image", "missing-photo.jpg",
        ])
        .output()
        .expect("run fnol");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("missing-photo.jpg"));
}
