use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn signup(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("signup").unwrap();
    cmd.env("SALES_SIGNUP_DATA_DIR", data_dir.path())
        .env_remove("SIGNUP_PASSWORD")
        .env_remove("SIGNUP_CONFIRM_PASSWORD")
        .env_remove("SIGNUP_LOGIN_PASSWORD")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn validate_personal_step_passes() {
    let dir = TempDir::new().unwrap();
    signup(&dir)
        .args([
            "validate",
            "signup",
            "--step",
            "personal",
            "--first-name",
            "Ana",
            "--last-name",
            "Lima",
            "--email",
            "ana@example.com",
            "--phone",
            "11 99999-0000",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("email"))
        .stdout(predicate::str::contains("ok"));
}

#[test]
fn validate_reports_field_messages() {
    let dir = TempDir::new().unwrap();
    signup(&dir)
        .args([
            "validate",
            "signup",
            "--step",
            "personal",
            "--first-name",
            "Ana",
            "--email",
            "ana@",
        ])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Please enter your last name."))
        .stdout(predicate::str::contains("Please enter a valid email."))
        .stdout(predicate::str::contains("Please enter your phone number."))
        .stderr(predicate::str::contains("3 field(s) invalid"));
}

#[test]
fn validate_account_step_reads_passwords_from_env() {
    let dir = TempDir::new().unwrap();
    signup(&dir)
        .args(["validate", "signup", "--step", "account", "--username", "ana"])
        .env("SIGNUP_PASSWORD", "correct horse")
        .env("SIGNUP_CONFIRM_PASSWORD", "correct horses")
        .assert()
        .failure()
        .stdout(predicate::str::contains("Passwords do not match."));
}

#[test]
fn validate_json_output() {
    let dir = TempDir::new().unwrap();
    let output = signup(&dir)
        .args([
            "validate",
            "signup",
            "--step",
            "account",
            "--json",
            "--username",
            "ana",
            "--password",
            "short",
            "--confirm-password",
            "short",
        ])
        .output()
        .unwrap();

    assert!(!output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["valid"], false);
    assert_eq!(value["first_invalid"], "password");
    assert_eq!(value["fields"][1]["violation"], "too_short");
    assert_eq!(
        value["fields"][1]["message"],
        "Password must be at least 8 characters."
    );
}

#[test]
fn validate_login() {
    let dir = TempDir::new().unwrap();
    signup(&dir)
        .args(["validate", "login", "--username", "ana", "--password", "pw"])
        .assert()
        .success();

    signup(&dir)
        .args(["validate", "login", "--username", "   "])
        .assert()
        .failure()
        .stdout(predicate::str::contains("invalid"));
}

#[test]
fn config_shows_paths_and_writes_log() {
    let dir = TempDir::new().unwrap();
    signup(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Focus mode:         FirstInvalid"))
        .stdout(predicate::str::contains("config.json"));

    assert!(dir.path().join("logs").is_dir());
    assert!(dir.path().join("config.json").is_file());
}

#[test]
fn malformed_settings_fail_cleanly() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("config.json"), "{ not json").unwrap();

    signup(&dir)
        .arg("config")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse settings file"));
}

#[test]
fn repeated_runs_share_one_log_file() {
    let dir = TempDir::new().unwrap();
    signup(&dir).arg("config").assert().success();
    signup(&dir)
        .args(["validate", "login", "--username", "ana", "--password", "pw"])
        .assert()
        .success();

    let logs = std::fs::read_dir(dir.path().join("logs")).unwrap().count();
    assert_eq!(logs, 1);
}
