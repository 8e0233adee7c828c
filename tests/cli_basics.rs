mod common;
use common::awsdac_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_help_command() {
    awsdac_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Diagram-as-code for AWS architecture."))
        .stdout(predicate::str::contains("--cfn-template"))
        .stdout(predicate::str::contains("--server"));
}

#[test]
fn test_version_command() {
    awsdac_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("awsdac"));
}

#[test]
fn test_missing_input_prints_usage_and_touches_nothing() {
    let temp_dir = tempdir().unwrap();

    awsdac_cmd()
        .current_dir(&temp_dir)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Usage: awsdac"));

    assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 0);
}

#[test]
fn test_server_mode_rejects_positional_input() {
    awsdac_cmd()
        .args(["--server", "diagram.yaml"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn test_template_with_cfn_template_is_a_usage_error() {
    awsdac_cmd()
        .args(["stack.yaml", "--cfn-template", "--template"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Usage: awsdac"));
}

#[test]
fn test_dac_file_without_cfn_template_is_a_usage_error() {
    awsdac_cmd()
        .args(["diagram.yaml", "--dac-file"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("--cfn-template"));
}

#[test]
fn test_unknown_flag_exits_with_one() {
    awsdac_cmd()
        .args(["diagram.yaml", "--no-such-flag"])
        .assert()
        .code(1);
}

#[test]
fn test_invalid_config_file_fails() {
    let temp_dir = tempdir().unwrap();
    fs::write(temp_dir.path().join("broken.toml"), "[engine\n").unwrap();
    fs::write(temp_dir.path().join("diagram.yaml"), "Diagram: {}\n").unwrap();

    awsdac_cmd()
        .current_dir(&temp_dir)
        .args(["diagram.yaml", "--config", "broken.toml"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to load configuration"));
}

#[test]
fn test_broken_local_config_layer_fails() {
    let temp_dir = tempdir().unwrap();
    fs::create_dir_all(temp_dir.path().join("config")).unwrap();
    fs::write(temp_dir.path().join("config.toml"), "[output]\npath = \"diagram.png\"\n").unwrap();
    fs::write(temp_dir.path().join("config/local.toml"), "[engine\n").unwrap();
    fs::write(temp_dir.path().join("diagram.yaml"), "Diagram: {}\n").unwrap();

    awsdac_cmd()
        .current_dir(&temp_dir)
        .arg("diagram.yaml")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to load configuration"))
        .stderr(predicate::str::contains("local.toml"));

    assert!(!temp_dir.path().join("diagram.png").exists());
}
