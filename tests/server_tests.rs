mod common;
use common::awsdac_cmd;
use predicates::prelude::*;
use std::fs;
use std::net::TcpListener;
use tempfile::tempdir;

#[test]
fn test_server_bind_failure_exits_with_one() {
    let occupied = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = occupied.local_addr().unwrap().port();

    let temp_dir = tempdir().unwrap();
    fs::write(
        temp_dir.path().join("config.toml"),
        "[server]\nhost = \"127.0.0.1\"\n",
    )
    .unwrap();

    awsdac_cmd()
        .current_dir(&temp_dir)
        .args(["--server", "--port", &port.to_string()])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to bind"));
}

#[test]
fn test_server_mode_rejects_illegal_flag_combination() {
    awsdac_cmd()
        .args(["--server", "--cfn-template", "--template"])
        .assert()
        .code(1);
}
