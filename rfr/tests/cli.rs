use assert_cmd::Command;
use predicates::prelude::*;

#[allow(deprecated)]
fn client_cmd() -> Command {
    let mut cmd = Command::cargo_bin("rfr-client").unwrap();
    cmd.env_remove("RFR_LOG");
    cmd
}

#[allow(deprecated)]
fn server_cmd() -> Command {
    let mut cmd = Command::cargo_bin("rfr-server").unwrap();
    cmd.env_remove("RFR_LOG");
    cmd
}

#[test]
fn client_help_works() {
    client_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--client-enforces-server-package-upgrade"));
}

#[test]
fn server_help_works() {
    server_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--upgrade-server-packages"));
}

#[test]
fn client_prints_run_plan_with_accumulated_extensions() {
    let workdir = tempfile::tempdir().unwrap();
    let output = client_cmd()
        .current_dir(workdir.path())
        .args(["--extension", "py", "--extension", "robot", "--output-dir", "results"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let plan: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(plan["mode"], "run");
    assert_eq!(plan["extensions"], serde_json::json!(["py", "robot"]));
    assert_eq!(plan["input_dirs"], serde_json::json!(["."]));
    assert_eq!(plan["log_level"], "WARN");
    assert!(workdir.path().join("results").is_dir());
}

#[test]
fn client_uses_default_extensions() {
    let workdir = tempfile::tempdir().unwrap();
    client_cmd()
        .current_dir(workdir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"resource\""));
}

#[test]
fn client_rejects_missing_input_dir() {
    let workdir = tempfile::tempdir().unwrap();
    client_cmd()
        .current_dir(workdir.path())
        .args(["--debug", "--input-dir", "/does/not/exist", "--port", "9000"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("not a valid input directory"))
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn client_rejects_malformed_port() {
    client_cmd().args(["--port", "eighty"]).assert().code(2);
}

#[test]
fn client_connection_test_mode() {
    client_cmd()
        .args(["--test-connection", "--host", "runner.example.org"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"test-connection\""))
        .stdout(predicate::str::contains("runner.example.org"));
}

#[test]
fn server_rejects_unknown_policy() {
    server_cmd()
        .args(["--upgrade-server-packages", "sometimes"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("NEVER, OUTDATED, ALWAYS"));
}

#[test]
fn server_requires_tls_material() {
    let workdir = tempfile::tempdir().unwrap();
    server_cmd()
        .current_dir(workdir.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("privkey.pem"));
}

#[test]
fn server_rejects_unsupported_requirement_operator() {
    server_cmd()
        .args(["--require", "robotframework~=6.1"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("~="));
}

#[test]
fn server_preflight_treats_unknown_packages_as_outdated() {
    let workdir = tempfile::tempdir().unwrap();
    std::fs::write(workdir.path().join("privkey.pem"), "key").unwrap();
    std::fs::write(workdir.path().join("cacert.pem"), "cert").unwrap();

    let output = server_cmd()
        .current_dir(workdir.path())
        .env("RFR_PYTHON", "/nonexistent/python-for-rfr-tests")
        .env("RFR_PYPI_URL", "http://127.0.0.1:9/pypi")
        .args([
            "--upgrade-server-packages",
            "OUTDATED",
            "--require",
            "robotframework>=6.1",
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let startup: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(startup["upgrade_policy"], "OUTDATED");
    let decision = &startup["preflight"][0];
    assert_eq!(decision["status"]["compliance"], "Indeterminate");
    assert_eq!(decision["upgrade"], true);
}

#[test]
fn server_never_policy_vetoes_preflight_upgrades() {
    let workdir = tempfile::tempdir().unwrap();
    std::fs::write(workdir.path().join("privkey.pem"), "key").unwrap();
    std::fs::write(workdir.path().join("cacert.pem"), "cert").unwrap();

    server_cmd()
        .current_dir(workdir.path())
        .env("RFR_PYTHON", "/nonexistent/python-for-rfr-tests")
        .env("RFR_PYPI_URL", "http://127.0.0.1:9/pypi")
        .args(["--require", "requests==latest"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"upgrade\": false"));
}
