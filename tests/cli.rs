use assert_cmd::cargo::cargo_bin_cmd;
use predicates::str::contains;

#[test]
fn help_lists_gate_options() {
    cargo_bin_cmd!("gov-gates")
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("--repo-root"))
        .stdout(contains("--event-path"))
        .stdout(contains("--config"));
}

#[test]
fn version_reports_binary_name() {
    cargo_bin_cmd!("gov-gates")
        .arg("--version")
        .assert()
        .success()
        .stdout(contains("gov-gates"));
}

#[test]
fn unknown_flags_are_rejected() {
    cargo_bin_cmd!("gov-gates")
        .arg("--json")
        .assert()
        .failure()
        .stderr(contains("--json"));
}
