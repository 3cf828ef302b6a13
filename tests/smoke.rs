use assert_cmd::Command;
use predicates::str::contains;

#[test]
fn cli_help_runs() {
    let mut cmd = Command::cargo_bin("trial-scout").expect("binary exists");
    cmd.arg("--help").assert().success();
}

#[test]
fn serve_without_credential_fails_fast() {
    let mut cmd = Command::cargo_bin("trial-scout").expect("binary exists");
    cmd.env_remove("OPENAI_API_KEY")
        .args(["serve", "--port", "0"])
        .assert()
        .failure()
        .stderr(contains("credential missing"));
}
