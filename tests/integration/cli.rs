use assert_cmd::Command;
use compsync::config::Framework;
use compsync::test_utils::{ConfigFixture, TestEnvironment, fixtures};
use predicates::prelude::*;

fn compsync(env: &TestEnvironment) -> Command {
    let mut cmd = Command::cargo_bin("compsync").unwrap();
    cmd.arg("--project-dir")
        .arg(env.project_path())
        .arg("--settings")
        .arg(env.temp_dir.path().join("settings.toml"))
        .env("COMPSYNC_NO_PROGRESS", "1")
        .env_remove("RUST_LOG");
    cmd
}

fn react_project() -> TestEnvironment {
    TestEnvironment::with_project(
        Framework::React,
        &ConfigFixture::react(),
        Some(("tsconfig.json", &fixtures::react_tsconfig())),
    )
    .unwrap()
}

#[test]
fn test_missing_config_exits_with_error() {
    let env = TestEnvironment::new(Framework::React).unwrap();

    compsync(&env)
        .args(["list", "--installed"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("components.json"));
}

#[test]
fn test_list_installed_empty() {
    let env = react_project();

    compsync(&env)
        .args(["list", "--installed"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No components installed"));
}

#[test]
fn test_list_installed_names() {
    let env = react_project();
    env.create_file("src/components/ui/button.tsx", "").unwrap();
    env.create_file("src/components/ui/card.tsx", "").unwrap();

    compsync(&env)
        .args(["list", "--installed", "--names-only"])
        .assert()
        .success()
        .stdout("button\ncard\n");
}

#[test]
fn test_unreadable_settings_fail() {
    let env = react_project();
    std::fs::write(env.temp_dir.path().join("settings.toml"), "timeout_secs = \"soon\"").unwrap();

    compsync(&env).args(["list", "--installed"]).assert().failure().code(1);
}

#[test]
fn test_add_requires_a_name() {
    let env = react_project();

    compsync(&env).arg("add").assert().failure();
}
