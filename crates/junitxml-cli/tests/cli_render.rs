use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

const TREE: &str = r#"
info: { id: "100", name: StressResult, time: "300" }
processes:
  - info: { id: "1", name: LightStressProcess, time: "100" }
    events:
      - info: { id: "1/1", name: LightEvent, time: "100" }
  - info: { id: "4", name: DisasterStressProcess, time: "50" }
    events:
      - info: { id: "4/3", name: DisasterEvent, time: "5" }
        failures:
          - message: explosion
            severity: ERROR
            detail: EXPLOSION !!!
"#;

fn junitxml(dir: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("junitxml").unwrap();
    cmd.current_dir(dir).env_remove("JUNITXML_OUTPUT");
    cmd
}

#[test]
fn test_demo_writes_reference_report() {
    let dir = tempdir().unwrap();

    junitxml(dir.path())
        .args(["demo", "--indent", "2"])
        .assert()
        .success()
        .stderr(predicate::str::contains("suites=4"));

    let xml = fs::read_to_string(dir.path().join("out/junitXmlReport.xml")).unwrap();
    assert!(xml.starts_with(r#"<?xml version="1.0" encoding="UTF-8" ?>"#));
    assert!(xml.contains(r#"name="StressResult" time="300" tests="4" failures="2">"#));
    assert!(xml.contains(r#"<testsuite id="3" name="StressProcess" time="50" tests="2" failures="1">"#));
    assert!(xml.contains(r#"<testsuite id="4" name="DisasterStressProcess" time="50" tests="3" failures="1">"#));
}

#[test]
fn test_render_yaml_tree() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("tree.yaml"), TREE).unwrap();

    junitxml(dir.path())
        .args(["render", "--input", "tree.yaml", "--output", "reports/junit.xml"])
        .assert()
        .success();

    let xml = fs::read_to_string(dir.path().join("reports/junit.xml")).unwrap();
    assert!(xml.contains(r#"tests="2" failures="1">"#));
    assert!(xml.contains("<failure message=\"explosion\" type=\"ERROR\">\nEXPLOSION !!!</failure>"));
}

#[test]
fn test_render_fail_on_failures_exit_code() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("tree.yaml"), TREE).unwrap();

    junitxml(dir.path())
        .args(["render", "--input", "tree.yaml", "--fail-on-failures"])
        .assert()
        .code(1);

    assert!(dir.path().join("junit.xml").exists());
}

#[test]
fn test_render_uses_config_and_env_output() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("tree.yaml"), TREE).unwrap();
    fs::write(
        dir.path().join("junitxml.yaml"),
        "version: 1\noutput: from-config.xml\nindent: 4\n",
    )
    .unwrap();

    junitxml(dir.path())
        .args(["render", "--input", "tree.yaml"])
        .assert()
        .success();
    let xml = fs::read_to_string(dir.path().join("from-config.xml")).unwrap();
    assert!(xml.contains("\n    <testsuite "));

    junitxml(dir.path())
        .env("JUNITXML_OUTPUT", "from-env.xml")
        .args(["render", "--input", "tree.yaml"])
        .assert()
        .success();
    assert!(dir.path().join("from-env.xml").exists());
}

#[test]
fn test_render_missing_input_is_config_error() {
    let dir = tempdir().unwrap();

    junitxml(dir.path())
        .args(["render", "--input", "absent.yaml"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("failed to read"));
}

#[test]
fn test_render_rejects_malformed_tree() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("tree.yaml"),
        TREE.replace(r#"name: LightEvent"#, r#"name: """#),
    )
    .unwrap();

    junitxml(dir.path())
        .args(["render", "--input", "tree.yaml"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("processes[0].events[0] has no name"));
    assert!(!dir.path().join("junit.xml").exists());
}

#[test]
fn test_render_rejects_unsupported_config_version() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("tree.yaml"), TREE).unwrap();
    fs::write(dir.path().join("custom.yaml"), "version: 9\n").unwrap();

    junitxml(dir.path())
        .args(["render", "--input", "tree.yaml", "--config", "custom.yaml"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unsupported config version 9"));
}
