//! Integration tests for the templar CLI.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn setup_templates() -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("bug_report.md"), "# Bug report\n\nSteps:\n").unwrap();
    fs::write(temp.path().join("feature_request.md"), "# Feature request\n").unwrap();
    fs::write(temp.path().join("config.yml"), "blank_issues_enabled: false").unwrap();
    temp
}

fn templar() -> Command {
    Command::new(cargo_bin("templar"))
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = templar();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("markdown templates"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = templar();
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn list_prints_template_names() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_templates();
    let mut cmd = templar();
    cmd.arg("list");
    cmd.env("TEMPLAR_SOURCES", temp.path());
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("bug_report"))
        .stdout(predicate::str::contains("feature_request"));
    Ok(())
}

#[test]
fn no_subcommand_defaults_to_list() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_templates();
    let mut cmd = templar();
    cmd.env("TEMPLAR_SOURCES", temp.path());
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("bug_report"));
    Ok(())
}

#[test]
fn list_respects_sources_flag() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_templates();
    let mut cmd = templar();
    cmd.args(["list", "--sources"]).arg(temp.path());
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("bug_report"));
    Ok(())
}

#[test]
fn list_json_is_parseable() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_templates();
    let mut cmd = templar();
    cmd.args(["list", "--json"]);
    cmd.env("TEMPLAR_SOURCES", temp.path());

    let output = cmd.assert().success().get_output().stdout.clone();
    let entries: serde_json::Value = serde_json::from_slice(&output)?;

    let names: Vec<&str> = entries
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["bug_report", "feature_request"]);
    Ok(())
}

#[test]
fn show_prints_template_content() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_templates();
    let mut cmd = templar();
    cmd.args(["show", "bug_report"]);
    cmd.env("TEMPLAR_SOURCES", temp.path());
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("# Bug report"));
    Ok(())
}

#[test]
fn show_unknown_template_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_templates();
    let mut cmd = templar();
    cmd.args(["show", "nonexistent"]);
    cmd.env("TEMPLAR_SOURCES", temp.path());
    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Unknown template"));
    Ok(())
}

#[test]
fn check_succeeds_with_partial_errors() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_templates();
    let spec = format!(
        "{},{}",
        temp.path().display(),
        temp.path().join("missing.md").display()
    );

    let mut cmd = templar();
    cmd.arg("check");
    cmd.env("TEMPLAR_SOURCES", &spec);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Resolved 2 template(s), 1 warning(s)"))
        .stdout(predicate::str::contains("missing.md"));
    Ok(())
}

#[test]
fn check_fails_when_every_source_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new().unwrap();
    let spec = temp.path().join("missing.md").display().to_string();

    let mut cmd = templar();
    cmd.arg("check");
    cmd.env("TEMPLAR_SOURCES", &spec);
    cmd.assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("Resolution failed"));
    Ok(())
}

#[test]
fn list_fails_when_every_source_fails() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = templar();
    cmd.arg("list");
    cmd.env("TEMPLAR_SOURCES", "/nonexistent/missing.md");
    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("No templates could be loaded"));
    Ok(())
}

#[test]
fn sources_shows_classification() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_templates();
    let spec = format!("https://example.com/bug.md,{},octo/templates", temp.path().display());

    let mut cmd = templar();
    cmd.arg("sources");
    cmd.env("TEMPLAR_SOURCES", &spec);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("remote URL"))
        .stdout(predicate::str::contains("local directory"))
        .stdout(predicate::str::contains("GitHub repository"));
    Ok(())
}

#[test]
fn sources_with_empty_spec() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = templar();
    cmd.args(["sources", "--sources", ","]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("No sources configured"));
    Ok(())
}

#[test]
fn completions_generate_for_bash() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = templar();
    cmd.args(["completions", "bash"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("templar"));
    Ok(())
}
