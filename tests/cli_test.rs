//! Integration tests for the workflow-mcp binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

const DEMO_CONFIG: &str = r#"{
    "name": "Demo",
    "version": "1.0.0",
    "variables": { "lang": "Rust" },
    "steps": [
        { "id": "a", "name": "Plan", "file": "a.md" },
        { "id": "b", "name": "Build", "file": "b.md" },
        { "id": "c", "name": "Ship", "file": "c.md" }
    ]
}"#;

fn setup_project() -> TempDir {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("workflows").join("demo");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("config.json"), DEMO_CONFIG).unwrap();
    fs::write(
        dir.join("a.md"),
        "Plan in {{variable: lang}} at {{variable: userWorkingDirectory}}",
    )
    .unwrap();
    fs::write(dir.join("b.md"), "Build {{previousOutput: a.summary}}").unwrap();
    fs::write(dir.join("c.md"), "Ship").unwrap();
    temp
}

fn workflow_mcp(temp: &TempDir) -> Command {
    let mut cmd = Command::new(cargo_bin("workflow-mcp"));
    cmd.arg("--root").arg(temp.path()).env("NO_COLOR", "1");
    cmd
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("workflow-mcp"));
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("instructions"))
        .stdout(predicate::str::contains("serve"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("workflow-mcp"));
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn cli_list_shows_workflows() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project();
    workflow_mcp(&temp)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("demo"))
        .stdout(predicate::str::contains("3 steps"));
    Ok(())
}

#[test]
fn cli_instructions_render_working_directory() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project();
    workflow_mcp(&temp)
        .args(["--working-dir", "/srv/app", "instructions", "demo", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Plan in Rust at /srv/app"));
    Ok(())
}

#[test]
fn cli_save_then_status() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project();
    workflow_mcp(&temp)
        .args(["save", "demo", "a", "--output", r#"{"summary":"the plan"}"#])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Step output saved successfully for demo/a",
        ));

    let output = workflow_mcp(&temp)
        .args(["status", "demo", "--json"])
        .output()?;
    assert!(output.status.success());
    let status: Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(status["completedSteps"][0]["stepId"], "a");
    assert_eq!(status["nextStep"]["stepNumber"], 2);

    workflow_mcp(&temp)
        .args(["instructions", "demo", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Build the plan"));
    Ok(())
}

#[test]
fn cli_save_reads_stdin() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project();
    workflow_mcp(&temp)
        .args(["save", "demo", "a"])
        .write_stdin(r#"{"summary":"piped"}"#)
        .assert()
        .success();

    workflow_mcp(&temp)
        .args(["context", "demo", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("piped"));
    Ok(())
}

#[test]
fn cli_missing_workflow_exits_with_two() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project();
    workflow_mcp(&temp)
        .args(["status", "ghost"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Workflow 'ghost' not found"));
    Ok(())
}

#[test]
fn cli_step_out_of_range_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project();
    workflow_mcp(&temp)
        .args(["instructions", "demo", "5"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Step 5 not found in workflow demo"));
    Ok(())
}

#[test]
fn cli_serve_answers_requests_on_stdio() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project();
    let input = [
        r#"{"jsonrpc":"2.0","id":1,"method":"initialize","params":{"protocolVersion":"2024-11-05"}}"#,
        r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#,
        r#"{"jsonrpc":"2.0","id":2,"method":"tools/list"}"#,
        r#"{"jsonrpc":"2.0","id":3,"method":"tools/call","params":{"name":"get_workflow_status","arguments":{"workflowId":"demo"}}}"#,
        r#"{"jsonrpc":"2.0","id":4,"method":"tools/call","params":{"name":"nope","arguments":{}}}"#,
    ]
    .join("\n");

    let output = workflow_mcp(&temp)
        .arg("serve")
        .write_stdin(input)
        .output()?;
    assert!(output.status.success());

    let responses: Vec<Value> = String::from_utf8(output.stdout)?
        .lines()
        .map(serde_json::from_str)
        .collect::<Result<_, _>>()?;
    assert_eq!(responses.len(), 4);

    assert_eq!(responses[0]["id"], 1);
    assert_eq!(responses[0]["result"]["protocolVersion"], "2024-11-05");
    assert_eq!(responses[1]["result"]["tools"].as_array().unwrap().len(), 5);

    let status_text = responses[2]["result"]["content"][0]["text"].as_str().unwrap();
    let status: Value = serde_json::from_str(status_text)?;
    assert_eq!(status["nextStep"]["stepId"], "a");

    assert_eq!(
        responses[3]["result"]["content"][0]["text"],
        "Error: Unknown tool: nope"
    );
    Ok(())
}

#[test]
fn cli_without_subcommand_serves() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project();
    workflow_mcp(&temp)
        .write_stdin(r#"{"jsonrpc":"2.0","id":7,"method":"ping"}"#)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""id":7"#));
    Ok(())
}
