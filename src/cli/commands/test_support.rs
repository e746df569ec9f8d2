//! Fixtures shared by command tests.

use std::fs;
use std::path::Path;

use tempfile::TempDir;

use crate::config::EngineConfig;
use crate::engine::WorkflowEngine;

pub const DEMO: &str = r#"{
    "name": "Demo",
    "version": "1.0.0",
    "variables": { "lang": "Rust" },
    "steps": [
        { "id": "a", "name": "Plan", "file": "a.md" },
        { "id": "b", "name": "Build", "file": "b.md" },
        { "id": "c", "name": "Ship", "file": "c.md" }
    ]
}"#;

pub fn write_workflow(root: &Path, id: &str, config: &str, files: &[(&str, &str)]) {
    let dir = root.join("workflows").join(id);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("config.json"), config).unwrap();
    for (name, content) in files {
        fs::write(dir.join(name), content).unwrap();
    }
}

pub fn setup_engine() -> (TempDir, WorkflowEngine) {
    let temp = TempDir::new().unwrap();
    write_workflow(
        temp.path(),
        "demo",
        DEMO,
        &[
            ("a.md", "Write the plan in {{variable: lang}}"),
            ("b.md", "Build from {{previousOutput: a.summary}}"),
            ("c.md", "Ship it"),
        ],
    );
    let engine = WorkflowEngine::new(EngineConfig::new(temp.path()));
    (temp, engine)
}
