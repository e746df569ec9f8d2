//! Workflow manifest schema.
//!
//! Each workflow directory carries a `config.json` describing the workflow
//! and its ordered steps:
//!
//! ```json
//! {
//!   "name": "Code Review",
//!   "version": "1.0.0",
//!   "variables": { "reviewer": "alice", "maxFindings": 10 },
//!   "steps": [
//!     { "id": "gather", "name": "Gather context", "file": "steps/01-gather.md" }
//!   ]
//! }
//! ```
//!
//! Beyond being valid JSON with a `steps` array of `id`/`file` entries, the
//! manifest is not validated: `version` and variable values may be any JSON
//! value, and missing names default to empty.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A workflow manifest loaded from `config.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowConfig {
    /// Human-readable workflow name.
    #[serde(default)]
    pub name: String,

    /// Workflow version, echoed back as written.
    #[serde(default)]
    pub version: Value,

    /// Template variables available as `{{variable: <name>}}`.
    #[serde(default)]
    pub variables: Map<String, Value>,

    /// Steps in execution order.
    pub steps: Vec<StepMeta>,
}

/// Metadata for a single step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepMeta {
    /// Stable identifier, unique within the workflow.
    pub id: String,

    /// Display name.
    #[serde(default)]
    pub name: String,

    /// Instruction file, relative to the workflow directory.
    pub file: String,

    /// Any other fields declared on the step, echoed back untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl WorkflowConfig {
    /// Number of steps in the workflow.
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    /// Look up a step by its 1-based position.
    pub fn step(&self, step_number: u64) -> Option<&StepMeta> {
        let index = usize::try_from(step_number).ok()?.checked_sub(1)?;
        self.steps.get(index)
    }
}

impl StepMeta {
    /// Create step metadata with no extra fields.
    pub fn new(id: impl Into<String>, name: impl Into<String>, file: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            file: file.into(),
            extra: Map::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_minimal_config() {
        let json = r#"{
            "name": "Demo",
            "version": "0.1.0",
            "steps": [{ "id": "a", "name": "First", "file": "a.md" }]
        }"#;
        let config: WorkflowConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.name, "Demo");
        assert!(config.variables.is_empty());
        assert_eq!(config.step_count(), 1);
    }

    #[test]
    fn missing_steps_is_a_parse_error() {
        let json = r#"{ "name": "Demo", "version": "0.1.0" }"#;
        assert!(serde_json::from_str::<WorkflowConfig>(json).is_err());
    }

    #[test]
    fn step_lookup_is_one_based() {
        let config = WorkflowConfig {
            name: "Demo".into(),
            version: "1".into(),
            variables: Map::new(),
            steps: vec![StepMeta::new("a", "A", "a.md"), StepMeta::new("b", "B", "b.md")],
        };
        assert!(config.step(0).is_none());
        assert_eq!(config.step(1).unwrap().id, "a");
        assert_eq!(config.step(2).unwrap().id, "b");
        assert!(config.step(3).is_none());
    }

    #[test]
    fn non_string_version_and_variables_are_accepted() {
        let json = r#"{
            "name": "Demo",
            "version": 2,
            "variables": { "retries": 3, "strict": true, "owner": "ops" },
            "steps": [{ "id": "a", "file": "a.md" }]
        }"#;
        let config: WorkflowConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.version, 2);
        assert_eq!(config.variables["retries"], 3);
        assert_eq!(config.steps[0].name, "");
    }

    #[test]
    fn extra_step_fields_round_trip() {
        let json = r#"{ "id": "a", "name": "A", "file": "a.md", "description": "first", "estimate": 5 }"#;
        let step: StepMeta = serde_json::from_str(json).unwrap();
        assert_eq!(step.extra["description"], "first");

        let back = serde_json::to_value(&step).unwrap();
        assert_eq!(back["estimate"], 5);
        assert_eq!(back["id"], "a");
    }
}
