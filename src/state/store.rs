//! Step output storage.
//!
//! Each saved output lives in its own file,
//! `<state_dir>/<workflow>/<step>-output.json`. There is no index: a step
//! counts as completed exactly when its file exists.

use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::{validate_identifier, EngineConfig};
use crate::error::{Result, WorkflowError};
use crate::template::OutputSource;

/// File-backed outputs for one workflow.
#[derive(Debug, Clone)]
pub struct OutputStore {
    workflow_id: String,
    dir: PathBuf,
}

impl OutputStore {
    /// Open the store for a workflow. Nothing is created until the first save.
    pub fn open(config: &EngineConfig, workflow_id: &str) -> Result<Self> {
        Ok(Self {
            workflow_id: workflow_id.to_string(),
            dir: config.workflow_state_dir(workflow_id)?,
        })
    }

    /// Directory holding this workflow's outputs.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the output file for a step.
    pub fn output_path(&self, step_id: &str) -> Result<PathBuf> {
        validate_identifier("step", step_id)?;
        Ok(self.dir.join(format!("{}-output.json", step_id)))
    }

    /// Write a step's output, replacing any earlier one.
    pub fn save(&self, step_id: &str, output: &Value) -> Result<PathBuf> {
        let path = self.output_path(step_id)?;
        fs::create_dir_all(&self.dir)?;

        let content =
            serde_json::to_string_pretty(output).map_err(|e| WorkflowError::Protocol {
                message: format!("Failed to serialize output: {}", e),
            })?;
        fs::write(&path, content)?;

        tracing::debug!("Saved output for {}/{} to {}", self.workflow_id, step_id, path.display());
        Ok(path)
    }

    /// Read a step's saved output.
    ///
    /// # Errors
    ///
    /// Returns `OutputNotFound` if nothing was saved for the step.
    /// Returns `OutputParseError` if the file is not valid JSON.
    pub fn load(&self, step_id: &str) -> Result<Value> {
        let path = self.output_path(step_id)?;
        let content = fs::read_to_string(&path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                WorkflowError::OutputNotFound {
                    workflow: self.workflow_id.clone(),
                    step: step_id.to_string(),
                }
            } else {
                WorkflowError::Io(e)
            }
        })?;

        serde_json::from_str(&content).map_err(|e| WorkflowError::OutputParseError {
            path,
            message: e.to_string(),
        })
    }

    /// Whether an output file exists for the step.
    pub fn has_output(&self, step_id: &str) -> bool {
        self.output_path(step_id)
            .map(|p| p.exists())
            .unwrap_or(false)
    }
}

impl OutputSource for OutputStore {
    fn load_output(&self, step_id: &str) -> Result<Value> {
        self.load(step_id)
    }
}
