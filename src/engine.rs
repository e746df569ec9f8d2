//! The workflow engine.
//!
//! [`WorkflowEngine`] implements the five workflow operations on top of the
//! directory layout described in [`crate::config::paths`]. Every call reads
//! configs and outputs fresh from disk.

use std::collections::BTreeMap;
use std::fs;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::config::{
    join_under, load_workflow_config, EngineConfig, StepMeta, WorkflowConfig, SHARED_DIR,
};
use crate::error::{Result, WorkflowError};
use crate::state::{OutputStore, WorkflowStatus};
use crate::template::{inject, render_value, InjectionContext};

/// Template variable holding the caller's working directory.
pub const WORKING_DIRECTORY_VAR: &str = "userWorkingDirectory";

/// Rendered instructions for one step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepInstructions {
    pub instructions: String,
    pub metadata: StepMeta,
    pub total_steps: usize,
    pub workflow_name: String,
    pub current_step: u64,
}

/// One entry of the workflow listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowSummary {
    pub id: String,
    pub name: String,
    pub version: Value,
    pub step_count: usize,
}

/// Serves workflow steps and tracks their outputs.
#[derive(Debug, Clone)]
pub struct WorkflowEngine {
    config: EngineConfig,
}

impl WorkflowEngine {
    /// Create an engine over the given layout.
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// The engine's configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Load a workflow's `config.json`.
    pub fn load_config(&self, workflow_id: &str) -> Result<WorkflowConfig> {
        load_workflow_config(&self.config.config_path(workflow_id)?)
    }

    /// Fetch the instructions for a step with all placeholders resolved.
    ///
    /// # Errors
    ///
    /// Returns `StepNotFound` if `step_number` is 0 or past the last step.
    pub fn get_step_instructions(
        &self,
        workflow_id: &str,
        step_number: u64,
    ) -> Result<StepInstructions> {
        let config = self.load_config(workflow_id)?;
        let step = config
            .step(step_number)
            .ok_or_else(|| WorkflowError::StepNotFound {
                workflow: workflow_id.to_string(),
                step: step_number,
            })?;

        let workflow_dir = self.config.workflow_dir(workflow_id)?;
        let step_path = join_under(&workflow_dir, &step.file);
        let content = fs::read_to_string(&step_path)
            .with_context(|| format!("Failed to read instructions {}", step_path.display()))?;

        let outputs = OutputStore::open(&self.config, workflow_id)?;
        let ctx = InjectionContext {
            variables: self.template_variables(&config),
            include_root: &workflow_dir,
            outputs: &outputs,
        };
        let instructions = inject(&content, &ctx);

        tracing::debug!(
            "Rendered step {} ({}) of workflow {}",
            step_number,
            step.id,
            workflow_id
        );

        Ok(StepInstructions {
            instructions,
            metadata: step.clone(),
            total_steps: config.step_count(),
            workflow_name: config.name.clone(),
            current_step: step_number,
        })
    }

    /// Persist a step's output, overwriting any previous one.
    pub fn save_step_output(&self, workflow_id: &str, step_id: &str, output: &Value) -> Result<()> {
        let store = OutputStore::open(&self.config, workflow_id)?;
        store.save(step_id, output)?;
        tracing::info!("Saved output for {}/{}", workflow_id, step_id);
        Ok(())
    }

    /// Outputs of every step before `current_step`, keyed by step id.
    ///
    /// Steps without a readable output are skipped.
    pub fn get_previous_context(
        &self,
        workflow_id: &str,
        current_step: u64,
    ) -> Result<Map<String, Value>> {
        let config = self.load_config(workflow_id)?;
        let store = OutputStore::open(&self.config, workflow_id)?;

        let preceding = usize::try_from(current_step.saturating_sub(1)).unwrap_or(usize::MAX);
        let mut context = Map::new();

        for step in config.steps.iter().take(preceding) {
            match store.load(&step.id) {
                Ok(output) => {
                    context.insert(step.id.clone(), output);
                }
                Err(e) => tracing::debug!("Skipping step {}: {}", step.id, e),
            }
        }

        Ok(context)
    }

    /// All workflows with a readable config, sorted by id.
    ///
    /// The reserved `shared` directory and directories whose config cannot be
    /// loaded are left out.
    pub fn list_workflows(&self) -> Result<Vec<WorkflowSummary>> {
        let entries = fs::read_dir(&self.config.workflows_dir).map_err(|e| {
            WorkflowError::Other(anyhow::anyhow!("Failed to list workflows: {}", e))
        })?;

        let mut workflows = Vec::new();
        for entry in entries {
            let entry = entry?;
            if !entry.file_type()?.is_dir() {
                continue;
            }

            let id = entry.file_name().to_string_lossy().to_string();
            if id == SHARED_DIR {
                continue;
            }

            match self.load_config(&id) {
                Ok(config) => workflows.push(WorkflowSummary {
                    step_count: config.step_count(),
                    name: config.name,
                    version: config.version,
                    id,
                }),
                Err(e) => tracing::debug!("Skipping workflow directory {}: {}", id, e),
            }
        }

        workflows.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(workflows)
    }

    /// Which steps are done and which one comes next.
    pub fn get_workflow_status(&self, workflow_id: &str) -> Result<WorkflowStatus> {
        let config = self.load_config(workflow_id)?;
        let store = OutputStore::open(&self.config, workflow_id)?;
        Ok(WorkflowStatus::derive(workflow_id, &config, |step| {
            store.has_output(&step.id)
        }))
    }

    /// Config variables rendered as text, plus the caller's working directory.
    fn template_variables(&self, config: &WorkflowConfig) -> BTreeMap<String, String> {
        let mut variables: BTreeMap<String, String> = config
            .variables
            .iter()
            .map(|(name, value)| (name.clone(), render_value(value)))
            .collect();
        variables.insert(
            WORKING_DIRECTORY_VAR.to_string(),
            self.config.working_directory.display().to_string(),
        );
        variables
    }
}
