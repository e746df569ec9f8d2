//! Save command implementation.
//!
//! The `workflow-mcp save <workflow> <step-id>` command stores a step's output.
//! The output JSON comes from `--output`, `--file`, or stdin.

use std::fs;
use std::io::Read;

use anyhow::Context;
use serde_json::Value;

use crate::cli::args::SaveArgs;
use crate::engine::WorkflowEngine;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The save command implementation.
pub struct SaveCommand {
    engine: WorkflowEngine,
    args: SaveArgs,
}

impl SaveCommand {
    /// Create a new save command.
    pub fn new(engine: WorkflowEngine, args: SaveArgs) -> Self {
        Self { engine, args }
    }

    /// Read the raw output JSON from wherever the arguments point.
    fn read_input(&self) -> anyhow::Result<String> {
        if let Some(output) = &self.args.output {
            return Ok(output.clone());
        }
        if let Some(path) = &self.args.file {
            return fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()));
        }

        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read output from stdin")?;
        Ok(buf)
    }
}

impl Command for SaveCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let raw = self.read_input()?;
        let output: Value = match serde_json::from_str(&raw) {
            Ok(Value::Object(map)) => Value::Object(map),
            Ok(_) => {
                ui.error("Step output must be a JSON object");
                return Ok(CommandResult::failure(1));
            }
            Err(e) => {
                ui.error(&format!("Step output is not valid JSON: {}", e));
                return Ok(CommandResult::failure(1));
            }
        };

        self.engine
            .save_step_output(&self.args.workflow, &self.args.step_id, &output)?;

        ui.success(&format!(
            "Step output saved successfully for {}/{}",
            self.args.workflow, self.args.step_id
        ));
        Ok(CommandResult::success())
    }
}
