//! List command implementation.
//!
//! The `workflow-mcp list` command shows every workflow with a readable
//! configuration.

use crate::cli::args::ListArgs;
use crate::engine::WorkflowEngine;
use crate::error::Result;
use crate::template::render_value;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::display;

/// The list command implementation.
pub struct ListCommand {
    engine: WorkflowEngine,
    args: ListArgs,
}

impl ListCommand {
    /// Create a new list command.
    pub fn new(engine: WorkflowEngine, args: ListArgs) -> Self {
        Self { engine, args }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &ListArgs {
        &self.args
    }
}

impl Command for ListCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let workflows = self.engine.list_workflows()?;

        if self.args.json {
            ui.message(&display::to_json(&workflows)?);
            return Ok(CommandResult::success());
        }

        if workflows.is_empty() {
            ui.warning(&format!(
                "No workflows found in {}",
                self.engine.config().workflows_dir.display()
            ));
            return Ok(CommandResult::success());
        }

        let theme = display::theme();
        let width = workflows.iter().map(|w| w.id.len()).max().unwrap_or(0);
        ui.show_header("Workflows");
        for workflow in &workflows {
            let steps = if workflow.step_count == 1 {
                "1 step".to_string()
            } else {
                format!("{} steps", workflow.step_count)
            };
            let version = render_value(&workflow.version);
            let details = if version.is_empty() {
                format!("({})", steps)
            } else {
                format!("v{} ({})", version, steps)
            };
            ui.message(&format!(
                "{}  {} {}",
                theme
                    .key
                    .apply_to(format!("{:<width$}", workflow.id, width = width)),
                workflow.name,
                theme.dim.apply_to(details)
            ));
        }

        Ok(CommandResult::success())
    }
}
