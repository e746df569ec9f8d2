//! Status command implementation.
//!
//! The `workflow-mcp status <workflow>` command shows which steps have saved
//! output and which step comes next.

use crate::cli::args::StatusArgs;
use crate::engine::WorkflowEngine;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{missing_workflow, Command, CommandResult};
use super::display;

/// The status command implementation.
pub struct StatusCommand {
    engine: WorkflowEngine,
    args: StatusArgs,
}

impl StatusCommand {
    /// Create a new status command.
    pub fn new(engine: WorkflowEngine, args: StatusArgs) -> Self {
        Self { engine, args }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &StatusArgs {
        &self.args
    }
}

impl Command for StatusCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let status = match self.engine.get_workflow_status(&self.args.workflow) {
            Ok(status) => status,
            Err(e) => return missing_workflow(e, &self.args.workflow, ui),
        };

        if self.args.json {
            ui.message(&display::to_json(&status)?);
            return Ok(CommandResult::success());
        }

        let theme = display::theme();
        ui.show_header(&format!("{} ({})", status.name, status.workflow_id));

        for step in &status.completed_steps {
            ui.message(&format!(
                "{} {}",
                theme.success.apply_to("✓"),
                display::step_line(step, status.total_steps)
            ));
        }

        if status.is_complete() {
            ui.success(&format!("All {} steps completed", status.total_steps));
        } else if let Some(next) = &status.next_step {
            ui.message(&format!(
                "{} {}",
                theme.key.apply_to("Next:"),
                display::step_line(next, status.total_steps)
            ));
        }

        Ok(CommandResult::success())
    }
}
