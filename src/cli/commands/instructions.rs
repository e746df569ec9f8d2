//! Instructions command implementation.
//!
//! The `workflow-mcp instructions <workflow> <step>` command prints a step's
//! rendered instructions.

use crate::cli::args::InstructionsArgs;
use crate::engine::WorkflowEngine;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{missing_workflow, Command, CommandResult};
use super::display;

/// The instructions command implementation.
pub struct InstructionsCommand {
    engine: WorkflowEngine,
    args: InstructionsArgs,
}

impl InstructionsCommand {
    /// Create a new instructions command.
    pub fn new(engine: WorkflowEngine, args: InstructionsArgs) -> Self {
        Self { engine, args }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &InstructionsArgs {
        &self.args
    }
}

impl Command for InstructionsCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let step = match self
            .engine
            .get_step_instructions(&self.args.workflow, self.args.step)
        {
            Ok(step) => step,
            Err(e) => return missing_workflow(e, &self.args.workflow, ui),
        };

        if self.args.json {
            ui.message(&display::to_json(&step)?);
            return Ok(CommandResult::success());
        }

        ui.show_header(&format!(
            "{} {} {}",
            step.workflow_name,
            display::counter(step.current_step as usize, step.total_steps),
            step.metadata.name
        ));
        ui.message(&step.instructions);

        Ok(CommandResult::success())
    }
}
