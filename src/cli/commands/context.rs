//! Context command implementation.
//!
//! The `workflow-mcp context <workflow> <current-step>` command prints the
//! outputs saved by every step before `current-step`, keyed by step id.

use crate::cli::args::ContextArgs;
use crate::engine::WorkflowEngine;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{missing_workflow, Command, CommandResult};
use super::display;

/// The context command implementation.
pub struct ContextCommand {
    engine: WorkflowEngine,
    args: ContextArgs,
}

impl ContextCommand {
    /// Create a new context command.
    pub fn new(engine: WorkflowEngine, args: ContextArgs) -> Self {
        Self { engine, args }
    }
}

impl Command for ContextCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let context = match self
            .engine
            .get_previous_context(&self.args.workflow, self.args.current_step)
        {
            Ok(context) => context,
            Err(e) => return missing_workflow(e, &self.args.workflow, ui),
        };

        if context.is_empty() {
            tracing::debug!(
                "No outputs saved before step {} of {}",
                self.args.current_step,
                self.args.workflow
            );
        }

        ui.message(&display::to_json(&context)?);
        Ok(CommandResult::success())
    }
}
