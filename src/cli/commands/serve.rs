//! Serve command implementation.
//!
//! The `workflow-mcp serve` command answers tool requests on stdin/stdout
//! until stdin closes.

use std::io;

use crate::engine::WorkflowEngine;
use crate::error::Result;
use crate::server::{serve, ToolHandler};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The serve command implementation.
pub struct ServeCommand {
    engine: WorkflowEngine,
}

impl ServeCommand {
    /// Create a new serve command.
    pub fn new(engine: WorkflowEngine) -> Self {
        Self { engine }
    }
}

impl Command for ServeCommand {
    fn execute(&self, _ui: &mut dyn UserInterface) -> Result<CommandResult> {
        tracing::info!(
            "Workflow server running on stdio (root: {})",
            self.engine.config().project_root.display()
        );

        let handler = ToolHandler::new(self.engine.clone());
        let stdin = io::stdin();
        let stdout = io::stdout();
        serve(&handler, stdin.lock(), stdout.lock())?;

        Ok(CommandResult::success())
    }
}
