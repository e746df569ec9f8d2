//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use crate::cli::args::{Cli, Commands};
use crate::config::EngineConfig;
use crate::engine::WorkflowEngine;
use crate::error::{Result, WorkflowError};
use crate::ui::UserInterface;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Report a missing workflow and produce exit code 2, or pass other errors on.
pub(crate) fn missing_workflow(
    err: WorkflowError,
    workflow: &str,
    ui: &mut dyn UserInterface,
) -> Result<CommandResult> {
    match err {
        WorkflowError::ConfigNotFound { path } => {
            ui.error(&format!(
                "Workflow '{}' not found (no {})",
                workflow,
                path.display()
            ));
            Ok(CommandResult::failure(2))
        }
        other => Err(other),
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    engine: WorkflowEngine,
}

impl CommandDispatcher {
    /// Create a new dispatcher over the given layout.
    pub fn new(config: EngineConfig) -> Self {
        Self {
            engine: WorkflowEngine::new(config),
        }
    }

    /// The engine commands run against.
    pub fn engine(&self) -> &WorkflowEngine {
        &self.engine
    }

    /// Dispatch and execute a command.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let engine = self.engine.clone();
        match &cli.command {
            Some(Commands::Serve(_)) => super::serve::ServeCommand::new(engine).execute(ui),
            Some(Commands::Instructions(args)) => {
                super::instructions::InstructionsCommand::new(engine, args.clone()).execute(ui)
            }
            Some(Commands::Save(args)) => {
                super::save::SaveCommand::new(engine, args.clone()).execute(ui)
            }
            Some(Commands::Context(args)) => {
                super::context::ContextCommand::new(engine, args.clone()).execute(ui)
            }
            Some(Commands::List(args)) => {
                super::list::ListCommand::new(engine, args.clone()).execute(ui)
            }
            Some(Commands::Status(args)) => {
                super::status::StatusCommand::new(engine, args.clone()).execute(ui)
            }
            Some(Commands::Completions(args)) => {
                super::completions::CompletionsCommand::new(args.clone()).execute(ui)
            }
            None => super::serve::ServeCommand::new(engine).execute(ui),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use std::path::PathBuf;

    #[test]
    fn command_result_success() {
        let result = CommandResult::success();
        assert!(result.success);
        assert_eq!(result.exit_code, 0);
    }

    #[test]
    fn command_result_failure() {
        let result = CommandResult::failure(1);
        assert!(!result.success);
        assert_eq!(result.exit_code, 1);
    }

    #[test]
    fn dispatcher_creation() {
        let dispatcher = CommandDispatcher::new(EngineConfig::new("/test"));
        assert_eq!(
            dispatcher.engine().config().workflows_dir,
            PathBuf::from("/test/workflows")
        );
    }

    #[test]
    fn missing_workflow_maps_to_exit_code_two() {
        let mut ui = MockUI::new();
        let err = WorkflowError::ConfigNotFound {
            path: PathBuf::from("/x/workflows/demo/config.json"),
        };
        let result = missing_workflow(err, "demo", &mut ui).unwrap();
        assert_eq!(result.exit_code, 2);
        assert!(ui.has_error("Workflow 'demo' not found"));
    }

    #[test]
    fn missing_workflow_passes_other_errors_through() {
        let mut ui = MockUI::new();
        let err = WorkflowError::StepNotFound {
            workflow: "demo".into(),
            step: 4,
        };
        assert!(missing_workflow(err, "demo", &mut ui).is_err());
        assert!(ui.errors().is_empty());
    }
}
